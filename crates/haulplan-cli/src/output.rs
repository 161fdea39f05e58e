//! Output formatting module

use haulplan_app::app::PlanningReport;
use haulplan_domain::{Deck, OrderRequest};
use haulplan_types::{OutputFormat, Result};
use serde::Serialize;

pub fn output_report(output_format: OutputFormat, report: &PlanningReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
        return Ok(());
    }

    let summary = &report.summary;
    println!("\nLoad Plan");
    println!("=========");
    println!(
        "Order:           {}",
        report.order_id.as_deref().unwrap_or("(sample)")
    );
    match report.pattern {
        Some(pattern) => println!("Pattern:         {}", pattern),
        None => println!("Pattern:         (manifest order)"),
    }
    println!("Fleet capacity:  {} m³", report.capacity_m3);
    println!("Fleets:          {}", summary.fleet_count);
    println!("Vehicles:        {}", summary.total_vehicles);
    println!("Avg utilization: {}%", summary.average_utilization);
    println!("Estimated cost:  {}", summary.estimated_cost);
    println!("Carrier layout:  {}", deck_legend());

    for (fleet, loading) in report.fleets.iter().zip(&report.loading_plans) {
        println!(
            "\n{} ({})  {:.2} m³  {}%",
            fleet.id, fleet.name, fleet.total_volume_m3, fleet.utilization_percent
        );
        println!("{}", "-".repeat(60));
        for (deck, position, vehicle) in fleet.positions() {
            println!(
                "  {:<7} {:>2}  {:<20} {:<10} {:>6.2}  {}",
                deck.label(),
                position,
                vehicle.vin,
                vehicle.model_type.label(),
                vehicle.volume_m3,
                vehicle.destination.as_deref().unwrap_or("-")
            );
        }
        println!(
            "  Upper: {} ({:.2} m³)  Lower: {} ({:.2} m³)",
            fleet.upper_count(),
            fleet.upper_volume_m3(),
            fleet.lower_count(),
            fleet.lower_volume_m3()
        );
        println!(
            "  Loading: {}  length {:.1} m ({}%, {}) x{}",
            loading.loading_vehicle.kind,
            loading.length.required_length_m,
            loading.length.utilization_percent,
            loading.length.grade.label(),
            loading.length.units_required
        );
    }

    if !report.unallocated.is_empty() {
        println!("\nUnallocated ({}):", report.unallocated.len());
        for vehicle in &report.unallocated {
            println!("  {:<20} {}", vehicle.vin, vehicle.model_type.label());
        }
    }

    if !summary.vehicle_types.is_empty() {
        println!("\nVehicle types:");
        for type_count in &summary.vehicle_types {
            println!("  {:<10} {}", type_count.model_type.label(), type_count.count);
        }
    }

    println!("\nSuggestions:");
    for suggestion in &report.suggestions {
        println!("  - {}", suggestion.message());
    }

    Ok(())
}

#[derive(Serialize)]
struct OrderRow<'a> {
    id: &'a str,
    customer: Option<&'a str>,
    vins: usize,
    requested: u64,
    destinations: &'a [String],
}

pub fn output_orders(output_format: OutputFormat, orders: &[OrderRequest]) -> Result<()> {
    let rows: Vec<OrderRow> = orders
        .iter()
        .map(|order| OrderRow {
            id: order.display_id(),
            customer: order.customer.as_deref(),
            vins: order.vins().len(),
            requested: order.requested_quantity(),
            destinations: &order.destinations,
        })
        .collect();

    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<16} {:<24} {:>5} {:>9}  Destinations",
        "Order", "Customer", "VINs", "Requested"
    );
    println!("{}", "-".repeat(72));
    for row in &rows {
        println!(
            "{:<16} {:<24} {:>5} {:>9}  {}",
            row.id,
            row.customer.unwrap_or("-"),
            row.vins,
            row.requested,
            row.destinations.join(", ")
        );
    }
    println!("\n{} order(s)", rows.len());

    Ok(())
}

/// Deck slots in loading order ("Top 1 / Middle 2 / Bottom 3")
fn deck_legend() -> String {
    Deck::ALL
        .iter()
        .map(|d| format!("{} {}", d.label(), d.slots()))
        .collect::<Vec<_>>()
        .join(" / ")
}
