//! Excel load manifest export

use std::path::Path;

use haulplan_types::{Error, Result};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use crate::app::PlanningReport;

/// Export a planning report as an Excel load manifest
///
/// Sheets: Summary, Fleets (one row per vehicle) and Loading.
pub fn export_to_excel(report: &PlanningReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let fleets_sheet = workbook.add_worksheet();
    write_fleets_sheet(fleets_sheet, report)?;

    let loading_sheet = workbook.add_worksheet();
    write_loading_sheet(loading_sheet, report)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &PlanningReport) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    sheet
        .write_string_with_format(0, 0, "Vehicle Load Plan", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let summary = &report.summary;
    let text_rows = [
        ("Order:", report.order_id.clone().unwrap_or_else(|| "(sample)".to_string())),
        ("Pattern:", pattern_label(report).to_string()),
    ];
    let number_rows = [
        ("Fleet capacity (m³):", report.capacity_m3),
        ("Fleets:", summary.fleet_count as f64),
        ("Vehicles:", summary.total_vehicles as f64),
        ("Unallocated:", report.unallocated.len() as f64),
        ("Total volume (m³):", summary.total_volume_m3),
        ("Average utilization (%):", f64::from(summary.average_utilization)),
        ("Estimated cost:", summary.estimated_cost as f64),
    ];

    let mut row = 2;
    for (label, value) in &text_rows {
        sheet
            .write_string(row, 0, *label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, value)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }
    for (label, value) in &number_rows {
        sheet
            .write_string(row, 0, *label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, *value)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    row += 1;
    sheet
        .write_string_with_format(row, 0, "Vehicle Types", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    for type_count in &summary.vehicle_types {
        row += 1;
        sheet
            .write_string(row, 0, type_count.model_type.label())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, type_count.count as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 26)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 18)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn pattern_label(report: &PlanningReport) -> &'static str {
    report.pattern.map_or("manifest order", |p| p.label())
}

fn write_fleets_sheet(sheet: &mut Worksheet, report: &PlanningReport) -> Result<()> {
    sheet
        .set_name("Fleets")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let headers = [
        "Fleet",
        "Deck",
        "Position",
        "VIN",
        "Model",
        "Volume (m³)",
        "Destination",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let mut row: u32 = 0;
    for fleet in &report.fleets {
        let fleet_id = fleet.id.to_string();
        for (deck, position, vehicle) in fleet.positions() {
            row += 1;
            sheet
                .write_string(row, 0, &fleet_id)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_string(row, 1, deck.label())
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 2, position as f64)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_string(row, 3, &vehicle.vin)
                .map_err(|e| Error::Excel(e.to_string()))?;
            let model_format = Format::new()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(vehicle.model_type.color()));
            sheet
                .write_string_with_format(row, 4, vehicle.model_type.label(), &model_format)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 5, vehicle.volume_m3)
                .map_err(|e| Error::Excel(e.to_string()))?;
            if let Some(ref destination) = vehicle.destination {
                sheet
                    .write_string(row, 6, destination)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            }
        }
    }

    for vehicle in &report.unallocated {
        row += 1;
        sheet
            .write_string(row, 0, "UNALLOCATED")
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 3, &vehicle.vin)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 4, vehicle.model_type.label())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, vehicle.volume_m3)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(3, 22)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(6, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_loading_sheet(sheet: &mut Worksheet, report: &PlanningReport) -> Result<()> {
    sheet
        .set_name("Loading")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let headers = [
        "Fleet",
        "Loading Vehicle",
        "Required Length (m)",
        "Length %",
        "Units",
        "Grade",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (idx, loading) in report.loading_plans.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_string(row, 0, loading.fleet_id.to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, loading.loading_vehicle.kind.name())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, loading.length.required_length_m)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, f64::from(loading.length.utilization_percent))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 4, loading.length.units_required as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 5, loading.length.grade.label())
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(1, 40)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
