//! Allocation properties over a range of input sizes
//!
//! Exercises the allocator with mixed vehicle lists from 0 to 100 entries and
//! checks slot limits, conservation, ordering and the fleet bound.

use haulplan_domain::service::{
    extract_vehicles, summarize, FleetAllocator, FleetCapacity, MAX_FLEETS_PER_RUN,
    MAX_VEHICLES_PER_FLEET,
};
use haulplan_domain::{FleetId, ModelType, OrderRequest, Vehicle, VehicleTypeQuantity};
use haulplan_types::InterleavingPattern;

fn mixed_vehicles(count: usize) -> Vec<Vehicle> {
    let types = [
        ModelType::Suv,
        ModelType::Sedan,
        ModelType::Hatchback,
        ModelType::VanCargo,
        ModelType::Other("Coupe".to_string()),
    ];
    (0..count)
        .map(|i| Vehicle::new(format!("VIN{:04}", i), types[i % types.len()].clone()))
        .collect()
}

#[test]
fn test_slot_limits_hold_for_all_sizes() {
    let allocator = FleetAllocator::new(FleetCapacity::default());
    for count in 0..=100 {
        let allocation = allocator.allocate(&mixed_vehicles(count));
        for fleet in &allocation.fleets {
            assert!(fleet.top_deck.len() <= 1, "n={}", count);
            assert!(fleet.middle_deck.len() <= 2, "n={}", count);
            assert!(fleet.bottom_deck.len() <= 3, "n={}", count);
            assert!(fleet.vehicle_count() <= MAX_VEHICLES_PER_FLEET);
            assert!(!fleet.is_empty(), "empty fleet for n={}", count);
        }
    }
}

#[test]
fn test_every_vehicle_is_accounted_for_in_order() {
    let allocator = FleetAllocator::new(FleetCapacity::default());
    for count in 0..=100 {
        let vehicles = mixed_vehicles(count);
        let allocation = allocator.allocate(&vehicles);

        let placed: Vec<&str> = allocation
            .fleets
            .iter()
            .flat_map(|f| f.vehicles())
            .chain(&allocation.unallocated)
            .map(|v| v.vin.as_str())
            .collect();
        let expected: Vec<&str> = vehicles.iter().map(|v| v.vin.as_str()).collect();
        assert_eq!(placed, expected, "n={}", count);
    }
}

#[test]
fn test_fleet_count_and_ids() {
    let allocator = FleetAllocator::new(FleetCapacity::default());
    for count in 0..=100 {
        let allocation = allocator.allocate(&mixed_vehicles(count));
        let expected = count.div_ceil(MAX_VEHICLES_PER_FLEET).min(MAX_FLEETS_PER_RUN);
        assert_eq!(allocation.fleets.len(), expected, "n={}", count);

        for (idx, fleet) in allocation.fleets.iter().enumerate() {
            assert_eq!(fleet.id, FleetId(idx as u32 + 1));
        }
        // only the final fleet may be partial
        if let Some((_, full)) = allocation.fleets.split_last() {
            assert!(full.iter().all(|f| f.vehicle_count() == MAX_VEHICLES_PER_FLEET));
        }
    }
}

#[test]
fn test_utilization_matches_volume() {
    let capacity = FleetCapacity::permissive(37.5);
    let allocation = FleetAllocator::new(capacity).allocate(&mixed_vehicles(40));
    for fleet in &allocation.fleets {
        let volume: f64 = fleet.vehicles().map(|v| v.volume_m3).sum();
        assert!((fleet.total_volume_m3 - volume).abs() < 1e-9);
        let expected = (volume / 37.5 * 100.0).round() as u32;
        assert_eq!(fleet.utilization_percent, expected);
    }
}

#[test]
fn test_summary_matches_allocation() {
    let allocation = FleetAllocator::new(FleetCapacity::default()).allocate(&mixed_vehicles(20));
    let summary = summarize(&allocation.fleets);
    assert_eq!(summary.fleet_count, 4);
    assert_eq!(summary.total_vehicles, 20);
    assert_eq!(summary.fleets.len(), 4);
    assert_eq!(summary.fleets[3].vehicle_count, 2);
}

#[test]
fn test_order_pipeline_is_deterministic() {
    let order = OrderRequest {
        id: Some("ORD-2025-010".to_string()),
        vin: (1..=10)
            .map(|i| format!("VIN{:03}", i))
            .collect::<Vec<_>>()
            .join(", "),
        vehicle_types: vec![
            VehicleTypeQuantity {
                model_type: ModelType::Sedan,
                quantity: 4,
            },
            VehicleTypeQuantity {
                model_type: ModelType::Suv,
                quantity: 4,
            },
            VehicleTypeQuantity {
                model_type: ModelType::Hatchback,
                quantity: 2,
            },
        ],
        destinations: vec!["Monterrey".to_string(), "Puebla".to_string()],
        ..Default::default()
    };

    let allocator = FleetAllocator::new(FleetCapacity::default());
    for pattern in [InterleavingPattern::Standard, InterleavingPattern::Alternating] {
        let first = allocator.allocate(&extract_vehicles(Some(&order), pattern));
        let second = allocator.allocate(&extract_vehicles(Some(&order), pattern));
        assert_eq!(first, second);
        assert_eq!(first.total_vehicles(), 10);
        assert!(first.is_complete());
    }
}
