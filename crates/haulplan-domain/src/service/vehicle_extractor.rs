//! Vehicle extraction from transport orders
//!
//! Turns an order's VIN list and type quantities into vehicle records, then
//! re-interleaves them by model type so that, once sliced into 1/2/3 decks,
//! each carrier level carries a mix of types.

use std::collections::{HashSet, VecDeque};

use haulplan_types::{Error, InterleavingPattern, Result};
use log::{debug, warn};

use crate::model::{ModelType, OrderRequest, Vehicle};

/// Destination used when an order lists none
const UNKNOWN_DESTINATION: &str = "Unknown";

/// Destination of the built-in sample vehicles
const SAMPLE_DESTINATION: &str = "Guadalajara Dealer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Suv,
    Sedan,
    Hatchback,
}

/// Upper tier: 3 SUV, 1 Sedan, 2 Hatchback. Lower tier: 1 SUV, 4 Sedan, 2 Hatchback.
const STANDARD_DRAWS: &[(Bucket, usize)] = &[
    (Bucket::Suv, 3),
    (Bucket::Sedan, 1),
    (Bucket::Hatchback, 2),
    (Bucket::Suv, 1),
    (Bucket::Sedan, 4),
    (Bucket::Hatchback, 2),
];

/// Rows of three: SUV Hatchback SUV / Sedan SUV Hatchback / SUV Sedan Sedan / Sedan SUV SUV
const ALTERNATING_DRAWS: &[(Bucket, usize)] = &[
    (Bucket::Suv, 1),
    (Bucket::Hatchback, 1),
    (Bucket::Suv, 1),
    (Bucket::Sedan, 1),
    (Bucket::Suv, 1),
    (Bucket::Hatchback, 1),
    (Bucket::Suv, 1),
    (Bucket::Sedan, 1),
    (Bucket::Sedan, 1),
    (Bucket::Sedan, 1),
    (Bucket::Suv, 1),
    (Bucket::Suv, 1),
];

fn draws(pattern: InterleavingPattern) -> &'static [(Bucket, usize)] {
    match pattern {
        InterleavingPattern::Standard => STANDARD_DRAWS,
        InterleavingPattern::Alternating => ALTERNATING_DRAWS,
    }
}

/// Build the ordered vehicle sequence for an order
///
/// Without an order the built-in sample list is returned unchanged.
pub fn extract_vehicles(order: Option<&OrderRequest>, pattern: InterleavingPattern) -> Vec<Vehicle> {
    match order {
        Some(order) => {
            let vehicles = build_vehicles(order);
            debug!(
                "Extracted {} vehicle(s) from order {} using {} pattern",
                vehicles.len(),
                order.display_id(),
                pattern
            );
            interleave(vehicles, pattern)
        }
        None => sample_vehicles(),
    }
}

/// Pair VINs with requested model types in intake order
///
/// Stops once VINs run out. Destinations are assigned round-robin by
/// position.
fn build_vehicles(order: &OrderRequest) -> Vec<Vehicle> {
    let vins = order.vins();
    let destinations: Vec<&str> = if order.destinations.is_empty() {
        vec![UNKNOWN_DESTINATION]
    } else {
        order.destinations.iter().map(String::as_str).collect()
    };

    let requested = order.requested_quantity();
    if requested > vins.len() as u64 {
        debug!(
            "Order {} requests {} vehicle(s) but lists {} VIN(s); truncating",
            order.display_id(),
            requested,
            vins.len()
        );
    }

    let model_types = order
        .vehicle_types
        .iter()
        .flat_map(|vt| std::iter::repeat(&vt.model_type).take(vt.quantity as usize));

    vins.iter()
        .zip(model_types)
        .enumerate()
        .map(|(idx, (vin, model_type))| {
            Vehicle::new(*vin, model_type.clone())
                .with_destination(destinations[idx % destinations.len()])
        })
        .collect()
}

/// Re-order vehicles by the given pattern
///
/// Vehicles are bucketed into SUV, Sedan, Hatchback and others (stable
/// within each bucket). The pattern's draws are taken first; leftovers
/// follow as SUVs, Sedans, Hatchbacks, then others.
pub fn interleave(vehicles: Vec<Vehicle>, pattern: InterleavingPattern) -> Vec<Vehicle> {
    let total = vehicles.len();
    let mut suvs = VecDeque::new();
    let mut sedans = VecDeque::new();
    let mut hatchbacks = VecDeque::new();
    let mut others = Vec::new();

    for vehicle in vehicles {
        match vehicle.model_type {
            ModelType::Suv => suvs.push_back(vehicle),
            ModelType::Sedan => sedans.push_back(vehicle),
            ModelType::Hatchback => hatchbacks.push_back(vehicle),
            _ => others.push(vehicle),
        }
    }

    let mut ordered = Vec::with_capacity(total);
    for &(bucket, count) in draws(pattern) {
        let queue = match bucket {
            Bucket::Suv => &mut suvs,
            Bucket::Sedan => &mut sedans,
            Bucket::Hatchback => &mut hatchbacks,
        };
        let take = count.min(queue.len());
        ordered.extend(queue.drain(..take));
    }

    ordered.extend(suvs);
    ordered.extend(sedans);
    ordered.extend(hatchbacks);
    ordered.extend(others);
    ordered
}

/// Built-in demo list of 13 vehicles
pub fn sample_vehicles() -> Vec<Vehicle> {
    const SAMPLE: &[(&str, ModelType)] = &[
        ("VIN001SUV2024", ModelType::Suv),
        ("VIN002SUV2024", ModelType::Suv),
        ("VIN003SUV2024", ModelType::Suv),
        ("VIN004SED2024", ModelType::Sedan),
        ("VIN005HAT2024", ModelType::Hatchback),
        ("VIN006HAT2024", ModelType::Hatchback),
        ("VIN007SUV2024", ModelType::Suv),
        ("VIN008SED2024", ModelType::Sedan),
        ("VIN009SED2024", ModelType::Sedan),
        ("VIN010SED2024", ModelType::Sedan),
        ("VIN011SED2024", ModelType::Sedan),
        ("VIN012HAT2024", ModelType::Hatchback),
        ("VIN013HAT2024", ModelType::Hatchback),
    ];

    SAMPLE
        .iter()
        .map(|(vin, model_type)| {
            Vehicle::new(*vin, model_type.clone()).with_destination(SAMPLE_DESTINATION)
        })
        .collect()
}

/// Fail on the first VIN that appears more than once
pub fn validate_unique_vins(vehicles: &[Vehicle]) -> Result<()> {
    let mut seen = HashSet::with_capacity(vehicles.len());
    for vehicle in vehicles {
        if !seen.insert(vehicle.vin.as_str()) {
            warn!("Duplicate VIN {}", vehicle.vin);
            return Err(Error::DuplicateVin(vehicle.vin.clone()));
        }
    }
    Ok(())
}
