//! Loading vehicle selection
//!
//! Picks the physical transport for one fleet from its upper (top + middle)
//! and lower (bottom) vehicle counts, and estimates how much deck length the
//! load needs. This is a length heuristic and does not feed back into the
//! volume-based allocation.

use serde::{Deserialize, Serialize};

use crate::model::{Fleet, FleetId};

/// Average car length used for deck length estimates (m)
pub const AVG_CAR_LENGTH_M: f64 = 4.5;

/// Closed containers take up to this many vehicles on one level
const CLOSED_CONTAINER_MAX_VEHICLES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadingVehicleKind {
    /// Two-level open carrier, 4 per deck
    OpenCarCarrier,
    /// Single-level closed container
    ClosedContainer,
}

impl LoadingVehicleKind {
    pub fn name(&self) -> &'static str {
        match self {
            LoadingVehicleKind::OpenCarCarrier => "Open Car Carrier Truck (4 per deck, 8 max)",
            LoadingVehicleKind::ClosedContainer => "Closed Container Truck (4 max)",
        }
    }

    pub fn spec(&self) -> LoadingVehicleSpec {
        match self {
            LoadingVehicleKind::OpenCarCarrier => LoadingVehicleSpec {
                kind: *self,
                capacity_m: 18.0,
                height_m: 0.0,
                levels: 2,
                max_vehicles_per_unit: 8,
            },
            LoadingVehicleKind::ClosedContainer => LoadingVehicleSpec {
                kind: *self,
                capacity_m: 12.0,
                height_m: 2.4,
                levels: 1,
                max_vehicles_per_unit: CLOSED_CONTAINER_MAX_VEHICLES,
            },
        }
    }
}

impl std::fmt::Display for LoadingVehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Physical dimensions of a loading vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadingVehicleSpec {
    pub kind: LoadingVehicleKind,
    /// Usable deck length (m)
    pub capacity_m: f64,
    /// Container height, 0 for open decks
    pub height_m: f64,
    pub levels: u32,
    pub max_vehicles_per_unit: usize,
}

/// Length utilization grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthGrade {
    /// 90% and above
    Excellent,
    /// 75-89%
    Good,
    /// 60-74%
    Fair,
    /// Below 60%
    Poor,
}

impl LengthGrade {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            p if p >= 90 => LengthGrade::Excellent,
            p if p >= 75 => LengthGrade::Good,
            p if p >= 60 => LengthGrade::Fair,
            _ => LengthGrade::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LengthGrade::Excellent => "excellent",
            LengthGrade::Good => "good",
            LengthGrade::Fair => "fair",
            LengthGrade::Poor => "poor",
        }
    }
}

/// Deck length estimate for one fleet on one loading vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthUtilization {
    pub required_length_m: f64,
    /// round(required / capacity * 100), may exceed 100
    pub utilization_percent: u32,
    /// Negative when the load is longer than one unit
    pub remaining_length_m: f64,
    pub units_required: usize,
    pub grade: LengthGrade,
}

impl LengthUtilization {
    pub fn estimate(vehicle_count: usize, spec: &LoadingVehicleSpec) -> Self {
        let required_length_m = vehicle_count as f64 * AVG_CAR_LENGTH_M;
        let utilization_percent = (required_length_m / spec.capacity_m * 100.0).round() as u32;
        Self {
            required_length_m,
            utilization_percent,
            remaining_length_m: spec.capacity_m - required_length_m,
            units_required: vehicle_count.div_ceil(spec.max_vehicles_per_unit),
            grade: LengthGrade::from_percent(utilization_percent),
        }
    }
}

/// Loading vehicle and length estimate for one fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetLoadingPlan {
    pub fleet_id: FleetId,
    pub loading_vehicle: LoadingVehicleSpec,
    pub length: LengthUtilization,
}

/// Open carrier when both levels are in use or more than four vehicles ride
pub fn select_loading_vehicle(upper_count: usize, lower_count: usize) -> LoadingVehicleSpec {
    let uses_both_levels = upper_count > 0 && lower_count > 0;
    let total = upper_count + lower_count;

    if uses_both_levels || total > CLOSED_CONTAINER_MAX_VEHICLES {
        LoadingVehicleKind::OpenCarCarrier.spec()
    } else {
        LoadingVehicleKind::ClosedContainer.spec()
    }
}

pub fn plan_loading(fleet: &Fleet) -> FleetLoadingPlan {
    let loading_vehicle = select_loading_vehicle(fleet.upper_count(), fleet.lower_count());
    FleetLoadingPlan {
        fleet_id: fleet.id,
        loading_vehicle,
        length: LengthUtilization::estimate(fleet.vehicle_count(), &loading_vehicle),
    }
}
