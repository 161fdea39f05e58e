//! Allocation summaries
//!
//! Aggregate statistics derived from an allocation, plus the planner's
//! optimization suggestions.

use serde::{Deserialize, Serialize};

use crate::model::{Fleet, FleetId, ModelType, Vehicle};

/// Flat per-fleet cost estimate
pub const COST_PER_FLEET: u64 = 2450;

/// Average utilization below which consolidation is suggested
const CONSOLIDATION_THRESHOLD_PERCENT: u32 = 80;

/// Vehicle count for one model type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    pub model_type: ModelType,
    pub count: usize,
}

/// Per-fleet figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetBreakdown {
    pub fleet_id: FleetId,
    pub vehicle_count: usize,
    /// Top + middle decks
    pub upper_count: usize,
    /// Bottom deck
    pub lower_count: usize,
    pub upper_volume_m3: f64,
    pub lower_volume_m3: f64,
    pub utilization_percent: u32,
    pub vehicle_types: Vec<TypeCount>,
}

/// Aggregate statistics for an allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub fleet_count: usize,
    pub total_vehicles: usize,
    pub total_volume_m3: f64,
    pub average_utilization: u32,
    pub estimated_cost: u64,
    /// Across all fleets
    pub vehicle_types: Vec<TypeCount>,
    pub fleets: Vec<FleetBreakdown>,
}

/// Optimization hint shown alongside a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningSuggestion {
    /// Average utilization is low
    ConsolidateFleets,
    /// More than one fleet is in use
    GroupByDestination,
    BalanceDecks,
}

impl PlanningSuggestion {
    pub fn message(&self) -> &'static str {
        match self {
            PlanningSuggestion::ConsolidateFleets => {
                "Consider consolidating to fewer fleets for better utilization"
            }
            PlanningSuggestion::GroupByDestination => {
                "Group vehicles by destination for efficient routing"
            }
            PlanningSuggestion::BalanceDecks => "Balance upper and lower deck loads for stability",
        }
    }
}

pub fn summarize(fleets: &[Fleet]) -> AllocationSummary {
    summarize_with_rate(fleets, COST_PER_FLEET)
}

pub fn summarize_with_rate(fleets: &[Fleet], cost_per_fleet: u64) -> AllocationSummary {
    AllocationSummary {
        fleet_count: fleets.len(),
        total_vehicles: total_vehicles(fleets),
        total_volume_m3: fleets.iter().map(|f| f.total_volume_m3).sum(),
        average_utilization: average_utilization(fleets),
        estimated_cost: fleets.len() as u64 * cost_per_fleet,
        vehicle_types: type_breakdown(fleets.iter().flat_map(|f| f.vehicles())),
        fleets: fleets.iter().map(fleet_breakdown).collect(),
    }
}

pub fn total_vehicles(fleets: &[Fleet]) -> usize {
    fleets.iter().map(Fleet::vehicle_count).sum()
}

/// Rounded mean of fleet utilizations, 0 without fleets
pub fn average_utilization(fleets: &[Fleet]) -> u32 {
    if fleets.is_empty() {
        return 0;
    }
    let sum: u64 = fleets.iter().map(|f| u64::from(f.utilization_percent)).sum();
    (sum as f64 / fleets.len() as f64).round() as u32
}

/// Count vehicles by model type in first-encounter order
pub fn type_breakdown<'a>(vehicles: impl IntoIterator<Item = &'a Vehicle>) -> Vec<TypeCount> {
    let mut counts: Vec<TypeCount> = Vec::new();
    for vehicle in vehicles {
        match counts.iter_mut().find(|c| c.model_type == vehicle.model_type) {
            Some(entry) => entry.count += 1,
            None => counts.push(TypeCount {
                model_type: vehicle.model_type.clone(),
                count: 1,
            }),
        }
    }
    counts
}

fn fleet_breakdown(fleet: &Fleet) -> FleetBreakdown {
    FleetBreakdown {
        fleet_id: fleet.id,
        vehicle_count: fleet.vehicle_count(),
        upper_count: fleet.upper_count(),
        lower_count: fleet.lower_count(),
        upper_volume_m3: fleet.upper_volume_m3(),
        lower_volume_m3: fleet.lower_volume_m3(),
        utilization_percent: fleet.utilization_percent,
        vehicle_types: type_breakdown(fleet.vehicles()),
    }
}

/// Suggestions for a summarized plan
pub fn suggest(summary: &AllocationSummary) -> Vec<PlanningSuggestion> {
    let mut suggestions = Vec::new();
    if summary.average_utilization < CONSOLIDATION_THRESHOLD_PERCENT {
        suggestions.push(PlanningSuggestion::ConsolidateFleets);
    }
    if summary.fleet_count > 1 {
        suggestions.push(PlanningSuggestion::GroupByDestination);
    }
    suggestions.push(PlanningSuggestion::BalanceDecks);
    suggestions
}
