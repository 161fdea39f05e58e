//! Domain services
//!
//! The planning pipeline: vehicle extraction, capacity normalization,
//! fleet allocation, summaries and loading vehicle selection.

pub mod allocation_summarizer;
pub mod capacity;
pub mod fleet_allocator;
pub mod loading_vehicle_selector;
pub mod vehicle_extractor;

pub use allocation_summarizer::{
    average_utilization, suggest, summarize, summarize_with_rate, total_vehicles, type_breakdown,
    AllocationSummary,
    FleetBreakdown, PlanningSuggestion, TypeCount, COST_PER_FLEET,
};
pub use capacity::{FleetCapacity, DEFAULT_FLEET_CAPACITY_M3};
pub use fleet_allocator::{allocate, FleetAllocator, MAX_FLEETS_PER_RUN, MAX_VEHICLES_PER_FLEET};
pub use loading_vehicle_selector::{
    plan_loading, select_loading_vehicle, FleetLoadingPlan, LengthGrade, LengthUtilization,
    LoadingVehicleKind, LoadingVehicleSpec,
};
pub use vehicle_extractor::{extract_vehicles, interleave, sample_vehicles, validate_unique_vins};
