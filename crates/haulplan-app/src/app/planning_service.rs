//! Planning Service - Core Use Case for Load Planning
//!
//! This service runs the planning pipeline for one order:
//! 1. Resolve the interleaving pattern
//! 2. Normalize fleet capacity
//! 3. Extract and interleave vehicles
//! 4. Check VIN uniqueness (strict mode)
//! 5. Allocate fleets under the fleet bound
//! 6. Summarize and select loading vehicles
//! 7. Derive suggestions

use haulplan_domain::service::{
    extract_vehicles, plan_loading, suggest, summarize_with_rate, validate_unique_vins,
    AllocationSummary, FleetAllocator, FleetCapacity, FleetLoadingPlan, PlanningSuggestion,
    COST_PER_FLEET, DEFAULT_FLEET_CAPACITY_M3, MAX_FLEETS_PER_RUN,
};
use haulplan_domain::{Fleet, OrderRequest, Vehicle};
use haulplan_types::{Error, InterleavingPattern, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Options for a planning run
#[derive(Debug, Clone)]
pub struct PlanningOptions {
    /// Raw capacity, normalized per `strict`
    pub capacity_m3: f64,

    /// Pattern used when neither an override nor the order names one
    pub default_pattern: InterleavingPattern,

    /// Pattern forced for this run
    pub pattern_override: Option<InterleavingPattern>,

    pub strict: bool,

    pub cost_per_fleet: u64,

    pub max_fleets: usize,
}

impl Default for PlanningOptions {
    fn default() -> Self {
        Self {
            capacity_m3: DEFAULT_FLEET_CAPACITY_M3,
            default_pattern: InterleavingPattern::default(),
            pattern_override: None,
            strict: false,
            cost_per_fleet: COST_PER_FLEET,
            max_fleets: MAX_FLEETS_PER_RUN,
        }
    }
}

impl PlanningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            capacity_m3: config.default_capacity_m3,
            default_pattern: config.default_pattern,
            pattern_override: None,
            strict: config.strict_validation,
            cost_per_fleet: config.cost_per_fleet,
            max_fleets: config.max_fleets,
        }
    }

    pub fn with_capacity(mut self, capacity_m3: f64) -> Self {
        self.capacity_m3 = capacity_m3;
        self
    }

    pub fn with_pattern(mut self, pattern: InterleavingPattern) -> Self {
        self.pattern_override = Some(pattern);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_cost_per_fleet(mut self, cost: u64) -> Self {
        self.cost_per_fleet = cost;
        self
    }

    pub fn with_max_fleets(mut self, max_fleets: usize) -> Self {
        self.max_fleets = max_fleets.max(1);
        self
    }

    /// Override, then the order's own pattern, then the default
    pub fn resolve_pattern(&self, order: Option<&OrderRequest>) -> InterleavingPattern {
        self.pattern_override
            .or_else(|| order.and_then(|o| o.pattern))
            .unwrap_or(self.default_pattern)
    }
}

/// Complete result of a planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningReport {
    pub order_id: Option<String>,
    /// `None` when planning a pre-sequenced manifest
    pub pattern: Option<InterleavingPattern>,
    pub capacity_m3: f64,
    pub fleets: Vec<Fleet>,
    /// Vehicles beyond the fleet bound
    pub unallocated: Vec<Vehicle>,
    pub summary: AllocationSummary,
    pub loading_plans: Vec<FleetLoadingPlan>,
    pub suggestions: Vec<PlanningSuggestion>,
}

impl PlanningReport {
    pub fn total_vehicles(&self) -> usize {
        self.summary.total_vehicles
    }

    pub fn average_utilization(&self) -> u32 {
        self.summary.average_utilization
    }

    pub fn is_complete(&self) -> bool {
        self.unallocated.is_empty()
    }
}

/// Plan an order, or the built-in sample list when `order` is `None`
pub fn plan(order: Option<&OrderRequest>, options: &PlanningOptions) -> Result<PlanningReport> {
    let pattern = options.resolve_pattern(order);
    let capacity = FleetCapacity::normalize(options.capacity_m3, options.strict)?;
    let vehicles = extract_vehicles(order, pattern);

    build_report(
        vehicles,
        order.and_then(|o| o.id.clone()),
        Some(pattern),
        capacity,
        options,
    )
}

/// Plan an already-sequenced vehicle list (no interleaving)
pub fn plan_vehicles(
    vehicles: Vec<Vehicle>,
    order_id: Option<String>,
    options: &PlanningOptions,
) -> Result<PlanningReport> {
    let capacity = FleetCapacity::normalize(options.capacity_m3, options.strict)?;
    if options.pattern_override.is_some() {
        warn!("Manifest vehicles keep their sequence; pattern override ignored");
    }
    build_report(vehicles, order_id, None, capacity, options)
}

fn build_report(
    vehicles: Vec<Vehicle>,
    order_id: Option<String>,
    pattern: Option<InterleavingPattern>,
    capacity: FleetCapacity,
    options: &PlanningOptions,
) -> Result<PlanningReport> {
    if options.strict {
        validate_unique_vins(&vehicles)?;
    }

    let allocator = FleetAllocator::new(capacity).with_max_fleets(options.max_fleets);
    let allocation = allocator.allocate(&vehicles);

    if !allocation.is_complete() {
        if options.strict {
            return Err(Error::FleetLimitExceeded {
                max_fleets: allocator.max_fleets(),
                remaining: allocation.unallocated.len(),
            });
        }
        warn!(
            "{} vehicle(s) left unallocated",
            allocation.unallocated.len()
        );
    }

    let summary = summarize_with_rate(&allocation.fleets, options.cost_per_fleet);
    let loading_plans = allocation.fleets.iter().map(plan_loading).collect();
    let suggestions = suggest(&summary);

    info!(
        "Planned {} vehicle(s) into {} fleet(s), average utilization {}%",
        summary.total_vehicles, summary.fleet_count, summary.average_utilization
    );

    Ok(PlanningReport {
        order_id,
        pattern,
        capacity_m3: capacity.value(),
        fleets: allocation.fleets,
        unallocated: allocation.unallocated,
        summary,
        loading_plans,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulplan_domain::{ModelType, VehicleTypeQuantity};

    fn order_with(vins: &str, types: &[(ModelType, u32)]) -> OrderRequest {
        OrderRequest {
            id: Some("ORD-T".to_string()),
            vin: vins.to_string(),
            vehicle_types: types
                .iter()
                .map(|(model_type, quantity)| VehicleTypeQuantity {
                    model_type: model_type.clone(),
                    quantity: *quantity,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sample_plan() {
        let report = plan(None, &PlanningOptions::new()).unwrap();
        assert_eq!(report.order_id, None);
        assert_eq!(report.pattern, Some(InterleavingPattern::Standard));
        assert_eq!(report.fleets.len(), 3);
        assert_eq!(report.total_vehicles(), 13);
        assert_eq!(report.average_utilization(), 135);
        assert_eq!(report.loading_plans.len(), 3);
        assert!(report.is_complete());
        assert_eq!(report.summary.estimated_cost, 7350);
    }

    #[test]
    fn test_pattern_resolution_order() {
        let mut order = OrderRequest::default();
        let options = PlanningOptions::new();
        assert_eq!(options.resolve_pattern(Some(&order)), InterleavingPattern::Standard);

        order.pattern = Some(InterleavingPattern::Alternating);
        assert_eq!(
            options.resolve_pattern(Some(&order)),
            InterleavingPattern::Alternating
        );

        let forced = PlanningOptions::new().with_pattern(InterleavingPattern::Standard);
        assert_eq!(forced.resolve_pattern(Some(&order)), InterleavingPattern::Standard);
    }

    #[test]
    fn test_permissive_capacity_falls_back() {
        let options = PlanningOptions::new().with_capacity(-5.0);
        let report = plan(None, &options).unwrap();
        assert_eq!(report.capacity_m3, 45.0);
    }

    #[test]
    fn test_strict_capacity_is_rejected() {
        let options = PlanningOptions::new().with_capacity(0.0).with_strict(true);
        assert!(matches!(
            plan(None, &options),
            Err(Error::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_strict_rejects_duplicate_vins() {
        let order = order_with("V1, V2, V1", &[(ModelType::Sedan, 3)]);
        let strict = PlanningOptions::new().with_strict(true);
        assert!(matches!(
            plan(Some(&order), &strict),
            Err(Error::DuplicateVin(ref vin)) if vin == "V1"
        ));

        let report = plan(Some(&order), &PlanningOptions::new()).unwrap();
        assert_eq!(report.total_vehicles(), 3);
    }

    #[test]
    fn test_fleet_limit_permissive_and_strict() {
        let vins: Vec<String> = (0..14).map(|i| format!("V{}", i)).collect();
        let order = order_with(&vins.join(","), &[(ModelType::Suv, 14)]);

        let options = PlanningOptions::new().with_max_fleets(2);
        let report = plan(Some(&order), &options).unwrap();
        assert_eq!(report.fleets.len(), 2);
        assert_eq!(report.unallocated.len(), 2);
        assert!(!report.is_complete());

        let strict = options.with_strict(true);
        assert!(matches!(
            plan(Some(&order), &strict),
            Err(Error::FleetLimitExceeded {
                max_fleets: 2,
                remaining: 2
            })
        ));
    }

    #[test]
    fn test_plan_vehicles_keeps_sequence() {
        let vehicles = vec![
            Vehicle::new("A", ModelType::Sedan),
            Vehicle::new("B", ModelType::Suv),
            Vehicle::new("C", ModelType::Sedan),
        ];
        let options = PlanningOptions::new().with_pattern(InterleavingPattern::Alternating);
        let report = plan_vehicles(vehicles, Some("MANIFEST".to_string()), &options).unwrap();
        let fleet = &report.fleets[0];
        assert_eq!(fleet.top_deck[0].vin, "A");
        assert_eq!(fleet.middle_deck[0].vin, "B");
        assert_eq!(report.order_id.as_deref(), Some("MANIFEST"));
        assert_eq!(report.pattern, None);
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            default_capacity_m3: 50.0,
            strict_validation: true,
            cost_per_fleet: 1000,
            ..Config::default()
        };
        let options = PlanningOptions::from_config(&config);
        assert_eq!(options.capacity_m3, 50.0);
        assert!(options.strict);

        let report = plan(None, &options).unwrap();
        assert_eq!(report.summary.estimated_cost, 3000);
    }
}
