//! Use cases

pub mod planning_service;

pub use planning_service::{plan, plan_vehicles, PlanningOptions, PlanningReport};
