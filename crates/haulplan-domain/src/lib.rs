//! Domain layer for vehicle load planning
//!
//! Models, the slotting services (extraction, fleet allocation, summaries,
//! loading vehicle selection) and repository traits. Everything here is a
//! pure function of its inputs; I/O lives in `haulplan-infra`.

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::OrderRepository;
