//! Domain model types

pub mod allocation;
pub mod fleet;
pub mod order;
pub mod vehicle;

pub use allocation::FleetAllocation;
pub use fleet::{Deck, Fleet, FleetId};
pub use order::{OrderRequest, VehicleTypeQuantity};
pub use vehicle::{ModelType, Vehicle, DEFAULT_VOLUME_M3};
