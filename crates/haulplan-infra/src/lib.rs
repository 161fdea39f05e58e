//! Infrastructure layer for haulplan
//!
//! File-backed loaders and repository implementations.

pub mod order_book_loader;
pub mod persistence;
pub mod vehicle_manifest_csv;

pub use order_book_loader::{OrderBookFormat, OrderBookLoader};
pub use persistence::FileOrderRepository;
pub use vehicle_manifest_csv::{load_vehicle_manifest, read_vehicle_manifest, ManifestCsvError};
