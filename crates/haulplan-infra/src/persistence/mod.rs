//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_order_repo;

pub use file_order_repo::FileOrderRepository;
