//! Repository trait definitions for order intake

use crate::model::OrderRequest;
use haulplan_types::Error;

/// Source of transport orders
pub trait OrderRepository {
    /// Load all orders
    fn find_all(&self) -> Result<Vec<OrderRequest>, Error>;

    /// Find an order by its identifier
    fn find_by_id(&self, id: &str) -> Result<Option<OrderRequest>, Error>;
}
