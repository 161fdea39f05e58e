//! Repository adapters for the infrastructure layer

use std::path::{Path, PathBuf};

use haulplan_domain::repository::OrderRepository;
use haulplan_domain::{OrderRequest, Vehicle};
use haulplan_infra::persistence::FileOrderRepository;
use haulplan_infra::vehicle_manifest_csv::load_vehicle_manifest;
use haulplan_types::{Error, Result};

/// Open a file-based order repository (TOML or JSON)
pub fn open_order_repo(path: PathBuf) -> Result<FileOrderRepository> {
    FileOrderRepository::new(path)
}

/// Look up one order, failing when it is absent
pub fn find_order(repo: &impl OrderRepository, order_id: &str) -> Result<OrderRequest> {
    repo.find_by_id(order_id)?
        .ok_or_else(|| Error::OrderNotFound(order_id.to_string()))
}

/// Load a pre-sequenced vehicle manifest from CSV
pub fn open_vehicle_manifest(path: &Path) -> Result<Vec<Vehicle>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    load_vehicle_manifest(path).map_err(Into::into)
}
