//! File-based implementation of OrderRepository

use std::path::{Path, PathBuf};

use haulplan_domain::repository::OrderRepository;
use haulplan_domain::OrderRequest;
use haulplan_types::Error;

use crate::order_book_loader::OrderBookLoader;

/// Order repository backed by a TOML or JSON order book
pub struct FileOrderRepository {
    path: PathBuf,
    loader: OrderBookLoader,
}

impl FileOrderRepository {
    pub fn new(path: PathBuf) -> Result<Self, Error> {
        let loader = OrderBookLoader::load_from_file(&path)?;
        Ok(Self { path, loader })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the order book from disk
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = OrderBookLoader::load_from_file(&self.path)?;
        Ok(())
    }
}

impl OrderRepository for FileOrderRepository {
    fn find_all(&self) -> Result<Vec<OrderRequest>, Error> {
        Ok(self.loader.all_orders().to_vec())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<OrderRequest>, Error> {
        Ok(self.loader.get_order(id).cloned())
    }
}
