//! Order book loader (TOML or JSON)
//!
//! An order book is a list of transport orders under an `orders` key:
//!
//! ```toml
//! [[orders]]
//! id = "ORD-2025-001"
//! vin = "VIN001, VIN002"
//! destinations = ["Monterrey"]
//!
//! [[orders.vehicle_types]]
//! type = "SUV"
//! quantity = 2
//! ```

use std::fs;
use std::path::Path;

use haulplan_domain::OrderRequest;
use haulplan_types::{Error, Result};
use log::{debug, warn};
use serde::Deserialize;

/// Container for parsing order book files
#[derive(Debug, Deserialize)]
struct OrderBook {
    #[serde(default)]
    orders: Vec<OrderRequest>,
}

/// On-disk order book format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBookFormat {
    Toml,
    Json,
}

impl OrderBookFormat {
    /// Pick the format from the file extension (TOML unless `.json`)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OrderBookFormat::Json,
            _ => OrderBookFormat::Toml,
        }
    }
}

/// Orders loaded from one order book, in file order
#[derive(Debug, Clone, Default)]
pub struct OrderBookLoader {
    orders: Vec<OrderRequest>,
}

impl OrderBookLoader {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let loader = Self::load_from_str(&content, OrderBookFormat::from_path(path))?;
        debug!(
            "Loaded {} order(s) from {}",
            loader.count(),
            path.display()
        );
        Ok(loader)
    }

    pub fn load_from_str(content: &str, format: OrderBookFormat) -> Result<Self> {
        let book: OrderBook = match format {
            OrderBookFormat::Toml => toml::from_str(content)
                .map_err(|e| Error::OrderParse(format!("invalid TOML: {}", e)))?,
            OrderBookFormat::Json => serde_json::from_str(content)
                .map_err(|e| Error::OrderParse(format!("invalid JSON: {}", e)))?,
        };

        let mut seen: Vec<&str> = Vec::new();
        for id in book.orders.iter().filter_map(|o| o.id.as_deref()) {
            if seen.contains(&id) {
                warn!("Order id {} appears more than once; lookups use the first", id);
            } else {
                seen.push(id);
            }
        }

        Ok(Self {
            orders: book.orders,
        })
    }

    /// Look up an order by id
    pub fn get_order(&self, id: &str) -> Option<&OrderRequest> {
        self.orders.iter().find(|o| o.id.as_deref() == Some(id))
    }

    pub fn all_orders(&self) -> &[OrderRequest] {
        &self.orders
    }

    pub fn count(&self) -> usize {
        self.orders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulplan_domain::ModelType;
    use haulplan_types::InterleavingPattern;

    const TEST_TOML: &str = r#"
[[orders]]
id = "ORD-2025-001"
customer = "Norte Motors"
vin = "VIN001, VIN002, VIN003"
destinations = ["Monterrey"]

[[orders.vehicle_types]]
type = "SUV"
quantity = 2

[[orders.vehicle_types]]
type = "Sedan"
quantity = 1

[[orders]]
id = "ORD-2025-004"
vin = "VIN100"
pattern = "alternating"

[[orders.vehicle_types]]
type = "Hatchback"
quantity = 1
"#;

    const TEST_JSON: &str = r#"{
  "orders": [
    {
      "id": "ORD-2025-002",
      "vin": "VIN010;VIN011",
      "vehicleTypes": [{ "type": "Van Cargo", "quantity": 2 }]
    }
  ]
}"#;

    #[test]
    fn test_load_toml() {
        let loader = OrderBookLoader::load_from_str(TEST_TOML, OrderBookFormat::Toml).unwrap();
        assert_eq!(loader.count(), 2);

        let order = loader.get_order("ORD-2025-001").unwrap();
        assert_eq!(order.customer.as_deref(), Some("Norte Motors"));
        assert_eq!(order.vins(), vec!["VIN001", "VIN002", "VIN003"]);
        assert_eq!(order.vehicle_types[0].model_type, ModelType::Suv);
        assert_eq!(order.requested_quantity(), 3);
        assert_eq!(order.pattern, None);

        let alternating = loader.get_order("ORD-2025-004").unwrap();
        assert_eq!(alternating.pattern, Some(InterleavingPattern::Alternating));
    }

    #[test]
    fn test_load_json_with_camel_case_types() {
        let loader = OrderBookLoader::load_from_str(TEST_JSON, OrderBookFormat::Json).unwrap();
        let order = loader.get_order("ORD-2025-002").unwrap();
        assert_eq!(order.vehicle_types[0].model_type, ModelType::VanCargo);
        assert_eq!(order.vins().len(), 2);
    }

    #[test]
    fn test_unknown_order() {
        let loader = OrderBookLoader::load_from_str(TEST_TOML, OrderBookFormat::Toml).unwrap();
        assert!(loader.get_order("ORD-9999").is_none());
    }

    #[test]
    fn test_empty_book() {
        let loader = OrderBookLoader::load_from_str("", OrderBookFormat::Toml).unwrap();
        assert_eq!(loader.count(), 0);
    }

    #[test]
    fn test_malformed_input_is_order_parse_error() {
        let err = OrderBookLoader::load_from_str("[[orders]\n", OrderBookFormat::Toml).unwrap_err();
        assert!(matches!(err, Error::OrderParse(_)));

        let err = OrderBookLoader::load_from_str("{", OrderBookFormat::Json).unwrap_err();
        assert!(matches!(err, Error::OrderParse(_)));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            OrderBookFormat::from_path(Path::new("orders.JSON")),
            OrderBookFormat::Json
        );
        assert_eq!(
            OrderBookFormat::from_path(Path::new("orders.toml")),
            OrderBookFormat::Toml
        );
        assert_eq!(
            OrderBookFormat::from_path(Path::new("orders")),
            OrderBookFormat::Toml
        );
    }
}
