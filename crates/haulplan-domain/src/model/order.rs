//! Transport order type definitions

use haulplan_types::InterleavingPattern;
use serde::{Deserialize, Serialize};

use super::vehicle::ModelType;

/// Requested quantity of one model type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleTypeQuantity {
    #[serde(rename = "type")]
    pub model_type: ModelType,
    pub quantity: u32,
}

/// Order as received from intake
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Order identifier (e.g. "ORD-2025-001")
    #[serde(default)]
    pub id: Option<String>,
    /// Customer name
    #[serde(default)]
    pub customer: Option<String>,
    /// Delimited VIN list ("VIN1, VIN2, ...")
    #[serde(default)]
    pub vin: String,
    /// Model types with quantities, in intake order
    #[serde(default, alias = "vehicleTypes")]
    pub vehicle_types: Vec<VehicleTypeQuantity>,
    /// Destination labels, assigned round-robin
    #[serde(default)]
    pub destinations: Vec<String>,
    /// Interleaving pattern requested for this order
    #[serde(default)]
    pub pattern: Option<InterleavingPattern>,
}

impl OrderRequest {
    /// Split the VIN list on `,`, `;` or line breaks, dropping blanks
    pub fn vins(&self) -> Vec<&str> {
        self.vin
            .split([',', ';', '\n', '\r'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Total vehicles requested across all model types
    ///
    /// Summed in `u64` so any combination of `u32` quantities fits.
    pub fn requested_quantity(&self) -> u64 {
        self.vehicle_types.iter().map(|vt| u64::from(vt.quantity)).sum()
    }

    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("(unnamed)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vins_split_on_delimiters() {
        let order = OrderRequest {
            vin: "VIN1, VIN2;VIN3\nVIN4,, ".to_string(),
            ..Default::default()
        };
        assert_eq!(order.vins(), vec!["VIN1", "VIN2", "VIN3", "VIN4"]);
    }

    #[test]
    fn test_camel_case_vehicle_types_alias() {
        let json = r#"{
            "id": "ORD-1",
            "vin": "A, B",
            "vehicleTypes": [{"type": "SUV", "quantity": 2}],
            "destinations": ["Cancun Dealer"]
        }"#;
        let order: OrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(order.vehicle_types.len(), 1);
        assert_eq!(order.vehicle_types[0].model_type, ModelType::Suv);
        assert_eq!(order.requested_quantity(), 2);
        assert!(order.pattern.is_none());
    }

    #[test]
    fn test_requested_quantity_does_not_overflow() {
        let order = OrderRequest {
            vehicle_types: vec![
                VehicleTypeQuantity {
                    model_type: ModelType::Suv,
                    quantity: u32::MAX,
                },
                VehicleTypeQuantity {
                    model_type: ModelType::Sedan,
                    quantity: u32::MAX,
                },
            ],
            ..Default::default()
        };
        assert_eq!(order.requested_quantity(), 2 * u64::from(u32::MAX));
    }
}
