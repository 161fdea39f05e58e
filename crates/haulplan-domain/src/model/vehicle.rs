//! Vehicle type definitions

use serde::{Deserialize, Serialize};

/// Volume used for any model type missing from the table (m³)
pub const DEFAULT_VOLUME_M3: f64 = 15.0;

/// Vehicle model class
///
/// Known classes carry a fixed volume; anything else is kept by name as
/// `Other` and falls back to [`DEFAULT_VOLUME_M3`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelType {
    Sedan,
    Suv,
    Hatchback,
    VanCargo,
    Truck,
    Other(String),
}

impl ModelType {
    /// Parse a model type name (case-insensitive, surrounding whitespace ignored)
    pub fn parse(name: &str) -> Self {
        let trimmed = name.trim();
        let key: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "sedan" => ModelType::Sedan,
            "suv" => ModelType::Suv,
            "hatchback" => ModelType::Hatchback,
            "vancargo" => ModelType::VanCargo,
            "truck" => ModelType::Truck,
            _ => ModelType::Other(trimmed.to_string()),
        }
    }

    /// Cargo volume in cubic meters
    pub fn volume_m3(&self) -> f64 {
        match self {
            ModelType::Sedan => 13.02,
            ModelType::Suv => 16.88,
            ModelType::Hatchback => 12.50,
            ModelType::VanCargo => 19.98,
            ModelType::Truck => 20.50,
            ModelType::Other(_) => DEFAULT_VOLUME_M3,
        }
    }

    /// Display fill color as 0xRRGGBB (unknown types share the Sedan color)
    pub fn color(&self) -> u32 {
        match self {
            ModelType::Sedan | ModelType::Other(_) => 0x3B82F6,
            ModelType::Suv => 0xF97316,
            ModelType::Hatchback => 0x10B981,
            ModelType::VanCargo => 0x8B5CF6,
            ModelType::Truck => 0x64748B,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ModelType::Sedan => "Sedan",
            ModelType::Suv => "SUV",
            ModelType::Hatchback => "Hatchback",
            ModelType::VanCargo => "Van Cargo",
            ModelType::Truck => "Truck",
            ModelType::Other(name) => name,
        }
    }
}

impl From<String> for ModelType {
    fn from(name: String) -> Self {
        ModelType::parse(&name)
    }
}

impl From<ModelType> for String {
    fn from(model_type: ModelType) -> Self {
        model_type.label().to_string()
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One unit to be transported
///
/// Deserializing recomputes `volume_m3` from `model_type`; a stored volume
/// is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "VehicleRecord")]
pub struct Vehicle {
    /// Vehicle identification number
    pub vin: String,
    /// Model class
    pub model_type: ModelType,
    /// Cargo volume in m³ (always the table value for `model_type`)
    pub volume_m3: f64,
    /// Delivery destination label
    #[serde(default)]
    pub destination: Option<String>,
}

/// Serialized form of a vehicle, without a trusted volume
#[derive(Deserialize)]
struct VehicleRecord {
    vin: String,
    model_type: ModelType,
    #[serde(default)]
    destination: Option<String>,
}

impl From<VehicleRecord> for Vehicle {
    fn from(record: VehicleRecord) -> Self {
        Self {
            destination: record.destination,
            ..Vehicle::new(record.vin, record.model_type)
        }
    }
}

impl Vehicle {
    pub fn new(vin: impl Into<String>, model_type: ModelType) -> Self {
        let volume_m3 = model_type.volume_m3();
        Self {
            vin: vin.into(),
            model_type,
            volume_m3,
            destination: None,
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_table() {
        assert_eq!(ModelType::Sedan.volume_m3(), 13.02);
        assert_eq!(ModelType::Suv.volume_m3(), 16.88);
        assert_eq!(ModelType::Hatchback.volume_m3(), 12.50);
        assert_eq!(ModelType::VanCargo.volume_m3(), 19.98);
        assert_eq!(ModelType::Truck.volume_m3(), 20.50);
    }

    #[test]
    fn test_colors() {
        assert_eq!(ModelType::Suv.color(), 0xF97316);
        assert_eq!(
            ModelType::Other("Coupe".to_string()).color(),
            ModelType::Sedan.color()
        );
    }

    #[test]
    fn test_unknown_type_falls_back_to_default_volume() {
        let model = ModelType::parse("Pickup");
        assert_eq!(model, ModelType::Other("Pickup".to_string()));
        assert_eq!(model.volume_m3(), DEFAULT_VOLUME_M3);
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(ModelType::parse("SUV"), ModelType::Suv);
        assert_eq!(ModelType::parse(" suv "), ModelType::Suv);
        assert_eq!(ModelType::parse("Van Cargo"), ModelType::VanCargo);
        assert_eq!(ModelType::parse("van_cargo"), ModelType::VanCargo);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&ModelType::VanCargo).unwrap();
        assert_eq!(json, "\"Van Cargo\"");

        let vehicle: Vehicle = serde_json::from_str(
            r#"{"vin":"V1","model_type":"Hatchback","volume_m3":12.5}"#,
        )
        .unwrap();
        assert_eq!(vehicle.model_type, ModelType::Hatchback);
        assert!(vehicle.destination.is_none());
    }

    #[test]
    fn test_deserialize_recomputes_volume() {
        let vehicle: Vehicle = serde_json::from_str(
            r#"{"vin":"V1","model_type":"SUV","volume_m3":99.0,"destination":"Leon"}"#,
        )
        .unwrap();
        assert_eq!(vehicle.volume_m3, 16.88);
        assert_eq!(vehicle.destination.as_deref(), Some("Leon"));

        let no_volume: Vehicle =
            serde_json::from_str(r#"{"vin":"V2","model_type":"Coupe"}"#).unwrap();
        assert_eq!(no_volume.volume_m3, DEFAULT_VOLUME_M3);
    }

    #[test]
    fn test_new_takes_volume_from_table() {
        let vehicle = Vehicle::new("VIN1", ModelType::Truck).with_destination("Puebla Dealer");
        assert_eq!(vehicle.volume_m3, 20.50);
        assert_eq!(vehicle.destination.as_deref(), Some("Puebla Dealer"));
    }
}
