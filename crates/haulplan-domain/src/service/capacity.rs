//! Fleet capacity normalization
//!
//! All capacity input passes through here before it reaches the allocator.
//! Permissive mode substitutes the standard trailer capacity for anything
//! unusable; strict mode rejects it.

use haulplan_types::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Standard trailer capacity in m³
pub const DEFAULT_FLEET_CAPACITY_M3: f64 = 45.0;

/// Validated per-fleet capacity (finite, > 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct FleetCapacity(f64);

impl FleetCapacity {
    /// Accept any value, falling back to the default when unusable
    pub fn permissive(raw: f64) -> Self {
        if is_usable(raw) {
            Self(raw)
        } else {
            debug!(
                "Capacity {} is not usable, using default {}",
                raw, DEFAULT_FLEET_CAPACITY_M3
            );
            Self(DEFAULT_FLEET_CAPACITY_M3)
        }
    }

    /// Reject non-finite or non-positive values
    pub fn strict(raw: f64) -> Result<Self> {
        if is_usable(raw) {
            Ok(Self(raw))
        } else {
            Err(Error::InvalidCapacity(format!(
                "{} (must be a positive number)",
                raw
            )))
        }
    }

    pub fn normalize(raw: f64, strict: bool) -> Result<Self> {
        if strict {
            Self::strict(raw)
        } else {
            Ok(Self::permissive(raw))
        }
    }

    /// Normalize free-text input (e.g. a form field or CLI argument)
    ///
    /// Permissive parsing reads the longest numeric prefix ("45m3" -> 45)
    /// and defaults when there is none. Strict parsing requires the whole
    /// string to be a number.
    pub fn parse(raw: &str, strict: bool) -> Result<Self> {
        let trimmed = raw.trim();
        if strict {
            let value: f64 = trimmed
                .parse()
                .map_err(|_| Error::InvalidCapacity(format!("'{}' is not a number", raw)))?;
            return Self::strict(value);
        }

        match numeric_prefix(trimmed) {
            Some(value) => Ok(Self::permissive(value)),
            None => {
                debug!(
                    "Capacity '{}' is not numeric, using default {}",
                    raw, DEFAULT_FLEET_CAPACITY_M3
                );
                Ok(Self::default())
            }
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for FleetCapacity {
    fn default() -> Self {
        Self(DEFAULT_FLEET_CAPACITY_M3)
    }
}

impl From<f64> for FleetCapacity {
    fn from(raw: f64) -> Self {
        Self::permissive(raw)
    }
}

impl From<FleetCapacity> for f64 {
    fn from(capacity: FleetCapacity) -> Self {
        capacity.0
    }
}

impl std::fmt::Display for FleetCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m³", self.0)
    }
}

fn is_usable(raw: f64) -> bool {
    raw.is_finite() && raw > 0.0
}

/// Longest prefix of `s` that parses as a number
fn numeric_prefix(s: &str) -> Option<f64> {
    s.char_indices()
        .map(|(idx, c)| idx + c.len_utf8())
        .rev()
        .find_map(|end| s[..end].parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_keeps_valid_value() {
        assert_eq!(FleetCapacity::permissive(60.0).value(), 60.0);
    }

    #[test]
    fn test_permissive_defaults_invalid_values() {
        for raw in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                FleetCapacity::permissive(raw).value(),
                DEFAULT_FLEET_CAPACITY_M3
            );
        }
    }

    #[test]
    fn test_strict_rejects_invalid_values() {
        assert!(FleetCapacity::strict(-1.0).is_err());
        assert!(FleetCapacity::strict(0.0).is_err());
        assert!(FleetCapacity::strict(f64::NAN).is_err());
        assert_eq!(FleetCapacity::strict(30.5).unwrap().value(), 30.5);
    }

    #[test]
    fn test_parse_permissive() {
        assert_eq!(FleetCapacity::parse("50", false).unwrap().value(), 50.0);
        assert_eq!(FleetCapacity::parse(" 45m3 ", false).unwrap().value(), 45.0);
        assert_eq!(
            FleetCapacity::parse("abc", false).unwrap().value(),
            DEFAULT_FLEET_CAPACITY_M3
        );
        assert_eq!(
            FleetCapacity::parse("", false).unwrap().value(),
            DEFAULT_FLEET_CAPACITY_M3
        );
        assert_eq!(
            FleetCapacity::parse("-5", false).unwrap().value(),
            DEFAULT_FLEET_CAPACITY_M3
        );
    }

    #[test]
    fn test_parse_strict() {
        assert!(FleetCapacity::parse("45m3", true).is_err());
        assert!(FleetCapacity::parse("-5", true).is_err());
        assert_eq!(FleetCapacity::parse("40", true).unwrap().value(), 40.0);
    }

    #[test]
    fn test_deserialize_is_permissive() {
        let capacity: FleetCapacity = serde_json::from_str("-3.0").unwrap();
        assert_eq!(capacity.value(), DEFAULT_FLEET_CAPACITY_M3);
    }
}
