//! Interleaving pattern selection

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Order in which SUV / Sedan / Hatchback buckets are drawn into the
/// vehicle sequence before deck slicing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterleavingPattern {
    /// 3 SUV, 1 Sedan, 2 Hatchback, then 1 SUV, 4 Sedan, 2 Hatchback
    #[default]
    Standard,
    /// SUV/Hatchback/Sedan alternated one at a time over 12 positions
    Alternating,
}

impl InterleavingPattern {
    pub fn label(&self) -> &'static str {
        match self {
            InterleavingPattern::Standard => "standard",
            InterleavingPattern::Alternating => "alternating",
        }
    }
}

impl std::fmt::Display for InterleavingPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(InterleavingPattern::default(), InterleavingPattern::Standard);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&InterleavingPattern::Alternating).unwrap();
        assert_eq!(json, "\"alternating\"");
        let parsed: InterleavingPattern = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(parsed, InterleavingPattern::Standard);
    }
}
