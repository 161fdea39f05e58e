//! Configuration management for haulplan
//!
//! Config stored at: ~/.config/haulplan/config.json

use std::path::{Path, PathBuf};

use haulplan_domain::service::{COST_PER_FLEET, DEFAULT_FLEET_CAPACITY_M3, MAX_FLEETS_PER_RUN};
use haulplan_types::{ConfigError, InterleavingPattern, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fleet capacity used when none is given (m³)
    #[serde(default = "default_capacity_m3")]
    pub default_capacity_m3: f64,

    /// Interleaving pattern for orders that do not request one
    #[serde(default)]
    pub default_pattern: InterleavingPattern,

    /// Reject bad capacities, duplicate VINs and fleet overflow
    #[serde(default)]
    pub strict_validation: bool,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    #[serde(default = "default_cost_per_fleet")]
    pub cost_per_fleet: u64,

    /// Fleet bound per planning run
    #[serde(default = "default_max_fleets")]
    pub max_fleets: usize,
}

fn default_capacity_m3() -> f64 {
    DEFAULT_FLEET_CAPACITY_M3
}

fn default_cost_per_fleet() -> u64 {
    COST_PER_FLEET
}

fn default_max_fleets() -> usize {
    MAX_FLEETS_PER_RUN
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_capacity_m3: default_capacity_m3(),
            default_pattern: InterleavingPattern::default(),
            strict_validation: false,
            output_format: OutputFormat::default(),
            cost_per_fleet: default_cost_per_fleet(),
            max_fleets: default_max_fleets(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulplan");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulplan Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Fleet capacity:    {} m³", self.default_capacity_m3)?;
        writeln!(f, "Pattern:           {}", self.default_pattern)?;
        writeln!(f, "Strict validation: {}", self.strict_validation)?;
        writeln!(f, "Output format:     {}", self.output_format)?;
        writeln!(f, "Cost per fleet:    {}", self.cost_per_fleet)?;
        writeln!(f, "Max fleets:        {}", self.max_fleets)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}
