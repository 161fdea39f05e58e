//! Error types for haulplan

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid fleet capacity: {0}")]
    InvalidCapacity(String),

    #[error("Duplicate VIN in planning input: {0}")]
    DuplicateVin(String),

    #[error("Fleet limit of {max_fleets} reached with {remaining} vehicle(s) unallocated")]
    FleetLimitExceeded { max_fleets: usize, remaining: usize },

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Failed to parse order file: {0}")]
    OrderParse(String),

    #[error("Failed to parse vehicle manifest: {0}")]
    ManifestParse(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
