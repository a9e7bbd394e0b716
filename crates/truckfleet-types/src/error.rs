//! Error types for truckfleet

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transcript already exists: {}", .0.display())]
    TranscriptExists(PathBuf),

    #[error("Could not locate the section heading for table {table}")]
    SectionNotFound { table: usize },

    #[error("Invalid validation pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    #[error("Truck number {number} is outside the fleet (1..={size})")]
    TruckNumberOutOfRange { number: usize, size: usize },

    #[error("HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },
}

pub type Result<T> = std::result::Result<T, Error>;
