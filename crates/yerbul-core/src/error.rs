//! Error types for yerbul

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YerbulError {
    // Reference data errors
    #[error("Unknown region: {name}")]
    UnknownRegion { name: String },

    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("Failed to load reference data from {path}: {reason}")]
    ReferenceData { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Geo-provider errors
    #[error("Geo provider request failed: {reason}")]
    Provider { reason: String },

    // Chat transport errors
    #[error("Chat transport send failed: {reason}")]
    Transport { reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, YerbulError>;
