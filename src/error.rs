use thiserror::Error;

use crate::models::PropertyId;

/// Errors surfaced by the discovery engine
///
/// None of these are fatal to the host: each leaves the affected state
/// untouched so the caller can keep rendering.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Invalid price range: min {min} must not exceed max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid comparison capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    #[error("Unknown zone: {0}")]
    UnknownZone(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Listing error: {0}")]
    Listing(#[from] ListingError),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

/// Errors raised while normalizing raw listing documents
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Listing {id}: missing field {field}")]
    MissingField { id: String, field: &'static str },

    #[error("Listing {id}: {reason}")]
    Invalid { id: PropertyId, reason: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

pub type Result<T, E = DiscoveryError> = std::result::Result<T, E>;
