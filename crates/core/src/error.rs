// Central Error Type for the Helper Libraries

use thiserror::Error;

/// Application-level error type shared by all Relaykit crates
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid path pattern: {0}")]
    Pattern(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Store backends report failures as plain strings (to avoid a dependency
// from core on any particular client crate)
impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Store(err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
