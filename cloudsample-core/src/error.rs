//! Error types for cloudsample

use thiserror::Error;

/// Main error type for cloudsample operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// Result type alias for cloudsample operations
pub type Result<T> = std::result::Result<T, Error>;
