use thiserror::Error;

/// Errors surfaced by the driver wrapper.
#[derive(Error, Debug)]
pub enum PolyLinkError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("connection to {target} failed: {message}")]
    Connection { target: String, message: String },

    #[error("query failed: {0}")]
    Query(String),
}

/// Result type for driver-wrapper operations.
pub type Result<T> = std::result::Result<T, PolyLinkError>;
