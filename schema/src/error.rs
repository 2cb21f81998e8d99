use poly_link::PolyLinkError;
use thiserror::Error;

/// Errors that can occur in the extractor.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error(transparent)]
    Link(#[from] PolyLinkError),

    #[error("file error: {0}")]
    File(String),

    #[error("invalid schema descriptor: {0}")]
    Descriptor(String),

    #[error("unsupported datamodel \"{0}\" (expected \"RELATIONAL\")")]
    Datamodel(String),
}

/// Result type for extractor operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

impl From<std::io::Error> for SchemaError {
    fn from(err: std::io::Error) -> Self {
        SchemaError::File(err.to_string())
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Descriptor(err.to_string())
    }
}
