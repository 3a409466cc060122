//! Error types for the console operator utilities

use thiserror::Error;

/// Result type for the operator utilities
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the operator utilities
#[derive(Debug, Error)]
pub enum Error {
    /// Payload could not be decoded into a resource
    #[error("Decode error: {0}")]
    DecodeError(String),
    /// Resource could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
