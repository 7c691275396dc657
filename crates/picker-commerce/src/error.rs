//! Picker error types.
//!
//! Engine mutations never fail: a missing target is a no-op. Errors only
//! surface at the edges, where text or configuration enters the crate.

use thiserror::Error;

/// Errors raised while interpreting external input.
#[derive(Error, Debug)]
pub enum PickerError {
    /// Discount label outside the configured enumeration.
    #[error("Unknown discount type: {0}")]
    UnknownDiscountType(String),

    /// Configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PickerError {
    fn from(e: serde_json::Error) -> Self {
        PickerError::SerializationError(e.to_string())
    }
}
