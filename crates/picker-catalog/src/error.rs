//! Catalog fetch errors.

use std::path::PathBuf;
use std::time::Duration;

/// Error type for catalog fetches.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Failed to read catalog fixture {path}: {source}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Check if another attempt could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Connection(_))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Deserialization(err.to_string())
    }
}
