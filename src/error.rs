//! Error types for the sllm crate

use std::path::PathBuf;
use thiserror::Error;

/// Result type for sllm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sllm operations
///
/// A non-200 answer from the fine-tuning service is not an error: it is
/// reported through the log sink and surfaces as an empty result.
#[derive(Debug, Error)]
pub enum Error {
    /// Fine-tuning configuration could not be read from disk
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Fine-tuning configuration is not a JSON object
    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        /// Path that was requested
        path: PathBuf,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },

    /// HTTP transport error (connection refused, DNS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured server URL does not produce a valid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Unexpected response format
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// Whether the error comes from loading the fine-tuning configuration
    pub fn is_config_load(&self) -> bool {
        matches!(self, Error::ConfigRead { .. } | Error::ConfigParse { .. })
    }

    /// Whether the error comes from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }
}
