//! Error types for mapping

use jsonmap_core::CoreError;
use thiserror::Error;

/// Errors that abort a whole mapping call
///
/// A field whose path does not resolve is never an error; it is left `None`.
#[derive(Debug, Error)]
pub enum MapError {
    /// Input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading the input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Reader input is larger than `Limits::max_input_bytes`.
    #[error("Input exceeds the limit of {limit_bytes} bytes")]
    InputTooLarge {
        /// Configured limit
        limit_bytes: usize,
    },
    /// Limit validation or enforcement failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MapError>;
