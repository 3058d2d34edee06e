//! Error types for jsonmap core primitives

use thiserror::Error;

/// Core error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Configured limits exceed the hard maximums.
    #[error("Limits exceed hard maximums: {reason}")]
    LimitsExceedHardMaximums {
        /// Which limit was out of range and by how much
        reason: String,
    },
    /// A mapping descended deeper than the configured depth limit.
    #[error("Depth limit exceeded at '{path}': depth {depth} (max: {max_depth})")]
    DepthLimitExceeded {
        /// Canonical path of the field being mapped when the limit was hit
        path: String,
        /// Nesting depth reached
        depth: usize,
        /// Configured maximum
        max_depth: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CoreError>;
