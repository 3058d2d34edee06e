//! jsonmap Core - Primitives for annotation-directed JSON mapping
//!
//! This crate provides the I/O-free building blocks used by the mapper:
//!
//! - Path construction and composition
//! - The annotation derivation rule
//! - Field descriptors
//! - Error types
//! - Mapping limits

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod field;
pub mod limits;
pub mod path;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use field::{Field, FieldKind};
pub use limits::Limits;
pub use path::{derive_fragment, is_leaf, Path, ALIAS_DELIMITER, SEPARATOR};
