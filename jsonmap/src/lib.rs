//! jsonmap - Annotation-directed mapping of JSON documents onto structs
//!
//! Each field of a target struct is located in the JSON document by a path
//! derived from the field name and an optional annotation:
//!
//! - no annotation: the field name is the key (`name` → `name`)
//! - a complete key renames the field (`name => "full_name"`)
//! - a prefix ending in `/` nests the field name (`name => "profile/"` →
//!   `profile/name`)
//!
//! Nested structs extend the base path for their own fields. A path that does
//! not resolve leaves its field `None`; only malformed input aborts a mapping.
//!
//! This crate provides:
//!
//! - The [`Mappable`] trait and [`mappable!`] declaration macro
//! - The recursive [`Mapper`]
//! - Path resolution against a `serde_json::Value`
//! - Indented printing of mapped objects

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod mappable;
pub mod mapper;
pub mod printer;
pub mod reader;
pub mod resolve;

// Re-export commonly used types
pub use error::{MapError, Result};
pub use jsonmap_core::{
    derive_fragment, is_leaf, CoreError, Field, FieldKind, Limits, Path, ALIAS_DELIMITER,
    SEPARATOR,
};
pub use mappable::{FieldInspector, FieldVisitor, MapField, Mappable, Text};
pub use mapper::{FieldPath, Mapper};
pub use printer::{print_object, render, write_object};
pub use resolve::{resolve, Resolved};

use serde_json::Value;

/// Map `json` onto a new `T` with default limits
pub fn map<T: Mappable>(json: &str) -> Result<T> {
    Mapper::new().map(json)
}

/// Map a parsed document onto a new `T` with default limits
pub fn map_value<T: Mappable>(document: &Value) -> Result<T> {
    Mapper::new().map_value(document)
}

/// Derived path of every field of `T` with default limits
pub fn paths<T: Mappable>() -> Result<Vec<FieldPath>> {
    Mapper::new().paths::<T>()
}
