//! Field descriptors supplied by mappable types

use std::fmt;

/// Whether a field holds text or another mappable struct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Plain text resolved directly against the document
    Leaf,
    /// Structured value mapped recursively with an extended base path
    Nested,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Leaf => f.pad("leaf"),
            FieldKind::Nested => f.pad("nested"),
        }
    }
}

/// One declared field of a mappable type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    /// Rust field name, used as the default JSON key
    pub name: &'static str,
    /// Optional path annotation
    pub annotation: Option<&'static str>,
    /// Leaf or nested
    pub kind: FieldKind,
}

impl Field {
    /// Create a field descriptor
    pub const fn new(name: &'static str, annotation: Option<&'static str>, kind: FieldKind) -> Self {
        Self {
            name,
            annotation,
            kind,
        }
    }
}
