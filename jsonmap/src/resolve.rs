//! Path resolution against a parsed JSON document

use crate::mappable::Text;
use jsonmap_core::Path;
use serde_json::Value;

/// Outcome of resolving a [`Path`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// Every segment was present
    Found(&'a Value),
    /// A key was missing or a non-object was met before the last segment
    Absent,
}

impl Resolved<'_> {
    /// Leaf text for this resolution
    ///
    /// Only JSON strings produce text. `null`, numbers, booleans, arrays and
    /// objects are a shape mismatch and yield `None`, same as a missing key.
    pub fn into_text(self) -> Text {
        match self {
            Resolved::Found(Value::String(text)) => Some(text.clone()),
            _ => None,
        }
    }
}

/// Resolve `path` starting at the document root
///
/// All segments but the last must name nested objects; the last names the
/// value. Segments are looked up literally, so an empty segment matches the
/// `""` key.
pub fn resolve<'a>(document: &'a Value, path: &Path) -> Resolved<'a> {
    let Some((last, parents)) = path.segments().split_last() else {
        return Resolved::Absent;
    };

    let mut current = document;
    for segment in parents {
        current = match current {
            Value::Object(map) => match map.get(segment) {
                Some(next) => next,
                None => return Resolved::Absent,
            },
            _ => return Resolved::Absent,
        };
    }

    match current {
        Value::Object(map) => map.get(last).map_or(Resolved::Absent, Resolved::Found),
        _ => Resolved::Absent,
    }
}

/// Get a human-readable type name
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
