//! Path composition for annotation-directed JSON traversal
//!
//! A [`Path`] is built from a raw string such as `"address/town~city"`:
//!
//! - `/` separates object keys; the last key is the value to fetch.
//! - `~` introduces a display alias. Everything after the last `~` is only
//!   used when rendering the path, everything before the first `~` is the
//!   canonical location used for traversal and composition.
//!
//! Field paths are composed one fragment at a time with [`Path::append`],
//! where each fragment comes from [`derive_fragment`].

use crate::field::Field;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Separator between object keys
pub const SEPARATOR: char = '/';

/// Delimiter between a canonical path and its display alias
pub const ALIAS_DELIMITER: char = '~';

/// Inline storage for path segments; most mappings nest only a few levels
pub type Segments = SmallVec<[String; 4]>;

/// Location of a value inside a JSON document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    canonical: String,
    display: String,
    segments: Segments,
}

impl Path {
    /// Build a path from a raw string. Any string is accepted.
    ///
    /// Trailing separators do not produce empty segments, so `"a/b/"` and
    /// `"a/b"` share the segments `["a", "b"]`. The empty string yields a
    /// single empty segment.
    pub fn new(raw: &str) -> Self {
        let display = raw.rsplit(ALIAS_DELIMITER).next().unwrap_or(raw);
        let canonical = raw.split(ALIAS_DELIMITER).next().unwrap_or(raw);

        let mut segments: Segments = canonical.split(SEPARATOR).map(str::to_string).collect();
        while segments.len() > 1 && segments.last().is_some_and(String::is_empty) {
            segments.pop();
        }

        Self {
            canonical: canonical.to_string(),
            display: display.to_string(),
            segments,
        }
    }

    /// The base path every top-level mapping starts from
    pub fn root() -> Self {
        Self::new("")
    }

    /// Extend this path with one fragment.
    ///
    /// A separator is inserted only when this path is leaf-shaped; a root or
    /// separator-terminated base is concatenated directly.
    pub fn append(&self, fragment: &str) -> Self {
        if is_leaf(&self.canonical) {
            let mut raw = String::with_capacity(self.canonical.len() + 1 + fragment.len());
            raw.push_str(&self.canonical);
            raw.push(SEPARATOR);
            raw.push_str(fragment);
            Self::new(&raw)
        } else {
            Self::new(&format!("{}{}", self.canonical, fragment))
        }
    }

    /// Path of `field` when its owning struct is mapped at `self`
    pub fn derive(&self, field: &Field) -> Self {
        self.append(&derive_fragment(field.name, field.annotation))
    }

    /// Object keys to descend through; the last one is the value key
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Raw string with any display alias removed
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Human-readable name of this path
    pub fn display_value(&self) -> &str {
        &self.display
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.display, self.segments.join(" / "))
    }
}

/// True iff `raw` is non-empty and does not end with [`SEPARATOR`].
///
/// A leaf-shaped annotation names a complete key and replaces the field
/// name; anything else is a prefix combined with the field name.
pub fn is_leaf(raw: &str) -> bool {
    !raw.is_empty() && !raw.ends_with(SEPARATOR)
}

/// Fragment appended to the base path for a field
///
/// | annotation            | fragment            |
/// |-----------------------|---------------------|
/// | none                  | `name`              |
/// | leaf-shaped `v`       | `v`                 |
/// | otherwise (`""`, `v/`)| `v` followed by `name` |
pub fn derive_fragment<'a>(name: &'a str, annotation: Option<&'a str>) -> Cow<'a, str> {
    match annotation {
        None => Cow::Borrowed(name),
        Some(value) if is_leaf(value) => Cow::Borrowed(value),
        Some("") => Cow::Borrowed(name),
        Some(prefix) => Cow::Owned(format!("{prefix}{name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    fn segs(path: &Path) -> Vec<&str> {
        path.segments().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_is_leaf_table() {
        assert!(!is_leaf(""));
        assert!(is_leaf("a"));
        assert!(!is_leaf("a/"));
        assert!(is_leaf("a/b"));
        assert!(!is_leaf("a/b/"));
    }

    #[test]
    fn test_trailing_separator_is_dropped() {
        assert_eq!(segs(&Path::new("a/b/")), vec!["a", "b"]);
        assert_eq!(segs(&Path::new("a/b")), vec!["a", "b"]);
        assert_eq!(segs(&Path::new("a//")), vec!["a"]);
    }

    #[test]
    fn test_empty_raw_has_one_empty_segment() {
        let path = Path::new("");
        assert_eq!(segs(&path), vec![""]);
        assert_eq!(path, Path::root());
        assert_eq!(Path::new("/").segments(), Path::new("").segments());
    }

    #[test]
    fn test_alias_is_display_only() {
        let path = Path::new("address/town~city");
        assert_eq!(path.display_value(), "city");
        assert_eq!(path.canonical(), "address/town");
        assert_eq!(segs(&path), vec!["address", "town"]);
        assert_eq!(path.to_string(), "city : address / town");
    }

    #[test]
    fn test_alias_dropped_when_appending() {
        let base = Path::new("data/user~u");
        let child = base.append("name");
        assert_eq!(child.canonical(), "data/user/name");
        assert_eq!(child.display_value(), "data/user/name");
    }

    #[test]
    fn test_display_without_alias() {
        assert_eq!(Path::new("a/b/c").to_string(), "a/b/c : a / b / c");
    }

    #[test]
    fn test_append_to_root_concatenates() {
        let path = Path::root().append("name");
        assert_eq!(path.canonical(), "name");
        assert_eq!(segs(&path), vec!["name"]);
    }

    #[test]
    fn test_append_to_leaf_inserts_separator() {
        let path = Path::new("a").append("b");
        assert_eq!(path.canonical(), "a/b");
    }

    #[test]
    fn test_append_to_prefix_concatenates() {
        let path = Path::new("a/").append("b");
        assert_eq!(path.canonical(), "a/b");
        assert_eq!(segs(&path), vec!["a", "b"]);
    }

    #[test]
    fn test_append_empty_fragment_keeps_segments() {
        let base = Path::new("a/b");
        let appended = base.append("");
        assert_eq!(appended.segments(), base.segments());
    }

    #[test]
    fn test_derive_fragment_rules() {
        assert_eq!(derive_fragment("foo", None), "foo");
        assert_eq!(derive_fragment("foo", Some("bar")), "bar");
        assert_eq!(derive_fragment("foo", Some("a/b/")), "a/b/foo");
        assert_eq!(derive_fragment("foo", Some("")), "foo");
        assert_eq!(derive_fragment("foo", Some("x/y")), "x/y");
    }

    #[test]
    fn test_derive_from_field() {
        let field = Field::new("city", Some("town"), FieldKind::Leaf);
        let path = Path::new("address").derive(&field);
        assert_eq!(segs(&path), vec!["address", "town"]);

        let nested = Field::new("foo", Some("a/b/"), FieldKind::Leaf);
        assert_eq!(segs(&Path::root().derive(&nested)), vec!["a", "b", "foo"]);
    }

    #[test]
    fn test_alias_on_prefix_annotation_makes_it_leaf_shaped() {
        // The alias hides the trailing separator, so the field name is not appended
        assert!(is_leaf("profile/~p"));
        assert_eq!(derive_fragment("name", Some("profile/~p")), "profile/~p");

        let field = Field::new("name", Some("profile/~p"), FieldKind::Leaf);
        let path = Path::root().derive(&field);
        assert_eq!(segs(&path), vec!["profile"]);
        assert_eq!(path.display_value(), "p");

        let plain = Field::new("name", Some("profile/"), FieldKind::Leaf);
        assert_eq!(segs(&Path::root().derive(&plain)), vec!["profile", "name"]);
    }
}
