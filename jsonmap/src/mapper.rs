//! Recursive, annotation-directed mapping

use crate::error::Result;
use crate::mappable::{FieldInspector, FieldVisitor, Mappable, Text};
use crate::reader::read_document;
use crate::resolve::{resolve, type_name, Resolved};
use jsonmap_core::{Field, FieldKind, Limits, Path};
use serde_json::Value;
use std::io::Read;
use tracing::{debug, trace};

/// Maps JSON documents onto [`Mappable`] types
///
/// A `Mapper` only carries its [`Limits`]; every call parses and walks its own
/// document, so one mapper can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    limits: Limits,
}

/// Derived path of one field, as reported by [`Mapper::paths`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    /// Field name
    pub name: &'static str,
    /// Annotation the path was derived from
    pub annotation: Option<&'static str>,
    /// Leaf or nested
    pub kind: FieldKind,
    /// Nesting level, 0 for fields of the root type
    pub depth: usize,
    /// Composed path
    pub path: Path,
}

impl Mapper {
    /// Create a mapper with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with custom limits
    pub fn with_limits(limits: Limits) -> Result<Self> {
        limits.validate()?;
        Ok(Self { limits })
    }

    /// Configured limits
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Parse `json` and map it onto a new `T`
    ///
    /// Malformed JSON is an error. Fields whose path does not resolve are
    /// left `None`.
    pub fn map<T: Mappable>(&self, json: &str) -> Result<T> {
        let document: Value = serde_json::from_str(json)?;
        self.map_value(&document)
    }

    /// Map an already parsed document onto a new `T`
    pub fn map_value<T: Mappable>(&self, document: &Value) -> Result<T> {
        self.map_at(document, Path::root(), 0)
    }

    /// Parse a document from `reader` (bounded by `max_input_bytes`) and map it
    pub fn map_reader<T: Mappable, R: Read>(&self, reader: R) -> Result<T> {
        let document = read_document(reader, self.limits.max_input_bytes)?;
        self.map_value(&document)
    }

    /// Derived path of every field of `T`, depth-first in declaration order
    pub fn paths<T: Mappable>(&self) -> Result<Vec<FieldPath>> {
        let mut collector = PathCollector {
            base: Path::root(),
            depth: 0,
            limits: &self.limits,
            paths: Vec::new(),
        };
        T::default().visit(&mut collector)?;
        Ok(collector.paths)
    }

    fn map_at<T: Mappable>(&self, document: &Value, base: Path, depth: usize) -> Result<T> {
        self.limits.check_depth(depth, base.canonical())?;
        debug!(
            target_type = T::type_name(),
            fields = T::fields().len(),
            base = base.canonical(),
            depth,
            "mapping struct"
        );

        let mut instance = T::default();
        let mut visitor = MapVisitor {
            mapper: self,
            document,
            base,
            depth,
        };
        instance.visit_mut(&mut visitor)?;
        Ok(instance)
    }
}

/// Assigns each field of one struct level
struct MapVisitor<'a> {
    mapper: &'a Mapper,
    document: &'a Value,
    base: Path,
    depth: usize,
}

impl FieldVisitor for MapVisitor<'_> {
    fn leaf(&mut self, field: &Field, slot: &mut Text) -> Result<()> {
        let path = self.base.derive(field);
        let resolved = resolve(self.document, &path);
        match resolved {
            Resolved::Found(value) => trace!(
                field = field.name,
                path = %path,
                found_type = type_name(value),
                "resolved field"
            ),
            Resolved::Absent => trace!(field = field.name, path = %path, "field absent"),
        }
        *slot = resolved.into_text();
        Ok(())
    }

    fn nested<T: Mappable>(&mut self, field: &Field, slot: &mut T) -> Result<()> {
        let path = self.base.derive(field);
        trace!(field = field.name, path = %path, "descending");
        *slot = self.mapper.map_at(self.document, path, self.depth + 1)?;
        Ok(())
    }
}

/// Records derived paths without a document
struct PathCollector<'a> {
    base: Path,
    depth: usize,
    limits: &'a Limits,
    paths: Vec<FieldPath>,
}

impl PathCollector<'_> {
    fn record(&mut self, field: &Field) -> Path {
        let path = self.base.derive(field);
        self.paths.push(FieldPath {
            name: field.name,
            annotation: field.annotation,
            kind: field.kind,
            depth: self.depth,
            path: path.clone(),
        });
        path
    }
}

impl FieldInspector for PathCollector<'_> {
    fn leaf(&mut self, field: &Field, _value: Option<&str>) -> Result<()> {
        self.record(field);
        Ok(())
    }

    fn nested<T: Mappable>(&mut self, field: &Field, value: &T) -> Result<()> {
        let path = self.record(field);
        self.limits.check_depth(self.depth + 1, path.canonical())?;

        let base = std::mem::replace(&mut self.base, path);
        self.depth += 1;
        let result = value.visit(self);
        self.depth -= 1;
        self.base = base;
        result
    }
}
