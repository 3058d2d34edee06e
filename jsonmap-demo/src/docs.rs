//! Markdown documentation rendered from the example catalogue

use crate::catalogue::{Example, EXAMPLES};
use jsonmap::{FieldKind, FieldPath, Mapper, Result};
use serde_json::Value;

const README_INTRO: &str = "\
# jsonmap

Map JSON documents onto Rust structs by annotating fields with paths.

Each field is looked up under a path derived from its name and an optional
annotation. Nested structs extend the path for their own fields. Keys that are
missing from the document leave the field `None`; only malformed JSON is an
error.

```rust
use jsonmap::{mappable, Text};

mappable! {
    #[derive(Debug)]
    pub struct Person {
        pub name: Text => \"profile/\",
        pub email: Text => \"contact_email\",
    }
}

let person: Person = jsonmap::map(r#\"{\"profile\": {\"name\": \"Ada\"}}\"#)?;
jsonmap::print_object(&person)?;
```

<!-- Generated by `cargo xtask readme`; edit jsonmap-demo instead. -->

";

/// Render the documentation section for one example
pub fn render_example(example: &Example, mapper: &Mapper) -> Result<String> {
    let document: Value = serde_json::from_str(example.fixture)?;
    let pretty = serde_json::to_string_pretty(&document)?;
    let mapped = (example.render)(mapper, &document)?;
    let paths = (example.paths)(mapper)?;

    let mut out = String::new();
    out.push_str(&format!("## {}\n\n", example.title));
    out.push_str(&format!("{}\n\n", example.summary));
    out.push_str(&format!("Annotation: `{}`\n\n", example.annotation));
    out.push_str(&format!("Entity `{}`:\n\n", example.entity_name()));
    out.push_str(&paths_table(&paths));
    out.push_str(&format!("\nInput:\n\n```json\n{pretty}\n```\n\n"));
    out.push_str(&format!("Mapped:\n\n```text\n{mapped}```\n\n"));
    Ok(out)
}

/// Markdown table of field paths
pub fn paths_table(paths: &[FieldPath]) -> String {
    let mut out = String::from("| Field | Kind | Annotation | Path |\n|---|---|---|---|\n");
    for field in paths {
        let name = format!("{}{}", "&nbsp;&nbsp;".repeat(field.depth), field.name);
        let annotation = match field.annotation {
            Some(value) => format!("`\"{value}\"`"),
            None => "-".to_string(),
        };
        let path = match field.kind {
            FieldKind::Leaf => format!("`{}`", field.path),
            FieldKind::Nested => format!("`{}`", field.path.canonical()),
        };
        out.push_str(&format!(
            "| {name} | {} | {annotation} | {path} |\n",
            field.kind
        ));
    }
    out
}

/// Full README: introduction followed by every example
pub fn readme() -> Result<String> {
    readme_with(&Mapper::new())
}

/// Full README rendered with a configured mapper
pub fn readme_with(mapper: &Mapper) -> Result<String> {
    let mut out = String::from(README_INTRO);
    for example in EXAMPLES {
        out.push_str(&render_example(example, mapper)?);
    }
    Ok(out)
}
