//! Indented rendering of mapped objects
//!
//! ```text
//! name: Ada
//! address
//!   city: London
//!   street: null
//! ```

use crate::error::Result;
use crate::mappable::{FieldInspector, Mappable};
use jsonmap_core::Field;
use std::io::Write;

const INDENT: usize = 2;
const ABSENT: &str = "null";

/// Write the rendering of `object` to `out`
pub fn write_object<W: Write, T: Mappable>(out: &mut W, object: &T) -> Result<()> {
    let mut printer = Printer { out, indent: 0 };
    object.visit(&mut printer)
}

/// Render `object` to a string
pub fn render<T: Mappable>(object: &T) -> Result<String> {
    let mut buffer = Vec::new();
    write_object(&mut buffer, object)?;
    // Field names and values come from &str, so the buffer is valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Print `object` to standard output
pub fn print_object<T: Mappable>(object: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_object(&mut lock, object)?;
    lock.flush()?;
    Ok(())
}

struct Printer<'a, W> {
    out: &'a mut W,
    indent: usize,
}

impl<W: Write> FieldInspector for Printer<'_, W> {
    fn leaf(&mut self, field: &Field, value: Option<&str>) -> Result<()> {
        writeln!(
            self.out,
            "{:indent$}{}: {}",
            "",
            field.name,
            value.unwrap_or(ABSENT),
            indent = self.indent
        )?;
        Ok(())
    }

    fn nested<T: Mappable>(&mut self, field: &Field, value: &T) -> Result<()> {
        writeln!(self.out, "{:indent$}{}", "", field.name, indent = self.indent)?;
        self.indent += INDENT;
        let result = value.visit(self);
        self.indent -= INDENT;
        result
    }
}
