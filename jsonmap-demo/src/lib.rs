//! jsonmap Demo Entities
//!
//! This crate provides demonstration entities for each annotation form, the
//! JSON fixtures they are mapped from, and the markdown documentation that
//! `cargo xtask readme` publishes as the repository README.

pub mod catalogue;
pub mod docs;
pub mod entities;

pub use catalogue::{find, Example, EXAMPLES};
pub use docs::{readme, readme_with, render_example};
