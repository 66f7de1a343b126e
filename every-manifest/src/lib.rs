//! Feature extraction from `Cargo.toml`.
//!
//! Only the `[features]` table is read. Every other part of the manifest
//! is ignored, but the file as a whole must still be valid TOML.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod parse;
mod source;

pub use error::{Error, Result, SourceContext};
pub use file::CargoToml;
pub use parse::parse_features;
pub use source::FeatureSource;

/// Manifest file name looked up when no path is given.
pub const MANIFEST_FILE: &str = "Cargo.toml";
