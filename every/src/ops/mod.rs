//! Core operations.
//!
//! This module contains the business logic of the driver,
//! separated from CLI argument parsing and output rendering.

pub mod run;

pub use run::{RunError, RunOptions, Runner};
