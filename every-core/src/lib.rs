//! Core types for cargo-every.
//!
//! This crate knows nothing about files or processes. It turns a list of
//! feature names into every combination of them and describes the command
//! line to run for each one.

mod combination;
mod command;
mod feature_set;

pub use combination::{Combination, PowerSet};
pub use command::{CommandLine, CommandTemplate, DEFAULT_TOOL};
pub use feature_set::{DEFAULT_FEATURE, FeatureSet};
