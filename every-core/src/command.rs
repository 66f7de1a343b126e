//! Command synthesis for a single combination.

use std::fmt;

use crate::Combination;

/// Base tool used when none is configured.
pub const DEFAULT_TOOL: &str = "cargo";

/// The parts of the command line that stay fixed across combinations.
///
/// # Example
///
/// ```
/// use cargo_every_core::{CommandTemplate, FeatureSet};
///
/// let features = FeatureSet::new(["x"]);
/// let template = CommandTemplate::new("test").trailing_args(["--release"]);
/// let full = features.combinations().last().unwrap();
///
/// assert_eq!(
///     template.synthesize(&full).to_string(),
///     "cargo test --no-default-features --features=x --release"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    tool: String,
    subcommand: String,
    trailing_args: Vec<String>,
}

impl CommandTemplate {
    /// Create a template running `cargo <subcommand>`.
    pub fn new(subcommand: impl Into<String>) -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            subcommand: subcommand.into(),
            trailing_args: Vec::new(),
        }
    }

    /// Replace the base tool.
    pub fn tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Arguments appended verbatim after the feature flags.
    pub fn trailing_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trailing_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Build the command line for one combination.
    ///
    /// The features flag is always emitted, with an empty value for the
    /// empty combination.
    pub fn synthesize(&self, combination: &Combination<'_>) -> CommandLine {
        let mut args = Vec::with_capacity(self.trailing_args.len() + 3);
        args.push(self.subcommand.clone());
        args.push("--no-default-features".to_string());
        args.push(format!("--features={}", combination.to_flag_value()));
        args.extend(self.trailing_args.iter().cloned());

        CommandLine {
            program: self.tool.clone(),
            args,
        }
    }
}

/// A fully synthesized command: a program and its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Program to launch.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FeatureSet;

    #[test]
    fn test_empty_combination_keeps_features_flag() {
        let set = FeatureSet::new(["alpha", "beta"]);
        let empty = set.combinations().next().unwrap();
        let line = CommandTemplate::new("check").synthesize(&empty);

        assert_eq!(line.program(), "cargo");
        assert_eq!(
            line.args(),
            ["check", "--no-default-features", "--features="]
        );
        insta::assert_snapshot!(line, @"cargo check --no-default-features --features=");
    }

    #[test]
    fn test_features_are_comma_joined() {
        let set = FeatureSet::new(["beta", "alpha"]);
        let full = set.combinations().last().unwrap();
        let line = CommandTemplate::new("check").synthesize(&full);

        insta::assert_snapshot!(line, @"cargo check --no-default-features --features=alpha,beta");
    }

    #[test]
    fn test_trailing_args_verbatim() {
        let set = FeatureSet::new(["x"]);
        let x = set.combinations().nth(1).unwrap();
        let line = CommandTemplate::new("test")
            .trailing_args(["--release", "--", "--nocapture"])
            .synthesize(&x);

        assert_eq!(
            line.args(),
            [
                "test",
                "--no-default-features",
                "--features=x",
                "--release",
                "--",
                "--nocapture"
            ]
        );
        insta::assert_snapshot!(line, @"cargo test --no-default-features --features=x --release -- --nocapture");
    }

    #[test]
    fn test_custom_tool() {
        let set = FeatureSet::default();
        let empty = set.combinations().next().unwrap();
        let line = CommandTemplate::new("clippy")
            .tool("cross")
            .synthesize(&empty);

        assert_eq!(line.program(), "cross");
        assert_eq!(line.to_string(), "cross clippy --no-default-features --features=");
    }
}
