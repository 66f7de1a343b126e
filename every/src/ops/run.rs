//! Run operation - execute a command once per feature combination.

use std::io;

use cargo_every_core::{CommandTemplate, FeatureSet};
use miette::Diagnostic;
use thiserror::Error;

use crate::{
    exec::{CommandStatus, Executor},
    reports::{Output, RunReport},
};

/// Options for the run operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print every banner and command line without executing anything.
    pub dry_run: bool,
}

/// Errors that abort a run. None of them are retried.
#[derive(Debug, Error, Diagnostic)]
pub enum RunError {
    #[error("combination {index}/{total} failed: `{command}` exited with {status}")]
    #[diagnostic(
        code(every::command_failed),
        help("the banner above shows the feature set that broke; rerun the command to reproduce")
    )]
    CommandFailed {
        index: u64,
        total: u64,
        command: String,
        status: CommandStatus,
    },

    #[error("failed to launch `{command}`")]
    #[diagnostic(code(every::launch_failed))]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{count} features yield more combinations than can be enumerated")]
    #[diagnostic(
        code(every::too_many_features),
        help("at most 63 features are supported")
    )]
    TooManyFeatures { count: usize },
}

/// Drives one command per combination through an [`Executor`].
///
/// Combinations run strictly one after another. Each command exits before
/// the next one is synthesized.
pub struct Runner<E> {
    template: CommandTemplate,
    executor: E,
}

impl<E: Executor> Runner<E> {
    /// Create a runner for the given command template.
    pub fn new(template: CommandTemplate, executor: E) -> Self {
        Self { template, executor }
    }

    /// Run every combination of `features`, stopping at the first failure.
    ///
    /// A banner and the exact command line are written to `out` before each
    /// command starts.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::CommandFailed`] for the first command that exits
    /// non-zero, [`RunError::Launch`] if a command cannot be started, and
    /// [`RunError::TooManyFeatures`] before anything runs if `2^N` overflows.
    pub fn run(
        &mut self,
        features: &FeatureSet,
        out: &mut dyn Output,
        opts: RunOptions,
    ) -> Result<RunReport, RunError> {
        let total = features
            .combination_count()
            .ok_or(RunError::TooManyFeatures {
                count: features.len(),
            })?;

        if features.is_empty() {
            out.warning("no features declared; running a single combination");
        }

        let mut executed = 0;
        for (index, combination) in (1u64..).zip(features.combinations()) {
            let command = self.template.synthesize(&combination);
            out.banner(&format!(
                "({}/{}) Running with features {}",
                index, total, combination
            ));
            out.preformatted(&command.to_string());

            if opts.dry_run {
                continue;
            }

            let status = self
                .executor
                .execute(&command)
                .map_err(|source| RunError::Launch {
                    command: command.to_string(),
                    source,
                })?;
            executed += 1;

            if !status.success() {
                tracing::debug!(index, code = ?status.code(), "aborting run");
                return Err(RunError::CommandFailed {
                    index,
                    total,
                    command: command.to_string(),
                    status,
                });
            }
        }

        Ok(RunReport {
            total,
            executed,
            dry_run: opts.dry_run,
        })
    }

    #[cfg(test)]
    fn into_executor(self) -> E {
        self.executor
    }
}
