//! Launching synthesized commands.

use std::{
    fmt, io,
    process::{Command, ExitStatus},
};

use cargo_every_core::CommandLine;

/// Outcome of one external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    code: Option<i32>,
}

impl CommandStatus {
    /// A status with the given exit code.
    #[cfg(test)]
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Exit code, or `None` if the process was killed by a signal.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for CommandStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => write!(f, "termination by signal"),
        }
    }
}

/// Runs one command to completion.
pub trait Executor {
    /// Execute `command`, blocking until it exits.
    fn execute(&mut self, command: &CommandLine) -> io::Result<CommandStatus>;
}

/// Executes commands as child processes sharing this process's stdio.
#[derive(Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for ProcessExecutor {
    fn execute(&mut self, command: &CommandLine) -> io::Result<CommandStatus> {
        tracing::debug!(program = command.program(), args = ?command.args(), "spawning");
        let status = Command::new(command.program())
            .args(command.args())
            .status()?;
        tracing::debug!(%status, "command finished");
        Ok(status.into())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use cargo_every_core::{CommandTemplate, FeatureSet};

    use super::*;

    fn command(tool: &str, subcommand: &str) -> CommandLine {
        let set = FeatureSet::default();
        let empty = set.combinations().next().unwrap();
        CommandTemplate::new(subcommand).tool(tool).synthesize(&empty)
    }

    #[test]
    fn test_success() {
        let status = ProcessExecutor::new()
            .execute(&command("true", "check"))
            .unwrap();
        assert!(status.success());
        assert_eq!(status.code(), Some(0));
    }

    #[test]
    fn test_failure_code() {
        let status = ProcessExecutor::new()
            .execute(&command("false", "check"))
            .unwrap();
        assert_eq!(status.code(), Some(1));
        assert!(!status.success());
    }

    #[test]
    fn test_missing_program() {
        let err = ProcessExecutor::new()
            .execute(&command("cargo-every-no-such-tool", "check"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_display() {
        assert_eq!(CommandStatus::from_code(2).to_string(), "exit status 2");
        assert_eq!(
            CommandStatus { code: None }.to_string(),
            "termination by signal"
        );
    }
}
