use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
};

use cargo_every_core::{CommandTemplate, DEFAULT_TOOL};
use cargo_every_manifest::{FeatureSource, MANIFEST_FILE};
use clap::{CommandFactory, Parser};
use eyre::Result;

use crate::{
    exec::ProcessExecutor,
    ops::{RunError, RunOptions, Runner},
    reports::{Report, TerminalOutput},
};

/// Extension trait for exiting on manifest and run errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cargo_every_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, RunError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cargo-every", bin_name = "cargo every")]
#[command(version)]
#[command(about = "Run a cargo command on every combination of features (e.g. `check`)")]
pub(crate) struct Cli {
    /// Cargo subcommand to run
    pub command: String,

    /// Additional arguments appended to every command, verbatim.
    /// Options for cargo-every itself must come before <COMMAND>.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub trailing_args: Vec<String>,

    /// Alternative path to Cargo.toml (defaults to ./Cargo.toml)
    #[arg(long, default_value = MANIFEST_FILE)]
    pub manifest_file: PathBuf,

    /// Program to run instead of cargo
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// Print every command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Log what the driver is doing to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments, accepting both `cargo-every` and `cargo every`.
    pub fn parse_args() -> Self {
        Self::parse_from(split_at_command(strip_cargo_subcommand(
            std::env::args_os(),
        )))
    }

    pub fn run(&self) -> Result<()> {
        let features = self.manifest_file.as_path().features().unwrap_or_exit();

        let template = CommandTemplate::new(&self.command)
            .tool(&self.tool)
            .trailing_args(&self.trailing_args);
        let mut runner = Runner::new(template, ProcessExecutor::new());

        let mut out = TerminalOutput::new();
        let report = runner
            .run(
                &features,
                &mut out,
                RunOptions {
                    dry_run: self.dry_run,
                },
            )
            .unwrap_or_exit();

        report.render(&mut out);
        Ok(())
    }
}

/// Drop the `every` argument cargo inserts when running `cargo every`.
fn strip_cargo_subcommand(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args: Vec<OsString> = args.into_iter().collect();
    if args.get(1).is_some_and(|arg| arg == "every") {
        args.remove(1);
    }
    args
}

/// Insert `--` right after the command so that everything following it is
/// trailing, even arguments that look like options of this driver.
///
/// Options before the command are left for clap. Options that take a
/// separate value (`--manifest-file <path>`) skip that value.
fn split_at_command(args: Vec<OsString>) -> Vec<OsString> {
    let cli = Cli::command();
    let takes_value = |arg: &OsStr| {
        let Some(arg) = arg.to_str() else {
            return false;
        };
        cli.get_arguments()
            .filter(|a| !a.is_positional() && a.get_action().takes_values())
            .any(|a| {
                a.get_long().is_some_and(|long| arg == format!("--{long}"))
                    || a.get_short().is_some_and(|short| arg == format!("-{short}"))
            })
    };

    let mut args = args.into_iter();
    let mut split: Vec<OsString> = args.next().into_iter().collect();
    while let Some(arg) = args.next() {
        if arg == "--" {
            split.push(arg);
            break;
        }

        let is_option = arg.to_str().is_some_and(|a| a.starts_with('-') && a != "-");
        if is_option {
            let value = takes_value(arg.as_os_str()).then(|| args.next()).flatten();
            split.push(arg);
            split.extend(value);
            continue;
        }

        split.push(arg);
        split.push(OsString::from("--"));
        break;
    }
    split.extend(args);
    split
}
