mod commands;
mod exec;
mod ops;
mod reports;

use eyre::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Cli;

/// Log to stderr so the transcript on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "cargo_every=debug,cargo_every_manifest=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    cli.run()
}
