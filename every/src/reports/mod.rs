//! Report data structures and terminal rendering.
//!
//! The runner describes progress through the [`Output`] trait while it
//! works, then hands back a report that renders the final summary.

mod output;
mod run;

#[cfg(test)]
pub use output::RecordedOutput;
pub use output::{Output, Report, TerminalOutput};
pub use run::RunReport;
