//! Run report data structures.

use super::output::{Output, Report};

/// Report data from a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Number of combinations enumerated.
    pub total: u64,
    /// Number of commands actually executed.
    pub executed: u64,
    /// Whether commands were only printed.
    pub dry_run: bool,
}

impl Report for RunReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            out.preformatted(&format!(
                "{} command{} would be run",
                self.total,
                plural(self.total)
            ));
        } else {
            out.preformatted(&format!(
                "✓ {} feature combination{} passed",
                self.executed,
                plural(self.executed)
            ));
        }
    }
}

fn plural(count: u64) -> &'static str {
    if count == 1 { "" } else { "s" }
}
