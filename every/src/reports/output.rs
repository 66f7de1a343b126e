//! Output trait for rendering progress and reports.

/// Target output for reports.
///
/// Callers describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Render a progress banner announcing the next step.
    fn banner(&mut self, text: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Writes through `println!`, which flushes on every newline, so each line
/// reaches the terminal before the next child process starts writing.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn banner(&mut self, text: &str) {
        println!("======== {} ========", text);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }
}

/// Output that records rendered lines, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordedOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl RecordedOutput {
    /// All recorded lines joined with newlines.
    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for RecordedOutput {
    fn banner(&mut self, text: &str) {
        self.lines.push(format!("======== {} ========", text));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }
}
