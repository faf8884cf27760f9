//! Output sinks: where demo result lines are written.
//!
//! The demo never prints directly; it hands whole lines to an [`OutputSink`].
//! The binary uses [`StdoutSink`]; tests and embedding callers use
//! [`CaptureSink`] to observe output without a console.

use std::io::{self, Write};

/// A destination for complete output lines.
pub trait OutputSink {
    /// Writes `line` followed by a line terminator.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Writes lines to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        handle.flush()
    }
}

/// Records lines in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptureSink {
    lines: Vec<String>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Captured output joined the way a console would show it.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl OutputSink for CaptureSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
