//! Plain-text report writer.

use std::fmt::Write;

/// Buffered line writer for report output.
pub struct ReportWriter {
    buffer: String,
}

impl ReportWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Take the generated report.
    pub fn take_output(self) -> String {
        self.buffer
    }

    /// Write one line.
    pub fn line(&mut self, content: impl AsRef<str>) {
        writeln!(self.buffer, "{}", content.as_ref()).unwrap();
    }

    /// Write a blank line.
    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Write a top-level heading between heavy rules.
    pub fn heading(&mut self, title: &str) {
        let rule = "=".repeat(50);
        self.line(&rule);
        self.line(title);
        self.line(&rule);
    }

    /// Write a section title over a light rule.
    pub fn section(&mut self, title: &str) {
        self.line(title);
        self.line("-".repeat(50));
    }

    /// Write a `label: value` line with aligned values.
    pub fn field(&mut self, label: &str, value: impl std::fmt::Display) {
        writeln!(self.buffer, "{:<22} {}", format!("{label}:"), value).unwrap();
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_field() {
        let mut w = ReportWriter::new();
        w.heading("RESULTS");
        w.field("Total Rods Used", 3);

        let out = w.take_output();
        assert!(out.contains("RESULTS"));
        assert!(out.contains("Total Rods Used:"));
        assert!(out.contains('3'));
    }
}
