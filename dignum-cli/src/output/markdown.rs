//! Markdown output formatter

use super::OutputFormatter;
use crate::outcome::Outcome;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs outcomes as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    total: usize,
    failed: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            total: 0,
            failed: 0,
        }
    }
}

/// Escape characters that would break a table cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "\\n").replace('\r', "\\r")
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_outcome(&mut self, outcome: &Outcome) -> Result<()> {
        if self.total == 0 {
            writeln!(self.writer, "| # | Input | Grammar | Result |")?;
            writeln!(self.writer, "|---|-------|---------|--------|")?;
        }
        self.total += 1;
        if !outcome.is_success() {
            self.failed += 1;
        }
        writeln!(
            self.writer,
            "| {} | `{}` | {} | {} |",
            self.total,
            cell(&outcome.input),
            outcome.grammar.name(),
            cell(&outcome.summary())
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total expressions: {}, failed: {}*",
            self.total, self.failed
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
