//! JSON output formatter

use super::OutputFormatter;
use crate::outcome::Outcome;
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs outcomes as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    outcomes: Vec<Outcome>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            outcomes: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_outcome(&mut self, outcome: &Outcome) -> Result<()> {
        self.outcomes.push(outcome.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.outcomes)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.outcomes)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
