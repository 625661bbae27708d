//! Output formatting module

use crate::outcome::Outcome;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single parse outcome
    fn format_outcome(&mut self, outcome: &Outcome) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One outcome per line
    #[default]
    Text,
    /// JSON array of outcomes
    Json,
    /// Markdown table of outcomes
    Markdown,
}

impl OutputFormat {
    /// Every format, for listings
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// Build the formatter for this format around `writer`
    pub fn formatter<'w, W: Write + 'w>(
        self,
        writer: W,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter + 'w> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}
