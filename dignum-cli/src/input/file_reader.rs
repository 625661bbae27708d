//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader yielding one expression per line
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read the expressions in a file: every line that is not blank-only,
    /// kept verbatim apart from its line terminator.
    pub fn read_expressions(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        let expressions: Vec<String> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        log::debug!(
            "Read {} expressions from {}",
            expressions.len(),
            path.display()
        );
        Ok(expressions)
    }
}
