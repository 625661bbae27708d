//! List command implementation

use super::ListCommands;
use crate::{outcome::Grammar, output::OutputFormat};
use anyhow::Result;
use dignum_core::{error_to_string, ErrorCode};
use std::io::Write;

/// Write the requested listing to `writer`
pub fn execute(subcommand: &ListCommands, writer: &mut dyn Write) -> Result<()> {
    match subcommand {
        ListCommands::Errors => {
            for code in ErrorCode::ALL {
                writeln!(writer, "{:<24} {}", error_to_string(code), code)?;
            }
        }
        ListCommands::Grammars => {
            for grammar in Grammar::ALL {
                writeln!(writer, "{:<8} {}", grammar.name(), grammar.description())?;
            }
        }
        ListCommands::Formats => {
            for format in OutputFormat::ALL {
                writeln!(writer, "{}", format.name())?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
