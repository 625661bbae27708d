//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod list;
pub mod parse;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse expressions given as arguments or read from files
    Parse(parse::ParseArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Print the default configuration as TOML
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List every error code with its description
    Errors,

    /// List available grammars
    Grammars,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Parse(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand, &mut std::io::stdout()),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Grammar;

    #[test]
    fn test_commands_debug_format() {
        let parse_cmd = Commands::Parse(parse::ParseArgs {
            expressions: vec!["d#5#B3".to_string()],
            input: vec![],
            output: None,
            format: None,
            grammar: Some(Grammar::Digit),
            config: None,
            quiet: true,
            verbose: 0,
        });

        let debug_str = format!("{:?}", parse_cmd);
        assert!(debug_str.contains("Parse"));
        assert!(debug_str.contains("d#5#B3"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Errors,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Errors"));
    }

    #[test]
    fn test_list_commands_execute() {
        for subcommand in [
            ListCommands::Errors,
            ListCommands::Grammars,
            ListCommands::Formats,
        ] {
            let mut buffer = Vec::new();
            list::execute(&subcommand, &mut buffer).unwrap();
            assert!(!buffer.is_empty());
        }
    }
}
