//! Parse command implementation

use crate::{
    config::CliConfig,
    error::CliError,
    input::{resolve_patterns, FileReader},
    outcome::Grammar,
    output::OutputFormat,
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::Args;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Expressions to parse
    #[arg(value_name = "EXPR")]
    pub expressions: Vec<String>,

    /// Input files or patterns (supports glob), one expression per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: from config, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Grammar to parse with [default: from config, else digit]
    #[arg(short, long, value_enum)]
    pub grammar: Option<Grammar>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "DIGNUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting expression parsing");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let grammar = self.grammar.unwrap_or(config.parsing.default_grammar);
        let format = self.format.unwrap_or(config.output.default_format);
        log::debug!("Grammar: {:?}, format: {:?}", grammar, format);

        let expressions = self.collect_expressions()?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter = format.formatter(writer, config.output.pretty_json);

        let mut failed = 0;
        for expression in &expressions {
            let outcome = grammar.parse(expression);
            if !outcome.is_success() {
                failed += 1;
                log::debug!("Rejected {:?}: {}", expression, outcome.summary());
            }
            formatter.format_outcome(&outcome)?;
        }
        formatter.finish()?;

        log::info!(
            "Parsed {} expressions, {} failed",
            expressions.len(),
            failed
        );

        if failed > 0 {
            return Err(CliError::ParseFailures {
                failed,
                total: expressions.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Positional expressions first, then every line of every input file
    fn collect_expressions(&self) -> Result<Vec<String>> {
        if self.expressions.is_empty() && self.input.is_empty() {
            return Err(CliError::NoInput.into());
        }

        let mut expressions = self.expressions.clone();
        if self.input.is_empty() {
            return Ok(expressions);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} input files", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);
        for file in &files {
            let lines = FileReader::read_expressions(file)?;
            progress.file_completed(&file.display().to_string(), lines.len());
            expressions.extend(lines);
        }
        progress.finish();

        Ok(expressions)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running several commands in one process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(expressions: &[&str]) -> ParseArgs {
        ParseArgs {
            expressions: expressions.iter().map(|s| s.to_string()).collect(),
            input: vec![],
            output: None,
            format: None,
            grammar: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_no_input_is_an_error() {
        let err = args(&[]).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoInput)
        ));
    }

    #[test]
    fn test_writes_outcomes_to_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.txt");

        let mut parse = args(&["d#5#B3", "dig[15]B16"]);
        parse.output = Some(output.clone());
        parse.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("ok digit=5 base=3 value=2"));
        assert!(content.contains("ok digit=15 base=16 value=15"));
    }

    #[test]
    fn test_failures_are_reported_after_all_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.txt");

        let mut parse = args(&["1", "x", "3"]);
        parse.grammar = Some(Grammar::Number);
        parse.output = Some(output.clone());
        let err = parse.execute().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ParseFailures {
                failed: 1,
                total: 3
            })
        ));
        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_config_supplies_defaults_and_flags_override() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("dignum.toml");
        fs::write(
            &config,
            "[parsing]\ndefault_grammar = \"number\"\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
        )
        .unwrap();

        let output = temp_dir.path().join("out.json");
        let mut parse = args(&["  42  "]);
        parse.config = Some(config.clone());
        parse.output = Some(output.clone());
        parse.execute().unwrap();
        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("\"value\":42"));

        let mut parse = args(&["d#5#B3"]);
        parse.config = Some(config);
        parse.grammar = Some(Grammar::Digit);
        parse.format = Some(OutputFormat::Text);
        parse.output = Some(output.clone());
        parse.execute().unwrap();
        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("ok digit=5 base=3 value=2"));
    }

    #[test]
    fn test_reads_expressions_from_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "d#5#B3\n\n").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "dig [7] B 10\n").unwrap();
        let output = temp_dir.path().join("out.md");

        let mut parse = args(&["d#1#B2"]);
        parse.input = vec![temp_dir.path().join("*.txt").display().to_string()];
        parse.format = Some(OutputFormat::Markdown);
        parse.output = Some(output.clone());
        parse.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("| 1 | `d#1#B2` |"));
        assert!(content.contains("| 2 | `d#5#B3` |"));
        assert!(content.contains("| 3 | `dig [7] B 10` |"));
        assert!(content.contains("*Total expressions: 3, failed: 0*"));
    }
}
