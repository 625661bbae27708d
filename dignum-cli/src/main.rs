//! Command-line entry point for dignum

use anyhow::Result;
use clap::Parser;
use dignum_cli::commands::Commands;

/// Parse unsigned decimals and digit-in-base expressions such as `d#5#B3`
#[derive(Debug, Parser)]
#[command(name = "dignum", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
