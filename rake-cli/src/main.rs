//! Command-line entry point for RAKE keyword extraction

use clap::Parser;
use rake_cli::commands::Commands;

/// RAKE keyword extraction from plain text
#[derive(Debug, Parser)]
#[command(name = "rake", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
