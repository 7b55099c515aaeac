//! keyflow command-line driver

use anyhow::Result;
use clap::{Parser, Subcommand};
use keyflow_cli::commands::{SentencesArgs, TypeArgs};

/// Simulate keyflow typing sessions and inspect sentence boundaries
#[derive(Debug, Parser)]
#[command(name = "keyflow", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Type text through the gesture resolver into an in-memory buffer
    Type(TypeArgs),
    /// Analyze sentence boundaries in a before-cursor context
    Sentences(SentencesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Type(args) => args.execute(),
        Command::Sentences(args) => args.execute(),
    }
}
