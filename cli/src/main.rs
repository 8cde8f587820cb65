//! Subword CLI - Command-line interface for the subword BPE tokenizer.
//!
//! This is the main entry point for the `subword` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand};

#[derive(Parser)]
#[command(name = "subword")]
#[command(about = "A reproducible BPE subword tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode pre-tokenized words into subwords or token IDs
    Encode(EncodeCommand),
    /// Decode token IDs back to token strings
    Decode(DecodeCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
    }

    Ok(())
}
