//! t4 CLI - console tic-tac-toe with pluggable strategies

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "t4")]
#[command(version, about = "A tiny tic tac toe program", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against a strategy (or yourself)
    Play(t4::cli::commands::play::PlayArgs),

    /// Pit two strategies against each other over many games
    Sim(t4::cli::commands::sim::SimArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => t4::cli::commands::play::execute(args),
        Commands::Sim(args) => t4::cli::commands::sim::execute(args),
    }
}
