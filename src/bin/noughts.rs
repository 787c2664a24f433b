//! noughts CLI - query the exact tic-tac-toe solver
//!
//! - `best`: optimal move, value and search statistics for a board
//! - `play`: optimal self-play from a board
//! - `analyze`: solve every reachable board

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{commands, config::CommonConfig, init_tracing};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Exact minimax solver for tic-tac-toe", long_about = None)]
struct Cli {
    /// Log search details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move for a board
    Best(commands::best::BestArgs),

    /// Play a board out with optimal moves for both sides
    Play(commands::play::PlayArgs),

    /// Solve every reachable board
    Analyze(commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let common = CommonConfig::new(cli.verbose, cli.json);
    init_tracing(common.verbose);

    match cli.command {
        Commands::Best(args) => commands::best::execute(args, common),
        Commands::Play(args) => commands::play::execute(args, common),
        Commands::Analyze(args) => commands::analyze::execute(args, common),
    }
}
