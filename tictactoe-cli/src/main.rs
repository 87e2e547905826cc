//! Tic-tac-toe CLI - command-line driver for the engine
//!
//! Commands:
//! - play: Play a single game and show the board after every move
//! - match: Play a series of games and report the score

mod match_cmd;
mod play_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use match_cmd::MatchArgs;
use play_cmd::PlayArgs;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe engine with exhaustive minimax search")]
struct Cli {
    /// Random seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(PlayArgs),
    /// Play a series of games between two players
    Match(MatchArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs on stderr, command output on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
    }
}
