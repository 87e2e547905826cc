//! Play command - one game between two players

use anyhow::{Context, Result};
use clap::Args;

use tictactoe_core::{print_board, GameRecord, GameRunner, PlayerConfig, PlayerKind};

#[derive(Args)]
pub struct PlayArgs {
    /// Player for the first side (X)
    #[arg(long, default_value = "minimax")]
    pub first: PlayerKind,

    /// Player for the second side (O)
    #[arg(long, default_value = "minimax")]
    pub second: PlayerKind,

    /// Output the finished game as JSON instead of drawing boards
    #[arg(long)]
    pub json: bool,
}

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let (first, second) = player_configs(&args, seed);

    tracing::info!("Starting game: {} (X) vs {} (O)", args.first, args.second);

    let mut runner = GameRunner::from_config(&first, &second, 0);
    let played = if args.json {
        runner.play_game()
    } else {
        runner.play_game_with(|side, mv, board| {
            println!("\n{} plays {}", side, mv);
            print_board(board);
        })
    };
    let record = played.context("Game aborted")?;

    tracing::info!("Game over: {} after {} moves", record.outcome, record.moves.len());

    if args.json {
        print_json_record(&record)?;
    } else {
        println!("\nResult: {}", record.outcome);
    }

    Ok(())
}

/// Two sides get different seeds so random players do not mirror each other
fn player_configs(args: &PlayArgs, seed: Option<u64>) -> (PlayerConfig, PlayerConfig) {
    let mut first = PlayerConfig {
        kind: args.first,
        seed: None,
    };
    let mut second = PlayerConfig {
        kind: args.second,
        seed: None,
    };
    if let Some(s) = seed {
        first = first.with_seed(s);
        second = second.with_seed(s.wrapping_add(1));
    }
    (first, second)
}

fn print_json_record(record: &GameRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record).context("Failed to serialize game")?;
    println!("{}", json);
    Ok(())
}
