//! Match command - play a series of games between two players
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), run_match(), report_results()
//! - Level 3: create_progress()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use tictactoe_core::{play_match, MatchConfig, MatchResult, PlayerConfig, PlayerKind};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Match config JSON file (overrides the player flags)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Player that starts game one
    #[arg(long, default_value = "minimax")]
    pub first: PlayerKind,

    /// Player that answers in game one
    #[arg(long, default_value = "random")]
    pub second: PlayerKind,

    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Keep the same player on X for every game
    #[arg(long)]
    pub fixed_sides: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// 1. Build the match configuration
/// 2. Play every game
/// 3. Report results
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    let config = build_config(&args, seed)?;

    tracing::info!(
        "Starting match: {} vs {} ({} games, alternate sides: {})",
        config.first.kind,
        config.second.kind,
        config.games,
        config.alternate_sides
    );

    let results = run_match(&config)?;

    tracing::info!(
        "Match finished: {} - {} with {} draws",
        results.first_wins,
        results.second_wins,
        results.draws
    );

    report_results(&results, &config, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load config from file, or assemble it from flags
fn build_config(args: &MatchArgs, seed: Option<u64>) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => {
            let config = MatchConfig::new(
                PlayerConfig {
                    kind: args.first,
                    seed: None,
                },
                PlayerConfig {
                    kind: args.second,
                    seed: None,
                },
                args.games,
            );
            if args.fixed_sides {
                config.fixed_sides()
            } else {
                config
            }
        }
    };

    // A command-line seed wins over seeds in the file
    if let Some(s) = seed {
        config.first = config.first.with_seed(s);
        config.second = config.second.with_seed(s.wrapping_add(1_000_000));
    }

    Ok(config)
}

/// Play all games, ticking a progress bar
fn run_match(config: &MatchConfig) -> Result<MatchResult> {
    let pb = create_progress(config.games as u64)?;

    let results = play_match(config, |game_index, game| {
        tracing::debug!(
            "Game {}: {} in {} moves",
            game_index + 1,
            game.outcome,
            game.moves.len()
        );
        pb.inc(1);
    })
    .context("Match aborted")?;

    pb.finish_and_clear();
    Ok(results)
}

fn report_results(results: &MatchResult, config: &MatchConfig, json: bool) -> Result<()> {
    if json {
        print_json_results(results, config)
    } else {
        print_text_results(results, config);
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn create_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")
            .context("Invalid progress bar template")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn percent(count: u32, total: u32) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResult, config: &MatchConfig) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        first_player: String,
        second_player: String,
        total_games: u32,
        first_wins: u32,
        second_wins: u32,
        draws: u32,
        first_win_rate: f32,
        second_win_rate: f32,
        draw_rate: f32,
        games: &'a [tictactoe_core::GameRecord],
    }

    let output = JsonOutput {
        first_player: config.first.kind.to_string(),
        second_player: config.second.kind.to_string(),
        total_games: results.games_played,
        first_wins: results.first_wins,
        second_wins: results.second_wins,
        draws: results.draws,
        first_win_rate: results.first_win_rate(),
        second_win_rate: results.second_win_rate(),
        draw_rate: results.draw_rate(),
        games: &results.games,
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

/// Print results as text
fn print_text_results(results: &MatchResult, config: &MatchConfig) {
    let total = results.games_played;

    println!("\n=== Match Results ===");
    println!("Total games: {}", total);
    println!(
        "{:<8} wins: {} ({:.1}%)",
        config.first.kind,
        results.first_wins,
        percent(results.first_wins, total)
    );
    println!(
        "{:<8} wins: {} ({:.1}%)",
        config.second.kind,
        results.second_wins,
        percent(results.second_wins, total)
    );
    println!(
        "Draws:         {} ({:.1}%)",
        results.draws,
        percent(results.draws, total)
    );

    println!("\nGame details:");
    for (i, game) in results.games.iter().enumerate() {
        println!("  Game {}: {} in {} moves", i + 1, game.outcome, game.moves.len());
    }
}

// ============================================================================
// TESTS
// ============================================================================
