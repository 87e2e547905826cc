//! Tic-tac-toe core - game engine and AI
//!
//! This crate provides the core game logic:
//! - Board model (immutable 3x3 grid, move application, rendering)
//! - Outcome detection and legal move generation
//! - Exhaustive minimax search for the optimal move
//! - Players, game runner and match play

pub mod board;
pub mod error;
pub mod game;
pub mod ai;
pub mod config;
pub mod runner;
pub mod utils;

// Re-exports for convenient access
pub use board::{advance_game, print_board, starting_board, Board, Cell, Move, Side, BOARD_SIZE};
pub use error::GameError;
pub use game::{legal_moves, score_game, Outcome};
pub use ai::{move_values, next_move, MinimaxAI, Player, RandomAI, WIN_VALUE};
pub use config::{MatchConfig, PlayerConfig, PlayerKind};
pub use runner::{play_match, GameRecord, GameRunner, MatchResult};
pub use utils::{are_all_the_same, random_pick};
