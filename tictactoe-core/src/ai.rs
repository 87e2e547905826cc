//! Exhaustive minimax search and move-choosing players

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Move, Side};
use crate::error::GameError;
use crate::game::{legal_moves, score_game, Outcome};
use crate::utils::random_pick;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Value of a win found at depth 0; every ply deeper costs one point
pub const WIN_VALUE: i32 = 100;

// ============================================================================
// PLAYERS
// ============================================================================

/// Anything that can pick a move for a side
pub trait Player {
    fn name(&self) -> &str;

    fn choose_move(&mut self, side: Side, board: &Board) -> Result<Move, GameError>;
}

/// Perfect player backed by [`next_move`]
#[derive(Clone, Debug, Default)]
pub struct MinimaxAI;

impl MinimaxAI {
    pub fn new() -> Self {
        Self
    }
}

impl Player for MinimaxAI {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, side: Side, board: &Board) -> Result<Move, GameError> {
        next_move(side, board)
    }
}

/// Picks uniformly among the legal moves
pub struct RandomAI {
    rng: ChaCha8Rng,
}

impl RandomAI {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAI {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomAI {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, _side: Side, board: &Board) -> Result<Move, GameError> {
        let moves = legal_moves(board);
        random_pick(&moves, &mut self.rng)
            .copied()
            .ok_or(GameError::NoLegalMove)
    }
}

// ============================================================================
// MINIMAX
// ============================================================================

/// Value of `board` for `perspective`, searching the whole remaining tree.
///
/// `maximizing` is true when `perspective` is the side to move.
fn minimax(board: &Board, maximizing: bool, perspective: Side, depth: i32) -> i32 {
    match score_game(board) {
        Outcome::Draw => return depth,
        Outcome::Win(side) if side == perspective => return WIN_VALUE - depth,
        Outcome::Win(_) => return -WIN_VALUE + depth,
        Outcome::InProgress => {}
    }

    let mover = if maximizing {
        perspective
    } else {
        perspective.opponent()
    };

    let values = legal_moves(board).into_iter().map(|mv| {
        minimax(
            &board.with_mark(mover, mv),
            !maximizing,
            perspective,
            depth + 1,
        )
    });

    let best = if maximizing { values.max() } else { values.min() };
    // An in-progress board always has a legal move
    best.unwrap_or(depth)
}

/// Minimax value of playing `mv` for `side`, one ply into the tree
fn root_value(side: Side, board: &Board, mv: Move) -> i32 {
    minimax(&board.with_mark(side, mv), false, side, 1)
}

#[cfg(not(feature = "parallel"))]
fn root_values(side: Side, board: &Board, moves: &[Move]) -> Vec<i32> {
    moves
        .iter()
        .map(|&mv| root_value(side, board, mv))
        .collect()
}

/// One subtree per worker. `collect` keeps row-major order for the tie-break.
#[cfg(feature = "parallel")]
fn root_values(side: Side, board: &Board, moves: &[Move]) -> Vec<i32> {
    use rayon::prelude::*;

    moves
        .par_iter()
        .map(|&mv| root_value(side, board, mv))
        .collect()
}

/// Minimax value of every legal move for `side`, in row-major order
pub fn move_values(side: Side, board: &Board) -> Vec<(Move, i32)> {
    let moves = legal_moves(board);
    let values = root_values(side, board, &moves);
    moves.into_iter().zip(values).collect()
}

/// Best move for `side`.
///
/// Ties go to the first move in row-major order. Fails with
/// [`GameError::NoLegalMove`] on a full board.
pub fn next_move(side: Side, board: &Board) -> Result<Move, GameError> {
    let mut best: Option<(Move, i32)> = None;

    for (mv, value) in move_values(side, board) {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((mv, value)),
        }
    }

    best.map(|(mv, _)| mv).ok_or(GameError::NoLegalMove)
}

// ============================================================================
// TESTS
// ============================================================================
