//! Game outcome and move generation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Move, Side, BOARD_SIZE};
use crate::utils::are_all_the_same;

/// The eight winning lines, in scan order: rows, columns, then both diagonals
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// State of a game as read off the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Draw,
    Win(Side),
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(side),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Win(side) => write!(f, "{} wins", side),
        }
    }
}

/// Every empty cell, row by row then column by column
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.cell(row, col).is_empty() {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves
}

/// Score a board.
///
/// The first completed line in [`LINES`] order decides the winner. Without one, a board
/// with no empty cell is a draw.
pub fn score_game(board: &Board) -> Outcome {
    for line in LINES {
        let cells = line.map(|(row, col)| board.cell(row, col));
        if let Cell::Mark(side) = cells[0] {
            if are_all_the_same(&cells) {
                return Outcome::Win(side);
            }
        }
    }

    if legal_moves(board).is_empty() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
