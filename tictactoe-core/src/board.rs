//! Board model: sides, cells, moves and the 3x3 grid

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Board width and height
pub const BOARD_SIZE: usize = 3;

/// Frame used when rendering a board
const TOP_BORDER: &str = "╔═══╤═══╤═══╗";
const ROW_SEPARATOR: &str = "╟───┼───┼───╢";
const BOTTOM_BORDER: &str = "╚═══╧═══╧═══╝";

// ============================================================================
// CORE TYPES
// ============================================================================

/// One of the two players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Moves first, marked `X`
    First,
    /// Moves second, marked `O`
    Second,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single square
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Side),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Character shown for this cell when rendering
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Mark(side) => side.symbol(),
        }
    }

    /// Inverse of [`Cell::symbol`], also accepting `.` and lowercase marks
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Mark(Side::First)),
            'O' | 'o' => Some(Cell::Mark(Side::Second)),
            _ => None,
        }
    }
}

/// A (row, column) coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if both coordinates fall inside the grid
    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Row-major 3x3 grid. Boards are plain values: applying a move yields a new board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit rows
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Cell at (row, col). Panics when the coordinates are off the board.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Cell under a move, `None` when off the board
    pub fn get(&self, mv: Move) -> Option<Cell> {
        if mv.is_on_board() {
            Some(self.cells[mv.row][mv.col])
        } else {
            None
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Return a copy of this board with `side` marked at `mv`
    pub fn advance(&self, side: Side, mv: Move) -> Result<Board, GameError> {
        match self.get(mv) {
            None => Err(GameError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            }),
            Some(Cell::Mark(_)) => Err(GameError::CellOccupied {
                row: mv.row,
                col: mv.col,
            }),
            Some(Cell::Empty) => Ok(self.with_mark(side, mv)),
        }
    }

    /// Copy with a mark placed, for moves already known to be legal
    pub(crate) fn with_mark(&self, side: Side, mv: Move) -> Board {
        let mut next = *self;
        next.cells[mv.row][mv.col] = Cell::Mark(side);
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TOP_BORDER)?;
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "{}", ROW_SEPARATOR)?;
            }
            writeln!(
                f,
                "║ {} | {} | {} ║",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        write!(f, "{}", BOTTOM_BORDER)
    }
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// The board every game starts from
pub fn starting_board() -> Board {
    Board::new()
}

/// Mark `mv` for `side` on a copy of `board`.
///
/// The caller is responsible for alternating sides; the board does not track turns.
/// Fails with [`GameError::CellOccupied`] or [`GameError::OutOfBounds`].
pub fn advance_game(side: Side, mv: Move, board: &Board) -> Result<Board, GameError> {
    board.advance(side, mv)
}

/// Write a framed board to stdout
pub fn print_board(board: &Board) {
    println!("{}", board);
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Mark(Side::First);
    const O: Cell = Cell::Mark(Side::Second);
    const E: Cell = Cell::Empty;

    fn sample_board() -> Board {
        Board::from_rows([[X, E, X], [E, E, O], [X, O, O]])
    }

    #[test]
    fn test_starting_board_is_empty() {
        let board = starting_board();
        assert!(board.rows().iter().flatten().all(|c| c.is_empty()));
        assert!(!board.is_full());
    }

    #[test]
    fn test_advance_updates_board() {
        let board = sample_board();
        let next = advance_game(Side::Second, Move::new(1, 1), &board).unwrap();
        assert_eq!(next, Board::from_rows([[X, E, X], [E, O, O], [X, O, O]]));
    }

    #[test]
    fn test_advance_leaves_input_untouched() {
        let board = sample_board();
        let before = board;
        let _ = advance_game(Side::Second, Move::new(1, 1), &board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_advance_rejects_occupied_cell() {
        let board = Board::from_rows([[X, E, X], [E, O, O], [X, O, O]]);
        let err = advance_game(Side::Second, Move::new(1, 1), &board).unwrap_err();
        assert_eq!(err, GameError::CellOccupied { row: 1, col: 1 });
        assert!(err.is_illegal_move());
    }

    #[test]
    fn test_advance_rejects_off_board() {
        let err = advance_game(Side::First, Move::new(3, 0), &starting_board()).unwrap_err();
        assert_eq!(err, GameError::OutOfBounds { row: 3, col: 0 });
        assert!(err.is_illegal_move());
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::First.opponent(), Side::Second);
        assert_eq!(Side::Second.opponent(), Side::First);
    }

    #[test]
    fn test_cell_chars() {
        assert_eq!(Cell::from_char('x'), Some(X));
        assert_eq!(Cell::from_char('O'), Some(O));
        assert_eq!(Cell::from_char('.'), Some(E));
        assert_eq!(Cell::from_char('?'), None);
        assert_eq!(X.symbol(), 'X');
        assert_eq!(E.symbol(), ' ');
    }

    #[test]
    fn test_render() {
        let rendered = sample_board().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], TOP_BORDER);
        assert_eq!(lines[1], "║ X |   | X ║");
        assert_eq!(lines[2], ROW_SEPARATOR);
        assert_eq!(lines[3], "║   |   | O ║");
        assert_eq!(lines[5], "║ X | O | O ║");
        assert_eq!(lines[6], BOTTOM_BORDER);
    }
}
