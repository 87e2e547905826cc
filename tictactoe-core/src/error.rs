//! Error types for game operations

/// Caller-contract violations reported by the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("There's already a move at ({row}, {col})")]
    CellOccupied { row: usize, col: usize },

    #[error("({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("There's no more move possible")]
    NoLegalMove,
}

impl GameError {
    /// Both occupied and off-board targets count as illegal moves
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            GameError::CellOccupied { .. } | GameError::OutOfBounds { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_kinds() {
        assert!(GameError::CellOccupied { row: 0, col: 0 }.is_illegal_move());
        assert!(GameError::OutOfBounds { row: 5, col: 0 }.is_illegal_move());
        assert!(!GameError::NoLegalMove.is_illegal_move());
    }

    #[test]
    fn test_messages() {
        let err = GameError::OutOfBounds { row: 4, col: 1 };
        assert_eq!(err.to_string(), "(4, 1) is outside the 3x3 board");
    }
}
