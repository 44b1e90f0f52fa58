//! Error types for the crate

use thiserror::Error;

/// Main error type for board and game-tree operations.
///
/// Variants fall into two families: invalid moves, which a caller can recover from by
/// choosing another move, and illegal states, which signal misuse of the API.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("invalid move: game already over")]
    GameOver,

    #[error("invalid move: cell ({row}, {col}) is out of bounds (must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("game tree already has a root")]
    RootAlreadyExists,

    #[error("board is already terminal, no move to choose")]
    TerminalBoard,

    #[error("position does not belong to this game tree")]
    UnknownPosition,

    #[error("non-terminal position has no children, build its subtree first")]
    UnexpandedPosition,

    #[error("boards do not differ by exactly one mark")]
    NoMoveBetween,

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("board string has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },
}

impl Error {
    /// Whether the error rejects a single move on an otherwise valid board.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            Error::CellOccupied { .. } | Error::GameOver | Error::OutOfBounds { .. }
        )
    }

    /// Whether the error signals caller misuse rather than a bad move.
    ///
    /// Board parse errors belong to neither family.
    pub fn is_illegal_state(&self) -> bool {
        matches!(
            self,
            Error::RootAlreadyExists
                | Error::TerminalBoard
                | Error::UnknownPosition
                | Error::UnexpandedPosition
                | Error::NoMoveBetween
                | Error::InvalidPieceCounts { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn classifies_variants() {
        assert!(Error::GameOver.is_invalid_move());
        assert!(Error::CellOccupied { row: 0, col: 1 }.is_invalid_move());
        assert!(Error::TerminalBoard.is_illegal_state());
        assert!(Error::RootAlreadyExists.is_illegal_state());
        assert!(!Error::OutOfBounds { row: 3, col: 0 }.is_illegal_state());
    }

    #[test]
    fn parse_errors_are_in_neither_family() {
        let errors = [
            Error::InvalidBoardLength {
                expected: 9,
                got: 3,
            },
            Error::InvalidCellCharacter {
                character: 'Z',
                position: 4,
            },
        ];

        for err in errors {
            assert!(!err.is_invalid_move(), "{err}");
            assert!(!err.is_illegal_state(), "{err}");
        }
    }

    #[test]
    fn renders_messages() {
        let err = Error::CellOccupied { row: 1, col: 2 };
        assert_eq!(err.to_string(), "invalid move: cell (1, 2) is already occupied");
    }
}
