//! Error types for the tictactoe crate

use thiserror::Error;

use crate::board::{Cell, Mark};

/// Main error type for the tictactoe crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell {cell} is already occupied")]
    Occupied { cell: Cell },

    #[error("game already over: {winner} won")]
    GameOver { winner: Mark },

    #[error("no empty cells remain")]
    NoEmptyCells,

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("window error: {0}")]
    Window(String),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
