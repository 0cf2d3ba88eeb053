use crate::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position {0:?} is out of bounds")]
    OutOfBounds(Position),
    #[error("Cannot reveal or flag cell in current game state")]
    InvalidGameState,
    #[error("Invalid field dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Too many mines ({mines}) for board size {width}x{height}, at most {max} fit")]
    TooManyMines {
        width: u32,
        height: u32,
        mines: u32,
        max: u32,
    },
    #[error("Mine at {0:?} listed more than once")]
    DuplicateMine(Position),
}
