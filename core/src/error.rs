use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board width and height must both be at least 1")]
    InvalidSize,
    #[error("Too many mines, requested {mines} but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: u64 },
    #[error("Cascade batch size must be at least 1")]
    InvalidBatchSize,
    #[error("Field at {coords:?} reports {count} adjacent mines")]
    InvalidFieldState { coords: Coord2, count: u8 },
}

pub type Result<T> = core::result::Result<T, GameError>;
