use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid dimensions must be between 1 and 255 on each axis")]
    InvalidDimensions,
    #[error("Too many mines, requested {requested} but only {available} cells are eligible")]
    TooManyMines {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Mines were already placed on this grid")]
    MinesAlreadyPlaced,
    #[error("Unknown difficulty preset")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
