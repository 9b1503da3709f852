use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

/// One grid position.
///
/// `is_mine` is only ever set by mine placement and `neighbor_mines` is only meaningful for cells without a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: Coord,
    pub col: Coord,
    pub is_mine: bool,
    pub status: CellStatus,
    pub neighbor_mines: u8,
    pub is_exploded: bool,
}

impl Cell {
    pub const fn new((row, col): Coord2) -> Self {
        Self {
            row,
            col,
            is_mine: false,
            status: CellStatus::Hidden,
            neighbor_mines: 0,
            is_exploded: false,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub const fn is_hidden(&self) -> bool {
        matches!(self.status, CellStatus::Hidden)
    }

    pub const fn is_revealed(&self) -> bool {
        matches!(self.status, CellStatus::Revealed)
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.status, CellStatus::Flagged)
    }
}
