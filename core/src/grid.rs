use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of cells indexed by `(row, col)`.
///
/// Every gameplay operation on a grid returns a new grid and leaves `self` untouched, so a caller can keep the previous
/// value around for diffing or caching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    cells: Array2<Cell>,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    cells: Array2<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GameError;

    /// Rejects shapes outside `1..=Coord::MAX` on either axis and cells whose coordinates disagree with their position.
    fn try_from(RawGrid { cells }: RawGrid) -> Result<Self> {
        let (rows, cols) = cells.dim();
        let max = usize::from(Coord::MAX);
        if rows == 0 || cols == 0 || rows > max || cols > max {
            return Err(GameError::InvalidDimensions);
        }

        for ((row, col), cell) in cells.indexed_iter() {
            if (usize::from(cell.row), usize::from(cell.col)) != (row, col) {
                return Err(GameError::InvalidCoords);
            }
        }

        Ok(Self { cells })
    }
}

impl Grid {
    /// Empty grid without mines, every cell hidden. Dimensions are clamped to at least 1x1.
    pub fn new(rows: Coord, cols: Coord) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let cells = Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(row, col)| {
            // both axes come from `Coord` dimensions
            Cell::new((row as Coord, col as Coord))
        });
        Self { cells }
    }

    /// Builds a grid with mines at the given coordinates and neighbor counts filled in.
    pub fn from_mine_coords((rows, cols): Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let mut grid = Self::new(rows, cols);
        for &coords in mine_coords {
            let coords = grid.validate_coords(coords)?;
            grid.cell_mut(coords).is_mine = true;
        }
        grid.fill_neighbor_counts();
        Ok(grid)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }

    pub fn has_mines(&self) -> bool {
        self.iter().any(|cell| cell.is_mine)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_mine)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(Cell::is_revealed)
    }

    /// Number of flagged cells, regardless of whether they hold a mine.
    pub fn count_flags(&self) -> CellCount {
        self.count_where(Cell::is_flagged)
    }

    /// True when every cell without a mine has been revealed, mines may be in any state.
    pub fn check_win(&self) -> bool {
        self.iter()
            .filter(|cell| !cell.is_mine)
            .all(Cell::is_revealed)
    }

    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.iter()
            .filter(|cell| cell.is_mine)
            .map(Cell::coords)
            .collect()
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Recomputes `neighbor_mines` for all cells, mines are left at 0.
    pub(crate) fn fill_neighbor_counts(&mut self) {
        let counts = self.cells.map(|cell| {
            if cell.is_mine {
                0
            } else {
                self.adjacent_mine_count(cell.coords())
            }
        });
        for (cell, &count) in self.cells.iter_mut().zip(counts.iter()) {
            cell.neighbor_mines = count;
        }
    }

    fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        // grid sizes are bounded by `Coord` squared, which fits `CellCount`
        self.iter().filter(|cell| predicate(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
