use alloc::collections::VecDeque;
use hashbrown::HashSet;

use crate::*;

impl Grid {
    /// Reveals the cell at `coords` and returns the resulting grid.
    ///
    /// Landing on a mine explodes it and uncovers every other mine, no flood fill happens in that case. Otherwise the
    /// cell is opened and, when it has no adjacent mines, the connected zero region is opened together with its
    /// numbered border. Flagged cells are never opened by the flood fill.
    pub fn reveal(&self, coords: Coord2) -> Result<(Grid, RevealOutcome)> {
        let coords = self.validate_coords(coords)?;
        let mut grid = self.clone();

        if grid[coords].is_mine {
            grid.detonate(coords);
            return Ok((grid, RevealOutcome::HitMine));
        }

        let outcome = if grid.flood_reveal(coords) == 0 {
            RevealOutcome::NoChange
        } else if grid.check_win() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        };
        Ok((grid, outcome))
    }

    /// Flips a cell between hidden and flagged, revealed cells are left alone.
    pub fn toggle_flag(&self, coords: Coord2) -> Result<(Grid, MarkOutcome)> {
        use CellStatus::*;
        use MarkOutcome::*;

        let coords = self.validate_coords(coords)?;
        let mut grid = self.clone();
        let cell = grid.cell_mut(coords);

        let outcome = match cell.status {
            Hidden => {
                cell.status = Flagged;
                Changed
            }
            Flagged => {
                cell.status = Hidden;
                Changed
            }
            Revealed => NoChange,
        };
        Ok((grid, outcome))
    }

    fn detonate(&mut self, coords: Coord2) {
        for cell in self.cells_mut().filter(|cell| cell.is_mine) {
            cell.status = CellStatus::Revealed;
        }
        self.cell_mut(coords).is_exploded = true;
    }

    /// Breadth-first reveal starting at `start`, returns how many cells changed.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut revealed: CellCount = 0;
        let mut visited = HashSet::new();
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            let cell = self.cell_mut(coords);
            if !cell.is_hidden() {
                continue;
            }
            cell.status = CellStatus::Revealed;
            revealed += 1;

            if cell.is_mine || cell.neighbor_mines != 0 {
                continue;
            }

            to_visit.extend(self.iter_neighbors(coords).filter(|&pos| {
                let neighbor = &self[pos];
                neighbor.is_hidden() && !neighbor.is_mine && !visited.contains(&pos)
            }));
        }

        revealed
    }
}
