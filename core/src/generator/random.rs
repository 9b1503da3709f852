use alloc::vec::Vec;
use rand::prelude::*;

use super::*;

impl Grid {
    /// Places `config.mines` mines uniformly at random, keeping `start` and its surrounding 3x3 block free, then fills
    /// in the neighbor counts.
    ///
    /// Eligible cells are drawn without replacement, so placement always terminates. Asking for more mines than there
    /// are eligible cells fails with [`GameError::TooManyMines`].
    pub fn place_mines<R: Rng + ?Sized>(
        &self,
        config: GameConfig,
        start: Coord2,
        rng: &mut R,
    ) -> Result<Grid> {
        let start = self.validate_coords(start)?;
        if self.has_mines() {
            return Err(GameError::MinesAlreadyPlaced);
        }
        if config.size != self.size() {
            log::warn!(
                "Config size {:?} differs from grid size {:?}, placing on the grid as is",
                config.size,
                self.size()
            );
        }

        let mut candidates: Vec<Coord2> = self
            .iter()
            .map(Cell::coords)
            .filter(|&coords| !is_within_one(coords, start))
            .collect();
        // the candidate count is bounded by the grid size
        let available = candidates.len() as CellCount;
        if config.mines > available {
            log::warn!(
                "Cannot place {} mines around {:?}, only {} cells are eligible",
                config.mines,
                start,
                available
            );
            return Err(GameError::TooManyMines {
                requested: config.mines,
                available,
            });
        }

        let (chosen, _) = candidates.partial_shuffle(rng, config.mines.into());
        let mut grid = self.clone();
        for &coords in chosen.iter() {
            grid.cell_mut(coords).is_mine = true;
        }
        grid.fill_neighbor_counts();

        log::debug!(
            "Placed {} mines on a {:?} grid, safe start at {:?}",
            config.mines,
            grid.size(),
            start
        );
        Ok(grid)
    }
}

/// Seeded generator, the same seed and start always produce the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, grid: &Grid, config: GameConfig, start: Coord2) -> Result<Grid> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        grid.place_mines(config, start, &mut rng)
    }
}
