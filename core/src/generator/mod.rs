use crate::*;
pub use random::*;

mod random;

/// Strategy that turns an empty grid into one with mines, given the first revealed cell.
pub trait MinefieldGenerator {
    fn generate(self, grid: &Grid, config: GameConfig, start: Coord2) -> Result<Grid>;
}
