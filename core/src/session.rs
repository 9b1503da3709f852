use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Grid exists, no mines placed yet.
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Holds the current grid of one game and sequences the engine operations for a front end.
///
/// Mines are placed on the first reveal so that the opening click is always safe, moves are ignored once the game is
/// over, and the play clock runs from the first reveal to the move that ends the game.
#[derive(Clone, Debug)]
pub struct GameSession {
    difficulty: Difficulty,
    grid: Grid,
    phase: GamePhase,
    seed: u64,
    started_at: Option<Instant>,
    finished_after: Option<Duration>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            grid: Grid::new(difficulty.rows(), difficulty.cols()),
            phase: GamePhase::Idle,
            seed,
            started_at: None,
            finished_after: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Mines minus flags as shown to the player, never below zero.
    pub fn mines_left(&self) -> CellCount {
        self.difficulty
            .mine_count()
            .saturating_sub(self.grid.count_flags())
    }

    /// Mines minus flags, negative when the player placed more flags than there are mines.
    pub fn mines_left_signed(&self) -> i32 {
        i32::from(self.difficulty.mine_count()) - i32::from(self.grid.count_flags())
    }

    /// Time since the first reveal, frozen once the game is over.
    pub fn elapsed(&self) -> Duration {
        match (self.finished_after, self.started_at) {
            (Some(duration), _) => duration,
            (None, Some(started_at)) => started_at.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        if self.phase.is_finished() || self.grid[coords].is_flagged() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.phase.is_idle() {
            self.grid = RandomMinefieldGenerator::new(self.seed).generate(
                &self.grid,
                self.difficulty.config(),
                coords,
            )?;
            self.phase = GamePhase::Playing;
            self.started_at = Some(Instant::now());
            log::debug!("Game started at {:?} on {}", coords, self.difficulty);
        }

        let (grid, outcome) = self.grid.reveal(coords)?;
        if outcome.has_update() {
            self.grid = grid;
        }

        match outcome {
            RevealOutcome::HitMine => self.end_game(GamePhase::Lost),
            RevealOutcome::Won => self.end_game(GamePhase::Won),
            RevealOutcome::NoChange | RevealOutcome::Revealed => {}
        }
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        if self.phase.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        let (grid, outcome) = self.grid.toggle_flag(coords)?;
        if outcome.has_update() {
            self.grid = grid;
        }
        Ok(outcome)
    }

    /// Starts over on a fresh grid of the same difficulty, with a new layout.
    pub fn restart(&mut self) {
        // golden-ratio increment, keeps successive seeds well apart
        let seed = self.seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        *self = Self::new(self.difficulty, seed);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.restart();
    }

    fn end_game(&mut self, phase: GamePhase) {
        if self.phase.is_finished() {
            return;
        }

        self.phase = phase;
        self.finished_after = Some(self.elapsed());
        log::debug!("Game ended {:?} after {:?}", phase, self.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// First seed whose opening reveal at `start` leaves the game running.
    fn playing_session(difficulty: Difficulty, start: Coord2) -> GameSession {
        (0..)
            .map(|seed| {
                let mut session = GameSession::new(difficulty, seed);
                session.reveal(start).unwrap();
                session
            })
            .find(|session| session.phase() == GamePhase::Playing)
            .unwrap()
    }

    #[test]
    fn new_session_is_idle_without_mines() {
        let session = GameSession::new(Difficulty::Medium, 1);

        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.grid().size(), (16, 16));
        assert!(!session.grid().has_mines());
        assert_eq!(session.elapsed(), Duration::ZERO);
        assert_eq!(session.mines_left(), 40);
    }

    #[test]
    fn first_reveal_places_mines_and_is_safe() {
        for seed in 0..32 {
            let mut session = GameSession::new(Difficulty::Easy, seed);

            let outcome = session.reveal((0, 0)).unwrap();

            assert!(!outcome.exploded());
            assert_eq!(session.grid().mine_count(), 10);
            assert!(!session.is_finished() || session.phase() == GamePhase::Won);
            assert!(session.grid()[(0, 0)].is_revealed());
            assert_eq!(session.grid()[(0, 0)].neighbor_mines, 0);
        }
    }

    #[test]
    fn hitting_a_mine_loses_and_freezes_the_game() {
        let mut session = playing_session(Difficulty::Easy, (4, 4));
        let mine = session.grid().mine_coords()[0];

        assert_eq!(session.reveal(mine).unwrap(), RevealOutcome::HitMine);
        assert_eq!(session.phase(), GamePhase::Lost);

        let frozen = session.grid().clone();
        let elapsed = session.elapsed();
        let safe = session
            .grid()
            .iter()
            .find(|cell| !cell.is_mine && cell.is_hidden())
            .map(Cell::coords);
        if let Some(safe) = safe {
            assert_eq!(session.reveal(safe).unwrap(), RevealOutcome::NoChange);
        }
        assert_eq!(session.toggle_flag(mine).unwrap(), MarkOutcome::NoChange);
        assert_eq!(session.grid(), &frozen);
        assert_eq!(session.elapsed(), elapsed);
    }

    #[test]
    fn revealing_every_safe_cell_wins() {
        let mut session = GameSession::new(Difficulty::Easy, 9);
        session.reveal((8, 8)).unwrap();

        let safe_cells: alloc::vec::Vec<_> = session
            .grid()
            .iter()
            .filter(|cell| !cell.is_mine)
            .map(Cell::coords)
            .collect();
        for coords in safe_cells {
            let outcome = session.reveal(coords).unwrap();
            assert!(!outcome.exploded());
        }

        assert_eq!(session.phase(), GamePhase::Won);
        assert!(session.grid().check_win());
        assert_eq!(session.grid().revealed_count(), 71);
    }

    #[test]
    fn flagged_cells_are_not_revealed() {
        let mut session = GameSession::new(Difficulty::Easy, 2);
        session.toggle_flag((3, 3)).unwrap();

        assert_eq!(session.reveal((3, 3)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(session.phase(), GamePhase::Idle);
        assert!(!session.grid().has_mines());
    }

    #[test]
    fn flagging_a_revealed_cell_keeps_the_grid() {
        let mut session = playing_session(Difficulty::Easy, (4, 4));
        let before = session.grid().clone();

        assert_eq!(session.toggle_flag((4, 4)).unwrap(), MarkOutcome::NoChange);
        assert_eq!(session.reveal((4, 4)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(session.grid(), &before);
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn mines_left_clamps_at_zero() {
        let mut session = GameSession::new(Difficulty::Easy, 0);

        for col in 0..9 {
            session.toggle_flag((0, col)).unwrap();
        }
        for col in 0..3 {
            session.toggle_flag((8, col)).unwrap();
        }

        assert_eq!(session.grid().count_flags(), 12);
        assert_eq!(session.mines_left(), 0);
        assert_eq!(session.mines_left_signed(), -2);
    }

    #[test]
    fn restart_resets_to_idle_with_new_seed() {
        let mut session = GameSession::new(Difficulty::Easy, 3);
        session.reveal((4, 4)).unwrap();
        let first_layout = session.grid().mine_coords();

        session.restart();
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.elapsed(), Duration::ZERO);
        assert!(!session.grid().has_mines());

        session.reveal((4, 4)).unwrap();
        assert_ne!(session.grid().mine_coords(), first_layout);
    }

    #[test]
    fn set_difficulty_resizes_grid() {
        let mut session = GameSession::new(Difficulty::Easy, 3);

        session.set_difficulty(Difficulty::Hard);

        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.grid().size(), (16, 30));
        assert_eq!(session.mines_left(), 99);
    }

    #[test]
    fn out_of_bounds_moves_are_errors() {
        let mut session = GameSession::new(Difficulty::Easy, 3);

        assert_eq!(session.reveal((9, 9)), Err(GameError::InvalidCoords));
        assert_eq!(session.toggle_flag((0, 9)), Err(GameError::InvalidCoords));
    }
}
