#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use board::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod error;
mod field;
mod generator;
mod session;
mod types;

/// Side length of the square board started by [`Session::new_finite_game`] by default.
pub const DEFAULT_BOARD_SIZE: Coord = 64;

/// One mine per this many cells on default finite boards.
pub const DEFAULT_CELLS_PER_MINE: CellCount = 8;

/// Fields materialized by procedural expansion are mined with probability `1 / PROCEDURAL_MINE_ODDS`.
pub const PROCEDURAL_MINE_ODDS: u32 = 8;

/// Cascade reveals handled per [`Session::tick`].
pub const DEFAULT_BATCH_SIZE: usize = 12;

/// Neighbors left to reveal after uncovering a zero field.
pub type Candidates = SmallVec<[Coord2; 8]>;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates a finite board shape, there must be at least one mine-free cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(size, mines).validate()
    }

    /// Derives the mine count from a density of one mine per `cells_per_mine` cells.
    pub fn with_density(size: Coord2, cells_per_mine: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, 0).validate()?;
        let mines = config.total_cells() / u64::from(cells_per_mine.max(1));
        let mines = mines.try_into().unwrap_or(CellCount::MAX);
        Self::new(size, mines)
    }

    pub fn validate(self) -> Result<Self> {
        let (width, height) = self.size;
        if width < 1 || height < 1 {
            log::warn!("Rejected board size {}x{}", width, height);
            return Err(GameError::InvalidSize);
        }

        let cells = self.total_cells();
        if u64::from(self.mines) >= cells {
            log::warn!(
                "Rejected board config, requested {} mines but only {} cells",
                self.mines,
                cells
            );
            return Err(GameError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }

        Ok(self)
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub fn total_cells(&self) -> u64 {
        let width = u64::try_from(self.size.0).unwrap_or(0);
        let height = u64::try_from(self.size.1).unwrap_or(0);
        width * height
    }

    pub const fn bounds(&self) -> Bounds {
        Bounds::new((0, 0), (self.size.0.saturating_sub(1), self.size.1.saturating_sub(1)))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let size = (DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE);
        let cells = (DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE) as CellCount;
        Self::new_unchecked(size, cells / DEFAULT_CELLS_PER_MINE)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// Not a field, or already revealed.
    NoChange,
    /// A mine was uncovered, nothing cascades from it.
    Exploded,
    /// A safe field with at least one adjacent mine.
    Revealed,
    /// A safe field with no adjacent mines and the neighbors that still need revealing.
    Cascade(Candidates),
}

impl RevealOutcome {
    pub const fn has_update(&self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Exploded => true,
            Revealed => true,
            Cascade(_) => true,
        }
    }

    pub fn into_candidates(self) -> Option<Candidates> {
        match self {
            Self::Cascade(candidates) => Some(candidates),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_full_board() {
        assert_eq!(
            GameConfig::new((2, 2), 4),
            Err(GameError::TooManyMines { mines: 4, cells: 4 })
        );
        assert!(GameConfig::new((2, 2), 3).is_ok());
    }

    #[test]
    fn config_rejects_empty_dimensions() {
        assert_eq!(GameConfig::new((0, 5), 0), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new((5, -1), 0), Err(GameError::InvalidSize));
    }

    #[test]
    fn bounds_of_unvalidated_config_do_not_overflow() {
        let config = GameConfig::new_unchecked((Coord::MIN, 1), 0);

        assert_eq!(config.bounds(), Bounds::new((0, 0), (Coord::MIN, 0)));
        assert_eq!(config.validate(), Err(GameError::InvalidSize));
    }

    #[test]
    fn default_config_matches_density() {
        let config = GameConfig::default();

        assert_eq!(config, GameConfig::with_density((64, 64), 8).unwrap());
        assert_eq!(config.mines, 512);
        assert_eq!(config.bounds(), Bounds::new((0, 0), (63, 63)));
    }

    #[test]
    fn cascade_outcome_yields_candidates() {
        let candidates: Candidates = [(0, 1), (1, 0)].into_iter().collect();

        assert_eq!(
            RevealOutcome::Cascade(candidates.clone()).into_candidates(),
            Some(candidates)
        );
        assert_eq!(RevealOutcome::Revealed.into_candidates(), None);
        assert!(!RevealOutcome::NoChange.has_update());
    }
}
