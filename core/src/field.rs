use serde::{Deserialize, Serialize};

use crate::{Coord2, GameError, Result};

/// Displayable state of a single coordinate, derived from the board sets on every query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldState {
    /// Coordinate is not part of the board.
    Absent,
    Flagged,
    HiddenMine,
    Hidden,
    /// A revealed mine, the board keeps going afterwards.
    RevealedMine,
    Revealed(u8),
    /// Adjacent count above 8, only reachable through a counting bug.
    Invalid(u8),
}

impl FieldState {
    pub const MAX_COUNT: u8 = 8;

    pub const fn from_count(count: u8) -> Self {
        if count > Self::MAX_COUNT {
            Self::Invalid(count)
        } else {
            Self::Revealed(count)
        }
    }

    /// Turns an impossible adjacent count at `coords` into an error.
    pub fn check(self, coords: Coord2) -> Result<Self> {
        match self {
            Self::Invalid(count) => {
                log::error!("Invalid field state at {:?}, adjacent mines: {}", coords, count);
                Err(GameError::InvalidFieldState { coords, count })
            }
            state => Ok(state),
        }
    }

    pub const fn is_present(self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Flagged | Self::HiddenMine | Self::Hidden)
    }

    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::Absent
    }
}
