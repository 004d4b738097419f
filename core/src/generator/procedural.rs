use rand::RngCore;

use super::*;

/// Unbounded board that starts from the origin and grows as fields are revealed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProceduralGenerator {
    seed: u64,
}

impl ProceduralGenerator {
    pub const ORIGIN: Coord2 = (0, 0);

    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn build(self) -> Board {
        let mut board = Board::empty(self.seed, BoardMode::Procedural, Bounds::point(Self::ORIGIN));
        // the origin is never a mine so the first reveal has something to expand from
        board.insert_field(Self::ORIGIN);

        log::debug!("Generated procedural board, seed: {}", self.seed);
        board
    }
}

impl BoardGenerator for ProceduralGenerator {
    fn generate(self) -> Result<Board> {
        Ok(self.build())
    }
}

/// One raw 32-bit draw per field, so recorded boards do not depend on `rand`'s range sampling.
pub(crate) fn roll_mine(rng: &mut Pcg32) -> bool {
    rng.next_u32() % PROCEDURAL_MINE_ODDS == 0
}

impl Board {
    /// Materializes every missing neighbor of `coords`, one mine draw per new field in neighbor order.
    pub(crate) fn expand_around(&mut self, coords: Coord2) {
        for neighbor in coords.iter_neighbors() {
            if !self.insert_field(neighbor) {
                continue;
            }

            if roll_mine(&mut self.rng) {
                self.insert_mine(neighbor);
                log::trace!("Expanded mine at {:?}", neighbor);
            } else {
                log::trace!("Expanded field at {:?}", neighbor);
            }
        }
    }
}
