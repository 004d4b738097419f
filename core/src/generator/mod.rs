use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::*;
pub use finite::*;
pub use procedural::*;

mod finite;
mod procedural;

/// Builds a fresh board, every call starts from a newly seeded generator.
pub trait BoardGenerator {
    fn generate(self) -> Result<Board>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardMode {
    /// Fixed rectangle populated up front.
    Finite,
    /// Unbounded board that materializes fields around each reveal.
    Procedural,
}

impl BoardMode {
    pub const fn is_procedural(self) -> bool {
        matches!(self, Self::Procedural)
    }
}

/// PCG stream selector shared by every board.
const SEED_STREAM: u64 = 0xa02bdbf7bb3c0a7;

/// The generator stream for `seed`, identical on every call and on every target.
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::new(seed, SEED_STREAM)
}
