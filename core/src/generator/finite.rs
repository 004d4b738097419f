use rand::prelude::*;

use super::*;

/// Rectangular board with a fixed number of mines placed by rejection sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct FiniteGenerator {
    seed: u64,
    config: GameConfig,
}

impl FiniteGenerator {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { seed, config }
    }
}

impl BoardGenerator for FiniteGenerator {
    fn generate(self) -> Result<Board> {
        let config = self.config.validate()?;
        let (width, height) = config.size;
        let bounds = config.bounds();

        let mut board = Board::empty(self.seed, BoardMode::Finite, bounds);
        for coords in bounds.iter() {
            board.insert_field(coords);
        }

        // draw order is x then y, so the layout only depends on the seed and the config
        let mut rng = seeded_rng(self.seed);
        let mut mines_placed: CellCount = 0;
        while mines_placed < config.mines {
            let coords = (rng.random_range(0..width), rng.random_range(0..height));
            if board.insert_mine(coords) {
                mines_placed += 1;
            }
        }

        log::debug!(
            "Generated finite board {}x{} with {} mines, seed: {}",
            width,
            height,
            mines_placed,
            self.seed
        );
        Ok(board)
    }
}
