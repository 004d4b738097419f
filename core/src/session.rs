use alloc::collections::VecDeque;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Shape used whenever a finite board is started.
    pub finite: GameConfig,
    /// Maximum number of queued reveals handled per tick.
    pub batch_size: usize,
    pub seed: u64,
}

impl SessionConfig {
    pub fn validate(self) -> Result<Self> {
        self.finite.validate()?;
        if self.batch_size == 0 {
            return Err(GameError::InvalidBatchSize);
        }
        Ok(self)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            finite: GameConfig::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            seed: 0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Coordinates taken off the queue this tick.
    pub processed: usize,
    /// Candidates appended to the queue this tick.
    pub enqueued: usize,
    /// Queue length after the tick.
    pub pending: usize,
}

/// Drives a board the way an interactive frontend does: clicks go straight to the board, cascades are spread over
/// ticks through a FIFO queue so a single reveal never does unbounded work.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    queue: VecDeque<Coord2>,
}

impl Session {
    /// Starts on a procedural board at the configured seed.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self {
            board: Board::procedural(config.seed),
            config,
            queue: VecDeque::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Advances the seed and starts a finite board with the configured shape.
    pub fn new_finite_game(&mut self) -> Result<()> {
        let seed = self.config.seed.wrapping_add(1);
        self.board = Board::finite(seed, self.config.finite)?;
        self.restart(seed);
        Ok(())
    }

    /// Advances the seed and starts a procedural board.
    pub fn new_procedural_game(&mut self) {
        let seed = self.config.seed.wrapping_add(1);
        self.board = Board::procedural(seed);
        self.restart(seed);
    }

    fn restart(&mut self, seed: u64) {
        self.config.seed = seed;
        self.queue.clear();
        log::debug!("New {:?} game, seed: {}", self.board.mode(), seed);
    }

    /// Reveals a field and queues the cascade it starts, if any.
    pub fn primary(&mut self, coords: Coord2) -> RevealOutcome {
        let outcome = self.board.reveal_outcome(coords);
        if let RevealOutcome::Cascade(candidates) = &outcome {
            self.queue.extend(candidates.iter().copied());
        }
        outcome
    }

    pub fn secondary(&mut self, coords: Coord2) -> MarkOutcome {
        self.board.set_flag(coords)
    }

    /// Handles up to one batch of queued reveals.
    ///
    /// Candidates found during the batch are appended only after it, so a tick never touches fields queued by itself.
    pub fn tick(&mut self) -> TickOutcome {
        let mut fresh = Vec::new();
        let mut processed = 0;

        for _ in 0..self.config.batch_size {
            let Some(coords) = self.queue.pop_front() else {
                break;
            };
            processed += 1;

            if let Some(candidates) = self.board.reveal(coords) {
                fresh.extend(candidates);
            }
        }

        let enqueued = fresh.len();
        self.queue.extend(fresh);
        if processed > 0 {
            log::trace!(
                "Cascade tick processed {}, enqueued {}, pending {}",
                processed,
                enqueued,
                self.queue.len()
            );
        }

        TickOutcome {
            processed,
            enqueued,
            pending: self.queue.len(),
        }
    }

    /// Ticks until the cascade queue is empty or `max_ticks` is reached, returning the number of ticks run.
    pub fn run_until_settled(&mut self, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while ticks < max_ticks && !self.is_settled() {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_settled(&self) -> bool {
        self.queue.is_empty()
    }
}
