use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::game::{Board, COLS};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 0xACE1;

/// Opponent that draws a pseudo-random starting column and walks right
/// (wrapping) to the first column with room.
///
/// The generator is seeded deterministically, so a given seed replays the same
/// game against the same inputs.
pub struct OpponentSelector {
    seed: u64,
    rng: StdRng,
}

impl OpponentSelector {
    pub fn new(seed: u64) -> Self {
        OpponentSelector {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// At most `COLS` probes. When every column is full the raw candidate is
    /// returned; the board is drawn by then and the value is never used.
    pub fn choose(&mut self, board: &Board) -> usize {
        let candidate = self.rng.random_range(0..COLS);
        let column = (0..COLS)
            .map(|offset| (candidate + offset) % COLS)
            .find(|&col| !board.is_column_full(col))
            .unwrap_or(candidate);
        log::trace!("selector candidate {candidate} -> column {column}");
        column
    }
}

impl Default for OpponentSelector {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Agent for OpponentSelector {
    fn select_column(&mut self, board: &Board) -> usize {
        self.choose(board)
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}
