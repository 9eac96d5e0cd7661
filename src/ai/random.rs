use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use crate::game::{Board, Cell, Position};

/// How a [`RandomAgent`] draws its cell. Both give every empty cell the same
/// probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SamplingStrategy {
    /// Draw any in-bounds cell and redraw until it is empty.
    #[default]
    Rejection,
    /// Draw directly from the list of empty cells.
    EmptyCells,
}

/// An agent that plays a uniformly random empty cell.
pub struct RandomAgent {
    rng: StdRng,
    strategy: SamplingStrategy,
}

impl RandomAgent {
    pub fn new(strategy: SamplingStrategy) -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
            strategy,
        }
    }

    /// Deterministic agent, for reproducible games
    pub fn with_seed(strategy: SamplingStrategy, seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
            strategy,
        }
    }

    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    fn sample_rejection(&mut self, board: &Board) -> Position {
        loop {
            let row = self.rng.random_range(0..board.rows());
            let col = self.rng.random_range(0..board.cols());
            if board.cell_at(row, col) == Some(Cell::Empty) {
                return Position::new(row, col);
            }
        }
    }

    fn sample_empty_cells(&mut self, board: &Board) -> Option<Position> {
        let empty: Vec<Position> = board.empty_cells().collect();
        if empty.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..empty.len());
        Some(empty[idx])
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new(SamplingStrategy::default())
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Option<Position> {
        // Rejection sampling only terminates while an empty cell exists
        if board.is_full() {
            return None;
        }
        match self.strategy {
            SamplingStrategy::Rejection => Some(self.sample_rejection(board)),
            SamplingStrategy::EmptyCells => self.sample_empty_cells(board),
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
