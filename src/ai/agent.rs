use crate::game::{Board, Position};

/// Interface for automated opponents.
pub trait Agent {
    /// Choose an empty cell to play on. Returns `None` only when the board
    /// has no empty cell left.
    fn select_move(&mut self, board: &Board) -> Option<Position>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
