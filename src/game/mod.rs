//! Core gomoku logic: the board with its placement and five-in-a-row rules,
//! the two sides, and the game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, BoardError, Cell, MoveError, Position, MIN_SIDE, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState};
