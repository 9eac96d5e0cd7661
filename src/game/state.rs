use tracing::debug;

use super::board::{Board, BoardError, MoveError, Position};
use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    move_count: usize,
}

impl GameState {
    /// Create initial game state on an empty `rows` x `cols` board
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(GameState {
            board: Board::new(rows, cols)?,
            current_player: Player::Human, // Human starts
            outcome: None,
            move_count: 0,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of marks placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Place the current player's mark at `position`.
    ///
    /// A win is checked before fullness, so a winning move on the last empty
    /// cell is a win and not a draw. The turn passes only on success.
    pub fn apply_move(&mut self, position: Position) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        self.board.place_mark(position.row, position.col, player.mark())?;
        self.move_count += 1;
        debug!(
            player = player.name(),
            row = position.row,
            col = position.col,
            move_count = self.move_count,
            "mark placed"
        );

        if self.board.check_win(player.mark()) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = player.other();

        Ok(())
    }
}
