use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Mark this player leaves on the board
    pub fn mark(self) -> Cell {
        match self {
            Player::Human => Cell::X,
            Player::Computer => Cell::O,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "You",
            Player::Computer => "Computer",
        }
    }
}
