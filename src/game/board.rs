/// Number of same-mark cells in a line needed to win.
pub const WIN_LENGTH: usize = 5;

/// Smallest side length on which a win is possible.
pub const MIN_SIDE: usize = WIN_LENGTH;

/// Row/column steps for the four line families: horizontal, vertical,
/// down-right diagonal, down-left diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used when printing the board
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A 0-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Convert a 1-based (user facing) coordinate. Returns `None` when either
    /// component is below 1; the upper bound is checked by the board.
    pub fn from_one_based(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row.checked_sub(1)?).ok()?;
        let col = usize::try_from(col.checked_sub(1)?).ok()?;
        Some(Position { row, col })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least {min}x{min}, got {rows}x{cols}", min = MIN_SIDE)]
    TooSmall { rows: usize, cols: usize },
    #[error("board of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position is outside the board")]
    OutOfBounds,
    #[error("cell is already taken")]
    Occupied,
    #[error("cannot place an empty mark")]
    EmptyMark,
    #[error("game is already over")]
    GameOver,
}

/// Rectangular grid of cells. Dimensions are fixed at creation and a marked
/// cell is never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < MIN_SIDE || cols < MIN_SIDE {
            return Err(BoardError::TooSmall { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(BoardError::TooLarge { rows, cols })?;
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a position, or `None` when it is off the board
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Place a mark on an empty in-bounds cell. On error the board is unchanged.
    pub fn place_mark(&mut self, row: usize, col: usize, mark: Cell) -> Result<(), MoveError> {
        if mark == Cell::Empty {
            return Err(MoveError::EmptyMark);
        }
        match self.cell_at(row, col) {
            None => Err(MoveError::OutOfBounds),
            Some(Cell::Empty) => {
                self.cells[row * self.cols + col] = mark;
                Ok(())
            }
            Some(_) => Err(MoveError::Occupied),
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Iterate over every empty position in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| Position::new(idx / self.cols, idx % self.cols))
    }

    /// Check whether `mark` holds `WIN_LENGTH` cells in a row anywhere on the
    /// board, along a row, a column or either diagonal.
    pub fn check_win(&self, mark: Cell) -> bool {
        if mark == Cell::Empty {
            return false;
        }

        DIRECTIONS.iter().any(|&(d_row, d_col)| {
            (0..self.rows).any(|row| {
                (0..self.cols).any(|col| self.window_matches(row, col, d_row, d_col, mark))
            })
        })
    }

    /// Whether the window starting at (row, col) and stepping by
    /// (d_row, d_col) lies on the board and is entirely `mark`.
    fn window_matches(
        &self,
        row: usize,
        col: usize,
        d_row: isize,
        d_col: isize,
        mark: Cell,
    ) -> bool {
        (0..WIN_LENGTH as isize).all(|k| {
            let cell = row
                .checked_add_signed(d_row * k)
                .zip(col.checked_add_signed(d_col * k))
                .and_then(|(r, c)| self.cell_at(r, c));
            cell == Some(mark)
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn place_on_empty_then_repeat_fails(
            rows in 5usize..12,
            cols in 5usize..12,
            row in 0usize..12,
            col in 0usize..12,
            is_x in any::<bool>(),
        ) {
            let mut board = Board::new(rows, cols).unwrap();
            let mark = if is_x { Cell::X } else { Cell::O };
            let before = board.clone();

            if row < rows && col < cols {
                prop_assert_eq!(board.place_mark(row, col, mark), Ok(()));
                prop_assert_eq!(board.cell_at(row, col), Some(mark));
                prop_assert_eq!(board.place_mark(row, col, mark), Err(MoveError::Occupied));
                prop_assert_eq!(board.cell_at(row, col), Some(mark));
            } else {
                prop_assert_eq!(board.place_mark(row, col, mark), Err(MoveError::OutOfBounds));
                prop_assert_eq!(board, before);
            }
        }

        #[test]
        fn four_in_a_row_never_wins(
            start_row in 0usize..10,
            start_col in 0usize..10,
            dir in 0usize..4,
        ) {
            let mut board = Board::new(10, 10).unwrap();
            let (d_row, d_col) = DIRECTIONS[dir];
            for k in 0..(WIN_LENGTH - 1) as isize {
                let cell = start_row
                    .checked_add_signed(d_row * k)
                    .zip(start_col.checked_add_signed(d_col * k));
                if let Some((r, c)) = cell {
                    let _ = board.place_mark(r, c, Cell::X);
                }
            }
            prop_assert!(!board.check_win(Cell::X));
        }

        #[test]
        fn full_iff_no_empty_cells(cells in proptest::collection::vec(any::<bool>(), 25)) {
            let mut board = Board::new(5, 5).unwrap();
            for (idx, filled) in cells.iter().enumerate() {
                if *filled {
                    board.place_mark(idx / 5, idx % 5, Cell::O).unwrap();
                }
            }
            prop_assert_eq!(board.is_full(), cells.iter().all(|&filled| filled));
        }
    }
}
