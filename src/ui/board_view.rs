use std::fmt;

use crate::game::Board;

/// Text rendering of a board: a 1-based column header, then one line per row
/// starting with its 1-based label. Labels are right-aligned to the widest
/// number so large boards stay in columns.
///
/// ```text
///   1 2 3 4 5
/// 1 . . . . .
/// 2 . X . . .
/// 3 . . O . .
/// 4 . . . . .
/// 5 . . . . .
/// ```
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let row_width = digits(board.rows());
        let col_width = digits(board.cols());

        write!(f, "{:row_width$}", "")?;
        for col in 0..board.cols() {
            write!(f, " {:>col_width$}", col + 1)?;
        }
        writeln!(f)?;

        for row in 0..board.rows() {
            write!(f, "{:>row_width$}", row + 1)?;
            for col in 0..board.cols() {
                let symbol = board.cell_at(row, col).map_or(' ', |cell| cell.symbol());
                write!(f, " {:>col_width$}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}
