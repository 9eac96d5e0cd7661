use std::io::{self, BufRead};

use crate::error::InputError;

/// One line of player input, with coordinates still 1-based and unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Move { row: i64, col: i64 },
    Quit,
}

/// Parse a `row col` line. Tokens may be separated by whitespace or commas;
/// anything after the column is ignored.
pub fn parse_move(line: &str) -> Result<MoveInput, InputError> {
    let mut tokens = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty());

    let row = match tokens.next() {
        None => return Err(InputError::MissingToken),
        Some(token) if is_quit(token) => return Ok(MoveInput::Quit),
        Some(token) => parse_coordinate(token)?,
    };
    let col = match tokens.next() {
        None => return Err(InputError::MissingToken),
        Some(token) => parse_coordinate(token)?,
    };

    Ok(MoveInput::Move { row, col })
}

fn is_quit(token: &str) -> bool {
    token.eq_ignore_ascii_case("q") || token.eq_ignore_ascii_case("quit")
}

fn parse_coordinate(token: &str) -> Result<i64, InputError> {
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

/// Reads moves line by line from a text stream.
pub struct MoveReader<R> {
    input: R,
    line: String,
}

impl<R: BufRead> MoveReader<R> {
    pub fn new(input: R) -> Self {
        MoveReader {
            input,
            line: String::new(),
        }
    }

    /// Read and parse the next line. End of input reads as [`MoveInput::Quit`];
    /// a malformed line is consumed whole and returned as the inner error.
    pub fn read_move(&mut self) -> io::Result<Result<MoveInput, InputError>> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(Ok(MoveInput::Quit));
        }
        Ok(parse_move(&self.line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("3 4"), Ok(MoveInput::Move { row: 3, col: 4 }));
        assert_eq!(parse_move("  10\t2 \n"), Ok(MoveInput::Move { row: 10, col: 2 }));
        assert_eq!(parse_move("1,6"), Ok(MoveInput::Move { row: 1, col: 6 }));
        assert_eq!(parse_move("0 -3"), Ok(MoveInput::Move { row: 0, col: -3 }));
        assert_eq!(parse_move("2 2 extra"), Ok(MoveInput::Move { row: 2, col: 2 }));
    }

    #[test]
    fn test_parse_move_errors() {
        assert_eq!(parse_move(""), Err(InputError::MissingToken));
        assert_eq!(parse_move("   \n"), Err(InputError::MissingToken));
        assert_eq!(parse_move("5"), Err(InputError::MissingToken));
        assert_eq!(
            parse_move("a 1"),
            Err(InputError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_move("1 2.5"),
            Err(InputError::NotANumber("2.5".to_string()))
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_move("q"), Ok(MoveInput::Quit));
        assert_eq!(parse_move("QUIT\n"), Ok(MoveInput::Quit));
    }

    #[test]
    fn test_reader_consumes_lines() {
        let mut reader = MoveReader::new(Cursor::new("x y z\n2 3\n"));

        assert_eq!(
            reader.read_move().unwrap(),
            Err(InputError::NotANumber("x".to_string()))
        );
        assert_eq!(
            reader.read_move().unwrap(),
            Ok(MoveInput::Move { row: 2, col: 3 })
        );
        assert_eq!(reader.read_move().unwrap(), Ok(MoveInput::Quit));
    }
}
