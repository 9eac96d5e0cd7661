use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use super::board_view::BoardView;
use super::console::{MoveInput, MoveReader};
use crate::ai::Agent;
use crate::game::{GameOutcome, GameState, MoveError, Player, Position};

/// Illegal picks tolerated from the opponent within a single turn.
const MAX_OPPONENT_ATTEMPTS: usize = 1000;

/// Console game loop: the human plays X from `input`, `opponent` plays O,
/// and the board is printed to `output` after every move.
pub struct App<R, W, A> {
    game_state: GameState,
    input: MoveReader<R>,
    output: W,
    opponent: A,
}

impl<R: BufRead, W: Write, A: Agent> App<R, W, A> {
    pub fn new(game_state: GameState, input: R, output: W, opponent: A) -> Self {
        App {
            game_state,
            input: MoveReader::new(input),
            output,
            opponent,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Play until someone wins, the board fills up, or the player quits.
    ///
    /// Returns `None` when the player quit (or input ended) before the game
    /// was decided. Failures of the console streams are errors, and so is an
    /// opponent that cannot produce a legal move.
    pub fn run(&mut self) -> io::Result<Option<GameOutcome>> {
        let board = self.game_state.board();
        info!(
            rows = board.rows(),
            cols = board.cols(),
            opponent = self.opponent.name(),
            "game started"
        );

        writeln!(self.output, "Welcome to Gomoku!")?;
        writeln!(
            self.output,
            "You are X, computer is O. Five in a row wins; enter 'q' to quit."
        )?;
        self.render()?;

        loop {
            if !self.human_turn()? {
                info!(moves = self.game_state.move_count(), "player quit");
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(None);
            }
            self.render()?;
            if let Some(outcome) = self.game_state.outcome() {
                return self.finish(outcome).map(Some);
            }

            writeln!(self.output, "\nComputer's turn...")?;
            self.computer_turn()?;
            self.render()?;
            if let Some(outcome) = self.game_state.outcome() {
                return self.finish(outcome).map(Some);
            }
        }
    }

    /// Prompt until the human makes a legal move. Returns `false` on quit.
    fn human_turn(&mut self) -> io::Result<bool> {
        let rows = self.game_state.board().rows();
        let cols = self.game_state.board().cols();

        loop {
            write!(
                self.output,
                "\nEnter row (1-{rows}) and column (1-{cols}) separated by space: "
            )?;
            self.output.flush()?;

            let (row, col) = match self.input.read_move()? {
                Ok(MoveInput::Move { row, col }) => (row, col),
                Ok(MoveInput::Quit) => return Ok(false),
                Err(err) => {
                    writeln!(self.output, "Please enter valid numbers! ({err})")?;
                    continue;
                }
            };

            let result = match Position::from_one_based(row, col) {
                Some(position) => self.game_state.apply_move(position),
                None => Err(MoveError::OutOfBounds),
            };
            match result {
                Ok(()) => return Ok(true),
                Err(err) => {
                    writeln!(self.output, "Invalid move: {err}. Try again!")?;
                }
            }
        }
    }

    /// Ask the opponent for a cell until it names an empty one.
    ///
    /// An opponent that gives up, or keeps naming taken cells, is an
    /// `InvalidData` error.
    fn computer_turn(&mut self) -> io::Result<()> {
        for _ in 0..MAX_OPPONENT_ATTEMPTS {
            let Some(position) = self.opponent.select_move(self.game_state.board()) else {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("{} opponent returned no move", self.opponent.name()),
                ));
            };
            match self.game_state.apply_move(position) {
                Ok(()) => {
                    writeln!(
                        self.output,
                        "Computer placed at: ({}, {})",
                        position.row + 1,
                        position.col + 1
                    )?;
                    return Ok(());
                }
                Err(err) => warn!(%err, ?position, "opponent chose an illegal cell"),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{} opponent made {MAX_OPPONENT_ATTEMPTS} illegal moves in a row",
                self.opponent.name()
            ),
        ))
    }

    fn finish(&mut self, outcome: GameOutcome) -> io::Result<GameOutcome> {
        let message = match outcome {
            GameOutcome::Winner(Player::Human) => "Congratulations! You win!",
            GameOutcome::Winner(Player::Computer) => "Computer wins! Better luck next time!",
            GameOutcome::Draw => "It's a draw!",
        };
        info!(?outcome, moves = self.game_state.move_count(), "game over");
        writeln!(self.output, "{message}")?;
        Ok(outcome)
    }

    fn render(&mut self) -> io::Result<()> {
        write!(self.output, "{}", BoardView(self.game_state.board()))
    }
}
