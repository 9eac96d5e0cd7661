//! Console front end: board rendering, move input, and the turn loop that
//! pits the human against the random opponent.

mod app;
pub mod board_view;
pub mod console;

pub use app::App;
