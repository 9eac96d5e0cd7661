//! # Gomoku
//!
//! Five-in-a-row on a rectangular board, played in the terminal against an
//! opponent that picks uniformly random empty cells.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Agent trait and the random opponent
//! - [`ui`] — Console rendering, move input, and the turn loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
