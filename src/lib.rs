//! Strictly Rewind - tic-tac-toe with a browsable move history.
//!
//! The game rules and history live in [`rewind_tictactoe`]. This crate is
//! the view layer on top of them:
//!
//! - **Presenter**: status line and move list text
//! - **TUI**: interactive terminal front end
//! - **Replay**: headless run of a scripted move list
//! - **Config**: TOML preferences
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{move_entries, status_line};
//! use rewind_tictactoe::{GameStateMachine, SortOrder};
//!
//! let game = GameStateMachine::replay(&[4, 0]);
//! assert_eq!(status_line(game.current_state()), "Next player: X");
//!
//! let entries = move_entries(&game, SortOrder::Descending);
//! assert_eq!(entries[0].label(), "Go to move #2");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod presenter;
mod replay;
pub mod tui;

pub use config::{ConfigError, RewindConfig};
pub use presenter::{MoveEntry, move_entries, status_line};
pub use replay::{ReplayFormat, ReplayReport, run_replay};
