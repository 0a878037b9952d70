//! Rewindable tic-tac-toe.
//!
//! Pure game logic with no I/O:
//!
//! - **Rules**: win and draw detection over a 3x3 [`Board`]
//! - **State**: immutable per-ply [`BoardState`] snapshots
//! - **Machine**: [`GameStateMachine`], the history of snapshots plus a cursor
//!   that can be rewound and branched from
//! - **Invariants**: history properties checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameStateMachine, Outcome, Position};
//!
//! let mut game = GameStateMachine::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::Center] {
//!     game.apply_move(pos);
//! }
//! game.jump_to(1).unwrap();
//! game.apply_move(Position::BottomRight);
//! assert_eq!(game.len(), 3);
//! assert_eq!(game.current_state().outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod machine;
mod outcome;
mod position;
pub mod rules;
mod state;
mod types;

pub use error::{GameError, IgnoredMove, MoveDisposition};
pub use machine::{GameStateMachine, SortOrder};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{WinningLine, detect_win};
pub use state::{BoardState, CellAnnotation};
pub use types::{Board, Player, Square};
