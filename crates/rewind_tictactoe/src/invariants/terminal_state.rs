//! Terminal state invariant: finished games are never extended.

use super::super::GameStateMachine;
use super::Invariant;

/// Invariant: only the last entry of history may be won or drawn.
pub struct TerminalStateInvariant;

impl Invariant<GameStateMachine> for TerminalStateInvariant {
    fn holds(machine: &GameStateMachine) -> bool {
        machine
            .history()
            .windows(2)
            .all(|pair| !pair[0].outcome().is_terminal())
    }

    fn description() -> &'static str {
        "No move follows a finished board"
    }
}
