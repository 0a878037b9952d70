//! Cursor invariant: the cursor names a recorded step.

use super::super::GameStateMachine;
use super::Invariant;

/// Invariant: `cursor < history.len()`.
pub struct CursorInRangeInvariant;

impl Invariant<GameStateMachine> for CursorInRangeInvariant {
    fn holds(machine: &GameStateMachine) -> bool {
        machine.cursor() < machine.len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded state"
    }
}
