//! Initial state invariant: history always starts at game start.

use super::super::GameStateMachine;
use super::Invariant;

/// Invariant: history is non-empty and its first entry is the initial state.
pub struct InitialStateInvariant;

impl Invariant<GameStateMachine> for InitialStateInvariant {
    fn holds(machine: &GameStateMachine) -> bool {
        machine
            .history()
            .first()
            .is_some_and(|state| state.is_initial())
    }

    fn description() -> &'static str {
        "History starts with the empty initial board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_machine_holds() {
        assert!(InitialStateInvariant::holds(&GameStateMachine::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut machine = GameStateMachine::new();
        machine.history.clear();
        assert!(!InitialStateInvariant::holds(&machine));
    }

    #[test]
    fn test_non_initial_first_entry_violates() {
        let mut machine = GameStateMachine::replay(&[4]);
        machine.history.remove(0);
        assert!(!InitialStateInvariant::holds(&machine));
    }
}
