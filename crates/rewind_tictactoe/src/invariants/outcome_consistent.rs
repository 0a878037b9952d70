//! Outcome consistency invariant: outcomes are derived from the squares.

use super::super::{GameStateMachine, Outcome};
use super::Invariant;

/// Invariant: every state's outcome equals [`Outcome::evaluate`] of its board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameStateMachine> for OutcomeConsistentInvariant {
    fn holds(machine: &GameStateMachine) -> bool {
        machine
            .history()
            .iter()
            .all(|state| state.outcome() == Outcome::evaluate(state.board()))
    }

    fn description() -> &'static str {
        "Each outcome matches its board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_game_holds() {
        let machine = GameStateMachine::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(machine.current_state().outcome(), Outcome::Draw);
        assert!(OutcomeConsistentInvariant::holds(&machine));
    }

    #[test]
    fn test_won_game_holds() {
        let machine = GameStateMachine::replay(&[6, 0, 7, 1, 8]);
        assert_eq!(machine.current_state().outcome(), Outcome::XWon);
        assert!(OutcomeConsistentInvariant::holds(&machine));
    }
}
