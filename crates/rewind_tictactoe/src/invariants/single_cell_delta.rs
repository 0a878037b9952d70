//! Single cell delta invariant: each ply fills exactly one empty square.

use super::super::{GameStateMachine, Square};
use super::Invariant;

/// Invariant: consecutive states differ in one square.
///
/// The square was empty before, now holds the mark of the player who was
/// due to move, and is recorded as the new state's last move.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameStateMachine> for SingleCellDeltaInvariant {
    fn holds(machine: &GameStateMachine) -> bool {
        machine.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let changed: Vec<usize> = (0..9)
                .filter(|&i| before.board().squares()[i] != after.board().squares()[i])
                .collect();

            let [index] = changed.as_slice() else {
                return false;
            };
            before.board().squares()[*index] == Square::Empty
                && after.board().squares()[*index] == Square::Occupied(before.next_player())
                && after.last_move().map(|pos| pos.to_index()) == Some(*index)
                && after.next_player() == before.next_player().opponent()
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one empty square for the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_holds() {
        assert!(SingleCellDeltaInvariant::holds(&GameStateMachine::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let machine = GameStateMachine::replay(&[4, 0, 8, 2, 1, 7]);
        assert!(SingleCellDeltaInvariant::holds(&machine));
    }

    #[test]
    fn test_duplicated_state_violates() {
        let mut machine = GameStateMachine::replay(&[4]);
        let same = machine.current_state().clone();
        machine.history.push(same);
        assert!(!SingleCellDeltaInvariant::holds(&machine));
    }

    #[test]
    fn test_skipped_ply_violates() {
        let full = GameStateMachine::replay(&[4, 0]);
        let mut machine = GameStateMachine::new();
        machine.history.push(full.history()[2].clone());
        assert!(!SingleCellDeltaInvariant::holds(&machine));
    }
}
