//! First-class invariants over the game history.
//!
//! Invariants are logical properties that must hold after every mutation of
//! a [`GameStateMachine`](crate::GameStateMachine). They are checked in
//! debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod cursor_in_range;
pub mod initial_state;
pub mod outcome_consistent;
pub mod single_cell_delta;
pub mod terminal_state;

pub use cursor_in_range::CursorInRangeInvariant;
pub use initial_state::InitialStateInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use terminal_state::TerminalStateInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    InitialStateInvariant,
    SingleCellDeltaInvariant,
    TerminalStateInvariant,
    OutcomeConsistentInvariant,
    CursorInRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameStateMachine;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let machine = GameStateMachine::new();
        assert!(HistoryInvariants::check_all(&machine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_rewind_and_branch() {
        let mut machine = GameStateMachine::replay(&[0, 1, 4, 2, 8]);
        machine.jump_to(2).expect("step 2 exists");
        machine.apply_index(5);
        assert!(HistoryInvariants::check_all(&machine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut machine = GameStateMachine::replay(&[0, 1]);
        machine.history.remove(0);
        machine.cursor = 7;

        let violations = HistoryInvariants::check_all(&machine).expect_err("corrupted");
        let descriptions: Vec<&str> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(descriptions.contains(&InitialStateInvariant::description()));
        assert!(descriptions.contains(&CursorInRangeInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let machine = GameStateMachine::replay(&[4]);
        type TwoInvariants = (TerminalStateInvariant, CursorInRangeInvariant);
        assert!(TwoInvariants::check_all(&machine).is_ok());
    }
}
