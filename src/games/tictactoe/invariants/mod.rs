//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every state
//! transition. The state manager checks them in debug builds; tests check
//! them directly.

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
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod history_bounds;
pub mod single_cell_delta;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_bounds::HistoryBoundsInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    HistoryBoundsInvariant,
    SingleCellDeltaInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Game, Player, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut game = Game::replay(&[4, 0, 8, 2]).unwrap();
        game.jump_to(1).unwrap();
        game.play(6).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::replay(&[4]).unwrap();
        // Stamp an extra mark onto the latest snapshot.
        game.history[1]
            .board
            .set(0, Square::Occupied(Player::O))
            .unwrap();

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(SingleCellDeltaInvariant::description())]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryBoundsInvariant, SingleCellDeltaInvariant);
        assert!(TwoInvariants::check_all(&Game::replay(&[0, 1]).unwrap()).is_ok());
    }

}
