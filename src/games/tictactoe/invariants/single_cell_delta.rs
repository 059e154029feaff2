//! Single cell delta invariant: each snapshot fills exactly one empty square.

use super::super::Game;
use super::Invariant;

/// Invariant: every snapshot after the first differs from its predecessor in
/// exactly one square, that square was empty before, and it is the square the
/// snapshot records as its location.
pub struct SingleCellDeltaInvariant;

impl Invariant<Game> for SingleCellDeltaInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match (before.board().diff(after.board()).as_slice(), after.location()) {
                ([changed], Some(location)) => {
                    *changed == location.index() && before.board().is_empty(*changed)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one previously empty square"
    }
}
