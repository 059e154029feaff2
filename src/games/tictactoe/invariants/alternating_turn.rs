//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Player, Square};
use super::Invariant;

/// Invariant: the square filled by move `n` holds X for odd `n` and O for even `n`.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(move_number, snapshot)| {
                let expected = Square::Occupied(Player::for_move(move_number - 1));
                snapshot
                    .location()
                    .is_some_and(|loc| snapshot.board().get(loc.index()) == Some(expected))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_alternating_play() {
        let game = Game::replay(&[0, 1, 2, 3]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_jump_and_replay() {
        let mut game = Game::replay(&[0, 1, 2]).unwrap();
        game.jump_to(1).unwrap();
        game.play(8).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }
}
