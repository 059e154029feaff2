//! Property tests over random move sequences.

use proptest::collection;
use proptest::prelude::*;
use tictactoe_timeline::{BOARD_SIZE, Game, Square};

const MAX_MOVES: usize = 16;

/// Plays every index in `cells`, ignoring rejections, and returns the game.
fn play_all(cells: &[usize]) -> Game {
    let mut game = Game::new();
    for &cell in cells {
        let _ = game.play(cell);
    }
    game
}

fn cells() -> impl Strategy<Value = Vec<usize>> {
    collection::vec(0..BOARD_SIZE + 2, 0..MAX_MOVES)
}

proptest! {
    #[test]
    fn prop_play_advances_or_leaves_untouched(seq in cells(), next in 0..BOARD_SIZE + 2) {
        let mut game = play_all(&seq);
        let before = game.clone();
        match game.play(next) {
            Ok(_) => {
                prop_assert_eq!(game.current_move(), before.current_move() + 1);
                prop_assert_eq!(game.history().len(), game.current_move() + 1);
            }
            Err(_) => {
                prop_assert_eq!(game, before);
            }
        }
    }

    #[test]
    fn prop_replay_reproduces_board(seq in cells()) {
        let game = play_all(&seq);
        let replayed = Game::replay(&game.played_cells()).unwrap();
        prop_assert_eq!(replayed.current_board(), game.current_board());
        prop_assert_eq!(replayed.history(), game.history());
    }

    #[test]
    fn prop_jump_then_play_has_k_plus_two_entries(seq in cells(), k in 0usize..MAX_MOVES, cell in 0..BOARD_SIZE) {
        let mut game = play_all(&seq);
        let k = k % game.history().len();
        game.jump_to(k).unwrap();
        prop_assert_eq!(game.history().len(), k + 1);
        if game.play(cell).is_ok() {
            prop_assert_eq!(game.history().len(), k + 2);
        }
    }

    #[test]
    fn prop_each_snapshot_fills_one_empty_square(seq in cells()) {
        let game = play_all(&seq);
        for pair in game.history().windows(2) {
            let changed = pair[0].board().diff(pair[1].board());
            prop_assert_eq!(changed.len(), 1);
            prop_assert_eq!(pair[0].board().get(changed[0]), Some(Square::Empty));
        }
    }

    #[test]
    fn prop_sort_toggle_only_changes_order(seq in cells()) {
        let mut game = play_all(&seq);
        let before = game.clone();
        game.toggle_sort_order();
        prop_assert_eq!(game.history(), before.history());
        prop_assert_eq!(game.current_move(), before.current_move());
        let mut reversed = game.render_data().moves;
        reversed.reverse();
        prop_assert_eq!(reversed, before.render_data().moves);
    }
}
