//! Seeded random play across board sizes, checking every transition.

use std::collections::HashSet;

use tui_2048::core::{slide, GameState, SimpleRng, TileId};
use tui_2048::types::Direction;

const SEEDS_PER_SIZE: u32 = 24;
const MAX_MOVES: usize = 3000;

fn ids(game: &GameState) -> HashSet<TileId> {
    game.grid().tiles().map(|t| t.id()).collect()
}

fn check_transition(before: &GameState, direction: Direction, after: &GameState, max_id: TileId) {
    let slid = slide(before.grid(), direction);

    if !slid.moved {
        assert_eq!(after, before, "{direction}: no-op must keep the state");
        return;
    }

    assert_eq!(after.moves(), before.moves() + 1);
    assert_eq!(after.last_score_delta(), slid.score_delta);
    assert_eq!(after.score(), before.score() + slid.score_delta);
    assert_eq!(after.last_merged(), slid.merged.as_slice());

    // Exactly one new id, larger than any issued so far, on a cell left empty by the slide.
    let new_ids: Vec<TileId> = ids(after).difference(&ids(before)).copied().collect();
    assert_eq!(new_ids.len(), 1, "{direction}: one spawn per effective move");
    let spawned = after
        .grid()
        .tiles()
        .find(|t| t.id() == new_ids[0])
        .unwrap();
    assert!(spawned.id() > max_id);
    assert!(spawned.just_spawned());
    assert!(matches!(spawned.value(), 2 | 4));
    assert!(slid.grid.get(spawned.row(), spawned.col()).is_none());
    assert_eq!(after.grid().tiles().filter(|t| t.just_spawned()).count(), 1);

    // Slides and merges conserve value; only the spawn adds to it.
    assert_eq!(
        after.grid().total_value(),
        before.grid().total_value() + spawned.value()
    );
    assert!(after.grid().tiles().all(|t| t.value().is_power_of_two()));
}

#[test]
fn random_games_keep_engine_properties() {
    for size in 2..=6 {
        for seed in 0..SEEDS_PER_SIZE {
            let mut game = GameState::new(size, seed).unwrap();
            let mut chooser = SimpleRng::new(seed.wrapping_mul(31).wrapping_add(size as u32));
            let mut max_id = game.grid().max_id();

            for _ in 0..MAX_MOVES {
                if game.is_over() {
                    break;
                }
                let direction = Direction::ALL[chooser.next_range(4) as usize];
                let next = game.apply_move(direction);
                check_transition(&game, direction, &next, max_id);
                max_id = max_id.max(next.grid().max_id());
                game = next;
            }

            if game.is_over() {
                for direction in Direction::ALL {
                    assert!(!slide(game.grid(), direction).moved);
                    assert_eq!(game.apply_move(direction), game);
                }
            }
        }
    }
}
