//! Property tests for deck generation and session invariants.

use std::time::{Duration, Instant};

use memory_match::deck;
use memory_match::{
    GameRng, GameSession, GridSize, MoveLimit, Outcome, RevealState, Selection, TileId,
};
use proptest::prelude::*;

/// One step of a random play-through.
#[derive(Clone, Debug)]
enum Step {
    Pick(u16),
    Wait(u64),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0u16..110).prop_map(Step::Pick),
        1 => (0u64..1500).prop_map(Step::Wait),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: every grid deals exactly n² tiles with correct multiplicities.
    #[test]
    fn prop_deck_multiplicities(n in 2i64..=10, seed in any::<u64>()) {
        let size = GridSize::new(n).unwrap();
        let deck = deck::generate(size, &mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), size.cell_count());
        prop_assert!(deck.validate().is_ok());

        let counts = deck.value_counts();
        let singles = counts.values().filter(|&&c| c == 1).count();
        prop_assert!(singles <= 1);
        prop_assert!(counts.values().all(|&c| c == 1 || c == 2));
        prop_assert_eq!(counts.values().filter(|&&c| c == 2).count(), size.pair_count());
    }

    /// Property: picking the pending tile twice leaves the board as if the
    /// second pick never charged a move.
    #[test]
    fn prop_cancel_is_free(n in 2i64..=10, seed in any::<u64>(), pick in 0u16..100) {
        let size = GridSize::new(n).unwrap();
        let id = TileId::new(pick % size.cell_count() as u16);
        let mut session = GameSession::new(
            deck::generate(size, &mut GameRng::new(seed)),
            MoveLimit::new(100).unwrap(),
        );
        let now = Instant::now();

        prop_assert_eq!(session.select_tile(id, now), Selection::Revealed(id));
        prop_assert_eq!(session.select_tile(id, now), Selection::Cancelled(id));
        prop_assert_eq!(session.move_count(), 1);
        prop_assert_eq!(*session.reveal_state(), RevealState::Idle);
        prop_assert!(session.solved().is_empty());
    }

    /// Property: invariants hold after every step of any play-through.
    #[test]
    fn prop_session_invariants(
        n in 2i64..=10,
        limit in 4i64..=100,
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 1..200),
    ) {
        let size = GridSize::new(n).unwrap();
        let mut session = GameSession::new(
            deck::generate(size, &mut GameRng::new(seed)),
            MoveLimit::new(limit).unwrap(),
        );
        let filler = session.deck().filler();
        let mut now = Instant::now();

        for step in steps {
            let before_moves = session.move_count();
            let before_solved = session.solved().clone();
            let before_outcome = session.outcome();
            let before_view = session.view();

            match step {
                Step::Pick(id) => {
                    let selection = session.select_tile(TileId::new(id), now);
                    if selection.is_rejected() {
                        prop_assert_eq!(session.view(), before_view);
                    }
                    let charged = u32::from(selection.charged_move());
                    prop_assert_eq!(session.move_count(), before_moves + charged);
                }
                Step::Wait(ms) => {
                    now += Duration::from_millis(ms);
                    session.tick(now);
                    prop_assert_eq!(session.move_count(), before_moves);
                }
            }

            let revealed = session.revealed();
            prop_assert!(revealed.len() <= 2);
            prop_assert!(revealed.iter().all(|id| !session.is_solved(*id)));

            prop_assert!(session.move_count() >= before_moves);
            prop_assert!(session.move_count() <= session.move_limit().get());
            prop_assert!(before_solved.is_subset(session.solved()));
            prop_assert_eq!(session.solved().len() % 2, 0);
            if let Some(filler) = filler {
                prop_assert!(!session.is_solved(filler));
            }

            if before_outcome.is_over() {
                prop_assert_eq!(session.outcome(), before_outcome);
            }
            match session.outcome() {
                Outcome::Won => {
                    prop_assert_eq!(session.solved().len(), session.deck().matchable_count());
                }
                Outcome::Lost => {
                    prop_assert!(session.move_count() >= session.move_limit().get());
                }
                Outcome::InProgress => {
                    prop_assert!(session.moves_remaining() > 0);
                }
            }
        }
    }

    /// Property: always picking a tile's partner wins in exactly one move per tile.
    #[test]
    fn prop_perfect_play_wins(n in 2i64..=7, seed in any::<u64>()) {
        let size = GridSize::new(n).unwrap();
        let mut session = GameSession::new(
            deck::generate(size, &mut GameRng::new(seed)),
            MoveLimit::new(100).unwrap(),
        );
        let now = Instant::now();
        let tiles: Vec<_> = session.deck().tiles().to_vec();

        for tile in tiles {
            if session.is_solved(tile.id) {
                continue;
            }
            let Some(partner) = session.deck().partner(tile.id) else {
                continue;
            };
            session.select_tile(tile.id, now);
            let matched = matches!(session.select_tile(partner, now), Selection::Matched(..));
            prop_assert!(matched);
        }

        prop_assert_eq!(session.outcome(), Outcome::Won);
        prop_assert_eq!(session.move_count() as usize, session.deck().matchable_count());
    }
}
