//! Board-model property tests.
//!
//! The deal invariants hold for every pair count, not just the two the game
//! modes use: 2N cards, each identity exactly twice, uniform shuffle that
//! permutes without adding or losing cards.

use cardmind::cards::Board;
use cardmind::core::GameRng;
use proptest::prelude::*;

#[test]
fn dealt_board_has_two_cards_per_identity() {
    let mut rng = GameRng::new(42);

    for pair_count in 1..=32 {
        let board = Board::deal(pair_count, &mut rng);
        assert_eq!(board.len(), pair_count * 2);

        let mut counts = vec![0usize; pair_count];
        for card in board.cards() {
            counts[card.pair().raw() as usize] += 1;
        }
        assert!(
            counts.iter().all(|&c| c == 2),
            "every identity in [0, {}) should appear exactly twice",
            pair_count
        );
    }
}

#[test]
fn dealt_board_is_face_down_and_unmatched() {
    let mut rng = GameRng::new(42);
    let board = Board::deal(12, &mut rng);

    for card in board.cards() {
        assert!(!card.is_revealed());
        assert!(!card.is_matched());
        assert!(card.is_selectable());
    }
}

#[test]
fn same_seed_deals_identical_boards() {
    let layout = |seed: u64| {
        let mut rng = GameRng::new(seed);
        Board::deal(12, &mut rng)
            .cards()
            .iter()
            .map(|c| c.pair().raw())
            .collect::<Vec<_>>()
    };

    assert_eq!(layout(7), layout(7));
    assert_ne!(layout(7), layout(8));
}

#[test]
fn snapshot_matches_board_order() {
    let mut rng = GameRng::new(42);
    let board = Board::deal(6, &mut rng);

    let snapshot = board.snapshot();
    assert_eq!(snapshot.len(), board.len());
    for (view, card) in snapshot.iter().zip(board.cards()) {
        assert_eq!(view.pair, card.pair());
        assert_eq!(view.revealed, card.is_revealed());
        assert_eq!(view.matched, card.is_matched());
    }
}

proptest! {
    #[test]
    fn deal_invariants_hold_for_any_seed(pair_count in 1usize..=32, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let board = Board::deal(pair_count, &mut rng);

        prop_assert_eq!(board.len(), pair_count * 2);

        let mut counts = vec![0usize; pair_count];
        for card in board.cards() {
            counts[card.pair().raw() as usize] += 1;
        }
        prop_assert!(counts.iter().all(|&c| c == 2));
    }

    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut data: Vec<u32> = (0..24).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        let mut sorted = data;
        sorted.sort_unstable();
        prop_assert_eq!(sorted, original);
    }
}
