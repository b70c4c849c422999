//! The board: a shuffled sequence of paired cards.
//!
//! A board is dealt once per session: `pair_count` identities, each appearing
//! exactly twice, face-down, in a uniformly random order. The order is fixed
//! for the board's lifetime: "play again" deals a new board rather than
//! reshuffling this one.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardView, PairId};
use crate::core::rng::GameRng;

/// The shuffled 2xN card sequence for one session.
///
/// The board owns its cards. The session controller flips flags through
/// crate-internal access; everything public is read-only.
///
/// ## Example
///
/// ```
/// use cardmind::cards::Board;
/// use cardmind::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let board = Board::deal(6, &mut rng);
///
/// assert_eq!(board.len(), 12);
/// assert!(board.cards().iter().all(|c| !c.is_revealed()));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
    pair_count: usize,
}

impl Board {
    /// Deal a fresh board: `pair_count` identities, two cards each,
    /// face-down, uniformly shuffled.
    ///
    /// Panics if `pair_count` is zero (precondition violation).
    #[must_use]
    pub fn deal(pair_count: usize, rng: &mut GameRng) -> Self {
        assert!(pair_count > 0, "Board needs at least one pair");

        let mut cards = Vec::with_capacity(pair_count * 2);
        for id in 0..pair_count as u32 {
            cards.push(Card::face_down(PairId::new(id)));
            cards.push(Card::face_down(PairId::new(id)));
        }
        rng.shuffle(&mut cards);

        Self { cards, pair_count }
    }

    /// Number of cards (always `2 * pair_count`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// A dealt board is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of identity pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Read-only view of all cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Read-only access to one card.
    ///
    /// Panics if `index` is out of bounds (precondition violation; real UI
    /// events must be bounds-checked by the shell).
    #[must_use]
    pub fn card(&self, index: usize) -> &Card {
        &self.cards[index]
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> &mut Card {
        &mut self.cards[index]
    }

    /// Snapshot of every card for the rendering layer.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CardView> {
        self.cards.iter().map(|c| c.view()).collect()
    }

    /// Have all cards been matched?
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_size_and_identities() {
        let mut rng = GameRng::new(42);

        for pair_count in 1..=16 {
            let board = Board::deal(pair_count, &mut rng);

            assert_eq!(board.len(), pair_count * 2);
            assert_eq!(board.pair_count(), pair_count);

            // Each identity in [0, N) appears exactly twice
            for id in 0..pair_count as u32 {
                let copies = board
                    .cards()
                    .iter()
                    .filter(|c| c.pair() == PairId::new(id))
                    .count();
                assert_eq!(copies, 2, "identity {} should appear twice", id);
            }
        }
    }

    #[test]
    fn test_deal_all_face_down() {
        let mut rng = GameRng::new(42);
        let board = Board::deal(12, &mut rng);

        assert!(board.cards().iter().all(|c| !c.is_revealed()));
        assert!(board.cards().iter().all(|c| !c.is_matched()));
        assert!(!board.is_cleared());
    }

    #[test]
    fn test_deal_is_deterministic() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        let a = Board::deal(12, &mut rng1);
        let b = Board::deal(12, &mut rng2);

        let ids_a: Vec<_> = a.cards().iter().map(|c| c.pair()).collect();
        let ids_b: Vec<_> = b.cards().iter().map(|c| c.pair()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_deal_shuffles() {
        let mut rng = GameRng::new(42);
        let board = Board::deal(12, &mut rng);

        // The unshuffled layout would be 0,0,1,1,2,2,... - vanishingly
        // unlikely to survive a 24-card shuffle.
        let sorted_layout: Vec<_> = (0..12u32).flat_map(|i| [i, i]).collect();
        let actual: Vec<_> = board.cards().iter().map(|c| c.pair().raw()).collect();
        assert_ne!(actual, sorted_layout);
    }

    #[test]
    fn test_is_cleared() {
        let mut rng = GameRng::new(42);
        let mut board = Board::deal(2, &mut rng);

        for i in 0..board.len() {
            board.card_mut(i).set_matched();
        }
        assert!(board.is_cleared());
    }

    #[test]
    fn test_snapshot_mirrors_cards() {
        let mut rng = GameRng::new(42);
        let mut board = Board::deal(3, &mut rng);
        board.card_mut(0).set_revealed(true);

        let snapshot = board.snapshot();
        assert_eq!(snapshot.len(), 6);
        assert!(snapshot[0].revealed);
        assert_eq!(snapshot[1].pair, board.card(1).pair());
    }

    #[test]
    #[should_panic(expected = "at least one pair")]
    fn test_zero_pairs_panics() {
        let mut rng = GameRng::new(42);
        let _ = Board::deal(0, &mut rng);
    }
}
