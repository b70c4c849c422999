//! Cards and pairing identities.
//!
//! A card's identity is fixed when the board is dealt; only the
//! `revealed`/`matched` flags change afterwards, and only the session
//! controller may change them. The rendering layer reads cards through
//! accessors or `CardView` snapshots.

use serde::{Deserialize, Serialize};

/// Pairing identity shared by exactly two cards on a board.
///
/// Identities are 0-based and dense: a board with N pairs uses `0..N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pairing identity.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw identity value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// One card on the board.
///
/// Fields are private: the board owns its cards and the session controller
/// holds the only mutation path (crate-internal setters).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pair: PairId,
    revealed: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub(crate) const fn face_down(pair: PairId) -> Self {
        Self {
            pair,
            revealed: false,
            matched: false,
        }
    }

    /// The pairing identity.
    #[must_use]
    pub const fn pair(self) -> PairId {
        self.pair
    }

    /// Is this card currently face-up?
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Has this card been matched with its partner?
    #[must_use]
    pub const fn is_matched(self) -> bool {
        self.matched
    }

    /// Can a click select this card? False once revealed or matched.
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        !self.revealed && !self.matched
    }

    pub(crate) fn set_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    pub(crate) fn set_matched(&mut self) {
        self.matched = true;
    }

    /// Plain-data snapshot for the rendering layer.
    #[must_use]
    pub fn view(self) -> CardView {
        CardView {
            pair: self.pair,
            revealed: self.revealed,
            matched: self.matched,
        }
    }
}

/// Snapshot of one card: identity plus flags.
///
/// All fields public: this is the wire-shaped value handed to the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Pairing identity.
    pub pair: PairId,
    /// Face-up?
    pub revealed: bool,
    /// Already matched?
    pub matched: bool,
}
