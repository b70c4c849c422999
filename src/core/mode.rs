//! Game modes and board geometry.
//!
//! The mode fixes the core contract (pair target, seat count) and carries the
//! grid shape as a hint for the presentation layer. The session controller
//! never looks at the grid; it deals `card_count()` cards and counts pairs.

use serde::{Deserialize, Serialize};

/// The two playthrough modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One player against the clock. 6 pairs on a 3x4 board.
    #[default]
    Solitaire,
    /// Two players alternating on mismatches. 12 pairs on a 4x6 board.
    TwoPlayer,
}

impl GameMode {
    /// Number of identity pairs dealt, and the win target.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        match self {
            GameMode::Solitaire => 6,
            GameMode::TwoPlayer => 12,
        }
    }

    /// Total cards on the board (two per pair).
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.pair_count() * 2
    }

    /// Number of seats.
    #[must_use]
    pub const fn player_count(self) -> usize {
        match self {
            GameMode::Solitaire => 1,
            GameMode::TwoPlayer => 2,
        }
    }

    /// Board grid shape. Presentation hint; the core only guarantees
    /// `rows * cols == card_count()`.
    #[must_use]
    pub const fn grid(self) -> GridSpec {
        match self {
            GameMode::Solitaire => GridSpec { rows: 3, cols: 4 },
            GameMode::TwoPlayer => GridSpec { rows: 4, cols: 6 },
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Solitaire => write!(f, "Solitaire"),
            GameMode::TwoPlayer => write!(f, "Two Player"),
        }
    }
}

/// Rectangular card layout for a mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSpec {
    /// Rows of cards.
    pub rows: usize,
    /// Columns of cards.
    pub cols: usize,
}

impl GridSpec {
    /// Total card slots in the grid.
    #[must_use]
    pub const fn capacity(self) -> usize {
        self.rows * self.cols
    }
}
