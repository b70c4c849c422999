//! Board model: paired cards, dealing, and deck-art variants.
//!
//! ## Key Types
//!
//! - `PairId`: The integer identity shared by exactly two cards
//! - `Card`: One card: identity plus revealed/matched flags
//! - `CardView`: Plain snapshot of a card for the rendering layer
//! - `Board`: The shuffled 2xN card sequence for one session
//! - `DeckRegistry` / `DeckVariant`: Identity-to-asset mapping the
//!   presentation layer draws faces from; no effect on game logic

pub mod board;
pub mod card;
pub mod variants;

pub use board::Board;
pub use card::{Card, CardView, PairId};
pub use variants::{DeckRegistry, DeckVariant, DeckVariantId};
