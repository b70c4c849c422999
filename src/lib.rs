//! # cardmind
//!
//! Game-logic core for a desktop memory-matching (concentration) card game.
//!
//! ## Design Principles
//!
//! 1. **Logic Only**: No windowing, rendering, audio, or asset code. The
//!    presentation shell feeds in clicks and frame times and reads back
//!    snapshots and sound cues.
//!
//! 2. **One Mutator**: A `MatchSession` exclusively owns its `Board` and all
//!    session state. State changes only through the session's operations;
//!    everything else is a read accessor.
//!
//! 3. **Polling Over Callbacks**: The mismatch lockout is a stored timestamp
//!    compared against the time supplied by `tick`, called once per frame.
//!    No timers, no threads.
//!
//! ## Architecture
//!
//! - **Deterministic Sessions**: Seeded ChaCha8 RNG; the same seed deals the
//!   same board, and each restart forks an independent stream.
//!
//! - **Fire-Once Cues**: Audio events (`Flip`, `Match`, `Fail`, `Victory`)
//!   accumulate in a queue the audio layer drains. Game state never depends
//!   on whether a cue was consumed.
//!
//! ## Modules
//!
//! - `core`: Player IDs, per-player storage, RNG, game modes
//! - `cards`: Board model - paired cards, dealing, deck-art variants
//! - `session`: The match state machine - clicks, lockout, turns, victory

pub mod core;
pub mod cards;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameMode, GameRng, GameRngState, GridSpec, PlayerId, PlayerMap};

pub use crate::cards::{Board, Card, CardView, DeckRegistry, DeckVariant, DeckVariantId, PairId};

pub use crate::session::{
    Cue, CueQueue, MatchRecord, MatchSession, SessionBuilder, SessionPhase,
};
