//! The match session: one playthrough from deal to victory.
//!
//! ## Key Types
//!
//! - `SessionPhase`: `NotStarted -> InProgress -> Locked -> ... -> Finished`
//! - `Cue`: Fire-once sound events for the audio collaborator
//! - `MatchSession`: The state machine driven by clicks and frame ticks
//! - `SessionBuilder`: Configured construction (mode, names, deck art)
//!
//! The session owns its board and is the only mutator of game state. The
//! shell calls `on_card_clicked` for bounds-checked card clicks and `tick`
//! once per frame, and reads everything else through accessors.

pub mod controller;
pub mod cue;
pub mod phase;

pub use controller::{MatchRecord, MatchSession, SessionBuilder, LOCKOUT_SECS};
pub use cue::{Cue, CueQueue};
pub use phase::SessionPhase;
