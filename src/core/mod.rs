//! Core session types: players, RNG, game modes.
//!
//! These are the building blocks the board model and session controller
//! share. Everything here is plain data; the state machine lives in
//! `crate::session`.

pub mod mode;
pub mod player;
pub mod rng;

pub use mode::{GameMode, GridSpec};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
