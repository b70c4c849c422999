//! Session phases.
//!
//! The lifecycle of one playthrough:
//!
//! ```text
//! NotStarted -> InProgress -> Locked (transient) -> InProgress -> ... -> Finished
//! ```
//!
//! `Locked` is entered only after a two-card mismatch and exits through
//! `tick` once the lockout delay has elapsed. Timestamps live on the
//! controller; the phase itself is plain state.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Board dealt, clock not yet running. The first accepted click starts
    /// the session.
    #[default]
    NotStarted,
    /// Accepting card selections.
    InProgress,
    /// Mismatch on display: all card-selection clicks ignored until the
    /// lockout expires.
    Locked,
    /// Won. Card clicks are ignored; only accessors remain interesting.
    Finished,
}

impl SessionPhase {
    /// Does this phase accept card-selection clicks?
    #[must_use]
    pub const fn accepts_clicks(self) -> bool {
        matches!(self, SessionPhase::NotStarted | SessionPhase::InProgress)
    }

    /// Is the board in its post-mismatch lockout?
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, SessionPhase::Locked)
    }

    /// Has the session been won?
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, SessionPhase::Finished)
    }
}
