//! Sound cues for the audio collaborator.
//!
//! The session emits cues as side effects of state transitions; the audio
//! layer drains them once per frame and plays whatever it finds. Delivery is
//! fire-once: draining empties the queue, and the session never waits on or
//! reacts to consumption. A session progresses identically whether or not
//! any cue is played.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A fire-once sound event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// A card was turned face-up.
    Flip,
    /// Two selected cards matched.
    Match,
    /// Two selected cards mismatched; the lockout is starting.
    Fail,
    /// The last pair was found.
    Victory,
}

/// Pending cues in emission order.
///
/// A frame emits at most a handful (flip + match + victory is the ceiling),
/// so the buffer is inline.
#[derive(Clone, Debug, Default)]
pub struct CueQueue {
    pending: SmallVec<[Cue; 4]>,
}

impl CueQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, cue: Cue) {
        self.pending.push(cue);
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }

    /// Take every pending cue, in emission order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Cue> {
        self.pending.drain(..).collect()
    }

    /// Number of pending cues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Is anything pending?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
