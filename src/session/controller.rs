//! The match-session state machine.
//!
//! One `MatchSession` is one playthrough: it deals the board, accepts card
//! clicks and frame ticks from the shell, evaluates selections, runs the
//! mismatch lockout, alternates turns in two-player mode, and detects the
//! win. Everything the shell renders or plays comes out through read
//! accessors and the cue queue.
//!
//! ## Timing
//!
//! Clicks carry no timestamp. The session adopts the most recent `tick(now)`
//! value as "current time" for clock start and lockout start, which is exact
//! under the frame-loop contract (`tick` runs at least once per frame, before
//! input is dispatched).

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Board, Card, CardView, DeckRegistry, DeckVariantId, PairId};
use crate::core::{GameMode, GameRng, PlayerId, PlayerMap};

use super::cue::{Cue, CueQueue};
use super::phase::SessionPhase;

/// How long mismatched cards stay on display before turning back over.
pub const LOCKOUT_SECS: f64 = 1.0;

/// One found pair, recorded in match order.
///
/// The history is the source of truth behind `scores()` and behind the
/// per-player pair stacks the two-player screen draws. It grows without
/// bound here; any display cap is the presentation layer's truncation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The matched identity.
    pub pair: PairId,
    /// Who found it.
    pub by: PlayerId,
    /// 1-based position in the session's match order.
    pub ordinal: u32,
}

/// Builder for a configured `MatchSession`.
///
/// ## Example
///
/// ```
/// use cardmind::core::GameMode;
/// use cardmind::session::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .mode(GameMode::TwoPlayer)
///     .player_names("Ada", "Grace")
///     .build(42);
///
/// assert_eq!(session.cards().len(), 24);
/// ```
pub struct SessionBuilder {
    mode: GameMode,
    variant: DeckVariantId,
    registry: DeckRegistry,
    name1: String,
    name2: String,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            mode: GameMode::Solitaire,
            variant: DeckVariantId::new(0),
            registry: DeckRegistry::builtin(),
            name1: String::new(),
            name2: String::new(),
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn deck_variant(mut self, variant: DeckVariantId) -> Self {
        self.variant = variant;
        self
    }

    /// Replace the built-in deck registry.
    pub fn registry(mut self, registry: DeckRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn player_names(mut self, name1: impl Into<String>, name2: impl Into<String>) -> Self {
        self.name1 = name1.into();
        self.name2 = name2.into();
        self
    }

    /// Build the session and deal its first board.
    pub fn build(self, seed: u64) -> MatchSession {
        let variant = self
            .registry
            .get(self.variant)
            .unwrap_or_else(|| panic!("Deck variant {:?} not registered", self.variant));
        assert!(
            variant.covers(self.mode.pair_count()),
            "Deck variant {:?} has too few faces for {}",
            self.variant,
            self.mode,
        );

        let seats = self.mode.player_count();
        let mut names = PlayerMap::with_default(seats);
        names[PlayerId::new(0)] = self.name1;
        if seats > 1 {
            names[PlayerId::new(1)] = self.name2;
        }

        let mut rng = GameRng::new(seed);
        let mut stream = rng.fork();
        let board = Board::deal(self.mode.pair_count(), &mut stream);

        MatchSession {
            mode: self.mode,
            board,
            rng,
            registry: self.registry,
            variant: self.variant,
            phase: SessionPhase::NotStarted,
            selection: SmallVec::new(),
            pairs_found: 0,
            active_player: PlayerId::new(0),
            scores: PlayerMap::with_value(seats, 0),
            names,
            history: Vector::new(),
            cues: CueQueue::new(),
            now: 0.0,
            started_at: None,
            final_elapsed: None,
            lockout_since: 0.0,
            master_volume: 100.0,
        }
    }
}

/// One playthrough of the memory game.
///
/// The session exclusively owns its board and all bookkeeping; state changes
/// only through `on_card_clicked`, `tick`, `restart`, and the setter
/// pass-throughs. Accessors are read-only snapshots.
pub struct MatchSession {
    mode: GameMode,
    board: Board,
    rng: GameRng,
    registry: DeckRegistry,
    variant: DeckVariantId,

    phase: SessionPhase,
    /// Face-up, unresolved card indices. Never more than two.
    selection: SmallVec<[usize; 2]>,
    pairs_found: usize,
    active_player: PlayerId,
    scores: PlayerMap<u32>,
    names: PlayerMap<String>,
    history: Vector<MatchRecord>,
    cues: CueQueue,

    /// Latest `tick` timestamp; the clock clicks are measured against.
    now: f64,
    started_at: Option<f64>,
    final_elapsed: Option<f64>,
    lockout_since: f64,

    /// 0-100, pass-through for the audio collaborator.
    master_volume: f32,
}

impl MatchSession {
    /// Create a session with default deck art and no player names.
    #[must_use]
    pub fn new(mode: GameMode, seed: u64) -> Self {
        SessionBuilder::new().mode(mode).build(seed)
    }

    /// Start configuring a session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    // === Input: clicks and ticks ===

    /// Handle a click on the card at `index`.
    ///
    /// Silently ignored while `Locked` or `Finished`, and on cards that are
    /// already face-up or matched. The first accepted click of a session
    /// starts the clock.
    ///
    /// Panics if `index` is out of bounds; the shell must bounds-check raw
    /// pointer events before calling.
    pub fn on_card_clicked(&mut self, index: usize) {
        assert!(
            index < self.board.len(),
            "Card index {} out of bounds for a {}-card board",
            index,
            self.board.len(),
        );

        if !self.phase.accepts_clicks() || !self.board.card(index).is_selectable() {
            return;
        }

        if self.phase == SessionPhase::NotStarted {
            self.phase = SessionPhase::InProgress;
            self.started_at = Some(self.now);
            debug!("session started ({})", self.mode);
        }

        self.board.card_mut(index).set_revealed(true);
        self.selection.push(index);
        self.cues.push(Cue::Flip);

        if self.selection.len() == 2 {
            self.evaluate_selection();
        }
    }

    /// Advance the session clock. Call at least once per rendered frame.
    ///
    /// Releases the mismatch lockout once `LOCKOUT_SECS` have elapsed:
    /// the selected cards turn back over and, in two-player mode, the turn
    /// passes. Turn order changes here and only here: a match never passes
    /// the turn.
    pub fn tick(&mut self, now: f64) {
        self.now = now;

        if self.phase.is_locked() && now - self.lockout_since >= LOCKOUT_SECS {
            for &index in &self.selection {
                self.board.card_mut(index).set_revealed(false);
            }
            self.selection.clear();
            self.phase = SessionPhase::InProgress;

            let seats = self.mode.player_count();
            self.active_player = PlayerId::new(((self.active_player.index() + 1) % seats) as u8);
            debug!("lockout released, {} to act", self.active_player);
        }
    }

    fn evaluate_selection(&mut self) {
        let (first, second) = (self.selection[0], self.selection[1]);
        let pair = self.board.card(first).pair();

        if pair == self.board.card(second).pair() {
            self.board.card_mut(first).set_matched();
            self.board.card_mut(second).set_matched();
            self.selection.clear();

            self.pairs_found += 1;
            self.scores[self.active_player] += 1;
            self.history.push_back(MatchRecord {
                pair,
                by: self.active_player,
                ordinal: self.pairs_found as u32,
            });
            self.cues.push(Cue::Match);
            debug!("{} matched {} ({}/{})", self.active_player, pair, self.pairs_found, self.mode.pair_count());

            if self.pairs_found == self.mode.pair_count() {
                self.phase = SessionPhase::Finished;
                self.final_elapsed = Some(self.started_at.map_or(0.0, |start| self.now - start));
                self.cues.push(Cue::Victory);
                debug!("session finished in {:.1}s", self.elapsed_time());
            }
        } else {
            self.phase = SessionPhase::Locked;
            self.lockout_since = self.now;
            self.cues.push(Cue::Fail);
            debug!("mismatch at {} / {}, locking out", first, second);
        }
    }

    // === Session lifecycle ===

    /// Start over without leaving the screen: fresh shuffle, zeroed scores,
    /// pairs, selection, history, and clock. Cosmetic settings (names, deck
    /// art, volume) survive.
    pub fn restart(&mut self) {
        let mut stream = self.rng.fork();
        self.board = Board::deal(self.mode.pair_count(), &mut stream);

        let seats = self.mode.player_count();
        self.phase = SessionPhase::NotStarted;
        self.selection.clear();
        self.pairs_found = 0;
        self.active_player = PlayerId::new(0);
        self.scores = PlayerMap::with_value(seats, 0);
        self.history = Vector::new();
        self.cues.clear();
        self.started_at = None;
        self.final_elapsed = None;
        self.lockout_since = 0.0;
        debug!("session restarted ({})", self.mode);
    }

    /// Switch between solitaire and two-player. A real change re-deals via
    /// `restart`; setting the current mode is a no-op.
    pub fn set_mode(&mut self, mode: GameMode) {
        if mode == self.mode {
            return;
        }

        let variant = self.registry.get(self.variant).expect("Variant was validated at build");
        assert!(
            variant.covers(mode.pair_count()),
            "Deck variant {:?} has too few faces for {}",
            self.variant,
            mode,
        );

        self.mode = mode;

        let seats = mode.player_count();
        let old_names = self.names.clone();
        self.names = PlayerMap::new(seats, |p| {
            if p.index() < old_names.player_count() {
                old_names[p].clone()
            } else {
                String::new()
            }
        });

        self.restart();
    }

    // === Cosmetic pass-throughs ===

    /// Store display names. The second name is kept only in two-player mode.
    pub fn set_player_names(&mut self, name1: impl Into<String>, name2: impl Into<String>) {
        self.names[PlayerId::new(0)] = name1.into();
        if self.mode.player_count() > 1 {
            self.names[PlayerId::new(1)] = name2.into();
        }
    }

    /// Display name for a seat. Empty when never set.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    /// Select which deck art the presentation layer draws.
    ///
    /// Panics on an unregistered variant or one with too few faces for the
    /// current mode (precondition violation). No effect on game logic.
    pub fn set_deck_variant(&mut self, variant: DeckVariantId) {
        let found = self
            .registry
            .get(variant)
            .unwrap_or_else(|| panic!("Deck variant {:?} not registered", variant));
        assert!(
            found.covers(self.mode.pair_count()),
            "Deck variant {:?} has too few faces for {}",
            variant,
            self.mode,
        );
        self.variant = variant;
    }

    /// The selected deck-art variant.
    #[must_use]
    pub fn deck_variant(&self) -> DeckVariantId {
        self.variant
    }

    /// The variants available to `set_deck_variant`.
    #[must_use]
    pub fn deck_registry(&self) -> &DeckRegistry {
        &self.registry
    }

    /// Master volume for the audio collaborator, clamped to 0-100.
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 100.0);
    }

    /// Current master volume (0-100).
    #[must_use]
    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    // === Read accessors ===

    /// The session's mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Has the session been won?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Read-only view of the board's cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.board.cards()
    }

    /// Plain-data snapshot of every card for the rendering layer.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CardView> {
        self.board.snapshot()
    }

    /// Currently selected (face-up, unresolved) card indices.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Pairs found so far.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    /// Seconds since the first accepted click. Zero before the session
    /// starts; frozen at the winning tick once finished.
    #[must_use]
    pub fn elapsed_time(&self) -> f64 {
        match (self.final_elapsed, self.started_at) {
            (Some(frozen), _) => frozen,
            (None, Some(start)) => self.now - start,
            (None, None) => 0.0,
        }
    }

    /// Per-seat pair counts. In solitaire the single entry equals
    /// `pairs_found`.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Whose turn it is. Always seat 0 in solitaire.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Every found pair in match order. Unbounded; display caps are the
    /// presentation layer's concern.
    #[must_use]
    pub fn history(&self) -> &Vector<MatchRecord> {
        &self.history
    }

    /// The pairs a given seat has found, in match order.
    pub fn history_for(&self, player: PlayerId) -> impl Iterator<Item = &MatchRecord> {
        self.history.iter().filter(move |r| r.by == player)
    }

    /// Take every pending sound cue, in emission order.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        self.cues.drain()
    }
}
