//! Two-player session scenarios: turn alternation, scoring, match history.
//!
//! Turn order is the one asymmetry between the modes: the active player
//! changes exactly when a mismatch lockout expires, and a match always keeps
//! the turn.

use cardmind::core::{GameMode, PlayerId};
use cardmind::session::{MatchSession, SessionPhase, LOCKOUT_SECS};

/// Indices of the first face-down pair sharing an identity.
fn find_pair(session: &MatchSession) -> (usize, usize) {
    let cards = session.cards();
    for i in 0..cards.len() {
        if !cards[i].is_selectable() {
            continue;
        }
        for j in (i + 1)..cards.len() {
            if cards[j].is_selectable() && cards[i].pair() == cards[j].pair() {
                return (i, j);
            }
        }
    }
    unreachable!("an unfinished board always has a face-down pair");
}

/// Indices of two face-down cards with different identities.
fn find_mismatch(session: &MatchSession) -> (usize, usize) {
    let cards = session.cards();
    for i in 0..cards.len() {
        if !cards[i].is_selectable() {
            continue;
        }
        for j in (i + 1)..cards.len() {
            if cards[j].is_selectable() && cards[i].pair() != cards[j].pair() {
                return (i, j);
            }
        }
    }
    unreachable!("mismatch requested on a board without one");
}

/// Click a deliberate mismatch and wait out the lockout, passing the turn.
fn force_turn_pass(session: &mut MatchSession, t: &mut f64) {
    let (a, b) = find_mismatch(session);
    session.on_card_clicked(a);
    session.on_card_clicked(b);
    *t += LOCKOUT_SECS + 0.1;
    session.tick(*t);
}

/// Scenario C: the turn passes on a mismatch expiry, and the next match goes
/// to the new active player only.
#[test]
fn turn_passes_on_mismatch_and_scores_follow() {
    let mut session = MatchSession::new(GameMode::TwoPlayer, 42);
    let mut t = 0.0;
    session.tick(t);

    assert_eq!(session.active_player(), PlayerId::new(0));

    force_turn_pass(&mut session, &mut t);
    assert_eq!(session.active_player(), PlayerId::new(1));
    assert_eq!(session.phase(), SessionPhase::InProgress);

    let (a, b) = find_pair(&session);
    session.on_card_clicked(a);
    session.on_card_clicked(b);

    assert_eq!(session.scores()[PlayerId::new(1)], 1);
    assert_eq!(session.scores()[PlayerId::new(0)], 0);
    // A match never passes the turn
    assert_eq!(session.active_player(), PlayerId::new(1));
}

/// The active player is stable across matches and across entire lockouts
/// that have not yet expired.
#[test]
fn turn_changes_only_at_lockout_expiry() {
    let mut session = MatchSession::new(GameMode::TwoPlayer, 42);
    let mut t = 10.0;
    session.tick(t);

    let (a, b) = find_pair(&session);
    session.on_card_clicked(a);
    session.on_card_clicked(b);
    assert_eq!(session.active_player(), PlayerId::new(0));

    let (c, d) = find_mismatch(&session);
    session.on_card_clicked(c);
    session.on_card_clicked(d);

    // Mid-lockout: the turn has not passed yet
    t += 0.5;
    session.tick(t);
    assert_eq!(session.active_player(), PlayerId::new(0));

    t += 0.6;
    session.tick(t);
    assert_eq!(session.active_player(), PlayerId::new(1));
}

/// Scenario D: a full game accumulates twelve pairs; the scoreboard matches
/// who actually found what and sums to the pair target.
#[test]
fn full_game_scores_sum_to_target() {
    let mut session = MatchSession::new(GameMode::TwoPlayer, 7);
    let mut t = 0.0;
    session.tick(t);

    let mut expected = [0u32; 2];

    while !session.is_finished() {
        let active = session.active_player();
        let (a, b) = find_pair(&session);
        session.on_card_clicked(a);
        session.on_card_clicked(b);
        expected[active.index()] += 1;

        // Pass the turn while a mismatch is still possible, so both seats
        // end up on the scoreboard.
        let remaining = 12 - session.pairs_found();
        if !session.is_finished() && remaining > 1 {
            force_turn_pass(&mut session, &mut t);
        }
    }

    assert_eq!(session.pairs_found(), 12);
    assert_eq!(session.scores()[PlayerId::new(0)], expected[0]);
    assert_eq!(session.scores()[PlayerId::new(1)], expected[1]);
    assert_eq!(session.scores().values().sum::<u32>(), 12);
    assert!(expected[0] > 0 && expected[1] > 0);
}

/// The history is the per-player source of truth behind the scoreboard.
#[test]
fn history_matches_scores() {
    let mut session = MatchSession::new(GameMode::TwoPlayer, 7);
    let mut t = 0.0;
    session.tick(t);

    for _ in 0..4 {
        let (a, b) = find_pair(&session);
        session.on_card_clicked(a);
        session.on_card_clicked(b);
        force_turn_pass(&mut session, &mut t);
    }

    assert_eq!(session.history().len(), 4);
    for player in [PlayerId::new(0), PlayerId::new(1)] {
        let from_history = session.history_for(player).count() as u32;
        assert_eq!(from_history, session.scores()[player]);
    }

    // Ordinals run 1..=n in match order
    let ordinals: Vec<_> = session.history().iter().map(|r| r.ordinal).collect();
    assert_eq!(ordinals, vec![1, 2, 3, 4]);
}

/// Scores freeze at victory: the finished session rejects everything.
#[test]
fn scores_freeze_after_victory() {
    let mut session = MatchSession::new(GameMode::TwoPlayer, 7);
    let mut t = 0.0;
    session.tick(t);

    while !session.is_finished() {
        let (a, b) = find_pair(&session);
        session.on_card_clicked(a);
        session.on_card_clicked(b);
        t += 1.0;
        session.tick(t);
    }

    let frozen: Vec<u32> = session.scores().values().copied().collect();
    session.on_card_clicked(0);
    session.tick(t + 30.0);

    let after: Vec<u32> = session.scores().values().copied().collect();
    assert_eq!(frozen, after);
    assert_eq!(after.iter().sum::<u32>(), 12);
}

/// Restart in two-player mode zeroes both seats and the history.
#[test]
fn restart_zeroes_both_seats() {
    let mut session = MatchSession::new(GameMode::TwoPlayer, 7);
    let mut t = 0.0;
    session.tick(t);

    let (a, b) = find_pair(&session);
    session.on_card_clicked(a);
    session.on_card_clicked(b);
    force_turn_pass(&mut session, &mut t);

    session.restart();

    assert_eq!(session.scores()[PlayerId::new(0)], 0);
    assert_eq!(session.scores()[PlayerId::new(1)], 0);
    assert_eq!(session.active_player(), PlayerId::new(0));
    assert!(session.history().is_empty());
}

/// Player names are a cosmetic pass-through, preserved across restarts.
#[test]
fn player_names_survive_restart() {
    let mut session = MatchSession::builder()
        .mode(GameMode::TwoPlayer)
        .player_names("Ada", "Grace")
        .build(42);

    session.restart();

    assert_eq!(session.player_name(PlayerId::new(0)), "Ada");
    assert_eq!(session.player_name(PlayerId::new(1)), "Grace");
}
