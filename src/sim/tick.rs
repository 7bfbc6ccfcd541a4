//! Session tick and controller operations
//!
//! One `tick` per animation frame advances every time-driven behavior:
//! feedback expiry (always), then the spawner and countdown cadences (only
//! while playing). Brush attempts arrive between ticks via `attempt_clean`.
//! Everything runs on one logical thread; each operation is atomic with
//! respect to the others.

use glam::Vec2;
use rand::Rng;

use super::board::{GermKind, ToothId};
use super::state::{FeedbackKind, GameEvent, GameSession, GameStatus};
use crate::consts::*;

/// Advance the session by `dt_ms` of wall-clock time.
pub fn tick(session: &mut GameSession, dt_ms: f64) {
    // Feedback particles age out on their own schedule, independent of
    // status: a transition to Finished must not freeze or drop them.
    for fb in &mut session.feedback {
        fb.age_ms += dt_ms;
    }
    session.feedback.retain(|fb| fb.age_ms < FEEDBACK_TTL_MS);

    if session.status != GameStatus::Playing {
        return;
    }

    // Spawner cadence. The accumulator only drains while playing, so the
    // transition out of Playing below also stops any queued spawn steps.
    session.spawn_acc_ms += dt_ms;
    while session.spawn_acc_ms >= SPAWN_INTERVAL_MS && session.status == GameStatus::Playing {
        session.spawn_acc_ms -= SPAWN_INTERVAL_MS;
        if session.rng.random::<f64>() < SPAWN_CHANCE {
            spawn_germ(session);
        }
    }

    // Countdown cadence
    session.timer_acc_ms += dt_ms;
    while session.timer_acc_ms >= TIMER_INTERVAL_MS && session.status == GameStatus::Playing {
        session.timer_acc_ms -= TIMER_INTERVAL_MS;
        if session.seconds_remaining <= 1 {
            session.seconds_remaining = 0;
            finish_round(session);
        } else {
            session.seconds_remaining -= 1;
        }
    }
}

/// Occupy a uniformly random clean slot with a uniformly random germ kind.
///
/// A saturated board is a silent no-op; that is the backpressure mechanism.
/// Returns whether a germ was placed. Public so tests and the native demo
/// can force a spawn without waiting out the cadence.
pub fn spawn_germ(session: &mut GameSession) -> bool {
    let empty = session.board.empty_slots();
    if empty.is_empty() {
        return false;
    }
    let slot = empty[session.rng.random_range(0..empty.len())];
    let kind = GermKind::ALL[session.rng.random_range(0..GermKind::ALL.len())];
    session.board.occupy(slot, kind)
}

/// Handle one brush attempt at tooth `id`, sampled at screen position (x, y).
///
/// No-op unless playing. Brushing always rolls for ambient foam first; a
/// germ on the slot then scores, empties it and emits the success burst.
/// A miss leaves score and streak untouched.
pub fn attempt_clean(session: &mut GameSession, id: ToothId, x: f32, y: f32) {
    if session.status != GameStatus::Playing {
        return;
    }

    if session.rng.random::<f64>() < AMBIENT_FEEDBACK_CHANCE {
        session.emit_feedback(Vec2::new(x, y), FeedbackKind::Bubble);
        // Swish only sometimes, so rapid strokes don't drown everything out
        if session.rng.random::<f64>() < AMBIENT_SOUND_CHANCE {
            session.events.push(GameEvent::BrushSwish);
        }
    }

    if let Some(kind) = session.board.clear(id) {
        session.score += 1;
        session.streak += 1;
        session.emit_feedback(Vec2::new(x, y), FeedbackKind::Sparkle);
        session.events.push(GameEvent::GermBrushed { tooth: id, kind });
    }
}

fn finish_round(session: &mut GameSession) {
    session.status = GameStatus::Finished;
    session.events.push(GameEvent::RoundFinished {
        score: session.score,
        cleanliness: session.cleanliness_percent(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_session(seconds: u32) -> GameSession {
        let mut session = GameSession::new(12345);
        session.start(seconds);
        session
    }

    #[test]
    fn test_countdown_decrements_per_second() {
        let mut session = playing_session(30);
        tick(&mut session, TIMER_INTERVAL_MS);
        assert_eq!(session.seconds_remaining, 29);
        assert_eq!(session.status, GameStatus::Playing);

        // Sub-interval ticks accumulate without stepping the countdown
        tick(&mut session, 400.0);
        tick(&mut session, 400.0);
        assert_eq!(session.seconds_remaining, 29);
        tick(&mut session, 200.0);
        assert_eq!(session.seconds_remaining, 28);
    }

    #[test]
    fn test_countdown_finishes_exactly_once() {
        let mut session = playing_session(2);
        tick(&mut session, TIMER_INTERVAL_MS);
        assert_eq!(session.seconds_remaining, 1);

        tick(&mut session, TIMER_INTERVAL_MS);
        assert_eq!(session.seconds_remaining, 0);
        assert_eq!(session.status, GameStatus::Finished);
        let finishes = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::RoundFinished { .. }))
            .count();
        assert_eq!(finishes, 1);

        // Further ticks are inert: no countdown, no spawns, no new events
        let occupied = session.board.occupied_count();
        for _ in 0..10 {
            tick(&mut session, TIMER_INTERVAL_MS);
        }
        assert_eq!(session.seconds_remaining, 0);
        assert_eq!(session.status, GameStatus::Finished);
        assert_eq!(session.board.occupied_count(), occupied);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_large_dt_cannot_tick_past_finish() {
        let mut session = playing_session(3);
        // One oversized frame worth more steps than seconds remain
        tick(&mut session, TIMER_INTERVAL_MS * 20.0);
        assert_eq!(session.seconds_remaining, 0);
        assert_eq!(session.status, GameStatus::Finished);
    }

    #[test]
    fn test_spawner_targets_only_empty_slots() {
        let mut session = playing_session(30);
        for _ in 0..200 {
            spawn_germ(&mut session);
            assert!(session.board.occupied_count() <= session.board.len());
        }
        // Board is saturated now; further spawns report no placement
        assert_eq!(session.board.occupied_count(), session.board.len());
        assert!(!spawn_germ(&mut session));

        // Cadence ticks on a saturated board are absorbed quietly too
        tick(&mut session, SPAWN_INTERVAL_MS * 4.0);
        assert_eq!(session.board.occupied_count(), session.board.len());
    }

    #[test]
    fn test_spawner_stops_outside_playing() {
        let mut session = playing_session(30);
        session.restart();
        let before = session.board.occupied_count();
        // Worth many spawn intervals, but the session is idle
        tick(&mut session, SPAWN_INTERVAL_MS * 50.0);
        assert_eq!(session.board.occupied_count(), before);
        assert_eq!(session.spawn_acc_ms, 0.0);
    }

    #[test]
    fn test_attempt_clean_scores_and_empties() {
        let mut session = playing_session(30);
        session.board.occupy(5, GermKind::Slime);

        attempt_clean(&mut session, 5, 120.0, 80.0);
        assert_eq!(session.score, 1);
        assert_eq!(session.streak, 1);
        assert!(session.board.get(5).unwrap().is_clean());
        assert!(session
            .drain_events()
            .contains(&GameEvent::GermBrushed { tooth: 5, kind: GermKind::Slime }));
        assert!(session
            .feedback
            .iter()
            .any(|f| f.kind == FeedbackKind::Sparkle));

        // Immediately brushing the now-clean tooth changes nothing
        attempt_clean(&mut session, 5, 120.0, 80.0);
        assert_eq!(session.score, 1);
        assert_eq!(session.streak, 1);
    }

    #[test]
    fn test_miss_never_resets_streak() {
        let mut session = playing_session(30);
        session.board.occupy(0, GermKind::Microbe);
        session.board.occupy(1, GermKind::Candy);

        attempt_clean(&mut session, 0, 0.0, 0.0);
        attempt_clean(&mut session, 7, 0.0, 0.0); // clean tooth in between
        attempt_clean(&mut session, 1, 0.0, 0.0);
        assert_eq!(session.score, 2);
        assert_eq!(session.streak, 2);
    }

    #[test]
    fn test_attempt_clean_on_unknown_tooth_is_harmless() {
        let mut session = playing_session(30);
        attempt_clean(&mut session, 999, 0.0, 0.0);
        attempt_clean(&mut session, 999, 0.0, 0.0);
        assert_eq!(session.score, 0);
        assert_eq!(session.streak, 0);
    }

    #[test]
    fn test_attempt_clean_outside_playing_is_noop() {
        let mut session = GameSession::new(42);
        session.board.occupy(3, GermKind::Invader);
        attempt_clean(&mut session, 3, 0.0, 0.0);
        assert_eq!(session.score, 0);
        assert!(session.feedback.is_empty());
        assert!(session.events.is_empty());

        session.start(5);
        tick(&mut session, TIMER_INTERVAL_MS * 5.0);
        assert_eq!(session.status, GameStatus::Finished);
        // Stray attempts after the whistle change nothing
        let occupied = session.board.occupied_count();
        for id in 0..session.board.len() {
            attempt_clean(&mut session, id, 0.0, 0.0);
        }
        assert_eq!(session.score, 0);
        assert_eq!(session.board.occupied_count(), occupied);
    }

    #[test]
    fn test_feedback_expires_after_ttl_in_any_status() {
        let mut session = GameSession::new(42);
        session.emit_feedback(Vec2::new(10.0, 10.0), FeedbackKind::Bubble);

        // Idle session still sweeps
        tick(&mut session, FEEDBACK_TTL_MS / 2.0);
        assert_eq!(session.feedback.len(), 1);
        tick(&mut session, FEEDBACK_TTL_MS / 2.0);
        assert!(session.feedback.is_empty());

        // Expiry keeps running after the round is over
        session.start(1);
        tick(&mut session, TIMER_INTERVAL_MS);
        assert_eq!(session.status, GameStatus::Finished);
        session.emit_feedback(Vec2::new(5.0, 5.0), FeedbackKind::Sparkle);
        tick(&mut session, FEEDBACK_TTL_MS / 2.0);
        assert_eq!(session.feedback.len(), 1);
        tick(&mut session, FEEDBACK_TTL_MS / 2.0);
        assert!(session.feedback.is_empty());
    }

    #[test]
    fn test_cleanliness_hundred_iff_board_clean() {
        let mut session = playing_session(30);
        assert_eq!(session.cleanliness_percent(), 100);
        spawn_germ(&mut session);
        assert!(session.cleanliness_percent() < 100);
        let dirty = session.board.occupied_slots();
        attempt_clean(&mut session, dirty[0], 0.0, 0.0);
        assert_eq!(session.cleanliness_percent(), 100);
    }

    // A whole round end to end: start a blitz, bust the one germ, run out
    // the clock.
    #[test]
    fn test_blitz_round_scenario() {
        let mut session = GameSession::new(777);
        session.start(30);
        assert_eq!(session.board.len(), 20);
        assert_eq!(session.seconds_remaining, 30);

        assert!(spawn_germ(&mut session));
        assert_eq!(session.board.occupied_count(), 1);

        let target = session.board.occupied_slots()[0];
        attempt_clean(&mut session, target, 64.0, 48.0);
        assert_eq!(session.score, 1);
        assert_eq!(session.streak, 1);
        assert!(session.board.get(target).unwrap().is_clean());

        for _ in 0..30 {
            tick(&mut session, TIMER_INTERVAL_MS);
        }
        assert_eq!(session.status, GameStatus::Finished);
        // The spawner kept working during those 30 seconds; the reported
        // cleanliness must match whatever the board ended up with
        let finish = session
            .drain_events()
            .into_iter()
            .find_map(|e| match e {
                GameEvent::RoundFinished { score, cleanliness } => Some((score, cleanliness)),
                _ => None,
            })
            .expect("round should have finished");
        assert_eq!(finish.0, 1);
        assert_eq!(finish.1, session.cleanliness_percent());
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and input sequence stay identical
        let mut a = GameSession::new(99999);
        let mut b = GameSession::new(99999);
        a.start(30);
        b.start(30);

        for step in 0usize..120 {
            tick(&mut a, 100.0);
            tick(&mut b, 100.0);
            if step % 7 == 0 {
                attempt_clean(&mut a, step % 20, 1.0, 2.0);
                attempt_clean(&mut b, step % 20, 1.0, 2.0);
            }
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.streak, b.streak);
        assert_eq!(a.seconds_remaining, b.seconds_remaining);
        assert_eq!(a.board.occupied_slots(), b.board.occupied_slots());
    }
}
