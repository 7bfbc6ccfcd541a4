//! Session state and feedback events
//!
//! `GameSession` owns everything with gameplay meaning: the board, the
//! score/streak counters, the countdown, live feedback particles and the
//! side-effect cue queue. Only controller operations (here and in `tick`)
//! mutate it; the input and render layers go through those.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::board::{Board, GermKind, ToothId};
use crate::consts::TEETH_PER_ROW;

/// Session status. `Idle` shows the start screen, `Finished` the results
/// screen; gameplay mutation only happens while `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Playing,
    Finished,
}

/// Transient visual feedback varieties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Foam puff from brushing, germ or not
    Bubble,
    /// Burst marking a busted germ
    Sparkle,
}

/// A short-lived feedback particle anchored at a screen position.
///
/// Purely cosmetic: it ages every tick regardless of session status and is
/// dropped (by id) once it outlives the TTL.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackEvent {
    pub id: u64,
    pub pos: Vec2,
    pub kind: FeedbackKind,
    pub age_ms: f64,
}

/// Side-effect cues for the shell (sounds, end-of-round presentation).
///
/// Fire-and-forget: the shell drains these each frame and whatever it does
/// with them cannot flow back into core state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A germ was brushed off a tooth
    GermBrushed { tooth: ToothId, kind: GermKind },
    /// Ambient brushing swish
    BrushSwish,
    /// Countdown hit zero; final stats for the results screen
    RoundFinished { score: u32, cleanliness: u32 },
}

/// Complete per-round game state.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub status: GameStatus,
    pub seconds_remaining: u32,
    pub total_seconds: u32,
    /// Germs busted this round
    pub score: u32,
    /// Consecutive busts; a brush over a clean tooth never resets it
    pub streak: u32,
    pub board: Board,
    /// Live feedback particles, oldest first
    pub feedback: Vec<FeedbackEvent>,
    /// Queued side-effect cues, drained by the shell
    pub events: Vec<GameEvent>,
    /// Session RNG (spawn slots/kinds, feedback odds)
    pub rng: Pcg32,
    /// Accumulated ms toward the next countdown step
    pub timer_acc_ms: f64,
    /// Accumulated ms toward the next spawner step
    pub spawn_acc_ms: f64,
    next_feedback_id: u64,
}

impl GameSession {
    /// Create an idle session with a clean default board.
    pub fn new(seed: u64) -> Self {
        Self {
            status: GameStatus::Idle,
            seconds_remaining: 0,
            total_seconds: 0,
            score: 0,
            streak: 0,
            board: Board::new(TEETH_PER_ROW),
            feedback: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            timer_acc_ms: 0.0,
            spawn_acc_ms: 0.0,
            next_feedback_id: 0,
        }
    }

    /// Begin a round of `seconds` from the start screen.
    ///
    /// Replaces the board wholesale and zeroes score, streak, feedback and
    /// cadence accumulators. Absorbed as a no-op outside `Idle` or for a
    /// zero-length round.
    pub fn start(&mut self, seconds: u32) {
        if self.status != GameStatus::Idle || seconds == 0 {
            return;
        }
        self.board = Board::new(TEETH_PER_ROW);
        self.score = 0;
        self.streak = 0;
        self.seconds_remaining = seconds;
        self.total_seconds = seconds;
        self.feedback.clear();
        self.events.clear();
        self.timer_acc_ms = 0.0;
        self.spawn_acc_ms = 0.0;
        self.status = GameStatus::Playing;
    }

    /// Return to the start screen.
    ///
    /// Valid from any state. The cadence accumulators die with the round so
    /// a queued spawn or countdown step can never leak into the next one;
    /// live feedback particles keep aging out on their own.
    pub fn restart(&mut self) {
        self.status = GameStatus::Idle;
        self.timer_acc_ms = 0.0;
        self.spawn_acc_ms = 0.0;
    }

    /// Append a feedback particle with a fresh unique id.
    pub fn emit_feedback(&mut self, pos: Vec2, kind: FeedbackKind) {
        let id = self.next_feedback_id;
        self.next_feedback_id += 1;
        self.feedback.push(FeedbackEvent {
            id,
            pos,
            kind,
            age_ms: 0.0,
        });
    }

    /// Take all queued side-effect cues.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Rounded share of clean teeth, shown on the results screen.
    pub fn cleanliness_percent(&self) -> u32 {
        self.board.cleanliness_percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_resets_round_state() {
        let mut session = GameSession::new(7);
        session.board.occupy(3, GermKind::Candy);
        session.emit_feedback(Vec2::new(1.0, 2.0), FeedbackKind::Bubble);

        session.start(30);
        assert_eq!(session.status, GameStatus::Playing);
        assert_eq!(session.seconds_remaining, 30);
        assert_eq!(session.total_seconds, 30);
        assert_eq!(session.score, 0);
        assert_eq!(session.streak, 0);
        assert_eq!(session.board.len(), TEETH_PER_ROW * 2);
        assert_eq!(session.board.occupied_count(), 0);
        assert!(session.feedback.is_empty());
    }

    #[test]
    fn test_start_outside_idle_is_noop() {
        let mut session = GameSession::new(7);
        session.start(30);
        session.start(120);
        assert_eq!(session.total_seconds, 30);

        session.status = GameStatus::Finished;
        session.start(120);
        assert_eq!(session.status, GameStatus::Finished);
    }

    #[test]
    fn test_restart_returns_to_idle_from_any_state() {
        let mut session = GameSession::new(7);
        session.start(30);
        session.restart();
        assert_eq!(session.status, GameStatus::Idle);
        assert_eq!(session.timer_acc_ms, 0.0);
        assert_eq!(session.spawn_acc_ms, 0.0);

        session.status = GameStatus::Finished;
        session.restart();
        assert_eq!(session.status, GameStatus::Idle);
    }

    #[test]
    fn test_feedback_ids_are_unique() {
        let mut session = GameSession::new(7);
        for _ in 0..5 {
            session.emit_feedback(Vec2::ZERO, FeedbackKind::Sparkle);
        }
        let mut ids: Vec<u64> = session.feedback.iter().map(|f| f.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
