//! Pointer and touch tracking
//!
//! Maps the continuous stream of cursor positions to discrete per-tooth
//! brush attempts. Hit-testing belongs to the render layer (it knows where
//! teeth are on screen); the core only ever sees resolved tooth ids. Every
//! sample that lands on a tooth while a round is running becomes exactly one
//! attempt - repeats over an already-clean tooth are absorbed downstream.

use glam::Vec2;

use crate::consts::{BRUSH_BASE_TILT, BRUSH_TILT_MAX, BRUSH_TILT_MIN, BRUSH_TILT_PER_PX};
use crate::sim::{attempt_clean, GameSession, GameStatus, ToothId};

/// Resolves a screen position to the tooth under it, if any.
///
/// Implemented by the renderer's layout; anything else (a test stub, a DOM
/// `elementFromPoint` adapter) works too.
pub trait HitTest {
    fn tooth_at(&self, x: f32, y: f32) -> Option<ToothId>;
}

/// Tracked cursor state for the brush.
///
/// Keeps the last observed position and a tilt angle that sways with
/// horizontal movement, so the brush leans into the stroke. Purely visual;
/// the sim never reads this.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    pos: Option<Vec2>,
    tilt_deg: f32,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            pos: None,
            tilt_deg: BRUSH_BASE_TILT,
        }
    }

    /// Record a raw position sample.
    pub fn sample(&mut self, x: f32, y: f32) {
        let next = Vec2::new(x, y);
        let movement_x = match self.pos {
            Some(prev) => next.x - prev.x,
            None => 0.0,
        };
        self.tilt_deg = (BRUSH_BASE_TILT + movement_x * BRUSH_TILT_PER_PX)
            .clamp(BRUSH_TILT_MIN, BRUSH_TILT_MAX);
        self.pos = Some(next);
    }

    /// Last known cursor position; None until the first sample arrives.
    pub fn position(&self) -> Option<Vec2> {
        self.pos
    }

    /// Current brush tilt in degrees.
    pub fn tilt_deg(&self) -> f32 {
        self.tilt_deg
    }

    /// Forget the cursor (pointer left the window).
    pub fn clear(&mut self) {
        self.pos = None;
    }
}

/// Feed one pointer/touch sample through hit-testing into the session.
///
/// Does nothing while no round is running; otherwise a resolved tooth id
/// becomes a single brush attempt at the sampled position.
pub fn handle_move(
    session: &mut GameSession,
    hit: &impl HitTest,
    tracker: &mut PointerTracker,
    x: f32,
    y: f32,
) {
    tracker.sample(x, y);
    if session.status != GameStatus::Playing {
        return;
    }
    if let Some(id) = hit.tooth_at(x, y) {
        attempt_clean(session, id, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GermKind;

    /// Everything left of x=100 is tooth 0, the rest misses.
    struct HalfPlane;

    impl HitTest for HalfPlane {
        fn tooth_at(&self, x: f32, _y: f32) -> Option<ToothId> {
            (x < 100.0).then_some(0)
        }
    }

    #[test]
    fn test_samples_ignored_outside_playing() {
        let mut session = GameSession::new(1);
        let mut tracker = PointerTracker::new();
        session.board.occupy(0, GermKind::Microbe);

        handle_move(&mut session, &HalfPlane, &mut tracker, 50.0, 50.0);
        assert_eq!(session.score, 0);
        assert_eq!(session.board.occupied_count(), 1);
        // The cursor still tracks, for the idle-screen brush
        assert_eq!(tracker.position(), Some(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn test_resolved_sample_becomes_one_attempt() {
        let mut session = GameSession::new(1);
        session.start(30);
        session.board.occupy(0, GermKind::Candy);
        let mut tracker = PointerTracker::new();

        handle_move(&mut session, &HalfPlane, &mut tracker, 50.0, 50.0);
        assert_eq!(session.score, 1);

        // Hovering the same now-clean tooth over and over stays scoreless
        for _ in 0..10 {
            handle_move(&mut session, &HalfPlane, &mut tracker, 50.0, 50.0);
        }
        assert_eq!(session.score, 1);
        assert_eq!(session.streak, 1);
    }

    #[test]
    fn test_unresolved_sample_is_dropped() {
        let mut session = GameSession::new(1);
        session.start(30);
        session.board.occupy(0, GermKind::Slime);
        let mut tracker = PointerTracker::new();

        handle_move(&mut session, &HalfPlane, &mut tracker, 500.0, 50.0);
        assert_eq!(session.score, 0);
        assert_eq!(session.board.occupied_count(), 1);
    }

    #[test]
    fn test_tilt_follows_horizontal_movement() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.tilt_deg(), BRUSH_BASE_TILT);

        tracker.sample(100.0, 100.0);
        // First sample has no previous position to sway from
        assert_eq!(tracker.tilt_deg(), BRUSH_BASE_TILT);

        tracker.sample(110.0, 100.0);
        assert_eq!(tracker.tilt_deg(), BRUSH_BASE_TILT + 10.0 * BRUSH_TILT_PER_PX);

        // Large swings clamp
        tracker.sample(400.0, 100.0);
        assert_eq!(tracker.tilt_deg(), BRUSH_TILT_MAX);
        tracker.sample(0.0, 100.0);
        assert_eq!(tracker.tilt_deg(), BRUSH_TILT_MIN);
    }
}
