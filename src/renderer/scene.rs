//! Frame assembly
//!
//! Builds the full vertex list for one frame from a session snapshot, the
//! layout, the tracked pointer and the player's settings. Read-only over
//! game state; all animation here is derived from feedback ages.

use glam::Vec2;

use super::layout::MouthLayout;
use super::shapes;
use super::vertex::{colors, Vertex};
use crate::consts::FEEDBACK_TTL_MS;
use crate::input::PointerTracker;
use crate::settings::Settings;
use crate::sim::{FeedbackKind, GameSession, GameStatus, GermKind};

fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * alpha]
}

fn germ_color(kind: GermKind) -> [f32; 4] {
    match kind {
        GermKind::Microbe => colors::GERM_MICROBE,
        GermKind::Invader => colors::GERM_INVADER,
        GermKind::Slime => colors::GERM_SLIME,
        GermKind::Candy => colors::GERM_CANDY,
    }
}

/// Assemble the scene for one frame.
pub fn build_scene(
    session: &GameSession,
    layout: &MouthLayout,
    tracker: &PointerTracker,
    settings: &Settings,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(4096);

    // The mouth only shows once a round has been started; the idle screen
    // is DOM overlay plus the roaming brush cursor.
    if session.status != GameStatus::Idle {
        draw_mouth(layout, &mut vertices);
        draw_teeth(session, layout, &mut vertices);
    }

    draw_feedback(session, &mut vertices);

    if let Some(pos) = tracker.position() {
        vertices.extend(shapes::brush(
            pos,
            tracker.tilt_deg(),
            settings.brush_color.rgba(),
        ));
    }

    vertices
}

fn draw_mouth(layout: &MouthLayout, vertices: &mut Vec<Vertex>) {
    let mouth = layout.mouth();
    let corner = mouth.height() * 0.18;

    vertices.extend(shapes::rounded_rect(
        mouth.min - Vec2::splat(6.0),
        mouth.max + Vec2::splat(6.0),
        corner + 6.0,
        colors::MOUTH_RIM,
        8,
    ));
    vertices.extend(shapes::rounded_rect(
        mouth.min,
        mouth.max,
        corner,
        colors::MOUTH,
        8,
    ));

    // Shadowy throat behind everything
    vertices.extend(shapes::circle(
        mouth.center(),
        mouth.height() * 0.18,
        colors::THROAT,
        24,
    ));

    // Tongue rises from the bottom lip
    let tongue_center = Vec2::new(mouth.center().x, mouth.max.y - mouth.height() * 0.04);
    vertices.extend(shapes::arc_fan(
        tongue_center,
        mouth.width() * 0.20,
        std::f32::consts::PI,
        std::f32::consts::TAU,
        colors::TONGUE,
        24,
    ));
}

fn draw_teeth(session: &GameSession, layout: &MouthLayout, vertices: &mut Vec<Vertex>) {
    for tooth in session.board.teeth() {
        let Some(rect) = layout.tooth_rect(tooth.id) else {
            continue;
        };
        let corner = rect.width() * 0.3;
        let (fill, edge) = if tooth.is_clean() {
            (colors::TOOTH_CLEAN, colors::TOOTH_CLEAN_EDGE)
        } else {
            (colors::TOOTH_DIRTY, colors::TOOTH_DIRTY_EDGE)
        };

        vertices.extend(shapes::rounded_rect(rect.min, rect.max, corner, edge, 6));
        let inner = rect.inset(2.5);
        vertices.extend(shapes::rounded_rect(
            inner.min,
            inner.max,
            corner - 2.0,
            fill,
            6,
        ));

        if let Some(kind) = tooth.germ {
            vertices.extend(shapes::germ(
                rect.center(),
                rect.width() * 0.32,
                germ_color(kind),
            ));
        }
    }
}

fn draw_feedback(session: &GameSession, vertices: &mut Vec<Vertex>) {
    for fb in &session.feedback {
        let t = (fb.age_ms / FEEDBACK_TTL_MS).clamp(0.0, 1.0) as f32;
        match fb.kind {
            FeedbackKind::Bubble => {
                // Bubbles drift up and fade; jitter is hashed off the id so
                // the scene stays a pure function of state
                let jitter = (fb.id.wrapping_mul(2654435761) % 21) as f32 - 10.0;
                let pos = fb.pos + Vec2::new(jitter, -40.0 * t);
                vertices.extend(shapes::circle(
                    pos,
                    6.0 + 2.0 * t,
                    with_alpha(colors::BUBBLE, 1.0 - t),
                    12,
                ));
            }
            FeedbackKind::Sparkle => {
                // Sparkles pop outward and fade in place
                let outer = 9.0 + 16.0 * t;
                vertices.extend(shapes::star4(
                    fb.pos,
                    outer,
                    outer * 0.4,
                    with_alpha(colors::SPARKLE, 1.0 - t),
                ));
            }
        }
    }
}
