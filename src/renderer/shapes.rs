//! Shape generation for 2D primitives
//!
//! Everything on screen is flat colored triangles built here: rounded
//! rectangles for teeth, fans for germ bodies and the tongue, rotated quads
//! for the brush. Coordinates are logical canvas pixels, y down.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::vertex::{colors, Vertex};

/// Triangle-fan a convex perimeter around an interior point.
fn fan(center: Vec2, perimeter: &[Vec2], color: [f32; 4], out: &mut Vec<Vertex>) {
    for i in 0..perimeter.len() {
        let a = perimeter[i];
        let b = perimeter[(i + 1) % perimeter.len()];
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(a.x, a.y, color));
        out.push(Vertex::new(b.x, b.y, color));
    }
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
    vertices
}

/// Pie slice from `theta_start` to `theta_end` (fan from the center).
/// The tongue is one of these spanning a half turn.
pub fn arc_fan(
    center: Vec2,
    radius: f32,
    theta_start: f32,
    theta_end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let span = theta_end - theta_start;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    for i in 0..segments {
        let t1 = theta_start + span * (i as f32 / segments as f32);
        let t2 = theta_start + span * ((i + 1) as f32 / segments as f32);
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * t1.cos(),
            center.y + radius * t1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * t2.cos(),
            center.y + radius * t2.sin(),
            color,
        ));
    }
    vertices
}

/// Generate vertices for a rounded rectangle
pub fn rounded_rect(
    min: Vec2,
    max: Vec2,
    radius: f32,
    color: [f32; 4],
    corner_segments: u32,
) -> Vec<Vertex> {
    let r = radius
        .min((max.x - min.x) * 0.5)
        .min((max.y - min.y) * 0.5)
        .max(0.0);

    // Corner arc centers, clockwise in screen space from top-right
    let corners = [
        (Vec2::new(max.x - r, min.y + r), -PI / 2.0),
        (Vec2::new(max.x - r, max.y - r), 0.0),
        (Vec2::new(min.x + r, max.y - r), PI / 2.0),
        (Vec2::new(min.x + r, min.y + r), PI),
    ];

    let mut perimeter = Vec::with_capacity((corner_segments as usize + 1) * 4);
    for (center, start) in corners {
        for i in 0..=corner_segments {
            let theta = start + (PI / 2.0) * (i as f32 / corner_segments as f32);
            perimeter.push(center + Vec2::new(r * theta.cos(), r * theta.sin()));
        }
    }

    let mut vertices = Vec::with_capacity(perimeter.len() * 3);
    fan((min + max) * 0.5, &perimeter, color, &mut vertices);
    vertices
}

/// Quad centered at `center`, rotated by `angle` radians.
pub fn rotated_quad(center: Vec2, half_size: Vec2, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let rot = Vec2::from_angle(angle);
    let corners = [
        Vec2::new(-half_size.x, -half_size.y),
        Vec2::new(half_size.x, -half_size.y),
        Vec2::new(half_size.x, half_size.y),
        Vec2::new(-half_size.x, half_size.y),
    ]
    .map(|c| center + rot.rotate(c));

    vec![
        Vertex::new(corners[0].x, corners[0].y, color),
        Vertex::new(corners[1].x, corners[1].y, color),
        Vertex::new(corners[2].x, corners[2].y, color),
        Vertex::new(corners[0].x, corners[0].y, color),
        Vertex::new(corners[2].x, corners[2].y, color),
        Vertex::new(corners[3].x, corners[3].y, color),
    ]
}

/// Four-pointed star, one point up.
pub fn star4(center: Vec2, outer_radius: f32, inner_radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut perimeter = Vec::with_capacity(8);
    for i in 0..8 {
        let r = if i % 2 == 0 { outer_radius } else { inner_radius };
        let theta = -PI / 2.0 + TAU * (i as f32 / 8.0);
        perimeter.push(center + Vec2::new(r * theta.cos(), r * theta.sin()));
    }
    let mut vertices = Vec::with_capacity(24);
    fan(center, &perimeter, color, &mut vertices);
    vertices
}

/// A googly-eyed germ blob sized to sit on a tooth.
pub fn germ(center: Vec2, radius: f32, body: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = circle(center, radius, body, 20);

    // Two stubby antennae
    for dir in [-1.0f32, 1.0] {
        let tip = center + Vec2::new(dir * radius * 0.45, -radius * 1.15);
        vertices.extend(circle(tip, radius * 0.14, body, 8));
        vertices.extend(rotated_quad(
            center + Vec2::new(dir * radius * 0.38, -radius * 0.85),
            Vec2::new(radius * 0.06, radius * 0.35),
            dir * 0.3,
            body,
        ));
    }

    // Eyes
    for dir in [-1.0f32, 1.0] {
        let eye = center + Vec2::new(dir * radius * 0.35, -radius * 0.15);
        vertices.extend(circle(eye, radius * 0.28, colors::GERM_EYE, 12));
        vertices.extend(circle(
            eye + Vec2::new(0.0, radius * 0.05),
            radius * 0.12,
            colors::GERM_PUPIL,
            8,
        ));
    }

    vertices
}

/// The toothbrush cursor: handle, neck and bristle head, leaning by
/// `tilt_deg`. The bristles end up just above `pos` so the cursor tip is
/// where the player is pointing.
pub fn brush(pos: Vec2, tilt_deg: f32, handle_color: [f32; 4]) -> Vec<Vertex> {
    let angle = tilt_deg.to_radians();
    let rot = Vec2::from_angle(angle);
    let at = |local: Vec2| pos + rot.rotate(local);

    let mut vertices = Vec::with_capacity(64);

    // Handle
    vertices.extend(rotated_quad(
        at(Vec2::new(0.0, 34.0)),
        Vec2::new(7.0, 30.0),
        angle,
        handle_color,
    ));
    // Rubber neck
    vertices.extend(rotated_quad(
        at(Vec2::new(0.0, 2.0)),
        Vec2::new(5.0, 6.0),
        angle,
        colors::BRUSH_NECK,
    ));
    // Head
    vertices.extend(rotated_quad(
        at(Vec2::new(0.0, -10.0)),
        Vec2::new(9.0, 8.0),
        angle,
        handle_color,
    ));
    // Bristles
    vertices.extend(rotated_quad(
        at(Vec2::new(0.0, -23.0)),
        Vec2::new(8.0, 7.0),
        angle,
        colors::BRISTLES,
    ));

    vertices
}
