//! Mouth and tooth placement
//!
//! Computes where everything sits in logical (CSS pixel) canvas space and
//! answers the hit-testing queries the input layer needs. Rebuilt whole on
//! resize; nothing here holds GPU state.

use glam::Vec2;

use crate::input::HitTest;
use crate::sim::ToothId;

/// Axis-aligned rectangle in logical canvas coordinates, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Shrink (or grow, with a negative amount) on all sides.
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(amount),
            max: self.max - Vec2::splat(amount),
        }
    }
}

/// Screen placement of the mouth and every tooth.
#[derive(Debug, Clone)]
pub struct MouthLayout {
    size: Vec2,
    mouth: Rect,
    /// Tooth rects indexed by `ToothId`
    teeth: Vec<Rect>,
    per_row: usize,
}

impl MouthLayout {
    /// Lay out `per_row` teeth per jaw inside a canvas of the given logical
    /// size. Upper row hangs from the top of the mouth, lower row stands on
    /// the bottom, matching the board's id order (upper first).
    pub fn new(width: f32, height: f32, per_row: usize) -> Self {
        let size = Vec2::new(width, height);
        let mouth = Rect::new(
            Vec2::new(width * 0.05, height * 0.08),
            Vec2::new(width * 0.95, height * 0.92),
        );

        let side_pad = mouth.width() * 0.06;
        let gap = mouth.width() * 0.012;
        let span = per_row.max(1) as f32;
        let tooth_w = (mouth.width() - 2.0 * side_pad - gap * (span - 1.0)) / span;
        let tooth_h = (mouth.height() * 0.30).min(tooth_w * 1.8);

        let lip = mouth.height() * 0.06;
        let upper_y = mouth.min.y + lip;
        let lower_y = mouth.max.y - lip - tooth_h;

        let mut teeth = Vec::with_capacity(per_row * 2);
        for row_y in [upper_y, lower_y] {
            for i in 0..per_row {
                let x = mouth.min.x + side_pad + i as f32 * (tooth_w + gap);
                teeth.push(Rect::new(
                    Vec2::new(x, row_y),
                    Vec2::new(x + tooth_w, row_y + tooth_h),
                ));
            }
        }

        Self {
            size,
            mouth,
            teeth,
            per_row,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn mouth(&self) -> &Rect {
        &self.mouth
    }

    pub fn per_row(&self) -> usize {
        self.per_row
    }

    /// All tooth rects, in id order.
    pub fn teeth(&self) -> &[Rect] {
        &self.teeth
    }

    pub fn tooth_rect(&self, id: ToothId) -> Option<&Rect> {
        self.teeth.get(id)
    }
}

impl HitTest for MouthLayout {
    fn tooth_at(&self, x: f32, y: f32) -> Option<ToothId> {
        let p = Vec2::new(x, y);
        self.teeth.iter().position(|rect| rect.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_places_both_rows() {
        let layout = MouthLayout::new(800.0, 600.0, 10);
        assert_eq!(layout.teeth().len(), 20);

        // Upper row strictly above the lower row
        let upper_bottom = layout.teeth()[..10]
            .iter()
            .map(|r| r.max.y)
            .fold(f32::MIN, f32::max);
        let lower_top = layout.teeth()[10..]
            .iter()
            .map(|r| r.min.y)
            .fold(f32::MAX, f32::min);
        assert!(upper_bottom < lower_top);

        // Everything stays inside the mouth
        for rect in layout.teeth() {
            assert!(layout.mouth().contains(rect.min));
            assert!(layout.mouth().contains(rect.max));
        }
    }

    #[test]
    fn test_hit_test_resolves_tooth_centers() {
        let layout = MouthLayout::new(800.0, 600.0, 10);
        for (id, rect) in layout.teeth().iter().enumerate() {
            let c = rect.center();
            assert_eq!(layout.tooth_at(c.x, c.y), Some(id));
        }
    }

    #[test]
    fn test_hit_test_misses_outside() {
        let layout = MouthLayout::new(800.0, 600.0, 10);
        assert_eq!(layout.tooth_at(0.0, 0.0), None);
        assert_eq!(layout.tooth_at(400.0, 300.0), None); // tongue area
        assert_eq!(layout.tooth_at(-5.0, -5.0), None);
    }

    #[test]
    fn test_teeth_do_not_overlap() {
        let layout = MouthLayout::new(1024.0, 768.0, 10);
        for (i, a) in layout.teeth().iter().enumerate() {
            for b in layout.teeth().iter().skip(i + 1) {
                let disjoint = a.max.x <= b.min.x
                    || b.max.x <= a.min.x
                    || a.max.y <= b.min.y
                    || b.max.y <= a.min.y;
                assert!(disjoint);
            }
        }
    }
}
