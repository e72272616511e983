//! Pure battery-glyph geometry: a deterministic function of view size,
//! padding and configured fractions.

use statusglyph_engine::coords::{Insets, Rect, Vec2, Viewport};
use statusglyph_engine::path::Shape;

/// Levels at or above this draw a completely full body.
pub const FULL: u8 = 96;

/// The bolt stays opaque while at most this fraction of it is under the fill.
pub const BOLT_LEVEL_THRESHOLD: f32 = 0.3;

/// Fraction of the body drawn in the fill color for `level`.
pub fn draw_fraction(level: u8, critical_level: u8) -> f32 {
    if level >= FULL {
        1.0
    } else if level <= critical_level {
        0.0
    } else {
        level as f32 / 100.0
    }
}

fn java_round(v: f32) -> f32 {
    (v + 0.5).floor()
}

/// Body and button-cap rectangles for one paint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometryFrame {
    /// Battery body.
    pub body: Rect,
    /// Terminal cap centered above the body.
    pub button: Rect,
}

impl GeometryFrame {
    pub fn compute(
        view: Viewport,
        padding: Insets,
        button_height_fraction: f32,
        smoothing_left: f32,
        smoothing_right: f32,
    ) -> Self {
        let width = view.width.saturating_sub(padding.horizontal()) as f32;
        let height = view.height.saturating_sub(padding.vertical()) as f32;
        let button_height = (height * button_height_fraction).floor();

        let outer = Rect::new(0.0, 0.0, width, height).offset(padding.left as f32, padding.top as f32);

        let cap_inset = java_round(width * 0.25);
        let button = Rect::from_ltrb(
            outer.left + cap_inset + smoothing_left,
            outer.top + smoothing_left,
            outer.right - cap_inset - smoothing_right,
            outer.top + button_height,
        );

        let body = Rect::from_ltrb(
            outer.left + smoothing_left,
            outer.top + button_height + smoothing_left,
            outer.right - smoothing_right,
            outer.bottom - smoothing_right,
        );

        Self { body, button }
    }

    /// Closed silhouette: cap on top of body.
    pub fn outline(&self) -> Shape {
        let (b, f) = (self.button, self.body);
        Shape::polygon(&[
            Vec2::new(b.left, b.top),
            Vec2::new(b.right, b.top),
            Vec2::new(b.right, f.top),
            Vec2::new(f.right, f.top),
            Vec2::new(f.right, f.bottom),
            Vec2::new(f.left, f.bottom),
            Vec2::new(f.left, f.top),
            Vec2::new(b.left, f.top),
        ])
    }

    /// Y of the fill line. A full battery snaps to the cap top so no seam
    /// shows between cap and body.
    pub fn level_top(&self, fraction: f32) -> f32 {
        if fraction == 1.0 {
            self.button.top
        } else {
            self.body.top + self.body.height() * (1.0 - fraction)
        }
    }

    /// Region that receives the fill color.
    pub fn fill_rect(&self, level_top: f32) -> Rect {
        Rect::from_ltrb(self.body.left, level_top, self.body.right, self.body.bottom)
    }

    /// Frame the bolt outline is stretched into.
    pub fn bolt_frame(&self) -> Rect {
        let f = self.body;
        Rect::from_ltrb(
            f.left + f.width() / 4.5,
            f.top + f.height() / 6.0,
            f.right - f.width() / 7.0,
            f.bottom - f.height() / 10.0,
        )
    }
}

/// Portion of the bolt's height covered by the fill, clamped to `[0, 1]`.
pub fn bolt_fill_fraction(bolt: Rect, level_top: f32) -> f32 {
    let h = bolt.bottom - bolt.top;
    if h <= 0.0 {
        return 0.0;
    }
    ((bolt.bottom - level_top) / h).clamp(0.0, 1.0)
}

/// Whether the bolt is drawn in its own paint rather than cut out.
#[inline]
pub fn bolt_is_opaque(bolt: Rect, level_top: f32) -> bool {
    bolt_fill_fraction(bolt, level_top) <= BOLT_LEVEL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> GeometryFrame {
        GeometryFrame::compute(Viewport::new(40, 60), Insets::zero(), 0.1, 0.0, 0.0)
    }

    // ── draw_fraction ─────────────────────────────────────────────────────

    #[test]
    fn fraction_follows_level_between_thresholds() {
        for level in 6..FULL {
            assert_eq!(draw_fraction(level, 5), level as f32 / 100.0);
        }
    }

    #[test]
    fn fraction_is_full_from_96() {
        for level in FULL..=100 {
            assert_eq!(draw_fraction(level, 5), 1.0);
        }
    }

    #[test]
    fn fraction_is_empty_at_or_below_critical() {
        for level in 0..=5 {
            assert_eq!(draw_fraction(level, 5), 0.0);
        }
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn cap_is_centered_on_body() {
        let g = frame();
        assert_eq!(g.button, Rect::from_ltrb(10.0, 0.0, 30.0, 6.0));
        assert_eq!(g.body, Rect::from_ltrb(0.0, 6.0, 40.0, 60.0));
        assert_eq!(g.button.center().x, g.body.center().x);
    }

    #[test]
    fn padding_and_smoothing_inset_edges() {
        let g = GeometryFrame::compute(Viewport::new(44, 64), Insets::new(2, 3, 2, 1), 0.1, 0.5, 0.25);
        assert_eq!(g.body, Rect::from_ltrb(2.5, 9.5, 41.75, 62.75));
        assert_eq!(g.button.top, 3.5);
        assert_eq!(g.button.left, 12.5);
        assert_eq!(g.button.right, 31.75);
    }

    #[test]
    fn outline_area_is_body_plus_cap() {
        let g = frame();
        let expected = 40.0 * 54.0 + 20.0 * 6.0;
        assert!((g.outline().area() - expected).abs() < 1e-2);
    }

    #[test]
    fn zero_size_view_is_degenerate_not_fatal() {
        let g = GeometryFrame::compute(Viewport::new(0, 0), Insets::all(4), 0.1, 0.0, 0.0);
        assert!(g.outline().is_empty());
        assert!(Shape::rect(g.fill_rect(g.level_top(0.5))).is_empty());
    }

    // ── level_top ─────────────────────────────────────────────────────────

    #[test]
    fn level_top_snaps_to_cap_only_when_full() {
        let g = frame();
        assert_eq!(g.level_top(1.0), g.button.top);
        assert_eq!(g.level_top(0.0), g.body.bottom);
        let almost = g.level_top(0.95);
        assert!(almost > g.body.top && almost < g.body.bottom);
    }

    #[test]
    fn level_top_rises_with_fraction() {
        let g = frame();
        let mut prev = g.level_top(0.01);
        for level in 2..FULL {
            let top = g.level_top(level as f32 / 100.0);
            assert!(top < prev);
            assert!(top > g.body.top && top < g.body.bottom);
            prev = top;
        }
    }

    // ── bolt ──────────────────────────────────────────────────────────────

    #[test]
    fn bolt_frame_insets() {
        let g = frame();
        let b = g.bolt_frame();
        assert!((b.left - 40.0 / 4.5).abs() < 1e-4);
        assert!((b.top - (6.0 + 9.0)).abs() < 1e-4);
        assert!((b.right - (40.0 - 40.0 / 7.0)).abs() < 1e-4);
        assert!((b.bottom - (60.0 - 5.4)).abs() < 1e-4);
    }

    #[test]
    fn bolt_threshold_is_inclusive() {
        let bolt = Rect::from_ltrb(0.0, 0.0, 10.0, 10.0);
        assert_eq!(bolt_fill_fraction(bolt, 7.0), 0.3);
        assert!(bolt_is_opaque(bolt, 7.0));
        assert!(!bolt_is_opaque(bolt, 6.9));
        assert!(bolt_is_opaque(bolt, 25.0));
        assert!(!bolt_is_opaque(bolt, -5.0));
        assert_eq!(bolt_fill_fraction(bolt, -5.0), 1.0);
    }
}
