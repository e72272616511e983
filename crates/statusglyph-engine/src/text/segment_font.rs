use crate::coords::Rect;
use crate::path::Shape;
use crate::scene::TextAnchor;

use super::GlyphOutlines;

const CAP_HEIGHT: f32 = 0.72;
const GLYPH_WIDTH: f32 = 0.46;
const STROKE: f32 = 0.11;
const SPACING: f32 = 0.08;

// Segment bits: a (top), b (upper right), c (lower right), d (bottom),
// e (lower left), f (upper left), g (middle).
const A: u8 = 1 << 0;
const B: u8 = 1 << 1;
const C: u8 = 1 << 2;
const D: u8 = 1 << 3;
const E: u8 = 1 << 4;
const F: u8 = 1 << 5;
const G: u8 = 1 << 6;

fn digit_segments(ch: char) -> Option<u8> {
    Some(match ch {
        '0' => A | B | C | D | E | F,
        '1' => B | C,
        '2' => A | B | G | E | D,
        '3' => A | B | G | C | D,
        '4' => F | G | B | C,
        '5' => A | F | G | C | D,
        '6' => A | F | G | E | C | D,
        '7' => A | B | C,
        '8' => A | B | C | D | E | F | G,
        '9' => A | B | C | D | F | G,
        _ => return None,
    })
}

/// Seven-segment outline font covering digits and `!`.
///
/// Deterministic and resource-free. Unsupported characters advance like a
/// space and produce no geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SegmentFont;

impl SegmentFont {
    pub const fn new() -> Self {
        Self
    }

    fn glyph(&self, ch: char, x0: f32, baseline: f32, size: f32) -> Shape {
        let w = GLYPH_WIDTH * size;
        let h = CAP_HEIGHT * size;
        let t = STROKE * size;
        let top = baseline - h;
        let mid = top + h * 0.5;
        let x1 = x0 + w;

        if ch == '!' {
            let cx = x0 + w * 0.5;
            let bar = Rect::from_ltrb(cx - t * 0.5, top, cx + t * 0.5, baseline - t * 2.0);
            let dot = Rect::from_ltrb(cx - t * 0.5, baseline - t, cx + t * 0.5, baseline);
            return Shape::rect(bar).union(&Shape::rect(dot));
        }

        let Some(bits) = digit_segments(ch) else {
            return Shape::empty();
        };

        let segments = [
            (A, Rect::from_ltrb(x0, top, x1, top + t)),
            (B, Rect::from_ltrb(x1 - t, top, x1, mid + t * 0.5)),
            (C, Rect::from_ltrb(x1 - t, mid - t * 0.5, x1, baseline)),
            (D, Rect::from_ltrb(x0, baseline - t, x1, baseline)),
            (E, Rect::from_ltrb(x0, mid - t * 0.5, x0 + t, baseline)),
            (F, Rect::from_ltrb(x0, top, x0 + t, mid + t * 0.5)),
            (G, Rect::from_ltrb(x0, mid - t * 0.5, x1, mid + t * 0.5)),
        ];

        segments
            .iter()
            .filter(|(bit, _)| bits & bit != 0)
            .fold(Shape::empty(), |acc, (_, r)| acc.union(&Shape::rect(*r)))
    }
}

impl GlyphOutlines for SegmentFont {
    fn ascent(&self, size: f32) -> f32 {
        CAP_HEIGHT * size
    }

    fn measure(&self, text: &str, size: f32) -> f32 {
        let n = text.chars().count();
        if n == 0 {
            return 0.0;
        }
        n as f32 * GLYPH_WIDTH * size + (n - 1) as f32 * SPACING * size
    }

    fn outline(&self, text: &str, size: f32, anchor: TextAnchor) -> Shape {
        if size <= 0.0 || !size.is_finite() {
            return Shape::empty();
        }
        let advance = (GLYPH_WIDTH + SPACING) * size;
        let start = anchor.x - self.measure(text, size) * 0.5;

        text.chars().enumerate().fold(Shape::empty(), |acc, (i, ch)| {
            acc.union(&self.glyph(ch, start + i as f32 * advance, anchor.baseline, size))
        })
    }
}
