//! Text outlines for glyph cutouts.
//!
//! Battery percentage text is not only drawn but also subtracted from the
//! battery silhouette, so text has to be available as geometry. Providers
//! implement [`GlyphOutlines`]; [`SegmentFont`] is the built-in provider.

mod segment_font;

pub use segment_font::SegmentFont;

use crate::path::Shape;
use crate::scene::TextAnchor;

/// Turns text runs into polygon sets.
pub trait GlyphOutlines {
    /// Distance from the baseline to the top of the tallest glyph, positive.
    fn ascent(&self, size: f32) -> f32;

    /// Advance width of `text` at `size`.
    fn measure(&self, text: &str, size: f32) -> f32;

    /// Outline of `text` horizontally centered on `anchor.x`, sitting on
    /// `anchor.baseline`.
    fn outline(&self, text: &str, size: f32, anchor: TextAnchor) -> Shape;
}
