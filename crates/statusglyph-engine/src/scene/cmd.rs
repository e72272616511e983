use crate::coords::Vec2;
use crate::paint::Color;
use crate::path::Shape;

/// Filled polygon set.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub shape: Shape,
    pub color: Color,
}

/// Where a text run is pinned.
///
/// Status bar glyph text is always horizontally centered on `x` and sits on
/// the baseline `y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextAnchor {
    pub x: f32,
    pub baseline: f32,
}

impl TextAnchor {
    #[inline]
    pub const fn new(x: f32, baseline: f32) -> Self {
        Self { x, baseline }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.baseline)
    }
}

/// Text run payload. Renderers resolve glyphs through a
/// [`GlyphOutlines`](crate::text::GlyphOutlines) provider.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in pixels.
    pub size: f32,
    pub color: Color,
    pub anchor: TextAnchor,
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(FillCmd),
    Text(TextCmd),
}

impl DrawCmd {
    #[inline]
    pub fn color(&self) -> Color {
        match self {
            DrawCmd::Fill(f) => f.color,
            DrawCmd::Text(t) => t.color,
        }
    }
}
