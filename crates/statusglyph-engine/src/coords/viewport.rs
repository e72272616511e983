/// Pixel size of the view a glyph is drawn into.
///
/// Sizes are integral in the host toolkit; the renderer keeps them as `u32`
/// and converts when building float geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true when both dimensions are non-zero.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}
