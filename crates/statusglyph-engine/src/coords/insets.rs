/// View padding in pixels, one value per side.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Insets {
    #[inline]
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same padding on every side.
    #[inline]
    pub const fn all(v: u32) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0)
    }

    #[inline]
    pub const fn horizontal(self) -> u32 {
        self.left + self.right
    }

    #[inline]
    pub const fn vertical(self) -> u32 {
        self.top + self.bottom
    }
}
