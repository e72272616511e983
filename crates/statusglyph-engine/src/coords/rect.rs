use super::Vec2;

/// Axis-aligned rectangle stored by its edges (top-left origin).
///
/// Glyph geometry is built by nudging individual edges (button caps, subpixel
/// smoothing, bolt insets), so edges are the primary representation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Creates a rectangle from an origin and a size.
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { left: x, top: y, right: x + w, bottom: y + h }
    }

    #[inline]
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.right, self.bottom)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min().is_finite() && self.max().is_finite()
    }

    /// Translates all four edges.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::from_ltrb(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        Rect::from_ltrb(
            self.left.min(self.right),
            self.top.min(self.bottom),
            self.left.max(self.right),
            self.top.max(self.bottom),
        )
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.left && p.y >= r.top && p.x < r.right && p.y < r.bottom
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let out = Rect::from_ltrb(
            a.left.max(b.left),
            a.top.max(b.top),
            a.right.min(b.right),
            a.bottom.min(b.bottom),
        );

        if out.is_empty() { None } else { Some(out) }
    }

    /// Corner points in clockwise order starting at top-left.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        [
            Vec2::new(self.left, self.top),
            Vec2::new(self.right, self.top),
            Vec2::new(self.right, self.bottom),
            Vec2::new(self.left, self.bottom),
        ]
    }
}
