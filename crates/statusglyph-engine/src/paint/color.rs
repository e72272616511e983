use std::fmt;

/// Packed `0xAARRGGBB` color, straight (non-premultiplied) alpha.
///
/// This is the wire shape theme colors arrive in; the coordinator and the
/// battery renderer never unpack it into floats except to interpolate.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Components in `[a, r, g, b]` order.
    #[inline]
    pub const fn components(self) -> [u8; 4] {
        [self.alpha(), self.red(), self.green(), self.blue()]
    }

    /// Replaces the alpha byte, keeping the RGB bits.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self(((a as u32) << 24) | (self.0 & 0x00FF_FFFF))
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Component-wise linear interpolation from `self` to `to`.
    ///
    /// `t` is clamped to `[0, 1]`; `t == 0` returns `self` and `t == 1`
    /// returns `to` exactly. Used both for theme cross-fades and for the
    /// dark-intensity evaluation.
    pub fn lerp(self, to: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let from = self.components();
        let to = to.components();
        let mix = |i: usize| {
            let a = from[i] as f32;
            let b = to[i] as f32;
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Color::from_argb(mix(0), mix(1), mix(2), mix(3))
    }

    /// Straight-alpha float components `(r, g, b, a)` in `[0, 1]`.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        (
            self.red() as f32 / 255.0,
            self.green() as f32 / 255.0,
            self.blue() as f32 / 255.0,
            self.alpha() as f32 / 255.0,
        )
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(v: u32) -> Self {
        Color(v)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
