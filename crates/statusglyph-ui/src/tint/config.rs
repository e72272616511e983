use statusglyph_engine::time::Millis;

use super::channel::ChannelColors;

/// Tint coordinator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TintConfig {
    /// Dark-intensity animation length outside app transitions.
    pub tint_duration_ms: Millis,
    /// Theme cross-fade length.
    pub blend_duration_ms: Millis,
    /// The carrier label only follows the dark tint on devices with mobile data.
    pub supports_mobile_data: bool,
    /// Initial theme colors.
    pub colors: ChannelColors,
    /// Dark-icon variant per channel.
    pub dark_colors: ChannelColors,
}

impl Default for TintConfig {
    fn default() -> Self {
        Self {
            tint_duration_ms: 120,
            blend_duration_ms: 500,
            supports_mobile_data: true,
            colors: ChannelColors::light(),
            dark_colors: ChannelColors::dark(),
        }
    }
}

impl TintConfig {
    pub fn tint_duration_ms(mut self, v: Millis) -> Self { self.tint_duration_ms = v; self }
    pub fn blend_duration_ms(mut self, v: Millis) -> Self { self.blend_duration_ms = v; self }
    pub fn supports_mobile_data(mut self, v: bool) -> Self { self.supports_mobile_data = v; self }
    pub fn colors(mut self, v: ChannelColors) -> Self { self.colors = v; self }
    pub fn dark_colors(mut self, v: ChannelColors) -> Self { self.dark_colors = v; self }
}
