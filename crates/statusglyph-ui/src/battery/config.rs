use statusglyph_engine::paint::Color;

use crate::error::ConfigError;

use super::bolt::BoltPoints;

/// Deep orange used for low and critical charge.
pub const LOW_LEVEL_COLOR: Color = Color(0xFFF4_511E);

/// Battery meter configuration.
///
/// Mirrors what the host toolkit would load from resources; everything has a
/// sensible default so `MeterConfig::default()` renders a stock glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterConfig {
    /// At or below this level the glyph turns [`low_level_color`](Self::low_level_color).
    pub low_level: u8,
    /// At or below this level the fill is empty and the warning glyph shows.
    pub critical_level: u8,
    pub low_level_color: Color,
    pub frame_color: Color,
    pub fill_color: Color,
    pub text_color: Color,
    /// Button-cap height as a fraction of the drawable height.
    pub button_height_fraction: f32,
    /// Pixel nudges that keep edges on pixel centers.
    pub subpixel_smoothing_left: f32,
    pub subpixel_smoothing_right: f32,
    pub warning_text: String,
    pub show_percent: bool,
    pub show_charge_animation: bool,
    pub cut_out_text: bool,
    pub bolt: BoltPoints,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            low_level: 15,
            critical_level: 5,
            low_level_color: LOW_LEVEL_COLOR,
            frame_color: Color::WHITE.with_alpha(77),
            fill_color: Color::WHITE,
            text_color: Color::WHITE,
            button_height_fraction: 0.105,
            subpixel_smoothing_left: 0.0,
            subpixel_smoothing_right: 0.0,
            warning_text: "!".to_string(),
            show_percent: false,
            show_charge_animation: false,
            cut_out_text: true,
            bolt: BoltPoints::default(),
        }
    }
}

impl MeterConfig {
    pub fn low_level(mut self, v: u8) -> Self { self.low_level = v; self }
    pub fn critical_level(mut self, v: u8) -> Self { self.critical_level = v; self }
    pub fn low_level_color(mut self, v: Color) -> Self { self.low_level_color = v; self }
    pub fn frame_color(mut self, v: Color) -> Self { self.frame_color = v; self }
    pub fn fill_color(mut self, v: Color) -> Self { self.fill_color = v; self }
    pub fn text_color(mut self, v: Color) -> Self { self.text_color = v; self }
    pub fn button_height_fraction(mut self, v: f32) -> Self { self.button_height_fraction = v; self }
    pub fn subpixel_smoothing(mut self, left: f32, right: f32) -> Self {
        self.subpixel_smoothing_left = left;
        self.subpixel_smoothing_right = right;
        self
    }
    pub fn warning_text(mut self, v: impl Into<String>) -> Self { self.warning_text = v.into(); self }
    pub fn show_percent(mut self, v: bool) -> Self { self.show_percent = v; self }
    pub fn show_charge_animation(mut self, v: bool) -> Self { self.show_charge_animation = v; self }
    pub fn cut_out_text(mut self, v: bool) -> Self { self.cut_out_text = v; self }
    pub fn bolt(mut self, v: BoltPoints) -> Self { self.bolt = v; self }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for level in [self.low_level, self.critical_level] {
            if level > 100 {
                return Err(ConfigError::LevelOutOfRange(level));
            }
        }
        if self.critical_level > self.low_level {
            return Err(ConfigError::CriticalAboveLow {
                critical: self.critical_level,
                low: self.low_level,
            });
        }
        let f = self.button_height_fraction;
        if !(0.0..1.0).contains(&f) {
            return Err(ConfigError::FractionOutOfRange { name: "button_height_fraction", value: f });
        }
        Ok(())
    }
}
