use log::{debug, trace};
use statusglyph_engine::coords::{Insets, Viewport};
use statusglyph_engine::paint::Color;
use statusglyph_engine::path::Shape;
use statusglyph_engine::scene::{DrawList, TextAnchor, ZIndex};
use statusglyph_engine::text::{GlyphOutlines, SegmentFont};
use statusglyph_engine::time::Millis;

use crate::error::{ConfigError, DemoCommandError};

use super::charge::{ChargeAnimationDriver, ChargeInputs};
use super::config::MeterConfig;
use super::geometry::{bolt_is_opaque, draw_fraction, GeometryFrame};
use super::source::{DemoCommand, LevelSource};
use super::state::BatteryState;
use super::tracker::{BatteryStatusEvent, BatteryTracker, LevelTestSequence, TestStep};

/// Level the plugged fill and the bolt are colored as.
const PREVIEW_LEVEL: u8 = 50;

/// Result of one [`BatteryMeter::render_frame`] call.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Something was recorded into the draw list.
    pub drawn: bool,
    /// The charge animation wants another frame after this delay.
    pub next_frame_in: Option<Millis>,
}

enum Overlay {
    None,
    Bolt { shape: Shape, opaque: bool },
    Percent { text: String, size: f32, anchor: TextAnchor, opaque: bool },
    Warning { size: f32, anchor: TextAnchor },
}

/// Battery glyph renderer.
///
/// Owns the live battery state, demo overrides and the charge animation, and
/// records each frame into a [`DrawList`]:
/// 1. frame color over the (possibly cut) outline
/// 2. fill color over the outline below the level line
/// 3. opaque bolt, percentage text or critical warning
///
/// Setters only request a redraw while idle; a running charge animation
/// repaints on its own schedule.
pub struct BatteryMeter<G: GlyphOutlines = SegmentFont> {
    config: MeterConfig,
    glyphs: G,

    tracker: BatteryTracker,
    source: LevelSource,
    charge: ChargeAnimationDriver,

    view: Viewport,
    padding: Insets,
    power_save: bool,

    redraw_requested: bool,
}

impl BatteryMeter<SegmentFont> {
    pub fn new(config: MeterConfig) -> Result<Self, ConfigError> {
        Self::with_glyphs(config, SegmentFont::new())
    }
}

impl<G: GlyphOutlines> BatteryMeter<G> {
    pub fn with_glyphs(config: MeterConfig, glyphs: G) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            glyphs,
            tracker: BatteryTracker::new(),
            source: LevelSource::Live,
            charge: ChargeAnimationDriver::new(),
            view: Viewport::default(),
            padding: Insets::zero(),
            power_save: false,
            redraw_requested: false,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    /// Live state from the last status update (ignores demo overrides).
    #[inline]
    pub fn live_state(&self) -> &BatteryState {
        self.tracker.state()
    }

    /// State the next frame is drawn from.
    pub fn displayed_state(&self) -> BatteryState {
        self.source.resolve(self.tracker.state()).into_owned()
    }

    #[inline]
    pub fn level_source(&self) -> LevelSource {
        self.source
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.charge.is_animating()
    }

    #[inline]
    pub fn animated_level(&self) -> u8 {
        self.charge.animated_level()
    }

    #[inline]
    pub fn view(&self) -> Viewport {
        self.view
    }

    pub fn content_description(&self) -> Option<String> {
        self.tracker.content_description()
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn invalidate_if_idle(&mut self) {
        if !self.charge.is_animating() {
            self.redraw_requested = true;
        }
    }

    // ── inputs ────────────────────────────────────────────────────────────

    pub fn on_status_update(&mut self, ev: &BatteryStatusEvent) {
        if self.tracker.on_status_update(ev) {
            self.invalidate_if_idle();
        }
    }

    pub fn start_level_test(&mut self) -> LevelTestSequence {
        self.tracker.start_level_test()
    }

    pub fn apply_test_step(&mut self, step: &TestStep) {
        if self.tracker.apply_test_step(step) {
            self.invalidate_if_idle();
        }
    }

    /// Parses and applies a demo command. Malformed payloads leave the meter
    /// untouched.
    pub fn dispatch_demo_command(
        &mut self,
        command: &str,
        args: &std::collections::HashMap<String, String>,
    ) -> Result<(), DemoCommandError> {
        let cmd = DemoCommand::parse(command, args)?;
        if self.source.dispatch(cmd, self.tracker.state()) {
            self.redraw_requested = true;
        }
        Ok(())
    }

    pub fn set_size(&mut self, view: Viewport) {
        if self.view != view {
            trace!("battery meter resized to {}x{}", view.width, view.height);
            self.view = view;
            self.invalidate_if_idle();
        }
    }

    pub fn set_padding(&mut self, padding: Insets) {
        if self.padding != padding {
            self.padding = padding;
            self.invalidate_if_idle();
        }
    }

    pub fn set_power_save(&mut self, enabled: bool) {
        self.power_save = enabled;
        self.invalidate_if_idle();
    }

    pub fn set_text_visibility(&mut self, show: bool) {
        self.config.show_percent = show;
        self.invalidate_if_idle();
    }

    /// Enabling always requests a redraw so an idle meter can start pulsing.
    pub fn set_show_charge_animation(&mut self, show: bool) {
        if self.config.show_charge_animation != show {
            self.config.show_charge_animation = show;
            if show {
                self.redraw_requested = true;
            }
        }
    }

    pub fn set_cut_out_text(&mut self, cut_out: bool) {
        self.config.cut_out_text = cut_out;
        self.invalidate_if_idle();
    }

    pub fn set_battery_color(&mut self, frame: Color, fill: Color) {
        self.config.frame_color = frame;
        self.config.fill_color = fill;
        self.invalidate_if_idle();
    }

    pub fn set_battery_text_color(&mut self, color: Color) {
        self.config.text_color = color;
        self.invalidate_if_idle();
    }

    // ── colors ────────────────────────────────────────────────────────────

    fn is_low(&self, level: u8) -> bool {
        level <= self.config.low_level && !self.power_save
    }

    fn battery_color_for(&self, level: u8) -> Color {
        if self.is_low(level) { self.config.low_level_color } else { self.config.fill_color }
    }

    fn text_color_for(&self, level: u8) -> Color {
        if self.is_low(level) { self.config.low_level_color } else { self.config.text_color }
    }

    // ── paint ─────────────────────────────────────────────────────────────

    /// Records one frame into `out` (cleared first) and advances the charge
    /// animation.
    pub fn render_frame(&mut self, out: &mut DrawList) -> FrameOutcome {
        out.clear();
        self.redraw_requested = false;

        let state = self.source.resolve(self.tracker.state()).into_owned();
        let Some(level) = state.level.value() else {
            trace!("battery level unknown, nothing to draw");
            return FrameOutcome::default();
        };

        let cfg = &self.config;
        let view_w = self.view.width as f32;
        let view_h = self.view.height as f32;

        let geom = GeometryFrame::compute(
            self.view,
            self.padding,
            cfg.button_height_fraction,
            cfg.subpixel_smoothing_left,
            cfg.subpixel_smoothing_right,
        );

        let fraction = draw_fraction(self.charge.display_level(level), cfg.critical_level);
        let level_top = geom.level_top(fraction);
        let indicate_charging = state.should_indicate_charging();

        let overlay = if indicate_charging && !(cfg.show_percent && cfg.show_charge_animation) {
            let bolt_frame = geom.bolt_frame();
            let opaque = !cfg.cut_out_text || bolt_is_opaque(bolt_frame, level_top);
            Overlay::Bolt { shape: cfg.bolt.shape_in(bolt_frame), opaque }
        } else if cfg.show_percent && level > cfg.critical_level {
            let size = view_h * if level == 100 { 0.38 } else { 0.5 };
            let anchor = TextAnchor::new(view_w * 0.5, (view_h + self.glyphs.ascent(size)) * 0.47);
            let opaque = !cfg.cut_out_text || level_top > anchor.baseline;
            Overlay::Percent { text: level.to_string(), size, anchor, opaque }
        } else if cfg.show_percent {
            let size = view_h * 0.75;
            let anchor = TextAnchor::new(view_w * 0.5, (view_h + self.glyphs.ascent(size)) * 0.48);
            Overlay::Warning { size, anchor }
        } else {
            Overlay::None
        };

        let mut outline = geom.outline();
        match &overlay {
            Overlay::Bolt { shape, opaque: false } => outline = outline.difference(shape),
            Overlay::Percent { text, size, anchor, opaque: false } => {
                outline = outline.difference(&self.glyphs.outline(text, *size, *anchor));
            }
            _ => {}
        }

        let fill_color = if state.plugged {
            self.battery_color_for(PREVIEW_LEVEL)
        } else {
            self.battery_color_for(level)
        };
        let level_fill = outline.intersection(&Shape::rect(geom.fill_rect(level_top)));

        out.push_fill(ZIndex::BACKGROUND, outline, cfg.frame_color);
        out.push_fill(ZIndex::FILL, level_fill, fill_color);

        match overlay {
            Overlay::Bolt { shape, opaque: true } => {
                out.push_fill(ZIndex::OVERLAY, shape, self.text_color_for(PREVIEW_LEVEL));
            }
            Overlay::Percent { text, size, anchor, opaque: true } => {
                out.push_text(ZIndex::OVERLAY, text, size, self.text_color_for(level), anchor);
            }
            Overlay::Warning { size, anchor } => {
                out.push_text(ZIndex::OVERLAY, cfg.warning_text.clone(), size, cfg.low_level_color, anchor);
            }
            _ => {}
        }

        let was_animating = self.charge.is_animating();
        let next_frame_in = ChargeInputs::from_state(&state, self.config.show_charge_animation)
            .and_then(|inputs| self.charge.after_paint(inputs));
        if was_animating != self.charge.is_animating() {
            debug!("charge animation {}", if was_animating { "idle" } else { "running" });
        }

        FrameOutcome { drawn: !out.is_empty(), next_frame_in }
    }
}
