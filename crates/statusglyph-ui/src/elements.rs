//! Outbound side: the views the coordinators push colors and visibility to.

use statusglyph_engine::paint::Color;
use statusglyph_engine::text::GlyphOutlines;

use crate::battery::BatteryMeter;
use crate::tint::Channel;

/// Views whose visibility is managed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Element {
    SystemIconArea,
    NotificationIconArea,
    CenterClockLayout,
    ClockDefault,
    ClockCentered,
    CarrierLabel,
    CarrierLabelKeyguard,
    Battery,
    BatteryKeyguard,
    BatteryBar,
    BatteryBarKeyguard,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Visibility {
    Visible,
    /// Hidden but still occupying layout space.
    Invisible,
    Gone,
}

impl Visibility {
    #[inline]
    pub fn shown_if(show: bool) -> Self {
        if show { Visibility::Visible } else { Visibility::Gone }
    }
}

/// Sink for everything the tint and visibility coordinators output.
pub trait StatusBarElements {
    /// Displayed color of a channel's status-bar element.
    fn set_color(&mut self, channel: Channel, color: Color);

    /// Committed color for the keyguard counterpart. Only called for channels
    /// with [`Channel::has_keyguard_mirror`].
    fn set_keyguard_color(&mut self, _channel: Channel, _color: Color) {}

    fn set_visibility(&mut self, element: Element, visibility: Visibility);

    fn set_alpha(&mut self, element: Element, alpha: f32);

    /// Whether the network traffic meter is currently updating. Theme changes
    /// only cross-fade while it is.
    fn network_traffic_active(&self) -> bool {
        true
    }

    /// Number of notification icons currently shown.
    fn notification_icon_count(&self) -> usize {
        0
    }
}

/// Per-icon flags that decide whether a notification icon takes the tint.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct NotificationIconInfo {
    /// Icon targets a platform older than Material.
    pub pre_l: bool,
    pub grayscale: bool,
}

impl NotificationIconInfo {
    /// Legacy icons are only tinted when they are grayscale.
    #[inline]
    pub fn accepts_tint(self) -> bool {
        !self.pre_l || self.grayscale
    }
}

/// Forwards a battery channel color into the meter's setters. Returns `false`
/// for channels the meter does not own.
pub fn apply_battery_color<G: GlyphOutlines>(meter: &mut BatteryMeter<G>, channel: Channel, color: Color) -> bool {
    let cfg = meter.config();
    match channel {
        Channel::BatteryFrame => {
            let fill = cfg.fill_color;
            meter.set_battery_color(color, fill);
        }
        Channel::BatteryFill => {
            let frame = cfg.frame_color;
            meter.set_battery_color(frame, color);
        }
        Channel::BatteryText => meter.set_battery_text_color(color),
        _ => return false,
    }
    true
}
