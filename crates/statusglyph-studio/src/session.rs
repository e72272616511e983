//! Headless status bar the studio drives the coordinators against.

use log::{debug, info};
use statusglyph_engine::paint::Color;
use statusglyph_ui::battery::BatteryMeter;
use statusglyph_ui::elements::{apply_battery_color, Element, NotificationIconInfo, StatusBarElements, Visibility};
use statusglyph_ui::tint::Channel;

/// Routes battery channels into a real meter and logs everything else.
pub struct ConsoleStatusBar {
    pub meter: BatteryMeter,
    pub notification_icons: Vec<NotificationIconInfo>,
    pub traffic_active: bool,
}

impl ConsoleStatusBar {
    pub fn new(meter: BatteryMeter) -> Self {
        Self {
            meter,
            notification_icons: vec![
                NotificationIconInfo::default(),
                NotificationIconInfo { pre_l: true, grayscale: false },
                NotificationIconInfo { pre_l: true, grayscale: true },
            ],
            traffic_active: false,
        }
    }
}

impl StatusBarElements for ConsoleStatusBar {
    fn set_color(&mut self, channel: Channel, color: Color) {
        if apply_battery_color(&mut self.meter, channel, color) {
            debug!("battery {channel:?} <- {color}");
            return;
        }
        if channel == Channel::NotificationIcon {
            let tinted = self.notification_icons.iter().filter(|i| i.accepts_tint()).count();
            debug!("notification icons <- {color} ({tinted}/{} tinted)", self.notification_icons.len());
            return;
        }
        debug!("{channel:?} <- {color}");
    }

    fn set_keyguard_color(&mut self, channel: Channel, color: Color) {
        debug!("keyguard {channel:?} <- {color}");
    }

    fn set_visibility(&mut self, element: Element, visibility: Visibility) {
        info!("{element:?} is now {visibility:?}");
    }

    fn set_alpha(&mut self, element: Element, alpha: f32) {
        debug!("{element:?} alpha {alpha:.2}");
    }

    fn network_traffic_active(&self) -> bool {
        self.traffic_active
    }

    fn notification_icon_count(&self) -> usize {
        self.notification_icons.len()
    }
}
