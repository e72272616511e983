//! Statusglyph UI: the battery glyph and the status bar color/visibility
//! coordinators, on top of `statusglyph-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use statusglyph_ui::prelude::*;
//!
//! let mut meter = BatteryMeter::new(MeterConfig::default().show_percent(true))?;
//! meter.set_size(Viewport::new(40, 60));
//! meter.on_status_update(&BatteryStatusEvent { level: 42, status: 3, ..Default::default() });
//!
//! let mut list = DrawList::new();
//! let outcome = meter.render_frame(&mut list);
//! // Hand `list` to a rasterizer; repaint after `outcome.next_frame_in` if set.
//! ```
//!
//! # Driving the tint
//!
//! Implement [`StatusBarElements`](elements::StatusBarElements) for whatever
//! owns your views, then let a [`TintTransitionCoordinator`](tint::TintTransitionCoordinator)
//! push colors into it:
//!
//! ```rust,ignore
//! let mut tint = TintTransitionCoordinator::new(TintConfig::default(), clock.clone(), my_views);
//! tint.app_transition_pending();
//! tint.set_icons_dark(true, true);          // held back
//! tint.app_transition_starting(now + 100, 300);
//! while tint.tick() { /* advance clock */ }
//! ```

pub mod battery;
pub mod elements;
pub mod error;
pub mod tint;
pub mod visibility;

/// Everything a host needs to wire up a status bar.
pub mod prelude {
    pub use crate::battery::{
        BatteryMeter, BatteryState, BatteryStatusEvent, ChargingStatus, DemoCommand, FrameOutcome,
        LevelSource, MeterConfig,
    };
    pub use crate::elements::{apply_battery_color, Element, NotificationIconInfo, StatusBarElements, Visibility};
    pub use crate::error::{ConfigError, DemoCommandError};
    pub use crate::tint::{Channel, ChannelColors, ChannelGroup, TintConfig, TintTransitionCoordinator};
    pub use crate::visibility::{ClockStyle, KeyguardFade, VisibilityController};

    // Engine primitives hosts touch directly.
    pub use statusglyph_engine::coords::{Insets, Viewport};
    pub use statusglyph_engine::paint::Color;
    pub use statusglyph_engine::scene::DrawList;
    pub use statusglyph_engine::time::{Clock, ManualClock, Millis, MonotonicClock};
}
