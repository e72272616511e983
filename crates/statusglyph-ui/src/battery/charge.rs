use log::debug;
use statusglyph_engine::time::Millis;

use super::geometry::FULL;
use super::state::{BatteryState, ChargingStatus};

/// Delay between charge-animation frames.
pub const CHARGE_FRAME_MS: Millis = 50;

/// What the driver needs to know about the battery on each paint.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ChargeInputs {
    pub level: u8,
    pub indicate_charging: bool,
    pub full: bool,
    /// User setting: charge animation enabled.
    pub enabled: bool,
}

impl ChargeInputs {
    /// `None` while the level is unknown; nothing animates before the first update.
    pub fn from_state(state: &BatteryState, enabled: bool) -> Option<Self> {
        Some(Self {
            level: state.level.value()?,
            indicate_charging: state.should_indicate_charging(),
            full: state.status == ChargingStatus::Full,
            enabled,
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ChargePhase {
    Idle,
    Animating,
}

/// Charging pulse: while animating, the displayed level climbs one step per
/// frame, wraps from 101 to 0 and keeps climbing until one of the stop
/// conditions holds.
///
/// Stop conditions (checked before every step):
/// - charging no longer indicated and the pulse is back at the real level
/// - animation disabled and the pulse is back at the real level
/// - battery reports Full and the pulse reached [`FULL`]
#[derive(Debug, Clone, Default)]
pub struct ChargeAnimationDriver {
    animating: bool,
    animated_level: u8,
}

impl ChargeAnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> ChargePhase {
        if self.animating { ChargePhase::Animating } else { ChargePhase::Idle }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[inline]
    pub fn animated_level(&self) -> u8 {
        self.animated_level
    }

    /// Level the fill fraction is computed from.
    #[inline]
    pub fn display_level(&self, real: u8) -> u8 {
        if self.animating { self.animated_level } else { real }
    }

    /// Advances the driver after a paint. Returns the delay until the next
    /// frame is needed, or `None` once idle.
    pub fn after_paint(&mut self, inputs: ChargeInputs) -> Option<Millis> {
        if self.animating {
            self.step(inputs)
        } else {
            self.try_start(inputs)
        }
    }

    /// Stops immediately and snaps to the real level.
    pub fn reset(&mut self, level: u8) {
        self.animating = false;
        self.animated_level = level;
    }

    fn try_start(&mut self, inputs: ChargeInputs) -> Option<Millis> {
        self.animated_level = inputs.level;
        if !inputs.indicate_charging || inputs.full || !inputs.enabled {
            return None;
        }
        debug!("charge animation started at {}", inputs.level);
        self.animating = true;
        self.step(inputs)
    }

    fn step(&mut self, inputs: ChargeInputs) -> Option<Millis> {
        let at_level = self.animated_level == inputs.level;
        if (!inputs.indicate_charging && at_level)
            || (!inputs.enabled && at_level)
            || (inputs.full && self.animated_level >= FULL)
        {
            debug!("charge animation stopped at {}", inputs.level);
            self.reset(inputs.level);
            return None;
        }

        self.animated_level = if self.animated_level > 100 { 0 } else { self.animated_level + 1 };
        Some(CHARGE_FRAME_MS)
    }
}
