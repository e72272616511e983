use log::{debug, trace};

use super::state::{plug, BatteryHealth, BatteryLevel, BatteryState, ChargingStatus};

/// Interval between synthetic level-test updates.
pub const LEVEL_TEST_STEP_MS: u64 = 200;

/// Inbound battery status update, in the platform's raw shape.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryStatusEvent {
    /// Level on the `0..=scale` range. Negative means unknown.
    pub level: i32,
    pub scale: i32,
    /// Plug-source bitmask, see [`plug`].
    pub plug_type: u32,
    pub health: i32,
    pub status: i32,
    pub technology: Option<String>,
    pub voltage: i32,
    pub temperature: i32,
    /// Set on synthetic updates produced by a level test.
    pub test_mode: bool,
}

impl Default for BatteryStatusEvent {
    fn default() -> Self {
        Self {
            level: 0,
            scale: 100,
            plug_type: 0,
            health: 1,
            status: 1,
            technology: None,
            voltage: 0,
            temperature: 0,
            test_mode: false,
        }
    }
}

impl BatteryStatusEvent {
    /// Level normalized to a percentage, truncating like the platform does.
    pub fn normalized_level(&self) -> BatteryLevel {
        if self.level < 0 {
            return BatteryLevel::Unknown;
        }
        let scale = if self.scale > 0 { self.scale } else { 100 };
        BatteryLevel::percent((100.0 * self.level as f32 / scale as f32) as i32)
    }
}

/// Keeps the live battery state from status updates.
#[derive(Debug, Default)]
pub struct BatteryTracker {
    state: BatteryState,
    test_mode: bool,
}

impl BatteryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &BatteryState {
        &self.state
    }

    #[inline]
    pub fn in_test_mode(&self) -> bool {
        self.test_mode
    }

    /// Applies a status update. Returns `false` when the update was ignored
    /// because a level test owns the state.
    pub fn on_status_update(&mut self, ev: &BatteryStatusEvent) -> bool {
        if self.test_mode && !ev.test_mode {
            trace!("ignoring live battery update during level test");
            return false;
        }

        self.state = BatteryState {
            level: ev.normalized_level(),
            plug_type: ev.plug_type,
            plugged: ev.plug_type != 0,
            status: ChargingStatus::from_raw(ev.status),
            health: BatteryHealth::from_raw(ev.health),
            technology: ev.technology.clone(),
            voltage: ev.voltage,
            temperature: ev.temperature,
        };
        trace!("battery state {:?}", self.state);
        true
    }

    /// Enters level-test mode and returns the synthetic update sequence.
    ///
    /// The caller feeds each step back through [`apply_test_step`](Self::apply_test_step)
    /// every [`LEVEL_TEST_STEP_MS`].
    pub fn start_level_test(&mut self) -> LevelTestSequence {
        debug!("battery level test started");
        self.test_mode = true;
        LevelTestSequence::new(self.state.level, self.state.plug_type)
    }

    pub fn apply_test_step(&mut self, step: &TestStep) -> bool {
        if step.restores_live_state {
            debug!("battery level test finished");
            self.test_mode = false;
        }
        self.on_status_update(&step.event)
    }

    /// Accessibility text for the current level.
    pub fn content_description(&self) -> Option<String> {
        self.state.level.value().map(accessibility_description)
    }
}

/// Spoken description of a charge level.
pub fn accessibility_description(level: u8) -> String {
    format!("Battery {level} percent.")
}

/// One synthetic update of a level test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestStep {
    pub event: BatteryStatusEvent,
    /// Last step: leaves test mode and restores the pre-test level.
    pub restores_live_state: bool,
}

/// Calibration sweep: plugged 0→99, unplugged 100→0, then restore.
#[derive(Debug, Clone)]
pub struct LevelTestSequence {
    current: i32,
    increment: i32,
    saved_level: BatteryLevel,
    saved_plug_type: u32,
    done: bool,
}

impl LevelTestSequence {
    fn new(saved_level: BatteryLevel, saved_plug_type: u32) -> Self {
        Self { current: 0, increment: 1, saved_level, saved_plug_type, done: false }
    }
}

impl Iterator for LevelTestSequence {
    type Item = TestStep;

    fn next(&mut self) -> Option<TestStep> {
        if self.done {
            return None;
        }

        if self.current < 0 {
            self.done = true;
            let level = self.saved_level.value().map_or(-1, i32::from);
            return Some(TestStep {
                event: BatteryStatusEvent {
                    level,
                    plug_type: self.saved_plug_type,
                    ..Default::default()
                },
                restores_live_state: true,
            });
        }

        let step = TestStep {
            event: BatteryStatusEvent {
                level: self.current,
                plug_type: if self.increment > 0 { plug::AC } else { 0 },
                test_mode: true,
                ..Default::default()
            },
            restores_live_state: false,
        };

        self.current += self.increment;
        if self.current == 100 {
            self.increment = -1;
        }
        Some(step)
    }
}
