//! Battery glyph: live/demo state, geometry and the charge pulse.

mod bolt;
mod charge;
mod config;
mod geometry;
mod meter;
mod source;
mod state;
mod tracker;

pub use bolt::{BoltPoints, DEFAULT_BOLT_POINTS};
pub use charge::{ChargeAnimationDriver, ChargeInputs, ChargePhase, CHARGE_FRAME_MS};
pub use config::{MeterConfig, LOW_LEVEL_COLOR};
pub use geometry::{bolt_fill_fraction, bolt_is_opaque, draw_fraction, GeometryFrame, BOLT_LEVEL_THRESHOLD, FULL};
pub use meter::{BatteryMeter, FrameOutcome};
pub use source::{DemoCommand, LevelSource};
pub use state::{plug, BatteryHealth, BatteryLevel, BatteryState, ChargingStatus};
pub use tracker::{
    accessibility_description, BatteryStatusEvent, BatteryTracker, LevelTestSequence, TestStep,
    LEVEL_TEST_STEP_MS,
};
