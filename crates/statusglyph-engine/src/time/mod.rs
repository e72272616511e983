//! Time subsystem.
//!
//! Provides injectable clocks and tick-sampled animations without coupling to a
//! UI toolkit's animator. Intended usage:
//! - one clock shared by everything driven from the same UI thread
//! - animations are started with a timestamp and sampled on every tick
//! - tests drive a `ManualClock` and step time deterministically

mod animation;
mod clock;
mod interpolator;

pub use animation::{Animation, AnimationPhase, AnimationSample};
pub use clock::{Clock, ManualClock, MonotonicClock, Millis};
pub use interpolator::Interpolator;
