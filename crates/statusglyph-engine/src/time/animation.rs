use super::{Interpolator, Millis};

/// Where an animation is on its timeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AnimationPhase {
    /// Inside the start delay; the value holds at `from`.
    Delayed,
    Running,
    Finished,
}

/// One sample of an animation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationSample {
    pub phase: AnimationPhase,
    /// Interpolated fraction in `[0, 1]`.
    pub fraction: f32,
    /// `from + (to - from) * fraction`.
    pub value: f32,
}

/// Float animation sampled against an external clock.
///
/// Nothing runs on its own: owners call [`sample`](Self::sample) on every
/// tick. Cancellation is dropping the value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Animation {
    from: f32,
    to: f32,
    started_at: Millis,
    delay: Millis,
    duration: Millis,
    interpolator: Interpolator,
}

impl Animation {
    /// Animation from `from` to `to` starting at `now` with no delay.
    pub fn new(from: f32, to: f32, now: Millis, duration: Millis) -> Self {
        Self {
            from,
            to,
            started_at: now,
            delay: 0,
            duration,
            interpolator: Interpolator::AccelerateDecelerate,
        }
    }

    pub fn delay(mut self, delay: Millis) -> Self {
        self.delay = delay;
        self
    }

    pub fn interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    #[inline]
    pub fn from(&self) -> f32 {
        self.from
    }

    #[inline]
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Timestamp at which the value starts moving.
    #[inline]
    pub fn start_time(&self) -> Millis {
        self.started_at.saturating_add(self.delay)
    }

    #[inline]
    pub fn end_time(&self) -> Millis {
        self.start_time().saturating_add(self.duration)
    }

    pub fn sample(&self, now: Millis) -> AnimationSample {
        let start = self.start_time();
        if now < start {
            return AnimationSample { phase: AnimationPhase::Delayed, fraction: 0.0, value: self.from };
        }

        let elapsed = now - start;
        if self.duration == 0 || elapsed >= self.duration {
            return AnimationSample { phase: AnimationPhase::Finished, fraction: 1.0, value: self.to };
        }

        let linear = elapsed as f32 / self.duration as f32;
        let fraction = self.interpolator.interpolate(linear);
        AnimationSample {
            phase: AnimationPhase::Running,
            fraction,
            value: self.from + (self.to - self.from) * fraction,
        }
    }

    #[inline]
    pub fn is_finished(&self, now: Millis) -> bool {
        now >= self.end_time()
    }
}
