use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Milliseconds on a monotonic, uptime-style timeline.
pub type Millis = u64;

/// Source of the current time for animations and deferral windows.
pub trait Clock {
    fn now_ms(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    #[inline]
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

/// Wall-clock backed monotonic time, zeroed at construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

/// Hand-stepped clock for tests and offline simulation.
///
/// Interior mutability lets one `Rc<ManualClock>` be shared by several
/// owners while the driver advances it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_through_shared_handle() {
        let clock = Rc::new(ManualClock::new(100));
        let shared: Rc<dyn Clock> = clock.clone();
        clock.advance(50);
        assert_eq!(shared.now_ms(), 150);
        clock.set(10);
        assert_eq!(shared.now_ms(), 10);
    }

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
