use std::time::Instant;

/// A monotonic time source read once per frame.
pub trait TimeSource {
    /// Returns milliseconds elapsed since the source started.
    fn now_ms(&mut self) -> f64;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    /// Starts a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now_ms(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// A clock that advances by a fixed step on every read, starting at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepClock {
    next_ms: f64,
    step_ms: f64,
}

impl FixedStepClock {
    /// Creates a clock that returns `0, step_ms, 2 * step_ms, ...`.
    #[must_use]
    pub fn new(step_ms: f64) -> Self {
        Self {
            next_ms: 0.0,
            step_ms,
        }
    }

    /// A 60 Hz display refresh.
    #[must_use]
    pub fn sixty_hz() -> Self {
        Self::new(1000.0 / 60.0)
    }
}

impl TimeSource for FixedStepClock {
    fn now_ms(&mut self) -> f64 {
        let now = self.next_ms;
        self.next_ms += self.step_ms;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_starts_at_zero() {
        let mut clock = FixedStepClock::new(10.0);
        let reads: Vec<f64> = (0..3).map(|_| clock.now_ms()).collect();
        assert_eq!(reads, vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn monotonic_clock_never_goes_back() {
        let mut clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
