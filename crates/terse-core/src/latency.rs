//! Injectable simulated-latency strategy
//!
//! The optimizer models a remote-call delay without making one. The
//! strategy is a trait so callers that must not sleep (tests, batch mode
//! measurements) can substitute a zero-delay implementation.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A delay source for simulated processing latency
pub trait Delay {
    /// Sample the next delay without sleeping
    fn sample(&self) -> Duration;

    /// Sleep for one sampled delay and report how long it was
    fn pause(&self) -> Duration {
        let delay = self.sample();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        delay
    }
}

/// Uniform jitter in `[min, max)`, really slept
///
/// Jitter comes from the wall clock's subsecond nanos; no statistical
/// quality is required of it.
#[derive(Debug, Clone)]
pub struct SimulatedDelay {
    min: Duration,
    max: Duration,
}

impl SimulatedDelay {
    /// The standard range: 0.1 to 0.3 seconds
    pub fn new() -> Self {
        Self::with_range(Duration::from_millis(100), Duration::from_millis(300))
    }

    pub fn with_range(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }
}

impl Default for SimulatedDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl Delay for SimulatedDelay {
    fn sample(&self) -> Duration {
        let span = self.max.saturating_sub(self.min);
        if span.is_zero() {
            return self.min;
        }
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos() as u64;
        self.min + Duration::from_nanos(nanos % span.as_nanos() as u64)
    }
}

/// Zero delay, never sleeps
#[derive(Debug, Clone, Copy)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn sample(&self) -> Duration {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_delay_stays_in_range() {
        let delay = SimulatedDelay::new();
        for _ in 0..50 {
            let d = delay.sample();
            assert!(d >= Duration::from_millis(100), "sampled {d:?}");
            assert!(d < Duration::from_millis(300), "sampled {d:?}");
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let delay = SimulatedDelay::with_range(Duration::from_millis(5), Duration::from_millis(5));
        assert_eq!(delay.sample(), Duration::from_millis(5));
    }

    #[test]
    fn test_no_delay_pause_is_zero() {
        assert_eq!(NoDelay.pause(), Duration::ZERO);
    }
}
