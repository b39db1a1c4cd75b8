//! # Monotonic Clock
//!
//! Millisecond timestamps behind a trait seam so tests inject synthetic
//! time instead of sleeping.

use std::time::Instant;

/// Source of monotonic millisecond timestamps.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary fixed origin.
    ///
    /// Must be monotonic: successive calls never go backwards.
    fn now_ms(&self) -> f64;
}

/// Production clock backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    /// Fixed origin captured at construction.
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
