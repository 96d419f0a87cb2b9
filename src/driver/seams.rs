//! Wall clock and randomness used by the driver.

use chrono::{DateTime, Local};
use rand::Rng;

use crate::pattern::Pattern;

/// Source of wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The system's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Random choices made on every tick.
pub trait Randomness {
    /// One of `patterns`, uniformly. `patterns` is never empty.
    fn pick_pattern(&mut self, patterns: &[Pattern]) -> Pattern;

    /// A delay in `[min_ms, max_ms]`, uniformly.
    fn pick_delay_ms(&mut self, min_ms: u64, max_ms: u64) -> u64;
}

impl<R: Rng> Randomness for R {
    fn pick_pattern(&mut self, patterns: &[Pattern]) -> Pattern {
        patterns[self.random_range(0..patterns.len())]
    }

    fn pick_delay_ms(&mut self, min_ms: u64, max_ms: u64) -> u64 {
        self.random_range(min_ms..=max_ms)
    }
}
