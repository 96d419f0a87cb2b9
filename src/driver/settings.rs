//! Driver settings.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::pattern::{Pattern, DEFAULT_MARGIN};

pub const DEFAULT_TOTAL_CYCLES: u32 = 100;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_DELAY_MS: RangeInclusive<u64> = 1..=5;

/// How a run behaves. Built from the config file and CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverSettings {
    pub total_cycles: u32,
    pub interval: Duration,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub patterns: Vec<Pattern>,
    pub margin: u32,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            total_cycles: DEFAULT_TOTAL_CYCLES,
            interval: DEFAULT_INTERVAL,
            min_delay_ms: *DEFAULT_DELAY_MS.start(),
            max_delay_ms: *DEFAULT_DELAY_MS.end(),
            patterns: Pattern::ALL.to_vec(),
            margin: DEFAULT_MARGIN,
        }
    }
}
