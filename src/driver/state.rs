//! Run state owned by the cycle driver.

use chrono::{DateTime, Local};

use crate::pattern::ScreenSize;

/// Counters for one run.
///
/// `cycle_count` only grows and never passes `total_cycles`.
#[derive(Debug, Clone)]
pub struct RunState {
    started_at: DateTime<Local>,
    cycle_count: u32,
    total_cycles: u32,
    screen: ScreenSize,
}

impl RunState {
    pub fn new(started_at: DateTime<Local>, total_cycles: u32, screen: ScreenSize) -> Self {
        Self {
            started_at,
            cycle_count: 0,
            total_cycles,
            screen,
        }
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    pub fn total_cycles(&self) -> u32 {
        self.total_cycles
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn is_complete(&self) -> bool {
        self.cycle_count >= self.total_cycles
    }

    /// Count one finished cycle. Returns `false` if the run was already complete.
    pub fn record_cycle(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.cycle_count += 1;
        true
    }
}
