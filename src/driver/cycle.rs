//! Tick handler and scheduling loop.

use std::io::Write;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use super::seams::{Clock, Randomness, SystemClock};
use super::settings::DriverSettings;
use super::state::RunState;
use crate::cursor::Cursor;
use crate::pattern::{Canvas, Pattern, ScreenSize};
use crate::render::{StatusScreen, StatusView, SummaryView};
use crate::stats::{ResourceSampler, ResourceSnapshot, SystemSampler};

/// Whether the driver wants another tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Finished,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// All cycles ran
    Completed,
    /// An interrupt (Ctrl+C) arrived
    Interrupted,
}

/// What a finished run looked like.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub reason: StopReason,
    pub started_at: DateTime<Local>,
    pub ended_at: DateTime<Local>,
    pub cycles: u32,
    pub resources: ResourceSnapshot,
}

/// Drives the cursor through random patterns once per interval.
pub struct CycleDriver<W: Write> {
    settings: DriverSettings,
    state: RunState,
    canvas: Canvas,
    cursor: Cursor,
    clock: Box<dyn Clock>,
    random: Box<dyn Randomness>,
    sampler: Box<dyn ResourceSampler>,
    screen: StatusScreen<W>,
    last_now: DateTime<Local>,
    report: Option<RunReport>,
}

impl<W: Write> CycleDriver<W> {
    /// Create a driver using the system clock, thread RNG and sysinfo sampler.
    pub fn new(
        mut settings: DriverSettings,
        cursor: Cursor,
        screen: StatusScreen<W>,
        display: ScreenSize,
    ) -> Self {
        if settings.patterns.is_empty() {
            settings.patterns = Pattern::ALL.to_vec();
        }
        let clock = SystemClock;
        let started_at = clock.now();
        Self {
            canvas: Canvas::from_screen(display, settings.margin),
            state: RunState::new(started_at, settings.total_cycles, display),
            settings,
            cursor,
            clock: Box::new(clock),
            random: Box::new(rand::rng()),
            sampler: Box::new(SystemSampler::new()),
            screen,
            last_now: started_at,
            report: None,
        }
    }

    /// Replace the clock. The run's start time is taken from the new clock.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        let started_at = clock.now();
        self.state = RunState::new(started_at, self.settings.total_cycles, self.state.screen());
        self.last_now = started_at;
        self.clock = clock;
        self
    }

    pub fn with_random(mut self, random: Box<dyn Randomness>) -> Self {
        self.random = random;
        self
    }

    pub fn with_sampler(mut self, sampler: Box<dyn ResourceSampler>) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn screen(&self) -> &StatusScreen<W> {
        &self.screen
    }

    /// Current time, never earlier than a time already shown.
    fn now(&mut self) -> DateTime<Local> {
        let now = self.clock.now().max(self.last_now);
        self.last_now = now;
        now
    }

    /// Draw the initial screen.
    pub fn start(&mut self) -> Result<()> {
        tracing::info!(
            total_cycles = self.state.total_cycles(),
            screen = %self.state.screen(),
            canvas_width = self.canvas.width,
            canvas_height = self.canvas.height,
            "mouse mover started"
        );
        self.screen
            .begin(&self.state.started_at(), self.state.total_cycles())
            .context("failed to draw status screen")
    }

    /// Run one cycle: pick, trace, count, redraw.
    ///
    /// Cursor failures are logged and the cycle still counts. Once the run is
    /// complete further calls do nothing and return `Finished`.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if self.state.is_complete() {
            return Ok(TickOutcome::Finished);
        }

        let pattern = self.random.pick_pattern(&self.settings.patterns);
        let delay_ms = self
            .random
            .pick_delay_ms(self.settings.min_delay_ms, self.settings.max_delay_ms);
        self.cursor.set_move_delay(Duration::from_millis(delay_ms));

        let cycle = self.state.cycle_count() + 1;
        match self.cursor.trace(pattern.points(self.canvas)) {
            Ok(moves) => {
                tracing::debug!(cycle, %pattern, delay_ms, moves, "cycle traced");
            }
            Err(e) => {
                tracing::warn!(cycle, %pattern, error = %e, "cursor movement failed");
            }
        }
        self.state.record_cycle();

        let view = StatusView {
            started_at: self.state.started_at(),
            now: self.now(),
            cycles: self.state.cycle_count(),
            total_cycles: self.state.total_cycles(),
            resources: self.sampler.sample(),
        };
        self.screen
            .status(&view)
            .context("failed to draw status screen")?;

        if self.state.is_complete() {
            Ok(TickOutcome::Finished)
        } else {
            Ok(TickOutcome::Continue)
        }
    }

    /// Print the summary and report the run. The summary is printed once;
    /// later calls return the same report.
    pub fn finish(&mut self, reason: StopReason) -> Result<RunReport> {
        if let Some(report) = &self.report {
            return Ok(report.clone());
        }

        let report = RunReport {
            reason,
            started_at: self.state.started_at(),
            ended_at: self.now(),
            cycles: self.state.cycle_count(),
            resources: self.sampler.sample(),
        };
        self.screen
            .summary(&SummaryView {
                started_at: report.started_at,
                ended_at: report.ended_at,
                cycles: report.cycles,
                resources: report.resources,
            })
            .context("failed to print summary")?;

        tracing::info!(?reason, cycles = report.cycles, "mouse mover stopped");
        self.report = Some(report.clone());
        Ok(report)
    }

    /// Tick every interval until the run completes or `interrupts` delivers.
    ///
    /// A tick is never cut short; an interrupt that arrives mid-tick is seen
    /// on the next wait. If `interrupts` is disconnected the loop just sleeps.
    pub fn run(&mut self, interrupts: &Receiver<()>) -> Result<RunReport> {
        self.start()?;

        let interval = self.settings.interval;
        let mut next_tick = Instant::now() + interval;
        let mut listening = true;

        loop {
            let wait = next_tick.saturating_duration_since(Instant::now());
            if listening {
                match interrupts.recv_timeout(wait) {
                    Ok(()) => {
                        tracing::info!("interrupt received");
                        return self.finish(StopReason::Interrupted);
                    }
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => {
                        tracing::debug!("interrupt channel closed");
                        listening = false;
                        thread::sleep(next_tick.saturating_duration_since(Instant::now()));
                    }
                }
            } else {
                thread::sleep(wait);
            }

            if self.tick()? == TickOutcome::Finished {
                return self.finish(StopReason::Completed);
            }

            // An overrunning tick delays the schedule instead of bursting.
            next_tick = (next_tick + interval).max(Instant::now());
        }
    }
}
