//! The cycle driver.
//!
//! Once per interval the driver picks a random pattern and per-move delay,
//! traces the pattern with the cursor, bumps the cycle counter and redraws
//! the status screen. It stops after the configured number of cycles or when
//! an interrupt arrives, printing the summary either way.
//!
//! - `state`: `RunState`, the counters owned by the driver
//! - `seams`: `Clock` and `Randomness`, injectable for tests
//! - `settings`: `DriverSettings`
//! - `cycle`: `CycleDriver`, the tick handler and scheduling loop

mod cycle;
mod seams;
mod settings;
mod state;

pub use cycle::{CycleDriver, RunReport, StopReason, TickOutcome};
pub use seams::{Clock, Randomness, SystemClock};
pub use settings::{DriverSettings, DEFAULT_DELAY_MS, DEFAULT_INTERVAL, DEFAULT_TOTAL_CYCLES};
pub use state::RunState;
