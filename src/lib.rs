//! Mouse Mover
//!
//! Moves the mouse cursor along random geometric patterns at a fixed
//! interval, shows live statistics and prints a summary at the end.
//!
//! - [`pattern`]: sine wave, zigzag and circle point generators
//! - [`cursor`]: cursor control through platform tools
//! - [`driver`]: run state, tick handler and scheduling loop
//! - [`render`]: status screen and progress bar
//! - [`stats`]: memory and load sampling
//! - [`config`], [`cli`]: settings

pub mod cli;
pub mod config;
pub mod cursor;
pub mod driver;
pub mod pattern;
pub mod render;
pub mod stats;
pub mod timefmt;

pub use config::{Config, ConfigError};
pub use cursor::{Backend, Cursor, CursorError};
pub use driver::{CycleDriver, DriverSettings, RunReport, RunState, StopReason};
pub use pattern::{Canvas, Pattern, Point, ScreenSize};
