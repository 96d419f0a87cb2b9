//! Console rendering for the status screen.
//!
//! - `theme`: colors and ANSI helpers
//! - `progress`: the cycle progress bar
//! - `screen`: per-tick status block and the final summary

mod progress;
mod screen;
pub mod theme;

pub use progress::{build_progress_bar, progress_bar_width, render_progress_line, BAR_WIDTH};
pub use screen::{StatusScreen, StatusView, SummaryView, BANNER};
pub use theme::Theme;
