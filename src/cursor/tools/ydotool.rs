//! Linux Wayland ydotool cursor tool.

use std::process::Command;
use std::time::Duration;

use super::{command_exists, run_tool};
use crate::cursor::method::CursorMethod;
use crate::cursor::tool::{CursorTool, CursorToolError};
use crate::pattern::{Point, ScreenSize};

/// Linux Wayland cursor tool using ydotool.
///
/// Needs a running `ydotoold`. ydotool cannot query the display, so the
/// configured fallback size is used.
pub struct Ydotool {
    delay: Duration,
}

impl Ydotool {
    /// Create a new Ydotool tool.
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }
}

impl CursorTool for Ydotool {
    fn method(&self) -> CursorMethod {
        CursorMethod::Ydotool
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && command_exists("ydotool")
    }

    fn screen_size(&self) -> Result<ScreenSize, CursorToolError> {
        Err(CursorToolError::NotSupported)
    }

    fn set_move_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    fn move_delay(&self) -> Duration {
        self.delay
    }

    fn move_to(&mut self, point: Point) -> Result<(), CursorToolError> {
        run_tool(
            Command::new("ydotool").args([
                "mousemove".to_string(),
                "--absolute".to_string(),
                "-x".to_string(),
                point.x.to_string(),
                "-y".to_string(),
                point.y.to_string(),
            ]),
            self.name(),
        )
        .map(|_| ())
    }
}

impl Default for Ydotool {
    fn default() -> Self {
        Self::new()
    }
}
