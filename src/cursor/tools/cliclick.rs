//! macOS cliclick cursor tool.

use std::process::Command;
use std::time::Duration;

use super::{command_exists, run_tool};
use crate::cursor::method::CursorMethod;
use crate::cursor::tool::{CursorTool, CursorToolError};
use crate::pattern::{Point, Points, ScreenSize};

/// AppleScript that prints the desktop bounds as "0, 0, W, H".
const DESKTOP_BOUNDS_SCRIPT: &str = r#"tell application "Finder" to get bounds of window of desktop"#;

/// macOS cursor tool using cliclick.
///
/// Moves are chained into one invocation with `-w` as the per-move wait.
/// The display size comes from osascript.
pub struct Cliclick {
    delay: Duration,
}

impl Cliclick {
    /// Create a new Cliclick tool.
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// cliclick's move command. Negative values need the `=` prefix.
    fn move_command(point: Point) -> String {
        let coord = |v: i32| {
            if v < 0 {
                format!("={}", v)
            } else {
                v.to_string()
            }
        };
        format!("m:{},{}", coord(point.x), coord(point.y))
    }

    pub(crate) fn chain_args(points: Points, delay: Duration) -> Vec<String> {
        let mut args = Vec::with_capacity(points.len() + 2);
        args.push("-w".to_string());
        args.push(delay.as_millis().to_string());
        args.extend(points.map(Self::move_command));
        args
    }
}

/// Parse the AppleScript desktop bounds ("0, 0, 1440, 900").
pub(crate) fn parse_bounds(output: &str) -> Option<ScreenSize> {
    let values: Vec<i64> = output
        .trim()
        .split(',')
        .map(|v| v.trim().parse())
        .collect::<Result<_, _>>()
        .ok()?;
    match values.as_slice() {
        [left, top, right, bottom] => {
            let width = u32::try_from(right - left).ok()?;
            let height = u32::try_from(bottom - top).ok()?;
            Some(ScreenSize::new(width, height))
        }
        _ => None,
    }
}

impl CursorTool for Cliclick {
    fn method(&self) -> CursorMethod {
        CursorMethod::Cliclick
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos") && command_exists("cliclick")
    }

    fn screen_size(&self) -> Result<ScreenSize, CursorToolError> {
        let stdout = run_tool(
            Command::new("osascript").args(["-e", DESKTOP_BOUNDS_SCRIPT]),
            "osascript",
        )?;
        parse_bounds(&stdout).ok_or_else(|| {
            CursorToolError::Failed(format!("unexpected desktop bounds: {}", stdout.trim()))
        })
    }

    fn set_move_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    fn move_delay(&self) -> Duration {
        self.delay
    }

    fn move_to(&mut self, point: Point) -> Result<(), CursorToolError> {
        run_tool(
            Command::new("cliclick").arg(Self::move_command(point)),
            self.name(),
        )
        .map(|_| ())
    }

    fn trace(&mut self, points: Points) -> Result<usize, CursorToolError> {
        let moves = points.len();
        if moves == 0 {
            return Ok(0);
        }
        let args = Self::chain_args(points, self.delay);
        run_tool(Command::new("cliclick").args(&args), self.name())?;
        Ok(moves)
    }
}

impl Default for Cliclick {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{Canvas, Pattern};

    #[test]
    fn parses_desktop_bounds() {
        assert_eq!(parse_bounds("0, 0, 1440, 900\n"), Some(ScreenSize::new(1440, 900)));
        assert_eq!(parse_bounds("0, 0, 1440"), None);
        assert_eq!(parse_bounds("execution error"), None);
    }

    #[test]
    fn negative_coordinates_use_equals_prefix() {
        assert_eq!(Cliclick::move_command(Point::new(10, 20)), "m:10,20");
        assert_eq!(Cliclick::move_command(Point::new(10, -4)), "m:10,=-4");
    }

    #[test]
    fn chain_args_start_with_wait() {
        let points = Pattern::Zigzag.points(Canvas::new(40, 100.0));
        let args = Cliclick::chain_args(points, Duration::from_millis(4));
        assert_eq!(args, vec!["-w", "4", "m:0,80", "m:20,120"]);
    }
}
