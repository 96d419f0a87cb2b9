//! Linux X11 xdotool cursor tool.

use std::process::Command;
use std::time::Duration;

use super::{command_exists, run_tool};
use crate::cursor::method::CursorMethod;
use crate::cursor::tool::{CursorTool, CursorToolError};
use crate::pattern::{Point, Points, ScreenSize};

/// Linux X11 cursor tool using xdotool.
///
/// A whole pattern is sent as one chained invocation
/// (`mousemove X Y sleep S mousemove ...`), so tracing does not spawn a
/// process per point.
pub struct Xdotool {
    delay: Duration,
}

impl Xdotool {
    /// Create a new Xdotool tool.
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// Build the chained xdotool arguments for a sequence of moves.
    pub(crate) fn chain_args(points: Points, delay: Duration) -> Vec<String> {
        let sleep = (!delay.is_zero()).then(|| format!("{}", delay.as_secs_f64()));
        let per_move = if sleep.is_some() { 5 } else { 3 };
        let mut args = Vec::with_capacity(points.len() * per_move);
        for point in points {
            args.push("mousemove".to_string());
            args.push(point.x.to_string());
            args.push(point.y.to_string());
            if let Some(sleep) = &sleep {
                args.push("sleep".to_string());
                args.push(sleep.clone());
            }
        }
        args
    }
}

/// Parse `xdotool getdisplaygeometry` output ("1920 1080").
pub(crate) fn parse_geometry(output: &str) -> Option<ScreenSize> {
    let mut parts = output.split_whitespace();
    let width = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    Some(ScreenSize::new(width, height))
}

impl CursorTool for Xdotool {
    fn method(&self) -> CursorMethod {
        CursorMethod::Xdotool
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
            && std::env::var_os("DISPLAY").is_some()
            && command_exists("xdotool")
    }

    fn screen_size(&self) -> Result<ScreenSize, CursorToolError> {
        let stdout = run_tool(
            Command::new("xdotool").arg("getdisplaygeometry"),
            self.name(),
        )?;
        parse_geometry(&stdout).ok_or_else(|| {
            CursorToolError::Failed(format!("unexpected display geometry: {}", stdout.trim()))
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
            Command::new("xdotool").args([
                "mousemove".to_string(),
                point.x.to_string(),
                point.y.to_string(),
            ]),
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
        run_tool(Command::new("xdotool").args(&args), self.name())?;
        Ok(moves)
    }
}

impl Default for Xdotool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{Canvas, Pattern};

    #[test]
    fn parses_display_geometry() {
        assert_eq!(parse_geometry("1920 1080\n"), Some(ScreenSize::new(1920, 1080)));
        assert_eq!(parse_geometry("garbage"), None);
        assert_eq!(parse_geometry(""), None);
    }

    #[test]
    fn chain_args_interleave_sleeps() {
        let points = Pattern::Zigzag.points(Canvas::new(40, 100.0));
        let args = Xdotool::chain_args(points, Duration::from_millis(3));
        assert_eq!(
            args,
            vec![
                "mousemove", "0", "80", "sleep", "0.003", "mousemove", "20", "120", "sleep",
                "0.003"
            ]
        );
    }

    #[test]
    fn chain_args_without_delay_have_no_sleeps() {
        let points = Pattern::Zigzag.points(Canvas::new(40, 100.0));
        let args = Xdotool::chain_args(points, Duration::ZERO);
        assert_eq!(args, vec!["mousemove", "0", "80", "mousemove", "20", "120"]);
    }
}
