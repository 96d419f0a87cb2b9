//! CursorTool trait and related error types.

use std::thread;
use std::time::Duration;

use super::method::CursorMethod;
use crate::pattern::{Point, Points, ScreenSize};

/// A tool that can move the OS cursor.
///
/// Each implementation wraps a specific OS tool (xdotool, cliclick, etc.)
/// and knows how to invoke it correctly.
pub trait CursorTool: Send {
    /// The method identifier for this tool.
    fn method(&self) -> CursorMethod;

    /// Human-readable name for logs and error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is available on the system.
    ///
    /// Should be fast - typically checks if the binary exists.
    fn is_available(&self) -> bool;

    /// Size of the display the cursor moves on.
    fn screen_size(&self) -> Result<ScreenSize, CursorToolError>;

    /// Pause applied after every move.
    fn set_move_delay(&mut self, delay: Duration);

    /// The pause currently applied after every move.
    fn move_delay(&self) -> Duration;

    /// Move the cursor to an absolute position.
    fn move_to(&mut self, point: Point) -> Result<(), CursorToolError>;

    /// Move through every point in order, pausing `move_delay` after each.
    ///
    /// Returns the number of moves issued. Tools that can chain moves into a
    /// single invocation override this.
    fn trace(&mut self, points: Points) -> Result<usize, CursorToolError> {
        let delay = self.move_delay();
        let mut moves = 0;
        for point in points {
            self.move_to(point)?;
            moves += 1;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(moves)
    }
}

/// Error from a specific tool operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorToolError {
    /// Tool doesn't support this operation
    NotSupported,
    /// Tool execution failed
    Failed(String),
    /// Tool not found on system
    NotFound,
}

impl std::fmt::Display for CursorToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSupported => f.write_str("operation not supported"),
            Self::Failed(msg) => write!(f, "{}", msg),
            Self::NotFound => f.write_str("tool not found"),
        }
    }
}
