//! Tool that logs moves instead of performing them.

use std::time::Duration;

use crate::cursor::method::CursorMethod;
use crate::cursor::tool::{CursorTool, CursorToolError};
use crate::pattern::{Point, Points, ScreenSize};

/// Cursor tool that never touches the cursor.
///
/// Moves are counted and logged at debug level. No per-move delay is
/// applied, so a dry run finishes each tick immediately.
#[derive(Debug, Default)]
pub struct DryRun {
    delay: Duration,
    moves: usize,
    last: Option<Point>,
}

impl DryRun {
    /// Create a new DryRun tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total moves issued so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Position of the most recent move.
    pub fn last(&self) -> Option<Point> {
        self.last
    }
}

impl CursorTool for DryRun {
    fn method(&self) -> CursorMethod {
        CursorMethod::DryRun
    }

    fn is_available(&self) -> bool {
        true
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
        self.moves += 1;
        self.last = Some(point);
        Ok(())
    }

    fn trace(&mut self, points: Points) -> Result<usize, CursorToolError> {
        let mut moves = 0;
        let mut first = None;
        for point in points {
            first.get_or_insert(point);
            self.move_to(point)?;
            moves += 1;
        }
        tracing::debug!(
            moves,
            first = ?first,
            last = ?self.last,
            delay_ms = self.delay.as_millis() as u64,
            "dry run: skipped cursor moves"
        );
        Ok(moves)
    }
}
