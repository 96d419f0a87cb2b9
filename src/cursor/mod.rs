//! Cursor control.
//!
//! Moves the OS cursor through platform command-line tools:
//!
//! - Linux X11: xdotool
//! - Linux Wayland: ydotool
//! - macOS: cliclick (screen size through osascript)
//!
//! A `dry-run` tool is available everywhere and never touches the cursor.

mod control;
mod error;
mod method;
mod tool;
pub mod tools;

pub use control::Cursor;
pub use error::CursorError;
pub use method::{Backend, CursorMethod};
pub use tool::{CursorTool, CursorToolError};
