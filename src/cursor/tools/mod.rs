//! Platform-specific cursor tools.

mod cliclick;
mod dry_run;
mod xdotool;
mod ydotool;

pub use cliclick::Cliclick;
pub use dry_run::DryRun;
pub use xdotool::Xdotool;
pub use ydotool::Ydotool;

use std::process::Command;

use super::tool::{CursorTool, CursorToolError};

/// Get the platform-appropriate tools in priority order.
///
/// The dry-run tool is never part of this list; it must be asked for.
pub fn platform_tools() -> Vec<Box<dyn CursorTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Cliclick::new())]
    }

    #[cfg(target_os = "linux")]
    {
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            vec![Box::new(Ydotool::new()), Box::new(Xdotool::new())]
        } else {
            vec![Box::new(Xdotool::new()), Box::new(Ydotool::new())]
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Every known tool, including dry-run, for explicit backend selection.
pub fn all_tools() -> Vec<Box<dyn CursorTool>> {
    vec![
        Box::new(Xdotool::new()),
        Box::new(Ydotool::new()),
        Box::new(Cliclick::new()),
        Box::new(DryRun::new()),
    ]
}

/// Check if a binary is on `PATH`.
pub(crate) fn command_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run a command to completion and return its stdout.
pub(crate) fn run_tool(command: &mut Command, tool: &str) -> Result<String, CursorToolError> {
    tracing::trace!(?command, "running cursor tool");
    let output = command.output().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CursorToolError::NotFound,
        _ => CursorToolError::Failed(e.to_string()),
    })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        Err(CursorToolError::Failed(if stderr.is_empty() {
            format!("{} failed ({})", tool, output.status)
        } else {
            format!("{} failed: {}", tool, stderr)
        }))
    }
}
