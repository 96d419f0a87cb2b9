//! Cursor backend selection errors.

/// Errors that can occur while choosing a cursor backend.
#[derive(Debug, thiserror::Error)]
pub enum CursorError {
    #[error(
        "No cursor control tool available. On Linux, install xdotool (X11) or ydotool (Wayland); \
         on macOS, install cliclick. Use --dry-run to run without moving the cursor."
    )]
    NoToolAvailable,

    #[error("Cursor backend '{backend}' is not available on this system")]
    BackendUnavailable { backend: &'static str },
}
