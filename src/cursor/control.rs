//! Cursor orchestrator.

use std::time::Duration;

use super::error::CursorError;
use super::method::{Backend, CursorMethod};
use super::tool::{CursorTool, CursorToolError};
use super::tools::{all_tools, platform_tools};
use crate::pattern::{Points, ScreenSize};

/// Owns the selected cursor tool and forwards moves to it.
pub struct Cursor {
    tool: Box<dyn CursorTool>,
}

impl Cursor {
    /// Pick a tool for the requested backend from the platform's tools.
    pub fn detect(backend: Backend) -> Result<Self, CursorError> {
        let tools = match backend {
            Backend::Auto => platform_tools(),
            _ => all_tools(),
        };
        Self::select(backend, tools)
    }

    /// Pick a tool for the requested backend from `tools`.
    ///
    /// `Auto` takes the first available tool that actually moves the cursor;
    /// a named backend must be present and available.
    pub fn select(backend: Backend, tools: Vec<Box<dyn CursorTool>>) -> Result<Self, CursorError> {
        let wanted = backend.method();
        for tool in tools {
            let matches = match wanted {
                Some(method) => tool.method() == method,
                None => tool.method() != CursorMethod::DryRun,
            };
            if !matches {
                continue;
            }
            if tool.is_available() {
                tracing::info!(tool = tool.name(), "selected cursor tool");
                return Ok(Self { tool });
            }
            tracing::debug!(tool = tool.name(), "cursor tool not available");
        }

        match backend {
            Backend::Auto => Err(CursorError::NoToolAvailable),
            other => Err(CursorError::BackendUnavailable {
                backend: other.name(),
            }),
        }
    }

    /// Use a specific tool (for testing).
    pub fn with_tool(tool: Box<dyn CursorTool>) -> Self {
        Self { tool }
    }

    pub fn method(&self) -> CursorMethod {
        self.tool.method()
    }

    /// Ask the tool for the display size, using `fallback` when it cannot say.
    pub fn screen_size(&self, fallback: ScreenSize) -> ScreenSize {
        match self.tool.screen_size() {
            Ok(size) => {
                tracing::info!(tool = self.tool.name(), %size, "display size");
                size
            }
            Err(CursorToolError::NotSupported) => {
                tracing::info!(
                    tool = self.tool.name(),
                    %fallback,
                    "tool cannot report display size, using fallback"
                );
                fallback
            }
            Err(e) => {
                tracing::warn!(
                    tool = self.tool.name(),
                    error = %e,
                    %fallback,
                    "failed to query display size, using fallback"
                );
                fallback
            }
        }
    }

    pub fn set_move_delay(&mut self, delay: Duration) {
        self.tool.set_move_delay(delay);
    }

    /// Move through every point of a pattern in order.
    pub fn trace(&mut self, points: Points) -> Result<usize, CursorToolError> {
        self.tool.trace(points)
    }
}
