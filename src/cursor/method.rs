//! Cursor tool identifiers and backend selection.

use serde::{Deserialize, Serialize};

/// Which tool moves the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMethod {
    /// Linux X11
    Xdotool,
    /// Linux Wayland (uinput)
    Ydotool,
    /// macOS
    Cliclick,
    /// Logs moves instead of performing them
    DryRun,
}

impl CursorMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Xdotool => "xdotool",
            Self::Ydotool => "ydotool",
            Self::Cliclick => "cliclick",
            Self::DryRun => "dry-run",
        }
    }
}

/// Backend requested through config or the command line.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// First available platform tool
    #[default]
    Auto,
    Xdotool,
    Ydotool,
    Cliclick,
    /// Do not move the cursor
    DryRun,
}

impl Backend {
    /// The specific tool this backend asks for, `None` for `Auto`.
    pub fn method(self) -> Option<CursorMethod> {
        match self {
            Self::Auto => None,
            Self::Xdotool => Some(CursorMethod::Xdotool),
            Self::Ydotool => Some(CursorMethod::Ydotool),
            Self::Cliclick => Some(CursorMethod::Cliclick),
            Self::DryRun => Some(CursorMethod::DryRun),
        }
    }

    pub fn name(self) -> &'static str {
        self.method().map_or("auto", |m| m.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_maps_to_method() {
        assert_eq!(Backend::Auto.method(), None);
        assert_eq!(Backend::DryRun.method(), Some(CursorMethod::DryRun));
        assert_eq!(Backend::Xdotool.name(), "xdotool");
        assert_eq!(Backend::Auto.name(), "auto");
    }

    #[test]
    fn backend_uses_kebab_case_in_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            backend: Backend,
        }
        let w: Wrapper = toml::from_str("backend = \"dry-run\"").unwrap();
        assert_eq!(w.backend, Backend::DryRun);
    }
}
