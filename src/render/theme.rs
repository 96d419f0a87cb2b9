//! Theme configuration for CLI output
//!
//! Centralizes the colors used on the status screen.

use crossterm::style::Color;

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Colors for the status screen.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (stat lines)
    pub text_primary: Color,
    /// Secondary/dimmed text color (banner hint)
    pub text_secondary: Color,
    /// Accent color (progress bar)
    pub accent: Color,
    /// Success color (summary heading)
    pub success: Color,
    /// When false every helper returns the text unchanged
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::DarkGrey,
            accent: Color::DarkCyan,
            success: Color::DarkGreen,
            enabled: true,
        }
    }
}

impl Theme {
    /// Plain output, no escape codes.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Colored when writing to a terminal and `NO_COLOR` is unset.
    pub fn for_output(interactive: bool) -> Self {
        if interactive && std::env::var_os("NO_COLOR").is_none() {
            Self::default()
        } else {
            Self::plain()
        }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        let code = color_to_ansi(color);
        if !self.enabled || code.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", code, text, ANSI_RESET)
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

/// Convert a crossterm Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::DarkRed => "\x1b[31m",
        Color::DarkGreen => "\x1b[32m",
        Color::DarkYellow => "\x1b[33m",
        Color::DarkBlue => "\x1b[34m",
        Color::DarkMagenta => "\x1b[35m",
        Color::DarkCyan => "\x1b[36m",
        Color::Grey => "\x1b[37m",
        Color::DarkGrey => "\x1b[90m",
        Color::Red => "\x1b[91m",
        Color::Green => "\x1b[92m",
        Color::Yellow => "\x1b[93m",
        Color::Blue => "\x1b[94m",
        Color::Magenta => "\x1b[95m",
        Color::Cyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        // Reset, RGB and indexed colors leave the text as-is
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_wraps_with_cyan() {
        let theme = Theme::default();
        let bar = theme.accent_text("███");
        assert!(bar.starts_with("\x1b[36m"));
        assert!(bar.ends_with("\x1b[0m"));
        assert!(bar.contains("███"));
    }

    #[test]
    fn reset_color_leaves_text_alone() {
        let theme = Theme::default();
        assert_eq!(theme.primary_text("hello"), "hello");
    }

    #[test]
    fn plain_theme_has_no_escape_codes() {
        let theme = Theme::plain();
        assert_eq!(theme.accent_text("bar"), "bar");
        assert_eq!(theme.success_text("done"), "done");
        assert_eq!(theme.secondary_text("hint"), "hint");
    }

    #[test]
    fn non_interactive_output_is_plain() {
        assert!(!Theme::for_output(false).enabled);
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::DarkGreen), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::DarkRed), "\x1b[31m");
        assert_eq!(color_to_ansi(Color::Grey), "\x1b[37m");
        assert_eq!(color_to_ansi(Color::DarkGrey), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Reset), "");
    }
}
