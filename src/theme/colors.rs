//! Color definitions for linequill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the linequill terminal shell: the text area, line numbers,
//! status line, and message colors.

use ratatui::style::Color;

/// Defines all colors used in a linequill theme.
///
/// # Examples
///
/// ```
/// use linequill::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Background: {:?}", dark.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Main background color for the editor.
    pub background: Color,
    /// Main foreground/text color for the editor.
    pub foreground: Color,
    /// Color for the line number gutter.
    pub line_number: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the actual RGB values adapt to the user's
    /// terminal color scheme.
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Gray,
            line_number: Color::DarkGray,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
        }
    }

    /// Returns the default light color scheme.
    pub fn default_light() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Black,
            line_number: Color::Gray,
            status_line_bg: Color::Black,
            status_line_fg: Color::White,
            error: Color::Red,
            warning: Color::Magenta,
            info: Color::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_and_light_differ() {
        let dark = ThemeColors::default_dark();
        let light = ThemeColors::default_light();
        assert_ne!(dark.foreground, light.foreground);
    }
}
