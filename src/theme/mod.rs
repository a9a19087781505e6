//! Theme system for linequill.
//!
//! This module provides the theme infrastructure for the terminal shell:
//! color definitions ([`colors`] module), the [`Theme`] data structure, and
//! built-in theme access via [`get_builtin_theme`].
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: A dark theme for low-light environments
//! - `"default-light"`: A light theme for well-lit environments
//!
//! # Examples
//!
//! ```
//! use linequill::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("default-dark").unwrap();
//! assert_eq!(theme.name, "default-dark");
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the linequill terminal shell.
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name, or `None` for an unknown name.
///
/// # Examples
///
/// ```
/// use linequill::theme::get_builtin_theme;
///
/// assert!(get_builtin_theme("default-light").is_some());
/// assert!(get_builtin_theme("nonexistent").is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    match name {
        "default-dark" => Some(Theme {
            name: name.to_string(),
            colors: ThemeColors::default_dark(),
        }),
        "default-light" => Some(Theme {
            name: name.to_string(),
            colors: ThemeColors::default_light(),
        }),
        _ => None,
    }
}

/// Returns the names of all built-in themes.
pub fn list_builtin_themes() -> Vec<String> {
    vec!["default-dark".to_string(), "default-light".to_string()]
}
