//! Configuration system for linequill.
//!
//! This module provides the configuration structure for the terminal shell,
//! with sensible defaults and TOML file support. Configuration is loaded
//! from `~/.config/linequill/config.toml` (platform equivalent via `dirs`)
//! and merged with command-line arguments by the shell.
//!
//! # Example
//!
//! ```
//! use linequill::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert!(config.show_line_numbers);
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the linequill shell.
///
/// All fields have defaults, so a partial config file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Display line numbers in the text area
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

/// Returns the default for showing line numbers.
fn default_show_line_numbers() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_line_numbers: default_show_line_numbers(),
        }
    }
}

impl Config {
    /// Loads the configuration from the user's config file.
    ///
    /// Falls back to defaults when the file is missing or unparseable; a
    /// broken config file should never keep the editor from starting.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Returns the path of the config file, if a config directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("linequill").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "default-dark");
        assert!(config.show_line_numbers);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("theme = \"default-light\"").unwrap();
        assert_eq!(config.theme, "default-light");
        assert!(config.show_line_numbers);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "default-dark");
    }

    #[test]
    fn test_round_trip_serialization() {
        let config = Config {
            theme: "default-light".to_string(),
            show_line_numbers: false,
        };
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.theme, config.theme);
        assert_eq!(parsed.show_line_numbers, config.show_line_numbers);
    }
}
