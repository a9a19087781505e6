//! Editor mode management for modal editing.
//!
//! This module provides the `EditorMode` enum that represents the current
//! editing mode. Following vim-style modal editing, the editor can be in one
//! of four modes, each with different keybindings and behaviors.
//!
//! # Modes
//!
//! - **Normal**: The default mode for navigation and operators
//! - **Insert**: Mode for typing text into the buffer
//! - **Command**: Mode for composing colon-commands (`:w`, `:q`, ...)
//! - **Search**: Mode for composing a search term (entered via `/`)
//!
//! # Example
//!
//! ```
//! use linequill::editor::mode::EditorMode;
//!
//! // Editor starts in Normal mode by default
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//! ```

use std::fmt;

/// Represents the current editing mode of the editor.
///
/// The behavior of keystrokes depends on the current mode. The mode is
/// typically displayed in the status bar using the `Display` implementation.
///
/// Search is modeled as its own state rather than a flag on Command: both
/// accumulate input into a buffer and commit on Enter, but committing a
/// search runs a forward search while committing a command executes it.
///
/// # Examples
///
/// ```
/// use linequill::editor::mode::EditorMode;
///
/// let mode = EditorMode::Insert;
/// assert_eq!(format!("{}", mode), "INSERT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Normal mode for navigation and line operations.
    Normal,
    /// Insert mode for typing text.
    Insert,
    /// Command mode for composing colon-commands.
    Command,
    /// Search mode for composing a search term.
    Search,
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string suitable for the status bar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Insert => write!(f, "INSERT"),
            EditorMode::Command => write!(f, "COMMAND"),
            EditorMode::Search => write!(f, "SEARCH"),
        }
    }
}

impl Default for EditorMode {
    /// Returns `EditorMode::Normal`, the mode the editor always starts in.
    fn default() -> Self {
        EditorMode::Normal
    }
}
