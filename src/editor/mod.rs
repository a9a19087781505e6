//! The modal line-editing engine.
//!
//! This module provides the core editor functionality: the line buffer,
//! cursor and viewport tracking, the vim-style mode state machine, the
//! colon-command interpreter, and the `EditorSession` that ties them
//! together behind the host embedding contract.
//!
//! # Modules
//!
//! - `buffer`: the document as an ordered sequence of lines
//! - `cursor`: row/column position and word motions
//! - `viewport`: scroll tracking for the visible window
//! - `mode`: editor mode enumeration and transitions
//! - `commands`: the colon-command interpreter
//! - `session`: the aggregate session and host contract
//!
//! # Example
//!
//! ```
//! use linequill::editor::mode::EditorMode;
//!
//! // Editor starts in Normal mode
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! ```

pub mod buffer;
pub mod commands;
pub mod cursor;
pub mod mode;
pub mod session;
pub mod viewport;
