//! Cursor position tracking within the line buffer.
//!
//! This module provides the `Cursor` struct that represents the current
//! position as a zero-based `(row, col)` pair, plus the word-motion helpers
//! used by the `w` and `b` keys.
//!
//! # Column bounds
//!
//! The legal column range depends on the editing mode:
//!
//! - Normal mode: `0 <= col < max(1, line_len)`; the cursor sits *on* a
//!   character, clamped to the last one (or column 0 on an empty line).
//! - Insert mode: `0 <= col <= line_len`; the append position past the last
//!   character is permitted.
//!
//! The cursor is owned exclusively by its editor session; no other component
//! mutates it directly.
//!
//! # Example
//!
//! ```
//! use linequill::editor::cursor::Cursor;
//! use linequill::editor::mode::EditorMode;
//!
//! let mut cursor = Cursor::new();
//! cursor.set(0, 10);
//! cursor.clamp_col(5, &EditorMode::Normal);
//! assert_eq!(cursor.col(), 4);
//! cursor.clamp_col(5, &EditorMode::Insert);
//! assert_eq!(cursor.col(), 4);
//! ```

use super::mode::EditorMode;

/// A zero-based `(row, col)` position in the buffer.
///
/// # Examples
///
/// ```
/// use linequill::editor::cursor::Cursor;
///
/// let mut cursor = Cursor::new();
/// assert_eq!((cursor.row(), cursor.col()), (0, 0));
///
/// cursor.set(3, 7);
/// assert_eq!((cursor.row(), cursor.col()), (3, 7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    /// Creates a cursor at the origin `(0, 0)`.
    pub fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Returns the current row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the current column (a char offset).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Moves to an absolute position. Callers clamp afterwards.
    pub fn set(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }

    /// Sets the row, keeping the column.
    pub fn set_row(&mut self, row: usize) {
        self.row = row;
    }

    /// Sets the column.
    pub fn set_col(&mut self, col: usize) {
        self.col = col;
    }

    /// Returns the largest legal column for a line of `line_len` chars in
    /// the given mode.
    pub fn max_col(line_len: usize, mode: &EditorMode) -> usize {
        match mode {
            EditorMode::Insert => line_len,
            _ => line_len.saturating_sub(1),
        }
    }

    /// Clamps the column to the legal range for the given line and mode.
    pub fn clamp_col(&mut self, line_len: usize, mode: &EditorMode) {
        let max = Self::max_col(line_len, mode);
        if self.col > max {
            self.col = max;
        }
    }

    /// Clamps the row to `[0, line_count - 1]`.
    pub fn clamp_row(&mut self, line_count: usize) {
        let max = line_count.saturating_sub(1);
        if self.row > max {
            self.row = max;
        }
    }
}

/// Returns whether `ch` is a word character for the `w`/`b` motions.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Returns the column of the next word start after `col`, or `col` if there
/// is no later word on the line (end-of-line is a no-op).
///
/// The motion advances through the current run of word characters, then
/// through the following run of non-word characters, landing on the first
/// character of the next word.
///
/// # Examples
///
/// ```
/// use linequill::editor::cursor::next_word_start;
///
/// assert_eq!(next_word_start("foo bar", 0), 4);
/// assert_eq!(next_word_start("foo  bar", 1), 5);
/// assert_eq!(next_word_start("foo", 1), 1); // no next word
/// ```
pub fn next_word_start(line: &str, col: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    if col >= chars.len() {
        return col;
    }

    let mut i = col;
    while i < chars.len() && is_word_char(chars[i]) {
        i += 1;
    }
    while i < chars.len() && !is_word_char(chars[i]) {
        i += 1;
    }

    if i < chars.len() {
        i
    } else {
        col
    }
}

/// Returns the column of the previous word start before `col`, the mirror
/// of [`next_word_start`]: move back one, skip the non-word run, then skip
/// to the start of the word run.
///
/// # Examples
///
/// ```
/// use linequill::editor::cursor::prev_word_start;
///
/// assert_eq!(prev_word_start("foo bar", 4), 0);
/// assert_eq!(prev_word_start("foo bar", 6), 4);
/// assert_eq!(prev_word_start("foo", 0), 0);
/// ```
pub fn prev_word_start(line: &str, col: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    if col == 0 || chars.is_empty() {
        return 0;
    }

    let mut i = col.min(chars.len()) - 1;
    while i > 0 && !is_word_char(chars[i]) {
        i -= 1;
    }
    while i > 0 && is_word_char(chars[i - 1]) {
        i -= 1;
    }
    i
}
