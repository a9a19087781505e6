//! The line buffer backing an editor session.
//!
//! A `Buffer` owns the document as an ordered sequence of lines, the modified
//! flag (unsaved changes), and the optional path the document is bound to.
//! All text mutations go through this type so the modified flag can never
//! drift out of sync with the content.
//!
//! # Invariant
//!
//! A buffer always contains at least one line. An empty document is a single
//! empty line, and deleting the last remaining line replaces it with a single
//! empty line instead of emptying the sequence.
//!
//! Columns are char offsets, not byte offsets, so multi-byte UTF-8 text
//! behaves correctly under insertion and deletion.
//!
//! # Example
//!
//! ```
//! use linequill::editor::buffer::Buffer;
//!
//! let mut buffer = Buffer::new();
//! assert_eq!(buffer.line_count(), 1);
//! assert!(!buffer.is_modified());
//!
//! buffer.insert_char(0, 0, 'h');
//! buffer.insert_char(0, 1, 'i');
//! assert_eq!(buffer.line(0), "hi");
//! assert!(buffer.is_modified());
//! ```

use std::path::{Path, PathBuf};

/// Converts a char offset within `line` to a byte offset.
///
/// Offsets past the end of the line map to the line's byte length, so callers
/// may pass an append position without special-casing it.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

/// An in-memory document as an ordered sequence of text lines.
///
/// The buffer tracks:
///
/// - The text content (one `String` per line, always at least one line)
/// - Whether the content has been modified since the last successful save
/// - The file path the document is bound to, if any
///
/// The buffer is exclusively owned by its [`EditorSession`]; nothing else
/// mutates it.
///
/// [`EditorSession`]: crate::editor::session::EditorSession
///
/// # Examples
///
/// ```
/// use linequill::editor::buffer::Buffer;
///
/// let mut buffer = Buffer::from_lines(vec!["hello".to_string()]);
/// buffer.split_line(0, 2);
/// assert_eq!(buffer.lines(), &["he".to_string(), "llo".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Buffer {
    lines: Vec<String>,
    modified: bool,
    file_path: Option<PathBuf>,
}

impl Buffer {
    /// Creates an empty buffer: one empty line, unmodified, no path.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            modified: false,
            file_path: None,
        }
    }

    /// Creates a buffer from existing lines, e.g. a loaded file.
    ///
    /// An empty vector becomes a single empty line to preserve the
    /// at-least-one-line invariant. The buffer starts unmodified.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        Self {
            lines,
            modified: false,
            file_path: None,
        }
    }

    /// Returns the lines of the document.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the line at `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds. The session clamps the cursor to the
    /// buffer after every mutation, so in-engine callers always pass a valid
    /// row.
    pub fn line(&self, row: usize) -> &str {
        &self.lines[row]
    }

    /// Returns the length of the line at `row` in chars.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    /// Returns the number of lines. Always >= 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns whether the document has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clears the modified flag after a successful save.
    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    /// Returns the path the document is bound to, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Binds the document to a path (`:w <path>`, `:e <path>`, `:new <path>`).
    pub fn set_file_path(&mut self, path: PathBuf) {
        self.file_path = Some(path);
    }

    /// Inserts a character at `(row, col)` and marks the buffer modified.
    ///
    /// `col` may be the append position (one past the last char).
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        let idx = byte_index(&self.lines[row], col);
        self.lines[row].insert(idx, ch);
        self.modified = true;
    }

    /// Deletes the character at `(row, col)` (the `x` operation).
    ///
    /// Returns `true` if a character was removed. Deleting past the end of a
    /// line (including on an empty line) is a no-op and does not mark the
    /// buffer modified.
    pub fn delete_char(&mut self, row: usize, col: usize) -> bool {
        if col >= self.line_len(row) {
            return false;
        }
        let idx = byte_index(&self.lines[row], col);
        self.lines[row].remove(idx);
        self.modified = true;
        true
    }

    /// Splits the line at `(row, col)` into two lines (Enter in Insert mode).
    ///
    /// The text from `col` onward moves to a new line inserted at `row + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linequill::editor::buffer::Buffer;
    ///
    /// let mut buffer = Buffer::from_lines(vec!["hello world".to_string()]);
    /// buffer.split_line(0, 5);
    /// assert_eq!(buffer.lines(), &["hello".to_string(), " world".to_string()]);
    /// ```
    pub fn split_line(&mut self, row: usize, col: usize) {
        let idx = byte_index(&self.lines[row], col);
        let rest = self.lines[row].split_off(idx);
        self.lines.insert(row + 1, rest);
        self.modified = true;
    }

    /// Merges line `row` onto the end of line `row - 1` (Backspace at col 0).
    ///
    /// Returns the char column of the former line boundary in the merged
    /// line, which is where the cursor lands. Returns `None` when `row` is 0
    /// and there is nothing to merge with.
    ///
    /// # Examples
    ///
    /// ```
    /// use linequill::editor::buffer::Buffer;
    ///
    /// let mut buffer = Buffer::from_lines(vec!["ab".to_string(), "cd".to_string()]);
    /// assert_eq!(buffer.merge_with_previous(1), Some(2));
    /// assert_eq!(buffer.lines(), &["abcd".to_string()]);
    /// ```
    pub fn merge_with_previous(&mut self, row: usize) -> Option<usize> {
        if row == 0 {
            return None;
        }
        let removed = self.lines.remove(row);
        let boundary = self.line_len(row - 1);
        self.lines[row - 1].push_str(&removed);
        self.modified = true;
        Some(boundary)
    }

    /// Inserts an empty line below `row` (the `o` operation).
    pub fn open_line_below(&mut self, row: usize) {
        self.lines.insert(row + 1, String::new());
        self.modified = true;
    }

    /// Inserts an empty line above `row` (the `O` operation).
    pub fn open_line_above(&mut self, row: usize) {
        self.lines.insert(row, String::new());
        self.modified = true;
    }

    /// Deletes the line at `row` (the `dd` operation).
    ///
    /// Deleting the only line replaces it with a single empty line so the
    /// buffer never becomes empty.
    pub fn delete_line(&mut self, row: usize) {
        if self.lines.len() == 1 {
            // Already an empty document; nothing changed.
            if self.lines[0].is_empty() {
                return;
            }
            self.lines[0].clear();
        } else {
            self.lines.remove(row);
        }
        self.modified = true;
    }

    /// Replaces the entire content, e.g. after `:e <path>` or `:new`.
    ///
    /// The buffer becomes unmodified: the new content is either freshly
    /// loaded from disk or an intentionally blank document.
    pub fn replace_all(&mut self, lines: Vec<String>) {
        self.lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        self.modified = false;
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_has_one_empty_line() {
        let buffer = Buffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), "");
        assert!(!buffer.is_modified());
        assert!(buffer.file_path().is_none());
    }

    #[test]
    fn test_from_empty_lines_keeps_invariant() {
        let buffer = Buffer::from_lines(vec![]);
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), "");
    }

    #[test]
    fn test_insert_char_marks_modified() {
        let mut buffer = Buffer::new();
        buffer.insert_char(0, 0, 'a');
        assert_eq!(buffer.line(0), "a");
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_insert_char_multibyte() {
        let mut buffer = Buffer::from_lines(vec!["café".to_string()]);
        buffer.insert_char(0, 4, '!');
        assert_eq!(buffer.line(0), "café!");
        buffer.insert_char(0, 3, 'x');
        assert_eq!(buffer.line(0), "cafxé!");
    }

    #[test]
    fn test_delete_char() {
        let mut buffer = Buffer::from_lines(vec!["abc".to_string()]);
        assert!(buffer.delete_char(0, 1));
        assert_eq!(buffer.line(0), "ac");
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_delete_char_on_empty_line_is_noop() {
        let mut buffer = Buffer::new();
        assert!(!buffer.delete_char(0, 0));
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_split_line_at_end() {
        let mut buffer = Buffer::from_lines(vec!["abc".to_string()]);
        buffer.split_line(0, 3);
        assert_eq!(buffer.lines(), &["abc".to_string(), String::new()]);
    }

    #[test]
    fn test_merge_with_previous_at_first_line() {
        let mut buffer = Buffer::from_lines(vec!["abc".to_string()]);
        assert_eq!(buffer.merge_with_previous(0), None);
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_open_line_below_and_above() {
        let mut buffer = Buffer::from_lines(vec!["a".to_string(), "b".to_string()]);
        buffer.open_line_below(0);
        assert_eq!(
            buffer.lines(),
            &["a".to_string(), String::new(), "b".to_string()]
        );
        buffer.open_line_above(0);
        assert_eq!(buffer.line(0), "");
        assert_eq!(buffer.line_count(), 4);
    }

    #[test]
    fn test_delete_line_keeps_at_least_one() {
        let mut buffer = Buffer::from_lines(vec!["only".to_string()]);
        buffer.delete_line(0);
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), "");
        assert!(buffer.is_modified());

        // Deleting the empty remnant changes nothing further.
        let was_modified = buffer.is_modified();
        buffer.delete_line(0);
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.is_modified(), was_modified);
    }

    #[test]
    fn test_delete_line_middle() {
        let mut buffer = Buffer::from_lines(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
        ]);
        buffer.delete_line(1);
        assert_eq!(buffer.lines(), &["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_replace_all_clears_modified() {
        let mut buffer = Buffer::new();
        buffer.insert_char(0, 0, 'x');
        assert!(buffer.is_modified());
        buffer.replace_all(vec!["new".to_string()]);
        assert!(!buffer.is_modified());
        assert_eq!(buffer.line(0), "new");
    }
}
