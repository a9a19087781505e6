//! The editor session: state container, key dispatch, and the host
//! embedding contract.
//!
//! An `EditorSession` aggregates the buffer, cursor, viewport, current mode,
//! and the accumulating command/search buffers. A host (a full-screen shell,
//! a split panel, any widget that owns key focus) drives it through a small
//! contract:
//!
//! - [`EditorSession::open`] creates a session for a new or existing file
//! - [`EditorSession::handle_key`] processes one logical key event fully
//! - [`EditorSession::render`] projects the visible window and status line
//! - [`EditorSession::is_modified`] / [`EditorSession::request_close`] let a
//!   host intercept quitting with its own dialog
//! - [`EditorSession::load_file`] lets a host (e.g. a file browser panel)
//!   push a file into the session explicitly
//!
//! The session is single-threaded and cooperative: each key event is
//! processed to completion (mutation plus viewport recompute) before the
//! host may dispatch the next. Nothing inside the engine is fatal to the
//! host; every failure becomes a status [`Message`] and the session keeps
//! editing.
//!
//! # Example
//!
//! ```
//! use linequill::editor::session::EditorSession;
//! use linequill::input::keys::InputEvent;
//!
//! let mut session = EditorSession::new();
//! session.handle_key(InputEvent::EnterInsert);
//! for ch in "hi".chars() {
//!     session.handle_key(InputEvent::InsertCharacter(ch));
//! }
//! session.handle_key(InputEvent::ExitMode);
//!
//! let frame = session.render(10, 80);
//! assert_eq!(frame.lines[0], "hi");
//! assert!(session.is_modified());
//! ```

use std::mem;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::buffer::Buffer;
use super::commands;
use super::cursor::{next_word_start, prev_word_start, Cursor};
use super::mode::EditorMode;
use super::viewport::Viewport;
use crate::file::{loader, saver};
use crate::input::keys::InputEvent;

/// A message for the host to display inline (command feedback, I/O errors).
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// One rendered frame of the session: the visible slice of the buffer plus
/// the status line. A pure projection; producing it has no side effect
/// beyond the internal viewport adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Visible buffer lines, top to bottom, each truncated to the width.
    pub lines: Vec<String>,
    /// Status line text, padded/truncated to the width.
    pub status_line: String,
    /// Cursor position relative to the frame: (screen row, column).
    pub cursor: (usize, usize),
}

/// Reply to [`EditorSession::request_close`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseResponse {
    /// True if the close was refused because of unsaved changes.
    pub blocked: bool,
    /// Human-readable reason when blocked.
    pub reason: Option<String>,
}

/// The modal line-editing engine.
///
/// Owns the buffer exclusively; all mutation flows through
/// [`handle_key`](Self::handle_key) or the explicit host operations. A
/// session stays open until `:q`/`:q!`/`:wq` succeeds or the host closes it
/// through [`request_close`](Self::request_close); hosts poll
/// [`is_open`](Self::is_open) after each key to learn about self-initiated
/// closes.
pub struct EditorSession {
    buffer: Buffer,
    cursor: Cursor,
    viewport: Viewport,
    mode: EditorMode,
    command_buffer: String,
    search_term: String,
    message: Option<Message>,
    // True after a lone `d`; the next `d` deletes the line.
    pending_delete: bool,
    open: bool,
    visible_height: usize,
}

impl EditorSession {
    /// Creates a session over a new, empty, unbound document.
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::new(),
            viewport: Viewport::new(),
            mode: EditorMode::Normal,
            command_buffer: String::new(),
            search_term: String::new(),
            message: None,
            pending_delete: false,
            open: true,
            visible_height: 0,
        }
    }

    /// Opens a session for `initial_path`.
    ///
    /// With no path this is [`EditorSession::new`]. With a path that exists
    /// the file is loaded; with a path that does not exist yet the session
    /// starts empty but pre-bound to it, so a later `:w` needs no argument.
    ///
    /// # Errors
    ///
    /// Returns an error only when an existing file cannot be read or is not
    /// valid UTF-8.
    pub fn open(initial_path: Option<&Path>) -> Result<Self> {
        let mut session = Self::new();
        if let Some(path) = initial_path {
            if path.exists() {
                let lines = loader::load_lines(path)?;
                session.buffer.replace_all(lines);
            }
            session.buffer.set_file_path(path.to_path_buf());
        }
        Ok(session)
    }

    /// Returns the current editing mode.
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Returns the cursor position as `(row, col)`.
    pub fn cursor_position(&self) -> (usize, usize) {
        (self.cursor.row(), self.cursor.col())
    }

    /// Returns the buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Returns the first visible row of the viewport.
    pub fn scroll_top(&self) -> usize {
        self.viewport.scroll_top()
    }

    /// Returns the pending command or search input (without `:` or `/`).
    pub fn command_buffer(&self) -> &str {
        &self.command_buffer
    }

    /// Returns the active search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the current status message, if any.
    ///
    /// A message lives until the next key event replaces or clears it.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Returns whether the session is still open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns whether the document has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    /// Processes one logical key event to completion: mutation, cursor
    /// clamping, viewport recompute. No-op on a closed session.
    pub fn handle_key(&mut self, event: InputEvent) {
        if !self.open {
            return;
        }
        self.message = None;

        if self.pending_delete {
            self.pending_delete = false;
            if event == InputEvent::DeleteOperator {
                self.buffer.delete_line(self.cursor.row());
                self.finish_key();
                return;
            }
            // Any other key cancels the operator and is processed normally.
        }

        match self.mode {
            EditorMode::Normal => self.handle_normal_key(event),
            EditorMode::Insert => self.handle_insert_key(event),
            EditorMode::Command | EditorMode::Search => self.handle_command_key(event),
        }

        self.finish_key();
    }

    /// Projects the current visible content and status line.
    ///
    /// `visible_height` and `visible_width` come from the host on every call
    /// because the host panel may resize between frames. Adjusts the
    /// viewport so the cursor stays contained, then clones out the window.
    pub fn render(&mut self, visible_height: usize, visible_width: usize) -> RenderedFrame {
        self.visible_height = visible_height;
        self.viewport
            .adjust(self.cursor.row(), self.buffer.line_count(), visible_height);

        // At zero height the viewport is left alone, so clamp the window
        // bounds here instead of trusting scroll_top.
        let top = self.viewport.scroll_top().min(self.buffer.line_count());
        let end = (top + visible_height).min(self.buffer.line_count());
        let lines = self.buffer.lines()[top..end]
            .iter()
            .map(|line| truncate_chars(line, visible_width))
            .collect();

        RenderedFrame {
            lines,
            status_line: self.status_line(visible_width),
            cursor: (
                self.cursor.row().saturating_sub(top),
                self.cursor.col().min(visible_width.saturating_sub(1)),
            ),
        }
    }

    /// Asks the session to close, for hosts that intercept quitting.
    ///
    /// Blocked when the document has unsaved changes; the host may then show
    /// its own save dialog and either save through the session or force the
    /// close with `:q!` semantics ([`handle_key`](Self::handle_key) with a
    /// committed `q!`, or simply dropping the session).
    pub fn request_close(&mut self) -> CloseResponse {
        if self.buffer.is_modified() {
            CloseResponse {
                blocked: true,
                reason: Some("No write since last change".to_string()),
            }
        } else {
            self.open = false;
            CloseResponse {
                blocked: false,
                reason: None,
            }
        }
    }

    /// Replaces the buffer with the contents of `path`, pushed by the host.
    ///
    /// This is the explicit contract method for surrounding UI (e.g. a file
    /// browser panel) to open files into the editor; the engine holds no
    /// callback into the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read; the buffer is unchanged.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let lines = loader::load_lines(path)?;
        self.buffer.replace_all(lines);
        self.buffer.set_file_path(path.to_path_buf());
        self.cursor.set(0, 0);
        // The buffer may have shrunk under the viewport.
        self.finish_key();
        self.set_message(format!("Loaded {}", path.display()), MessageLevel::Info);
        Ok(())
    }

    // --- key handling ---

    fn handle_normal_key(&mut self, event: InputEvent) {
        match event {
            InputEvent::MoveLeft => {
                self.cursor.set_col(self.cursor.col().saturating_sub(1));
            }
            InputEvent::MoveRight => {
                self.cursor.set_col(self.cursor.col() + 1);
            }
            InputEvent::MoveUp => {
                self.cursor.set_row(self.cursor.row().saturating_sub(1));
            }
            InputEvent::MoveDown => {
                self.cursor.set_row(self.cursor.row() + 1);
            }
            InputEvent::JumpToTop => {
                self.cursor.set(0, 0);
            }
            InputEvent::JumpToBottom => {
                self.cursor.set(self.buffer.line_count() - 1, 0);
            }
            InputEvent::LineStart => {
                self.cursor.set_col(0);
            }
            InputEvent::LineEnd => {
                let len = self.buffer.line_len(self.cursor.row());
                self.cursor.set_col(len.saturating_sub(1));
            }
            InputEvent::WordForward => {
                let line = self.buffer.line(self.cursor.row());
                let col = next_word_start(line, self.cursor.col());
                self.cursor.set_col(col);
            }
            InputEvent::WordBackward => {
                let line = self.buffer.line(self.cursor.row());
                let col = prev_word_start(line, self.cursor.col());
                self.cursor.set_col(col);
            }
            InputEvent::DeleteChar => {
                self.buffer.delete_char(self.cursor.row(), self.cursor.col());
            }
            InputEvent::DeleteOperator => {
                self.pending_delete = true;
            }
            InputEvent::NextMatch => {
                self.search_next();
            }
            InputEvent::EnterInsert => {
                self.mode = EditorMode::Insert;
            }
            InputEvent::EnterInsertAppend => {
                let len = self.buffer.line_len(self.cursor.row());
                self.cursor.set_col((self.cursor.col() + 1).min(len));
                self.mode = EditorMode::Insert;
            }
            InputEvent::OpenBelow => {
                self.buffer.open_line_below(self.cursor.row());
                self.cursor.set(self.cursor.row() + 1, 0);
                self.mode = EditorMode::Insert;
            }
            InputEvent::OpenAbove => {
                self.buffer.open_line_above(self.cursor.row());
                self.cursor.set_col(0);
                self.mode = EditorMode::Insert;
            }
            InputEvent::EnterCommandMode => {
                self.command_buffer.clear();
                self.mode = EditorMode::Command;
            }
            InputEvent::EnterSearchMode => {
                self.command_buffer.clear();
                self.mode = EditorMode::Search;
            }
            _ => {}
        }
    }

    fn handle_insert_key(&mut self, event: InputEvent) {
        match event {
            InputEvent::InsertCharacter(ch) => {
                self.buffer
                    .insert_char(self.cursor.row(), self.cursor.col(), ch);
                self.cursor.set_col(self.cursor.col() + 1);
            }
            InputEvent::InsertEnter => {
                self.buffer.split_line(self.cursor.row(), self.cursor.col());
                self.cursor.set(self.cursor.row() + 1, 0);
            }
            InputEvent::InsertBackspace => {
                if self.cursor.col() > 0 {
                    self.buffer
                        .delete_char(self.cursor.row(), self.cursor.col() - 1);
                    self.cursor.set_col(self.cursor.col() - 1);
                } else if let Some(boundary) = self.buffer.merge_with_previous(self.cursor.row())
                {
                    self.cursor.set(self.cursor.row() - 1, boundary);
                }
            }
            InputEvent::MoveLeft => {
                self.cursor.set_col(self.cursor.col().saturating_sub(1));
            }
            InputEvent::MoveRight => {
                self.cursor.set_col(self.cursor.col() + 1);
            }
            InputEvent::MoveUp => {
                self.cursor.set_row(self.cursor.row().saturating_sub(1));
            }
            InputEvent::MoveDown => {
                self.cursor.set_row(self.cursor.row() + 1);
            }
            InputEvent::ExitMode => {
                self.mode = EditorMode::Normal;
            }
            _ => {}
        }
    }

    fn handle_command_key(&mut self, event: InputEvent) {
        match event {
            InputEvent::CommandCharacter(ch) => {
                self.command_buffer.push(ch);
            }
            InputEvent::CommandBackspace => {
                self.command_buffer.pop();
            }
            InputEvent::CommandCommit => {
                let input = mem::take(&mut self.command_buffer);
                let was_search = self.mode == EditorMode::Search;
                self.mode = EditorMode::Normal;
                if was_search {
                    self.commit_search(&input);
                } else {
                    commands::execute_command(self, &input);
                }
            }
            InputEvent::ExitMode => {
                self.command_buffer.clear();
                self.mode = EditorMode::Normal;
            }
            _ => {}
        }
    }

    /// Clamps the cursor to the buffer and recomputes the viewport. Runs
    /// after every key so the bounds invariants hold at every observation
    /// point.
    fn finish_key(&mut self) {
        self.cursor.clamp_row(self.buffer.line_count());
        self.cursor
            .clamp_col(self.buffer.line_len(self.cursor.row()), &self.mode);
        self.viewport.adjust(
            self.cursor.row(),
            self.buffer.line_count(),
            self.visible_height,
        );
    }

    // --- search ---

    /// Commits a search term from the search buffer and runs the first
    /// forward search. An empty commit keeps the previous term, like vim.
    fn commit_search(&mut self, input: &str) {
        if !input.is_empty() {
            self.search_term = input.to_string();
        }
        self.search_next();
    }

    /// Moves the cursor to the next occurrence of the search term.
    ///
    /// Searches the rest of the current line (after the cursor), then the
    /// following lines in order, then wraps to line 0 and searches up to and
    /// including the original cursor line. Case-sensitive substring match;
    /// the cursor is unchanged when the term appears nowhere.
    fn search_next(&mut self) {
        if self.search_term.is_empty() {
            return;
        }

        let row = self.cursor.row();
        let count = self.buffer.line_count();

        if let Some(col) = find_from(self.buffer.line(row), self.cursor.col() + 1, &self.search_term)
        {
            self.cursor.set(row, col);
            return;
        }
        for r in (row + 1..count).chain(0..=row) {
            if let Some(col) = find_from(self.buffer.line(r), 0, &self.search_term) {
                self.cursor.set(r, col);
                return;
            }
        }
        self.set_message(
            format!("Pattern not found: {}", self.search_term),
            MessageLevel::Warning,
        );
    }

    // --- operations used by the command interpreter ---

    /// Saves the buffer, optionally rebinding the file path first.
    ///
    /// Returns true on success. With no argument and no bound path the save
    /// is not attempted; the host is told to supply a filename.
    pub(crate) fn save_buffer(&mut self, path_arg: Option<&str>) -> bool {
        let path = match path_arg {
            Some(arg) => {
                let path = PathBuf::from(arg);
                self.buffer.set_file_path(path.clone());
                path
            }
            None => match self.buffer.file_path() {
                Some(path) => path.to_path_buf(),
                None => {
                    self.set_message(
                        "No file name (use :w <path>)".to_string(),
                        MessageLevel::Error,
                    );
                    return false;
                }
            },
        };

        match saver::save_lines(&path, self.buffer.lines()) {
            Ok(()) => {
                self.buffer.clear_modified();
                self.set_message(format!("Wrote {}", path.display()), MessageLevel::Info);
                true
            }
            Err(e) => {
                // Unsaved content stays in memory; modified stays true.
                self.set_message(format!("{:#}", e), MessageLevel::Error);
                false
            }
        }
    }

    /// `:e <path>`: replace the buffer from disk. The buffer is unchanged
    /// when the path cannot be read.
    pub(crate) fn edit_file(&mut self, path: &str) {
        match loader::load_lines(path) {
            Ok(lines) => {
                self.buffer.replace_all(lines);
                self.buffer.set_file_path(PathBuf::from(path));
                self.cursor.set(0, 0);
                self.set_message(format!("Loaded {}", path), MessageLevel::Info);
            }
            Err(e) => {
                self.set_message(format!("{:#}", e), MessageLevel::Error);
            }
        }
    }

    /// `:new [path]`: reset to a blank document, optionally pre-bound.
    pub(crate) fn reset_new(&mut self, path_arg: Option<&str>) {
        self.buffer = Buffer::new();
        if let Some(arg) = path_arg {
            self.buffer.set_file_path(PathBuf::from(arg));
        }
        self.cursor.set(0, 0);
    }

    /// `:<n>`: jump to a 1-indexed line, clamped to the buffer.
    pub(crate) fn jump_to_line(&mut self, line_num: usize) {
        let row = line_num
            .saturating_sub(1)
            .min(self.buffer.line_count() - 1);
        self.cursor.set(row, 0);
    }

    /// Marks the session closed. The host observes this via `is_open`.
    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    pub(crate) fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    // --- rendering helpers ---

    /// Builds the status line: `MODE | name [+]` left, `row/total` right.
    fn status_line(&self, width: usize) -> String {
        let name = self
            .buffer
            .file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "[No Name]".to_string());
        let dirty = if self.buffer.is_modified() { " [+]" } else { "" };
        let left = format!("{} | {}{}", self.mode, name, dirty);
        let position = format!("{}/{}", self.cursor.row() + 1, self.buffer.line_count());

        let left_len = left.chars().count();
        let padding = if left_len + position.len() + 1 < width {
            width - left_len - position.len()
        } else {
            1
        };

        truncate_chars(
            &format!("{}{}{}", left, " ".repeat(padding), position),
            width,
        )
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds `term` in `line` starting at char offset `from`, returning the char
/// offset of the match start.
fn find_from(line: &str, from: usize, term: &str) -> Option<usize> {
    let byte_from = line
        .char_indices()
        .nth(from)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());
    line[byte_from..]
        .find(term)
        .map(|offset| line[..byte_from + offset].chars().count())
}

/// Truncates a string to at most `width` chars.
fn truncate_chars(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
