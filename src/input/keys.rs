//! Keyboard event mapping and input event types.

use crate::editor::mode::EditorMode;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (move the cursor, enter a mode,
/// delete a character) rather than specific key presses. The mapping from
/// key to event is a function of the current editor mode, which keeps the
/// `(mode, key)` dispatch in one flat table instead of nested conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Move cursor left one column
    MoveLeft,
    /// Move cursor right one column
    MoveRight,
    /// Move cursor up one row
    MoveUp,
    /// Move cursor down one row
    MoveDown,
    /// Jump to the first line (g)
    JumpToTop,
    /// Jump to the last line (G)
    JumpToBottom,
    /// Jump to the start of the line (0, Home)
    LineStart,
    /// Jump to the end of the line ($, End)
    LineEnd,
    /// Move to the start of the next word (w)
    WordForward,
    /// Move to the start of the previous word (b)
    WordBackward,
    /// Delete the character under the cursor (x)
    DeleteChar,
    /// The d operator; a second d deletes the current line
    DeleteOperator,
    /// Repeat the last search (n)
    NextMatch,
    /// Enter insert mode before the cursor (i)
    EnterInsert,
    /// Enter insert mode after the cursor (a)
    EnterInsertAppend,
    /// Open an empty line below and enter insert mode (o)
    OpenBelow,
    /// Open an empty line above and enter insert mode (O)
    OpenAbove,
    /// Enter command mode (:)
    EnterCommandMode,
    /// Enter search mode (/)
    EnterSearchMode,
    /// Exit the current mode back to normal (Esc)
    ExitMode,
    /// Insert a character at the cursor in insert mode
    InsertCharacter(char),
    /// Backspace in insert mode
    InsertBackspace,
    /// Enter in insert mode (split the line)
    InsertEnter,
    /// Append a character to the command or search buffer
    CommandCharacter(char),
    /// Remove the last character of the command or search buffer
    CommandBackspace,
    /// Commit the command or search buffer (Enter)
    CommandCommit,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent based on the current editor mode.
///
/// Different modes interpret keys differently (vim-style modal editing):
/// - Normal mode: hjkl/arrows for movement, i/a/o/O for insert, : and / for
///   command and search, x and dd for deletion
/// - Insert mode: printable characters insert, Esc exits, arrows move
/// - Command and Search modes: characters accumulate, Enter commits, Esc
///   cancels
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use linequill::editor::mode::EditorMode;
/// use linequill::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('j'));
/// assert_eq!(map_key_event(event, &EditorMode::Normal), InputEvent::MoveDown);
/// ```
pub fn map_key_event(event: Event, mode: &EditorMode) -> InputEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match mode {
        EditorMode::Normal => match key {
            Key::Char('h') => InputEvent::MoveLeft,
            Key::Char('l') => InputEvent::MoveRight,
            Key::Char('k') => InputEvent::MoveUp,
            Key::Char('j') => InputEvent::MoveDown,
            Key::Char('g') => InputEvent::JumpToTop,
            Key::Char('G') => InputEvent::JumpToBottom,
            Key::Char('0') => InputEvent::LineStart,
            Key::Char('$') => InputEvent::LineEnd,
            Key::Char('w') => InputEvent::WordForward,
            Key::Char('b') => InputEvent::WordBackward,
            Key::Char('x') => InputEvent::DeleteChar,
            Key::Char('d') => InputEvent::DeleteOperator,
            Key::Char('n') => InputEvent::NextMatch,
            Key::Char('i') => InputEvent::EnterInsert,
            Key::Char('a') => InputEvent::EnterInsertAppend,
            Key::Char('o') => InputEvent::OpenBelow,
            Key::Char('O') => InputEvent::OpenAbove,
            Key::Char(':') => InputEvent::EnterCommandMode,
            Key::Char('/') => InputEvent::EnterSearchMode,
            Key::Esc => InputEvent::ExitMode,
            Key::Left => InputEvent::MoveLeft,
            Key::Right => InputEvent::MoveRight,
            Key::Up => InputEvent::MoveUp,
            Key::Down => InputEvent::MoveDown,
            Key::Home => InputEvent::LineStart,
            Key::End => InputEvent::LineEnd,
            _ => InputEvent::Unknown,
        },
        EditorMode::Insert => match key {
            Key::Esc => InputEvent::ExitMode,
            Key::Char('\n') => InputEvent::InsertEnter,
            Key::Backspace => InputEvent::InsertBackspace,
            Key::Left => InputEvent::MoveLeft,
            Key::Right => InputEvent::MoveRight,
            Key::Up => InputEvent::MoveUp,
            Key::Down => InputEvent::MoveDown,
            Key::Char(c) => InputEvent::InsertCharacter(c),
            _ => InputEvent::Unknown,
        },
        EditorMode::Command | EditorMode::Search => match key {
            Key::Esc => InputEvent::ExitMode,
            Key::Char('\n') => InputEvent::CommandCommit,
            Key::Backspace => InputEvent::CommandBackspace,
            Key::Char(c) => InputEvent::CommandCharacter(c),
            _ => InputEvent::Unknown,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_movement_vim_keys() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('j')), &EditorMode::Normal),
            InputEvent::MoveDown
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('k')), &EditorMode::Normal),
            InputEvent::MoveUp
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('h')), &EditorMode::Normal),
            InputEvent::MoveLeft
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('l')), &EditorMode::Normal),
            InputEvent::MoveRight
        );
    }

    #[test]
    fn test_normal_mode_movement_arrow_keys() {
        assert_eq!(
            map_key_event(Event::Key(Key::Down), &EditorMode::Normal),
            InputEvent::MoveDown
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Up), &EditorMode::Normal),
            InputEvent::MoveUp
        );
    }

    #[test]
    fn test_normal_mode_enter_modes() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('i')), &EditorMode::Normal),
            InputEvent::EnterInsert
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char(':')), &EditorMode::Normal),
            InputEvent::EnterCommandMode
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('/')), &EditorMode::Normal),
            InputEvent::EnterSearchMode
        );
    }

    #[test]
    fn test_insert_mode_typing() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('q')), &EditorMode::Insert),
            InputEvent::InsertCharacter('q')
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('\n')), &EditorMode::Insert),
            InputEvent::InsertEnter
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Backspace), &EditorMode::Insert),
            InputEvent::InsertBackspace
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Esc), &EditorMode::Insert),
            InputEvent::ExitMode
        );
    }

    #[test]
    fn test_insert_mode_arrows_move_without_mode_change() {
        assert_eq!(
            map_key_event(Event::Key(Key::Left), &EditorMode::Insert),
            InputEvent::MoveLeft
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Down), &EditorMode::Insert),
            InputEvent::MoveDown
        );
    }

    #[test]
    fn test_command_mode_accumulates_and_commits() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('w')), &EditorMode::Command),
            InputEvent::CommandCharacter('w')
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('\n')), &EditorMode::Command),
            InputEvent::CommandCommit
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Esc), &EditorMode::Command),
            InputEvent::ExitMode
        );
    }

    #[test]
    fn test_search_mode_mirrors_command_mode() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('f')), &EditorMode::Search),
            InputEvent::CommandCharacter('f')
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('\n')), &EditorMode::Search),
            InputEvent::CommandCommit
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            map_key_event(Event::Key(Key::F(5)), &EditorMode::Normal),
            InputEvent::Unknown
        );
    }
}
