use std::fs;
use std::path::Path;

use linequill::editor::session::{EditorSession, MessageLevel};
use linequill::input::keys::InputEvent;
use tempfile::tempdir;

fn type_command(session: &mut EditorSession, command: &str) {
    session.handle_key(InputEvent::EnterCommandMode);
    for ch in command.chars() {
        session.handle_key(InputEvent::CommandCharacter(ch));
    }
    session.handle_key(InputEvent::CommandCommit);
}

fn type_text(session: &mut EditorSession, text: &str) {
    session.handle_key(InputEvent::EnterInsert);
    for ch in text.chars() {
        if ch == '\n' {
            session.handle_key(InputEvent::InsertEnter);
        } else {
            session.handle_key(InputEvent::InsertCharacter(ch));
        }
    }
    session.handle_key(InputEvent::ExitMode);
}

#[test]
fn test_write_with_argument_creates_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut session = EditorSession::new();
    type_text(&mut session, "hello\nworld");
    type_command(&mut session, &format!("w {}", path.display()));

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\nworld");
    assert!(!session.is_modified());
    let message = session.message().unwrap();
    assert_eq!(message.level, MessageLevel::Info);
    assert!(message.text.starts_with("Wrote "));
}

#[test]
fn test_write_rebinds_path_for_later_saves() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut session = EditorSession::new();
    type_text(&mut session, "one");
    type_command(&mut session, &format!("w {}", path.display()));

    session.handle_key(InputEvent::LineEnd);
    session.handle_key(InputEvent::EnterInsertAppend);
    session.handle_key(InputEvent::InsertCharacter('x'));
    session.handle_key(InputEvent::ExitMode);
    type_command(&mut session, "w");
    assert_eq!(fs::read_to_string(&path).unwrap(), "onex");
}

#[test]
fn test_write_without_path_reports_error() {
    let mut session = EditorSession::new();
    type_text(&mut session, "hello");
    type_command(&mut session, "w");

    assert!(session.is_modified());
    let message = session.message().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
    assert!(message.text.contains("No file name"));
}

#[test]
fn test_quit_clean_closes() {
    let mut session = EditorSession::new();
    type_command(&mut session, "q");
    assert!(!session.is_open());
}

#[test]
fn test_quit_blocked_by_unsaved_changes() {
    let mut session = EditorSession::new();
    type_text(&mut session, "hello");
    type_command(&mut session, "q");

    assert!(session.is_open());
    let message = session.message().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
    assert!(message.text.contains("No write since last change"));
}

#[test]
fn test_force_quit_discards_changes() {
    let mut session = EditorSession::new();
    type_text(&mut session, "hello");
    type_command(&mut session, "q!");
    assert!(!session.is_open());
}

#[test]
fn test_write_quit_saves_and_closes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut session = EditorSession::new();
    type_text(&mut session, "hello");
    type_command(&mut session, &format!("wq {}", path.display()));

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    assert!(!session.is_open());
}

#[test]
fn test_write_quit_stays_open_when_save_fails() {
    let mut session = EditorSession::new();
    type_text(&mut session, "hello");
    // No bound path: the save fails, so the quit half must not run.
    type_command(&mut session, "wq");

    assert!(session.is_open());
    assert!(session.is_modified());
}

#[test]
fn test_edit_replaces_buffer_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "alpha\nbeta\n").unwrap();

    let mut session = EditorSession::new();
    type_command(&mut session, &format!("e {}", path.display()));

    assert_eq!(session.buffer().lines(), &["alpha", "beta"]);
    assert_eq!(session.cursor_position(), (0, 0));
    assert_eq!(session.buffer().file_path(), Some(Path::new(&path)));
    assert!(!session.is_modified());
}

#[test]
fn test_edit_missing_file_keeps_buffer() {
    let mut session = EditorSession::new();
    type_text(&mut session, "keep me");
    type_command(&mut session, "e /no/such/file.txt");

    assert_eq!(session.buffer().line(0), "keep me");
    assert_eq!(session.message().unwrap().level, MessageLevel::Error);
}

#[test]
fn test_edit_without_argument_reports_error() {
    let mut session = EditorSession::new();
    type_command(&mut session, "e");
    let message = session.message().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
    assert!(message.text.contains("File name required"));
}

#[test]
fn test_new_resets_to_blank_document() {
    let mut session = EditorSession::new();
    type_text(&mut session, "old content");
    type_command(&mut session, "new");

    assert_eq!(session.buffer().lines(), &[""]);
    assert_eq!(session.cursor_position(), (0, 0));
    assert!(!session.is_modified());
    assert!(session.buffer().file_path().is_none());
}

#[test]
fn test_new_with_path_binds_it() {
    let mut session = EditorSession::new();
    type_command(&mut session, "new draft.txt");
    assert_eq!(session.buffer().file_path(), Some(Path::new("draft.txt")));
}

#[test]
fn test_numeric_command_jumps_to_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ten.txt");
    let content: String = (1..=10).map(|i| format!("line {}\n", i)).collect();
    fs::write(&path, content).unwrap();

    let mut session = EditorSession::new();
    type_command(&mut session, &format!("e {}", path.display()));
    type_command(&mut session, "5");
    assert_eq!(session.cursor_position(), (4, 0));

    // Past the end clamps to the last line.
    type_command(&mut session, "500");
    assert_eq!(session.cursor_position(), (9, 0));
}

#[test]
fn test_unknown_command_is_silent() {
    let mut session = EditorSession::new();
    type_command(&mut session, "frobnicate");
    assert!(session.message().is_none());
    assert!(session.is_open());
}

#[test]
fn test_empty_command_is_noop() {
    let mut session = EditorSession::new();
    type_command(&mut session, "");
    assert!(session.message().is_none());
    assert!(session.is_open());
}
