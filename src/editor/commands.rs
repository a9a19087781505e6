//! The colon-command interpreter.
//!
//! Parses and executes a committed command line (the text typed after `:`,
//! without the colon). The input splits on the first whitespace into a
//! command word and an optional argument.
//!
//! | Command      | Effect                                                      |
//! |--------------|-------------------------------------------------------------|
//! | `w [path]`   | save, optionally rebinding the file path first              |
//! | `q`          | close, refused while there are unsaved changes              |
//! | `q!`         | close unconditionally, discarding unsaved changes           |
//! | `wq`         | save, and close only if the save succeeded                  |
//! | `e <path>`   | replace the buffer from disk (no-op if unreadable)          |
//! | `new [path]` | reset to a blank document, optionally pre-bound to a path   |
//! | `<integer>`  | jump to that 1-indexed line, clamped to the buffer          |
//! | anything else| ignored                                                     |

use super::session::{EditorSession, MessageLevel};

/// What the session should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Keep editing.
    Stay,
    /// The session has closed; the host should reclaim the panel.
    Close,
}

/// Executes one committed colon-command against the session.
///
/// Unrecognized commands are silently ignored and the session is unchanged;
/// command failures (blocked quit, I/O errors) are reported through the
/// session's status message and never escape as errors.
pub fn execute_command(session: &mut EditorSession, input: &str) -> CommandOutcome {
    let input = input.trim();
    if input.is_empty() {
        return CommandOutcome::Stay;
    }

    let (command, argument) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, Some(rest.trim())),
        None => (input, None),
    };

    match command {
        "w" => {
            session.save_buffer(argument);
            CommandOutcome::Stay
        }
        "q" => {
            if session.is_modified() {
                session.set_message(
                    "No write since last change (add ! to override)".to_string(),
                    MessageLevel::Error,
                );
                CommandOutcome::Stay
            } else {
                session.close();
                CommandOutcome::Close
            }
        }
        "q!" => {
            session.close();
            CommandOutcome::Close
        }
        "wq" => {
            if session.save_buffer(argument) {
                session.close();
                CommandOutcome::Close
            } else {
                CommandOutcome::Stay
            }
        }
        "e" => {
            match argument {
                Some(path) => session.edit_file(path),
                None => session.set_message(
                    "File name required (:e <path>)".to_string(),
                    MessageLevel::Error,
                ),
            }
            CommandOutcome::Stay
        }
        "new" => {
            session.reset_new(argument);
            CommandOutcome::Stay
        }
        _ => {
            // A bare integer is a 1-indexed line jump; anything else is
            // ignored without complaint.
            if argument.is_none() {
                if let Ok(line_num) = command.parse::<usize>() {
                    session.jump_to_line(line_num);
                }
            }
            CommandOutcome::Stay
        }
    }
}
