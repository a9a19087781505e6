//! Input event handler reading and processing keyboard events.

use super::keys::map_key_event;
use crate::editor::session::EditorSession;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use termion::event::Event;
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Handles terminal input events and feeds them into an editor session.
///
/// The `InputHandler` reads termion events, maps them to the engine's
/// logical [`InputEvent`](crate::input::keys::InputEvent) vocabulary based
/// on the session's current mode, and dispatches them. All editing
/// semantics live in the session; this type only owns the terminal side.
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: EventSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Reads the next terminal event, blocking until one arrives.
    ///
    /// Returns `None` when the event stream ends. The stored events iterator
    /// maintains its position in the input buffer, which prevents character
    /// loss during rapid input (paste operations).
    pub fn next_event(&mut self) -> Result<Option<Event>> {
        match &mut self.events {
            EventSource::Stdin(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
            EventSource::Tty(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
        }

        Ok(None)
    }

    /// Maps a terminal event through the mode dispatch table and hands it to
    /// the session.
    ///
    /// Returns `Ok(true)` when the session has closed (e.g. a successful
    /// `:q`) and the host should reclaim the panel.
    pub fn handle_event(&mut self, event: Event, session: &mut EditorSession) -> Result<bool> {
        let input_event = map_key_event(event, session.mode());
        session.handle_key(input_event);
        Ok(!session.is_open())
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
