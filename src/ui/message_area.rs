//! Message and command echo area.
//!
//! The bottom line of the shell. In Command or Search mode it echoes the
//! pending input with its `:` or `/` prefix; otherwise it shows the
//! session's status message, colored by severity.

use crate::editor::mode::EditorMode;
use crate::editor::session::{EditorSession, MessageLevel};
use crate::theme::colors::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Renders the message line for the current session state.
pub fn render_message_area(
    f: &mut Frame,
    area: Rect,
    session: &EditorSession,
    colors: &ThemeColors,
) {
    let (text, style) = match session.mode() {
        EditorMode::Command => (
            format!(":{}", session.command_buffer()),
            Style::default().fg(colors.foreground).bg(colors.background),
        ),
        EditorMode::Search => (
            format!("/{}", session.command_buffer()),
            Style::default().fg(colors.foreground).bg(colors.background),
        ),
        _ => match session.message() {
            Some(message) => {
                let fg = match message.level {
                    MessageLevel::Info => colors.info,
                    MessageLevel::Warning => colors.warning,
                    MessageLevel::Error => colors.error,
                };
                (
                    message.text.clone(),
                    Style::default().fg(fg).bg(colors.background),
                )
            }
            None => (
                String::new(),
                Style::default().fg(colors.foreground).bg(colors.background),
            ),
        },
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys::InputEvent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw_message(session: &EditorSession) -> String {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let colors = ThemeColors::default_dark();

        terminal
            .draw(|f| {
                render_message_area(f, f.area(), session, &colors);
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .take(40)
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_echoes_command_buffer() {
        let mut session = EditorSession::new();
        session.handle_key(InputEvent::EnterCommandMode);
        for ch in "wq".chars() {
            session.handle_key(InputEvent::CommandCharacter(ch));
        }
        let text = draw_message(&session);
        assert!(text.starts_with(":wq"), "command echo: {}", text);
    }

    #[test]
    fn test_echoes_search_buffer() {
        let mut session = EditorSession::new();
        session.handle_key(InputEvent::EnterSearchMode);
        session.handle_key(InputEvent::CommandCharacter('f'));
        let text = draw_message(&session);
        assert!(text.starts_with("/f"), "search echo: {}", text);
    }

    #[test]
    fn test_shows_error_message() {
        let mut session = EditorSession::new();
        session.handle_key(InputEvent::EnterInsert);
        session.handle_key(InputEvent::InsertCharacter('x'));
        session.handle_key(InputEvent::ExitMode);
        session.handle_key(InputEvent::EnterCommandMode);
        session.handle_key(InputEvent::CommandCharacter('q'));
        session.handle_key(InputEvent::CommandCommit);
        let text = draw_message(&session);
        assert!(
            text.contains("No write since last change"),
            "blocked quit message: {}",
            text
        );
    }
}
