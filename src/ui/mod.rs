//! UI module for the linequill terminal shell.
//!
//! This module renders an editor session into a terminal: the text area
//! with optional line numbers, the status line, and the message/command
//! echo line. It is one host adapter over the engine's embedding contract;
//! any other shell renders the same [`RenderedFrame`] into its own widgets.
//!
//! [`RenderedFrame`]: crate::editor::session::RenderedFrame

pub mod message_area;
pub mod status_line;
pub mod text_area;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::Terminal;

use crate::editor::session::EditorSession;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The layout is three stacked areas: the text area on top, a one-line
/// status bar, and a one-line message/command echo area at the bottom.
pub struct UI {
    theme: Theme,
    show_line_numbers: bool,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme, show_line_numbers: bool) -> Self {
        Self {
            theme,
            show_line_numbers,
        }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Renders the session to the terminal.
    ///
    /// Asks the session for a frame sized to the text area (the engine
    /// adjusts its viewport to the supplied height on every call), then
    /// draws the three areas and places the terminal cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        session: &mut EditorSession,
    ) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(f.area());

            let editor_area = chunks[0];
            let gutter = text_area::gutter_width(
                session.buffer().line_count(),
                self.show_line_numbers,
            );
            let text_width = (editor_area.width as usize).saturating_sub(gutter);

            let rendered = session.render(editor_area.height as usize, text_width);
            let first_line_number = session.scroll_top() + 1;

            text_area::render_text_area(
                f,
                editor_area,
                &rendered,
                first_line_number,
                gutter,
                &self.theme.colors,
            );
            status_line::render_status_line(f, chunks[1], &rendered, &self.theme.colors);
            message_area::render_message_area(f, chunks[2], session, &self.theme.colors);

            let (cursor_row, cursor_col) = rendered.cursor;
            f.set_cursor_position(Position::new(
                editor_area.x + (gutter + cursor_col) as u16,
                editor_area.y + cursor_row as u16,
            ));
        })?;

        Ok(())
    }
}
