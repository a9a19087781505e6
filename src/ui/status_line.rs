//! Status line widget.
//!
//! The status line text itself comes from the engine's rendered frame
//! (mode, filename, dirty indicator `[+]`, cursor position); this widget
//! only applies the theme styling.
//!
//! Example status line: `NORMAL | notes.txt [+]                    5/20`

use crate::editor::session::RenderedFrame;
use crate::theme::colors::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Renders the frame's status line with the theme's status colors.
pub fn render_status_line(
    f: &mut Frame,
    area: Rect,
    rendered: &RenderedFrame,
    colors: &ThemeColors,
) {
    let style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);
    let status = Paragraph::new(rendered.status_line.clone()).style(style);
    f.render_widget(status, area);
}
