//! Text area widget rendering the visible buffer window.

use crate::editor::session::RenderedFrame;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the visible buffer lines with an optional line-number gutter.
///
/// `first_line_number` is the 1-based number of the top visible row, so the
/// gutter stays absolute while the viewport scrolls.
pub fn render_text_area(
    f: &mut Frame,
    area: Rect,
    rendered: &RenderedFrame,
    first_line_number: usize,
    gutter_width: usize,
    colors: &ThemeColors,
) {
    let text_style = Style::default().fg(colors.foreground).bg(colors.background);
    let gutter_style = Style::default().fg(colors.line_number).bg(colors.background);

    let lines: Vec<Line> = rendered
        .lines
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let mut spans = Vec::with_capacity(2);
            if gutter_width > 0 {
                spans.push(Span::styled(
                    format!("{:>width$} ", first_line_number + i, width = gutter_width - 1),
                    gutter_style,
                ));
            }
            spans.push(Span::styled(text.clone(), text_style));
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

/// Returns the gutter width (digits plus one space) for a buffer of
/// `total_lines`, or 0 when line numbers are disabled.
pub fn gutter_width(total_lines: usize, show_line_numbers: bool) -> usize {
    if !show_line_numbers {
        return 0;
    }
    let digits = total_lines.max(1).to_string().len();
    digits + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_gutter_width() {
        assert_eq!(gutter_width(9, true), 2);
        assert_eq!(gutter_width(10, true), 3);
        assert_eq!(gutter_width(1000, true), 5);
        assert_eq!(gutter_width(1000, false), 0);
    }

    #[test]
    fn test_renders_lines_with_numbers() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let rendered = RenderedFrame {
            lines: vec!["alpha".to_string(), "beta".to_string()],
            status_line: String::new(),
            cursor: (0, 0),
        };
        let colors = ThemeColors::default_dark();

        terminal
            .draw(|f| {
                render_text_area(f, f.area(), &rendered, 4, 2, &colors);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("4 alpha"), "gutter + line: {}", text);
        assert!(text.contains("5 beta"), "gutter + line: {}", text);
    }
}
