use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

const NAVIGATE_HINTS: &str = "space toggle  [ ] day  f fill  x clear  c cycle  ? help  q quit";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref message) = app.status_message {
                let fg = if app.status_is_error {
                    app.theme.red
                } else {
                    app.theme.text_bright
                };
                Line::from(Span::styled(message.clone(), Style::default().fg(fg).bg(bg)))
            } else if app.tracker.config.ui.show_key_hints {
                Line::from(Span::styled(NAVIGATE_HINTS, dim))
            } else {
                Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
            }
        }
        Mode::Rename => {
            // Prompt with a ▌ cursor at the edit position
            let (before, after) = app.edit_buffer.split_at(app.edit_cursor);
            let text = Style::default().fg(app.theme.text_bright).bg(bg);
            let spans = vec![
                Span::styled(format!("Rename habit {}: ", app.cursor_habit), dim),
                Span::styled(before.to_string(), text),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(after.to_string(), text),
            ];
            with_right_hint(spans, "Enter save  Esc cancel", width, dim)
        }
        Mode::Confirm => {
            let spans = vec![Span::styled(
                "Reset all progress?",
                Style::default().fg(app.theme.red).bg(bg),
            )];
            with_right_hint(spans, "y reset  n cancel", width, dim)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pad the line and right-align a hint when there is room for it
fn with_right_hint<'a>(
    mut spans: Vec<Span<'a>>,
    hint: &'a str,
    width: usize,
    style: Style,
) -> Line<'a> {
    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), style));
        spans.push(Span::styled(hint, style));
    }
    Line::from(spans)
}
