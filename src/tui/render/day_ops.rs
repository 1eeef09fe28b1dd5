use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

/// Day picker for bulk fill/clear plus the habit and data actions
pub fn render_day_ops(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = super::panel(app, "Day Actions");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.hitboxes.day_ops = area;

    let theme = &app.theme;
    let bg = theme.panel;
    let key = Style::default().fg(theme.highlight).bg(bg);
    let text = Style::default().fg(theme.text).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);

    let name_room = (inner.width as usize).saturating_sub(24);
    let lines = vec![
        Line::from(vec![
            Span::styled("Day ", dim),
            Span::styled("[ ", key),
            Span::styled(
                format!("{:>2}", app.day_cursor.day()),
                Style::default()
                    .fg(theme.yellow)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ]", key),
            Span::styled(format!(" of {}   ", app.days()), dim),
            Span::styled("f", key),
            Span::styled(" fill  ", text),
            Span::styled("x", key),
            Span::styled(" clear", text),
        ]),
        Line::from(vec![
            Span::styled(
                truncate_to_width(app.tracker.habits.name(app.cursor_habit), name_room),
                text,
            ),
            Span::styled("  r", key),
            Span::styled(" rename  ", text),
            Span::styled("X", key),
            Span::styled(" clear habit", text),
        ]),
        Line::from(vec![
            Span::styled("^E", key),
            Span::styled(" export  ", text),
            Span::styled("^\u{21E7}R", key),
            Span::styled(" reset", text),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}
