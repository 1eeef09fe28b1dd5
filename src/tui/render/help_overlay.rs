use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = super::centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Grid", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move between habits", key_style, desc_style);
    add_binding(&mut lines, " \u{2190}\u{2192}/hl", "Move between days", key_style, desc_style);
    add_binding(&mut lines, " g/G", "First/last day", key_style, desc_style);
    add_binding(&mut lines, " Space/Enter", "Toggle check", key_style, desc_style);
    add_binding(&mut lines, " c", "Next cycle length", key_style, desc_style);
    add_binding(&mut lines, " Click", "Toggle check", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Day Actions", header_style)));
    add_binding(&mut lines, " [ ]/wheel", "Pick day", key_style, desc_style);
    add_binding(&mut lines, " .", "Pick the grid cursor's day", key_style, desc_style);
    add_binding(&mut lines, " f", "Check every habit on that day", key_style, desc_style);
    add_binding(&mut lines, " x", "Clear every habit on that day", key_style, desc_style);
    add_binding(&mut lines, " r", "Rename habit", key_style, desc_style);
    add_binding(&mut lines, " X", "Clear habit on all days", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " Ctrl+E", "Export statistics", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+Shift+R", "Reset all progress", key_style, desc_style);
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q/Ctrl+C", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
