use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const POPUP_WIDTH: u16 = 48;
const POPUP_HEIGHT: u16 = 7;

/// Centered yes/no box shown before a full reset
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let width = POPUP_WIDTH.min(area.width);
    let height = POPUP_HEIGHT.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(app.theme.text).bg(bg);

    let lines = vec![
        Line::from(Span::styled(
            "Reset all habit progress for all days?",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This clears all checked boxes in the tracker.",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", key_style),
            Span::styled(" reset    ", text),
            Span::styled("n", key_style),
            Span::styled(" cancel", text),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg))
        .title(Span::styled(
            " Reset Progress ",
            Style::default().fg(app.theme.red).add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}
