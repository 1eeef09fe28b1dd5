pub mod chart_view;
pub mod confirm_popup;
pub mod day_ops;
pub mod grid_view;
pub mod header;
pub mod help_overlay;
pub mod stats_panel;
pub mod status_row;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

use crate::model::HABIT_COUNT;

use super::app::{App, Mode};

/// Main render function: lays out the panels and draws each one
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | habit grid | chart + side panels | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(HABIT_COUNT as u16 + 3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    grid_view::render_grid_view(frame, app, chunks[1]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    chart_view::render_chart_view(frame, app, lower[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(5)])
        .split(lower[1]);
    stats_panel::render_stats_panel(frame, app, side[0]);
    day_ops::render_day_ops(frame, app, side[1]);

    // Overlays (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.mode == Mode::Confirm {
        confirm_popup::render_confirm_popup(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[3]);
}

/// Bordered panel with a bold title, shared by every section
pub(super) fn panel<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border).bg(app.theme.panel))
        .style(Style::default().bg(app.theme.panel))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
