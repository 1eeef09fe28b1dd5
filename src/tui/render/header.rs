use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::metrics::Metrics;
use crate::tui::app::App;
use crate::util::unicode::display_width;

/// Title, subtitle, overall completion and the active cycle length
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = super::panel(app, "habits");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bg = app.theme.panel;
    let title = format!(" {} Day Tracker", app.days());
    let subtitle = "  Discipline > Motivation";
    let summary = format!(
        "Complete: {}%   Cycle: {} days ",
        Metrics::of(&app.tracker).overall_percent(),
        app.days()
    );

    let mut spans = vec![
        Span::styled(
            title.clone(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(subtitle, Style::default().fg(app.theme.dim).bg(bg)),
    ];
    let used = display_width(&title) + display_width(subtitle) + display_width(&summary);
    let width = inner.width as usize;
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        spans.push(Span::styled(
            summary,
            Style::default().fg(app.theme.green).bg(bg),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;
    use crate::model::{CycleLength, HabitIndex};

    #[test]
    fn shows_title_and_percent() {
        let (_tmp, mut app) = app_in_tempdir();
        app.tracker.cycle = CycleLength::Seven;
        for day in 0..7 {
            app.tracker.grid.set(HabitIndex::FIRST, day, true);
        }
        let out = render_to_string(TERM_W, 3, |frame, area| render_header(frame, &app, area));
        assert!(out.contains("7 Day Tracker"));
        assert!(out.contains("Discipline > Motivation"));
        assert!(out.contains("Complete: 10%"));
        assert!(out.contains("Cycle: 7 days"));
    }
}
