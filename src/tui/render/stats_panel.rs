use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::metrics::{Metrics, Summary};
use crate::tui::app::App;

/// Weekly figures shown per line
const WEEKS_PER_LINE: usize = 3;

/// Summary bullets followed by the weekly breakdown
pub fn render_stats_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = super::panel(app, "Statistics");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bg = app.theme.panel;
    let text = Style::default().fg(app.theme.text).bg(bg);
    let heading = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let summary = Metrics::of(&app.tracker).summary();
    let mut lines: Vec<Line> = summary_lines(app, &summary)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, text)))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Weekly", heading)));
    lines.extend(
        weekly_lines(&summary)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(app.theme.dim).bg(bg)))),
    );

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

fn summary_lines(app: &App, summary: &Summary) -> Vec<String> {
    let names = &app.tracker.habits;
    vec![
        format!(
            "\u{2022} Total complete: {} / {} ({}%)",
            summary.checked, summary.total, summary.percent
        ),
        format!(
            "\u{2022} Average per habit: {:.1} / {} days",
            summary.average_per_habit,
            summary.cycle.days()
        ),
        format!(
            "\u{2022} Best habit: {} ({}%)",
            names.name(summary.best.habit),
            summary.best.percent
        ),
        format!(
            "\u{2022} Needs focus: {} ({}%)",
            names.name(summary.worst.habit),
            summary.worst.percent
        ),
    ]
}

/// "W1 (D1-D7): 40%" entries, three to a line
fn weekly_lines(summary: &Summary) -> Vec<String> {
    summary
        .weeks
        .chunks(WEEKS_PER_LINE)
        .map(|row| {
            row.iter()
                .map(|w| {
                    format!(
                        "W{} (D{}-D{}): {}%",
                        w.week, w.first_day, w.last_day, w.percent
                    )
                })
                .collect::<Vec<_>>()
                .join("    ")
        })
        .collect()
}
