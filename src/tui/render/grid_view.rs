use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{HABIT_COUNT, HabitIndex};
use crate::ops::metrics::Metrics;
use crate::tui::app::{App, GridHitbox};
use crate::util::unicode::fit_to_width;

/// Terminal columns per day cell
pub const DAY_COL_WIDTH: u16 = 3;

/// Widest the habit label column gets
const NAME_COL_MAX: u16 = 28;

/// Habit rows × day columns, scrolled horizontally to keep the cursor visible
pub fn render_grid_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let days = app.days();
    let inner_width = area.width.saturating_sub(2);
    let name_width = NAME_COL_MAX.min(inner_width / 3);
    let visible = ((inner_width - name_width) / DAY_COL_WIDTH) as usize;
    app.ensure_day_visible(visible);
    let first = app.scroll_offset;
    let last = (first + visible).min(days);

    let title = if visible >= days {
        "Habits".to_string()
    } else {
        format!("Habits · days {}-{} of {}", first + 1, last, days)
    };
    let block = super::panel(app, &title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.hitboxes.grid = GridHitbox {
        cells: Rect {
            x: inner.x + name_width,
            y: inner.y.saturating_add(1),
            width: ((last - first) as u16 * DAY_COL_WIDTH).min(inner.width - name_width),
            height: inner.height.saturating_sub(1).min(HABIT_COUNT as u16),
        },
        first_day: first,
        visible_days: last - first,
    };

    let theme = &app.theme;
    let bg = theme.panel;
    let metrics = Metrics::of(&app.tracker);
    let mut lines: Vec<Line> = Vec::new();

    // Day numbers; the fill/clear day is marked
    let ops_day = app.day_cursor.day_index(app.tracker.cycle);
    let mut header = vec![Span::styled(
        fit_to_width("", name_width as usize),
        Style::default().bg(bg),
    )];
    for day in first..last {
        let style = if Some(day) == ops_day {
            Style::default()
                .fg(theme.yellow)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else if day == app.cursor_day {
            Style::default().fg(theme.text_bright).bg(bg)
        } else {
            Style::default().fg(theme.dim).bg(bg)
        };
        header.push(Span::styled(format!("{:>2} ", day + 1), style));
    }
    lines.push(Line::from(header));

    for habit in HabitIndex::all() {
        let on_cursor_row = habit == app.cursor_habit;
        let label = format!(
            " {} ({}%)",
            app.tracker.habits.name(habit),
            metrics.habit_completion_percent(habit)
        );
        let label_style = if on_cursor_row {
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(bg)
        };
        let mut spans = vec![Span::styled(
            fit_to_width(&label, name_width as usize),
            label_style,
        )];

        for day in first..last {
            let checked = app.tracker.grid.get(habit, day);
            let (glyph, fg) = if checked {
                (" \u{25A0} ", theme.green)
            } else {
                (" \u{00B7} ", theme.cell_empty)
            };
            let cell_bg = if on_cursor_row && day == app.cursor_day {
                theme.selection_bg
            } else {
                bg
            };
            spans.push(Span::styled(glyph, Style::default().fg(fg).bg(cell_bg)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}
