use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::chart::{ChartScene, Ink, Primitive, Tooltip, build_scene};
use crate::ops::metrics::Metrics;
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Chart surface pixels per terminal column
pub const CELL_W: f64 = 8.0;
/// Chart surface pixels per terminal row
pub const CELL_H: f64 = 16.0;

/// Pixel size of the chart surface behind a block of terminal cells
pub fn surface_size(area: Rect) -> (f64, f64) {
    (area.width as f64 * CELL_W, area.height as f64 * CELL_H)
}

/// Trend chart: daily completion, running average, hover readout
pub fn render_chart_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = super::panel(app, "Progress");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.hitboxes.chart = inner;

    let (width, height) = surface_size(inner);
    let metrics = Metrics::of(&app.tracker);
    let Some(scene) = build_scene(&metrics, width, height, app.hover.day()) else {
        let hint = Paragraph::new("Enlarge the window to see the chart")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.panel));
        frame.render_widget(hint, inner);
        return;
    };

    let theme = &app.theme;
    let canvas = Canvas::default()
        .background_color(theme.panel)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| paint_scene(ctx, &scene, theme, height));
    frame.render_widget(canvas, inner);

    if let Some(tip) = &scene.tooltip {
        render_tooltip(frame, theme, tip, inner);
    }
}

/// Canvas y grows upward, the scene's grows downward
fn paint_scene(ctx: &mut Context, scene: &ChartScene, theme: &Theme, height: f64) {
    let flip = |y: f64| height - y;

    for prim in &scene.primitives {
        match prim {
            Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                ink,
            } => ctx.draw(&CanvasLine::new(*x1, flip(*y1), *x2, flip(*y2), theme.ink(*ink))),
            Primitive::Polyline { points, ink } => {
                let color = theme.ink(*ink);
                if let [(x, y)] = points.as_slice() {
                    ctx.draw(&Points {
                        coords: &[(*x, flip(*y))],
                        color,
                    });
                }
                for pair in points.windows(2) {
                    let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
                    ctx.draw(&CanvasLine::new(x1, flip(y1), x2, flip(y2), color));
                }
            }
            Primitive::Dot { x, y, ink, .. } => ctx.draw(&Points {
                coords: &[(*x, flip(*y))],
                color: theme.ink(*ink),
            }),
            // Fills come from the canvas background; the tooltip is a widget
            Primitive::Rect { .. } | Primitive::Text { .. } => {}
        }
    }

    // Labels go on their own layer above the lines
    ctx.layer();
    for prim in &scene.primitives {
        if let Primitive::Text { x, y, text, ink } = prim
            && *ink != Ink::TooltipText
        {
            ctx.print(
                *x,
                flip(*y),
                Span::styled(text.clone(), Style::default().fg(theme.ink(*ink))),
            );
        }
    }
}

/// Tooltip box placed over the canvas cells nearest its surface position
fn render_tooltip(frame: &mut Frame, theme: &Theme, tip: &Tooltip, chart: Rect) {
    let col = chart.x + (tip.x.max(0.0) / CELL_W) as u16;
    let row = chart.y + (tip.y.max(0.0) / CELL_H) as u16;
    let rect = Rect {
        x: col,
        y: row,
        width: (tip.width / CELL_W).ceil() as u16,
        height: tip.lines.len() as u16 + 2,
    }
    .intersection(chart);
    if rect.is_empty() {
        return;
    }

    let bg = theme.ink(Ink::TooltipBox);
    let lines: Vec<Line> = tip
        .lines
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                l.clone(),
                Style::default().fg(theme.ink(Ink::TooltipText)).bg(bg),
            ))
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;
    use crate::model::HabitIndex;

    #[test]
    fn surface_scales_cells() {
        assert_eq!(surface_size(Rect::new(3, 4, 80, 12)), (640.0, 192.0));
    }

    #[test]
    fn draws_axis_labels() {
        let (_tmp, mut app) = app_in_tempdir();
        let out = render_to_string(84, 16, |frame, area| {
            render_chart_view(frame, &mut app, area)
        });
        assert!(out.contains("Progress"));
        assert!(out.contains("100%"));
        assert!(out.contains("0%"));
        assert!(out.contains("D1"));
        assert!(out.contains("D60"));
        assert_eq!(app.hitboxes.chart, Rect::new(1, 1, 82, 14));
    }

    #[test]
    fn hover_shows_tooltip() {
        let (_tmp, mut app) = app_in_tempdir();
        app.tracker.grid.set(HabitIndex::FIRST, 0, true);
        let area = Rect::new(1, 1, 82, 14);
        let (w, h) = surface_size(area);
        let plot = crate::chart::PlotArea::new(w, h).unwrap();
        app.hover.update(&plot, plot.left, plot.top + 5.0, 60);

        let out = render_to_string(84, 16, |frame, area| {
            render_chart_view(frame, &mut app, area)
        });
        assert!(out.contains("Day 1"));
        assert!(out.contains("Daily: 10.00% (1/10)"));
        assert!(out.contains("Avg: 10.00% (1/10)"));
    }

    #[test]
    fn small_area_shows_hint() {
        let (_tmp, mut app) = app_in_tempdir();
        let out = render_to_string(60, 4, |frame, area| {
            render_chart_view(frame, &mut app, area)
        });
        assert!(out.contains("Enlarge"));
    }
}
