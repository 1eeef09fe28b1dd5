use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::chart::PlotArea;
use crate::ops::actions::Action;
use crate::tui::app::{App, Mode};
use crate::tui::render::chart_view::{CELL_H, CELL_W, surface_size};

/// Handle a mouse event. Returns true when the screen needs a redraw.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> bool {
    if app.mode != Mode::Navigate || app.show_help {
        return false;
    }
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some((habit, day)) = app.hitboxes.grid.cell_at(mouse.column, mouse.row) else {
                return false;
            };
            app.cursor_habit = habit;
            app.cursor_day = day;
            app.dispatch(Action::Toggle { habit, day });
            true
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let chart = app.hitboxes.chart;
            if !chart.contains(pos) {
                return app.hover.leave();
            }
            let (x, y) = pointer_to_surface(chart, pos);
            let (w, h) = surface_size(chart);
            match PlotArea::new(w, h) {
                Some(area) => app.hover.update(&area, x, y, app.days()),
                None => app.hover.leave(),
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            let delta = if mouse.kind == MouseEventKind::ScrollUp {
                1
            } else {
                -1
            };
            if app.hitboxes.day_ops.contains(pos) {
                app.dispatch(Action::StepCursor(delta));
                true
            } else if app.hitboxes.grid.cells.contains(pos) {
                // Wheel up scrolls back in time; the cursor stays on screen
                let last = app.days() - 1;
                let visible = app.hitboxes.grid.visible_days.max(1);
                app.scroll_offset = app
                    .scroll_offset
                    .saturating_add_signed(-delta as isize)
                    .min(last);
                let window_end = (app.scroll_offset + visible - 1).min(last);
                app.cursor_day = app.cursor_day.clamp(app.scroll_offset, window_end);
                true
            } else {
                false
            }
        }
        _ => false,
    }
}

/// Centre of the terminal cell under the pointer, in chart surface pixels
fn pointer_to_surface(chart: Rect, pos: Position) -> (f64, f64) {
    let x = (pos.x - chart.x) as f64 * CELL_W + CELL_W / 2.0;
    let y = (pos.y - chart.y) as f64 * CELL_H + CELL_H / 2.0;
    (x, y)
}
