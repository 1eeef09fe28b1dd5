use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::actions::Action;
use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        // Global shortcuts
        (m, KeyCode::Char('e') | KeyCode::Char('E')) if m.contains(KeyModifiers::CONTROL) => {
            app.dispatch(Action::Export);
        }
        // Ctrl+Shift+R; terminals without key disambiguation drop the shift
        (m, KeyCode::Char('R')) if m.contains(KeyModifiers::CONTROL) => {
            app.request_reset();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => app.request_reset(),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }
        (_, KeyCode::Esc) => app.clear_status(),

        // Grid cursor
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => app.move_habit(-1),
        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => app.move_habit(1),
        (_, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => app.move_day(-1),
        (_, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => app.move_day(1),
        (_, KeyCode::Home) | (KeyModifiers::NONE, KeyCode::Char('g')) => app.cursor_day = 0,
        (_, KeyCode::End) | (_, KeyCode::Char('G')) => app.cursor_day = app.days() - 1,
        (KeyModifiers::NONE, KeyCode::Char(' ')) | (_, KeyCode::Enter) => {
            app.dispatch(Action::Toggle {
                habit: app.cursor_habit,
                day: app.cursor_day,
            });
        }

        // Cycle length
        (KeyModifiers::NONE, KeyCode::Char('c')) => {
            app.dispatch(Action::SetCycle(app.tracker.cycle.next()));
        }

        // Day-ops cursor
        (_, KeyCode::Char('[')) => app.dispatch(Action::StepCursor(-1)),
        (_, KeyCode::Char(']')) => app.dispatch(Action::StepCursor(1)),
        (KeyModifiers::NONE, KeyCode::Char('.')) => {
            app.dispatch(Action::SetCursor(app.cursor_day + 1));
        }
        (KeyModifiers::NONE, KeyCode::Char('f')) => app.dispatch(Action::FillDay),
        (KeyModifiers::NONE, KeyCode::Char('x')) => app.dispatch(Action::ClearDay),

        // Habit actions
        (_, KeyCode::Char('X')) => app.dispatch(Action::ClearHabit(app.cursor_habit)),
        (KeyModifiers::NONE, KeyCode::Char('r')) => app.begin_rename(),
        _ => {}
    }
}
