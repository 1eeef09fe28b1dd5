use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::actions::Action;
use crate::tui::app::{App, Mode};

/// Full reset confirmation: y resets, n or Esc cancels
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) | (KeyModifiers::SHIFT, KeyCode::Char('Y')) => {
            app.mode = Mode::Navigate;
            app.dispatch(Action::Reset);
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            app.set_status("Reset cancelled");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_keys::*;
    use crate::io::store_io::load_tracker;
    use crate::model::HabitIndex;
    use crate::tui::app::{App, Mode};
    use crossterm::event::KeyCode;
    use tempfile::TempDir;

    fn app_with_ticks(dir: &TempDir) -> App {
        let (mut tracker, _) = load_tracker(dir.path());
        tracker.grid.set(HabitIndex::FIRST, 0, true);
        App::new(tracker)
    }

    #[test]
    fn ctrl_shift_r_then_y_resets() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with_ticks(&tmp);
        handle_key(&mut app, ctrl_shift('R'));
        assert_eq!(app.mode, Mode::Confirm);
        handle_key(&mut app, key('y'));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(!app.tracker.grid.get(HabitIndex::FIRST, 0));
    }

    #[test]
    fn legacy_ctrl_r_without_shift_asks_to_reset() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with_ticks(&tmp);
        handle_key(&mut app, ctrl('r'));
        assert_eq!(app.mode, Mode::Confirm);
        handle_key(&mut app, key('y'));
        assert!(!app.tracker.grid.get(HabitIndex::FIRST, 0));
    }

    #[test]
    fn escape_cancels_reset() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with_ticks(&tmp);
        handle_key(&mut app, ctrl_shift('r'));
        handle_key(&mut app, code(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.tracker.grid.get(HabitIndex::FIRST, 0));
    }

    #[test]
    fn other_keys_wait() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with_ticks(&tmp);
        app.mode = Mode::Confirm;
        handle_key(&mut app, key(' '));
        assert_eq!(app.mode, Mode::Confirm);
        assert!(app.tracker.grid.get(HabitIndex::FIRST, 0));
    }
}
