use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::MAX_NAME_BYTES;
use crate::tui::app::App;
use crate::util::unicode;

/// Single-line name editing in the status row
pub(super) fn handle_rename(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.cancel_rename(),
        (_, KeyCode::Enter) => app.commit_rename(),
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
            app.edit_cursor = 0;
        }
        (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.edit_buffer.drain(..app.edit_cursor);
            app.edit_cursor = 0;
        }
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.drain(prev..app.edit_cursor);
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.drain(app.edit_cursor..next);
            }
        }
        (m, KeyCode::Char(c))
            if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
        {
            // The name buffer on disk holds at most 63 bytes
            if app.edit_buffer.len() + c.len_utf8() > MAX_NAME_BYTES {
                return;
            }
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}
