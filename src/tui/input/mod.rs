mod common;
mod confirm;
mod edit;
mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

use common::normalize_key;
use confirm::handle_confirm;
use edit::handle_rename;
use navigate::handle_navigate;

pub use mouse::handle_mouse;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Rename => handle_rename(app, key),
        Mode::Confirm => handle_confirm(app, key),
    }
}
