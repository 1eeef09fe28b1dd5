use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI state (written to .state.json). Only the grid cursor and
/// scroll survive a restart; the day-ops cursor and chart hover do not.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Highlighted habit row (0-based)
    #[serde(default)]
    pub habit: usize,
    /// Highlighted day column (0-based)
    #[serde(default)]
    pub day: usize,
    /// First visible day column
    #[serde(default)]
    pub scroll_offset: usize,
}

/// Read .state.json from the data directory
pub fn read_ui_state(data_dir: &Path) -> Option<UiState> {
    let path = data_dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the data directory
pub fn write_ui_state(data_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = data_dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let state = UiState {
            habit: 4,
            day: 37,
            scroll_offset: 20,
        };

        write_ui_state(dir.path(), &state).unwrap();
        let loaded = read_ui_state(dir.path()).unwrap();

        assert_eq!(loaded.habit, 4);
        assert_eq!(loaded.day, 37);
        assert_eq!(loaded.scroll_offset, 20);
    }

    #[test]
    fn read_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_ui_state(dir.path()).is_none());
    }

    #[test]
    fn read_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".state.json"), "not json {{{").unwrap();
        assert!(read_ui_state(dir.path()).is_none());
    }

    #[test]
    fn serde_defaults_on_empty_object() {
        let state: UiState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.habit, 0);
        assert_eq!(state.day, 0);
        assert_eq!(state.scroll_offset, 0);
    }
}
