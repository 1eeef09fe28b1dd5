use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::io::config_io::{self, ConfigError};
use crate::io::lock::{LockError, WriteLock};
use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::model::Tracker;
use crate::parse::{
    parse_names, parse_settings, parse_states, serialize_names, serialize_settings,
    serialize_states,
};

/// The three independently persisted records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    States,
    Names,
    Settings,
}

impl Record {
    pub const ALL: [Record; 3] = [Record::States, Record::Names, Record::Settings];

    pub fn file_name(self) -> &'static str {
        match self {
            Record::States => "states.dat",
            Record::Names => "habits.dat",
            Record::Settings => "settings.dat",
        }
    }

    fn encode(self, tracker: &Tracker) -> Vec<u8> {
        match self {
            Record::States => serialize_states(&tracker.grid),
            Record::Names => serialize_names(&tracker.habits),
            Record::Settings => serialize_settings(tracker.cycle),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Error type for tracker persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Lock(#[from] LockError),
}

/// Load everything from `data_dir`.
///
/// Never fails: missing or short files fall back to defaults per record, and
/// a malformed habits.toml is reported through `warnings` while the default
/// config is used.
pub fn load_tracker(data_dir: &Path) -> (Tracker, Vec<String>) {
    let mut warnings = Vec::new();
    let mut tracker = Tracker::new(data_dir.to_path_buf());

    match config_io::read_config(data_dir) {
        Ok(config) => tracker.config = config,
        Err(e) => warnings.push(config_warning(&e)),
    }

    if let Some(bytes) = read_record(data_dir, Record::States) {
        tracker.grid = parse_states(&bytes);
    }
    if let Some(bytes) = read_record(data_dir, Record::Names) {
        tracker.habits = parse_names(&bytes);
    }
    if let Some(bytes) = read_record(data_dir, Record::Settings) {
        tracker.cycle = parse_settings(&bytes);
    }

    (tracker, warnings)
}

fn config_warning(e: &ConfigError) -> String {
    format!("{}; using default settings", e)
}

/// Read one record's bytes. `None` means "use the default": the file is
/// absent, or unreadable (which is also logged).
fn read_record(data_dir: &Path, record: Record) -> Option<Vec<u8>> {
    let path = data_dir.join(record.file_name());
    match fs::read(&path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            recovery::log_recovery(
                data_dir,
                RecoveryEntry::now(RecoveryCategory::Read, format!("{} read failed", record))
                    .field("Target", path.display())
                    .field("Error", &e),
            );
            None
        }
    }
}

/// Durably replace one record's file with the tracker's current state.
///
/// On failure the previous file is untouched and the failure is written to
/// the recovery log (including a hex dump of the unsaved bytes). The
/// in-memory tracker is never rolled back.
pub fn save_record(tracker: &Tracker, record: Record) -> Result<(), StoreError> {
    let bytes = record.encode(tracker);
    let path = tracker.data_dir.join(record.file_name());

    let result = WriteLock::acquire_default(&tracker.data_dir)
        .map_err(StoreError::from)
        .and_then(|_lock| {
            recovery::atomic_write(&path, &bytes).map_err(|e| StoreError::WriteError {
                path: path.clone(),
                source: e,
            })
        });

    if let Err(e) = &result {
        recovery::log_recovery(
            &tracker.data_dir,
            RecoveryEntry::now(RecoveryCategory::Write, format!("{} write failed", record))
                .field("Target", path.display())
                .field("Error", e)
                .body(hex_dump(&bytes)),
        );
    }
    result
}

/// Save all three records in turn, stopping at the first failure.
///
/// Defaults loaded from an empty directory become full-size files.
pub fn save_all(tracker: &Tracker) -> Result<(), StoreError> {
    for record in Record::ALL {
        save_record(tracker, record)?;
    }
    Ok(())
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(40)
        .map(|row| {
            row.iter()
                .map(|b| format!("{:02x}", b))
                .collect::<Vec<_>>()
                .join("")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
