use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

/// Self-documenting header written at the top of a new recovery log.
const FILE_HEADER: &str = "\
<!-- habits recovery log: append-only record of failed saves
     The tracker keeps running when a save fails; the data it could not
     write is captured here.
     Safe to delete if empty or stale. -->

---
";

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// Category of a recovery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryCategory {
    /// A data file could not be replaced
    Write,
    /// A data file existed but could not be read
    Read,
    /// The export report could not be written
    Export,
}

impl fmt::Display for RecoveryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryCategory::Write => write!(f, "write"),
            RecoveryCategory::Read => write!(f, "read"),
            RecoveryCategory::Export => write!(f, "export"),
        }
    }
}

/// A single entry in the recovery log.
#[derive(Debug, Clone)]
pub struct RecoveryEntry {
    pub timestamp: DateTime<Utc>,
    pub category: RecoveryCategory,
    pub description: String,
    pub fields: Vec<(String, String)>,
    pub body: String,
}

impl RecoveryEntry {
    pub fn now(category: RecoveryCategory, description: impl Into<String>) -> Self {
        RecoveryEntry {
            timestamp: Utc::now(),
            category,
            description: description.into(),
            fields: Vec::new(),
            body: String::new(),
        }
    }

    pub fn field(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.fields.push((key.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Return the path to the recovery log file.
pub fn recovery_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(".recovery.log")
}

// ---------------------------------------------------------------------------
// Atomic file write
// ---------------------------------------------------------------------------

/// Write `content` to `path` atomically: temp sibling file, flush, fsync,
/// rename over the target.
///
/// On any error the temp file is removed (NamedTempFile drop) and the
/// existing target is left as it was.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry formatting
// ---------------------------------------------------------------------------

impl RecoveryEntry {
    /// Format this entry as a markdown block for the recovery log.
    fn to_markdown(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "## {} — {}: {}\n",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.category,
            self.description,
        ));
        out.push('\n');

        for (key, value) in &self.fields {
            out.push_str(&format!("{}: {}\n", key, value));
        }

        if !self.body.is_empty() {
            out.push('\n');
            out.push_str("```text\n");
            out.push_str(&self.body);
            if !self.body.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
        }

        out.push('\n');
        out.push_str("---\n");
        out
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Append a recovery entry to the log. Errors are swallowed and printed to stderr.
pub fn log_recovery(data_dir: &Path, entry: RecoveryEntry) {
    if let Err(e) = log_recovery_inner(data_dir, entry) {
        eprintln!("warning: could not write to recovery log: {}", e);
    }
}

fn log_recovery_inner(data_dir: &Path, entry: RecoveryEntry) -> io::Result<()> {
    let path = recovery_log_path(data_dir);
    let needs_header = std::fs::metadata(&path).map_or(true, |m| m.len() == 0);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if needs_header {
        file.write_all(FILE_HEADER.as_bytes())?;
    }
    file.write_all(entry.to_markdown().as_bytes())?;
    Ok(())
}

/// Entries in the recovery log, oldest first, without the `---` separators.
pub fn read_entries(data_dir: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(recovery_log_path(data_dir)) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let mut current: Option<String> = None;
    let mut in_fence = false;
    for line in content.lines() {
        if line.starts_with("```") {
            in_fence = !in_fence;
        } else if in_fence {
            // Saved file contents are kept verbatim
        } else if line.starts_with("## ") {
            if let Some(done) = current.take() {
                entries.push(done.trim_end().to_string());
            }
            current = Some(String::new());
        } else if line == "---" {
            if let Some(done) = current.take() {
                entries.push(done.trim_end().to_string());
            }
            continue;
        }
        if let Some(entry) = current.as_mut() {
            entry.push_str(line);
            entry.push('\n');
        }
    }
    if let Some(done) = current {
        entries.push(done.trim_end().to_string());
    }
    entries
}

/// Count entries in the recovery log (0 when there is no log).
pub fn recovery_entry_count(data_dir: &Path) -> usize {
    read_entries(data_dir).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("states.dat");

        atomic_write(&path, b"\x01\x00\x01").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 0, 1]);

        atomic_write(&path, b"\x00").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![0]);

        // No temp files left behind
        let count = std::fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_atomic_write_failure_keeps_old_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("habits.dat");
        std::fs::write(&target, b"old").unwrap();

        // Target's parent does not exist: temp file creation fails
        let missing = tmp.path().join("nope").join("habits.dat");
        assert!(atomic_write(&missing, b"new").is_err());
        assert_eq!(std::fs::read(&target).unwrap(), b"old");

        // Renaming onto a directory fails after the temp file was written
        let dir_target = tmp.path().join("settings.dat");
        std::fs::create_dir(&dir_target).unwrap();
        std::fs::write(dir_target.join("keep"), b"x").unwrap();
        assert!(atomic_write(&dir_target, b"new").is_err());
        let leftovers: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(leftovers.len(), 2, "unexpected files: {:?}", leftovers);
    }

    #[test]
    fn test_entry_markdown() {
        let entry = RecoveryEntry::now(RecoveryCategory::Write, "states.dat write failed")
            .field("Target", "states.dat")
            .body("bytes: 800");
        let md = entry.to_markdown();
        assert!(md.starts_with("## "));
        assert!(md.contains("— write: states.dat write failed\n"));
        assert!(md.contains("Target: states.dat\n"));
        assert!(md.contains("```text\nbytes: 800\n```\n"));
        assert!(md.ends_with("---\n"));
    }

    #[test]
    fn test_log_recovery_appends() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(recovery_entry_count(tmp.path()), 0);

        log_recovery(tmp.path(), RecoveryEntry::now(RecoveryCategory::Write, "one"));
        log_recovery(tmp.path(), RecoveryEntry::now(RecoveryCategory::Export, "two"));

        let content = std::fs::read_to_string(recovery_log_path(tmp.path())).unwrap();
        assert_eq!(content.matches("habits recovery log").count(), 1);
        assert_eq!(recovery_entry_count(tmp.path()), 2);
    }

    #[test]
    fn test_read_entries_splits_blocks() {
        let tmp = TempDir::new().unwrap();
        log_recovery(
            tmp.path(),
            RecoveryEntry::now(RecoveryCategory::Write, "first")
                .field("Target", "states.dat")
                .body("## not a heading\n"),
        );
        log_recovery(tmp.path(), RecoveryEntry::now(RecoveryCategory::Read, "second"));

        let entries = read_entries(tmp.path());
        assert_eq!(entries.len(), 2);
        assert!(entries[0].contains("write: first"));
        assert!(entries[0].contains("Target: states.dat"));
        assert!(entries[1].contains("read: second"));
        assert!(!entries[1].contains("---"));
    }
}
