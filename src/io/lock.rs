use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Name of the lock file inside a data directory. It is created on first
/// write and left in place afterwards.
pub const LOCK_FILE: &str = ".habits.lock";

/// How long a record save waits for another writer
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

const RETRY_INTERVAL: Duration = Duration::from_millis(10);

/// Exclusive write access to one data directory.
///
/// The TUI and any number of CLI invocations may point at the same record
/// files. Each save holds a `WriteLock` for the duration of its atomic
/// replace. The `flock` lives on the open descriptor, so dropping the guard
/// closes the file and releases it.
pub struct WriteLock {
    _file: File,
}

/// Error type for lock operations
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not open lock file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("timed out waiting for {path}: another habits process is saving")]
    Timeout { path: PathBuf },
}

pub fn lock_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOCK_FILE)
}

impl WriteLock {
    /// Take the data directory's write lock, polling until `timeout` expires.
    ///
    /// The lock file is never unlinked: every writer must contend on the
    /// same inode, or two of them could hold "the" lock at once.
    pub fn acquire(data_dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        let path = lock_path(data_dir);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::Open {
                path: path.clone(),
                source,
            })?;

        let deadline = Instant::now() + timeout;
        while !try_lock(&file) {
            if Instant::now() >= deadline {
                return Err(LockError::Timeout { path });
            }
            std::thread::sleep(RETRY_INTERVAL);
        }
        Ok(WriteLock { _file: file })
    }

    pub fn acquire_default(data_dir: &Path) -> Result<Self, LockError> {
        Self::acquire(data_dir, DEFAULT_TIMEOUT)
    }
}

/// Non-blocking exclusive `flock`; false while another descriptor holds it
#[cfg(unix)]
fn try_lock(file: &File) -> bool {
    use std::os::unix::io::AsRawFd;
    unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) == 0 }
}

#[cfg(not(unix))]
fn try_lock(_file: &File) -> bool {
    true
}
