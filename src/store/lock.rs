//! Cross-process lock scoped to one record file.
//!
//! Two invocations of the tool against the same record file must not
//! interleave their load-mutate-save sequences. The lock is a sibling
//! `.lock` file created with `create_new` (O_EXCL), holding the owner PID
//! for diagnosis, and removed on drop. Acquisition retries on an interval
//! up to a bounded wait, then fails with `RecordLocked`.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use crate::errors::{AppError, AppResult};

/// Default bounded wait for lock acquisition.
pub const LOCK_WAIT: Duration = Duration::from_secs(2);

const RETRY_INTERVAL: Duration = Duration::from_millis(25);

/// RAII guard over the lock file. Held from before load/init until after
/// save; dropping it (on success or on any error path) releases the lock.
#[derive(Debug)]
pub struct RecordLock {
    path: PathBuf,
}

impl RecordLock {
    /// Acquire the lock for `record_path`, waiting at most `wait`.
    pub fn acquire(record_path: &Path, wait: Duration) -> AppResult<Self> {
        let path = lock_path(record_path);
        let deadline = Instant::now() + wait;
        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    writeln!(file, "{}", std::process::id())?;
                    return Ok(Self { path });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    if Instant::now() >= deadline {
                        return Err(AppError::RecordLocked(path.display().to_string()));
                    }
                    thread::sleep(RETRY_INTERVAL);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RecordLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn lock_path(record_path: &Path) -> PathBuf {
    let mut name = record_path
        .file_name()
        .map(std::ffi::OsString::from)
        .unwrap_or_else(|| std::ffi::OsString::from("timecard"));
    name.push(".lock");
    record_path.with_file_name(name)
}
