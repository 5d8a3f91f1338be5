//! Durable representation of a timecard.
//!
//! The record file is pretty-printed JSON with RFC 3339 timestamps, meant to
//! be inspectable with any text tool. Saves go through a sibling temp file
//! and a rename so an interrupted write is never observable as a valid but
//! truncated record.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{Session, Timecard};

/// Record schema version written into every file.
pub const RECORD_VERSION: u32 = 1;

/// Serialized shape of the record file.
#[derive(Serialize, Deserialize)]
struct RecordFile {
    version: u32,
    sessions: Vec<Session>,
}

/// Owns all file access for one record path.
#[derive(Debug, Clone)]
pub struct TimecardStore {
    path: PathBuf,
}

impl TimecardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True iff a record file is present. No side effects.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create and persist an empty timecard. Refuses to clobber an existing
    /// record unless `force` is set.
    pub fn init(&self, force: bool) -> AppResult<Timecard> {
        if self.exists() && !force {
            return Err(AppError::AlreadyExists(self.path.display().to_string()));
        }
        let timecard = Timecard::new(&self.path);
        self.save(&timecard)?;
        Ok(timecard)
    }

    /// Load and validate the record file into a materialized timecard.
    pub fn load(&self) -> AppResult<Timecard> {
        if !self.exists() {
            return Err(AppError::NotFound(self.path.display().to_string()));
        }
        let content = fs::read_to_string(&self.path)?;
        let record: RecordFile = serde_json::from_str(&content)
            .map_err(|e| AppError::CorruptRecord(format!("{}: {}", self.path.display(), e)))?;
        if record.version != RECORD_VERSION {
            return Err(AppError::CorruptRecord(format!(
                "unsupported record version {} (expected {})",
                record.version, RECORD_VERSION
            )));
        }
        let timecard = Timecard::from_sessions(&self.path, record.sessions);
        timecard.validate()?;
        Ok(timecard)
    }

    /// Atomically persist the timecard: write a sibling temp file, then
    /// rename it into place.
    pub fn save(&self, timecard: &Timecard) -> AppResult<()> {
        let record = RecordFile {
            version: RECORD_VERSION,
            sessions: timecard.sessions().to_vec(),
        };
        let mut buf = serde_json::to_string_pretty(&record)?;
        buf.push('\n');

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, buf)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("timecard"));
    name.push(".tmp");
    path.with_file_name(name)
}
