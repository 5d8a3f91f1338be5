use std::path::{Path, PathBuf};

use super::session::Session;
use crate::errors::{AppError, AppResult};

/// The root persisted entity: an ordered history of sessions backed by one
/// record file. At most one session is open at any instant, and since
/// sessions are appended chronologically an open session can only be the
/// last one.
#[derive(Debug, Clone, PartialEq)]
pub struct Timecard {
    /// Location of the backing record file. Set at init/load, immutable after.
    path: PathBuf,
    sessions: Vec<Session>,
}

impl Timecard {
    /// A brand new, empty timecard.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sessions: Vec::new(),
        }
    }

    /// Rebuild a timecard from persisted sessions. Callers are expected to
    /// run `validate` afterwards (the store does).
    pub fn from_sessions(path: impl Into<PathBuf>, sessions: Vec<Session>) -> Self {
        Self {
            path: path.into(),
            sessions,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn has_open_session(&self) -> bool {
        self.open_session().is_some()
    }

    pub fn open_session(&self) -> Option<&Session> {
        self.sessions.last().filter(|s| s.is_open())
    }

    pub fn open_session_mut(&mut self) -> Option<&mut Session> {
        self.sessions.last_mut().filter(|s| s.is_open())
    }

    pub fn push_session(&mut self, session: Session) {
        self.sessions.push(session);
    }

    /// Check the whole-record invariants: per-session timestamp ordering and
    /// at most one open session, which must be the most recent.
    pub fn validate(&self) -> AppResult<()> {
        let last = self.sessions.len().saturating_sub(1);
        for (idx, session) in self.sessions.iter().enumerate() {
            session
                .validate()
                .map_err(|e| AppError::CorruptRecord(format!("session {idx}: {e}")))?;
            if session.is_open() && idx != last {
                return Err(AppError::CorruptRecord(format!(
                    "session {idx} is open but is not the most recent session"
                )));
            }
        }
        Ok(())
    }
}
