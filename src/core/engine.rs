//! The timecard state machine.
//!
//! A timecard is in one of two states, derived from its data: no open
//! session, or exactly one open session (the most recent one). `start`,
//! `checkpoint` and `end` are the only transitions. Each accepted transition
//! is persisted through the store within the same command invocation; a
//! failed save fails the whole operation, since the on-disk record is the
//! source of truth for the next invocation. Rejected transitions leave the
//! in-memory timecard unchanged.

use chrono::Utc;

use crate::errors::{AppError, AppResult};
use crate::git::RepositoryProbe;
use crate::models::{Session, Timecard};
use crate::store::TimecardStore;

/// Owns the in-memory timecard for the duration of one command.
pub struct TimecardEngine<'a> {
    probe: &'a dyn RepositoryProbe,
    store: &'a TimecardStore,
    timecard: Timecard,
}

impl<'a> TimecardEngine<'a> {
    pub fn new(probe: &'a dyn RepositoryProbe, store: &'a TimecardStore, timecard: Timecard) -> Self {
        Self {
            probe,
            store,
            timecard,
        }
    }

    pub fn timecard(&self) -> &Timecard {
        &self.timecard
    }

    pub fn into_timecard(self) -> Timecard {
        self.timecard
    }

    /// Open a new session against the current HEAD commit. Re-starting an
    /// open session is an error, not a no-op.
    ///
    /// Returns the commit the session was started at.
    pub fn start(&mut self) -> AppResult<String> {
        if let Some(open) = self.timecard.open_session() {
            return Err(AppError::SessionAlreadyOpen(open.start_time.to_rfc3339()));
        }
        let commit = self.probe.current_commit()?;
        self.timecard
            .push_session(Session::open_at(commit.clone(), Utc::now()));
        self.store.save(&self.timecard)?;
        Ok(commit)
    }

    /// Record a labeled checkpoint inside the open session.
    pub fn checkpoint(&mut self, label: &str) -> AppResult<()> {
        let session = self
            .timecard
            .open_session_mut()
            .ok_or(AppError::NoOpenSession)?;
        session.record_checkpoint(label, Utc::now())?;
        self.store.save(&self.timecard)?;
        Ok(())
    }

    /// Close the open session against the current HEAD commit.
    ///
    /// Returns the commit the session was ended at.
    pub fn end(&mut self) -> AppResult<String> {
        if self.timecard.open_session().is_none() {
            return Err(AppError::NoOpenSession);
        }
        let commit = self.probe.current_commit()?;
        if let Some(session) = self.timecard.open_session_mut() {
            session.close(commit.clone(), Utc::now())?;
        }
        self.store.save(&self.timecard)?;
        Ok(commit)
    }
}
