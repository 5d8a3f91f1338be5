//! Unified application error type.
//! All modules (store, core, git, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode timecard record: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Repository
    // ---------------------------
    #[error("Not a git repository: {0}. Did you \"git init\"?")]
    NotARepository(String),

    #[error("Repository has no commits yet")]
    NoCommits,

    #[error("git {0}")]
    Git(String),

    // ---------------------------
    // Record file
    // ---------------------------
    #[error("No timecard found at {0}. Run `timecard init` first")]
    NotFound(String),

    #[error("Timecard already exists at {0}. Use --force to re-initialize")]
    AlreadyExists(String),

    #[error("Corrupt timecard record: {0}")]
    CorruptRecord(String),

    #[error("Timecard record is locked by another process ({0})")]
    RecordLocked(String),

    // ---------------------------
    // Session state machine
    // ---------------------------
    #[error("A session is already open (started {0}). Run `timecard end` first")]
    SessionAlreadyOpen(String),

    #[error("No open session. Run `timecard start` first")]
    NoOpenSession,

    #[error("Clock regression detected: {0}")]
    ClockRegression(String),
}

pub type AppResult<T> = Result<T, AppError>;
