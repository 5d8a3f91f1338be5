use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::checkpoint::Checkpoint;
use crate::errors::{AppError, AppResult};

/// One tracked interval: started against a commit, optionally annotated with
/// checkpoints, and closed against the commit active at `end`.
///
/// Timestamps within a session are non-decreasing:
/// `start_time <= checkpoint[0].time <= ... <= end_time`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Commit hash active when the session was started.
    pub start_commit: String,
    pub start_time: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checkpoints: Vec<Checkpoint>,

    /// Set only when the session is closed; unset while open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_commit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

impl Session {
    /// Open a new session at the given commit and instant.
    pub fn open_at(start_commit: impl Into<String>, start_time: DateTime<Utc>) -> Self {
        Self {
            start_commit: start_commit.into(),
            start_time,
            checkpoints: Vec::new(),
            end_commit: None,
            end_time: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Most recent timestamp recorded in this session (start or last checkpoint).
    pub fn last_recorded(&self) -> DateTime<Utc> {
        self.checkpoints
            .last()
            .map(|cp| cp.time)
            .unwrap_or(self.start_time)
    }

    /// Append a checkpoint. Rejects timestamps earlier than the last recorded
    /// one; on error the session is left unchanged.
    pub fn record_checkpoint(
        &mut self,
        label: impl Into<String>,
        time: DateTime<Utc>,
    ) -> AppResult<()> {
        self.check_monotonic(time)?;
        self.checkpoints.push(Checkpoint::new(label, time));
        Ok(())
    }

    /// Close the session against a commit. Same monotonicity rule as
    /// `record_checkpoint`; on error the session is left unchanged.
    pub fn close(&mut self, end_commit: impl Into<String>, end_time: DateTime<Utc>) -> AppResult<()> {
        self.check_monotonic(end_time)?;
        self.end_commit = Some(end_commit.into());
        self.end_time = Some(end_time);
        Ok(())
    }

    fn check_monotonic(&self, time: DateTime<Utc>) -> AppResult<()> {
        let last = self.last_recorded();
        if time < last {
            return Err(AppError::ClockRegression(format!(
                "{} is earlier than the last recorded timestamp {}",
                time.to_rfc3339(),
                last.to_rfc3339()
            )));
        }
        Ok(())
    }

    /// Structural validation used when materializing a record from disk.
    pub fn validate(&self) -> Result<(), String> {
        match (&self.end_commit, &self.end_time) {
            (Some(_), Some(_)) | (None, None) => {}
            _ => return Err("end_commit and end_time must be set together".to_string()),
        }
        let mut last = self.start_time;
        for cp in &self.checkpoints {
            if cp.time < last {
                return Err(format!(
                    "checkpoint '{}' at {} precedes the previous timestamp {}",
                    cp.label,
                    cp.time.to_rfc3339(),
                    last.to_rfc3339()
                ));
            }
            last = cp.time;
        }
        if let Some(end) = self.end_time
            && end < last
        {
            return Err(format!(
                "end time {} precedes the previous timestamp {}",
                end.to_rfc3339(),
                last.to_rfc3339()
            ));
        }
        Ok(())
    }
}
