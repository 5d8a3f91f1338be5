use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A labeled point in time recorded inside an open session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Checkpoint {
    /// Free-form tag (a note or sub-task identifier).
    pub label: String,
    pub time: DateTime<Utc>,
}

impl Checkpoint {
    pub fn new(label: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            time,
        }
    }
}
