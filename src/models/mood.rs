use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::LogRecord;

/// One mood check-in. `mood` is a 1 (low) to 5 (high) rating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub date: NaiveDate,
    pub mood: u8,
    pub note: Option<String>,
}

impl LogRecord for MoodEntry {
    fn id(&self) -> &str {
        &self.id
    }
}
