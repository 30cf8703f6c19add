use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::LogRecord;

/// A book being read. `current_progress` is an aggregate counter kept in
/// step with the book's reading logs: incremented when a log is created,
/// decremented (floored at zero) when one is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub author: Option<String>,
    pub total_pages: Option<u32>,
    pub current_progress: u32,
}

impl LogRecord for Book {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One reading session for a book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingLog {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub book_id: String,
    pub date: NaiveDate,
    pub pages_read: u32,
    pub note: Option<String>,
}

impl LogRecord for ReadingLog {
    fn id(&self) -> &str {
        &self.id
    }
}
