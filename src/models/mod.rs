pub mod book;
pub mod measurement;
pub mod mood;
pub mod sleep;

pub use book::{Book, ReadingLog};
pub use measurement::{BodyFatMeasurement, Gender};
pub use mood::MoodEntry;
pub use sleep::{SleepQuality, SleepSession};

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// One persisted, timestamped user entry. Identity is assigned once at
/// construction and never reused; derived fields are computed at creation
/// time and stored, not recomputed on read.
pub trait LogRecord: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> &str;
}

pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
