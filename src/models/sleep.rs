use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::LogRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SleepQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            SleepQuality::Poor => "poor",
            SleepQuality::Fair => "fair",
            SleepQuality::Good => "good",
            SleepQuality::Excellent => "excellent",
        }
    }

    /// Numeric quality component used by the sleep score.
    pub fn points(&self) -> f64 {
        match self {
            SleepQuality::Poor => 25.0,
            SleepQuality::Fair => 50.0,
            SleepQuality::Good => 75.0,
            SleepQuality::Excellent => 100.0,
        }
    }
}

impl std::str::FromStr for SleepQuality {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "poor" => Ok(SleepQuality::Poor),
            "fair" => Ok(SleepQuality::Fair),
            "good" => Ok(SleepQuality::Good),
            "excellent" => Ok(SleepQuality::Excellent),
            other => Err(format!(
                "unknown sleep quality '{other}' (expected poor, fair, good or excellent)"
            )),
        }
    }
}

/// One recorded night of sleep. `duration_minutes` and `score` are derived
/// once when the entry is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SleepSession {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub bed_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub wake_time: NaiveTime,
    pub quality: SleepQuality,
    pub awakenings: u32,
    pub duration_minutes: i64,
    pub score: f64,
}

impl LogRecord for SleepSession {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn parse_hhmm(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, HHMM_FORMAT)
}

const HHMM_FORMAT: &str = "%H:%M";

/// Times persist as 24-hour `HH:MM` strings.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(super::HHMM_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, super::HHMM_FORMAT).map_err(serde::de::Error::custom)
    }
}
