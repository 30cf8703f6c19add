use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::LogRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{other}' (expected male or female)")),
        }
    }
}

/// One body-fat measurement. The circumferences are the payload; the
/// percentage and category are derived at creation time by the calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyFatMeasurement {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub date: NaiveDate,
    pub gender: Gender,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub neck_cm: f64,
    pub waist_cm: f64,
    pub hip_cm: Option<f64>,
    pub body_fat_pct: f64,
    pub category: String,
}

impl LogRecord for BodyFatMeasurement {
    fn id(&self) -> &str {
        &self.id
    }
}
