//! One tracker per feature, each owning its slot key(s) exclusively.

pub mod body_fat;
pub mod mood;
pub mod reading;
pub mod sleep;

pub use body_fat::BodyFatTracker;
pub use mood::MoodTracker;
pub use reading::ReadingTracker;
pub use sleep::SleepTracker;

use thiserror::Error;

use crate::calculators::CalcError;

/// What can go wrong past validation: the calculation itself, or the
/// write to storage. Read-side failures never surface here; loads
/// degrade to an empty collection.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error(transparent)]
    Computation(#[from] CalcError),
    #[error("{0:#}")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for TrackError {
    fn from(err: anyhow::Error) -> Self {
        TrackError::Storage(err)
    }
}
