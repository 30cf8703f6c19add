//! Body-fat history: runs the Navy calculator and stores the measurement
//! with its derived percentage and category.

use anyhow::Result;
use chrono::{NaiveDate, Utc};

use crate::calculators::body_fat::{self, BodyFatInput};
use crate::models::{new_record_id, BodyFatMeasurement};
use crate::store::{CollectionStore, Slots};

use super::TrackError;

pub const SLOT_KEY: &str = "bodyfat_measurements";

pub struct BodyFatTracker<S: Slots> {
    store: CollectionStore<S, BodyFatMeasurement>,
}

impl<S: Slots> BodyFatTracker<S> {
    pub fn new(slots: S) -> Self {
        Self {
            store: CollectionStore::new(slots, SLOT_KEY),
        }
    }

    /// Computes the estimate and appends it to the history. A computation
    /// failure persists nothing.
    pub fn record(
        &self,
        input: &BodyFatInput,
        date: NaiveDate,
    ) -> Result<BodyFatMeasurement, TrackError> {
        let outcome = body_fat::compute(input)?;
        let measurement = BodyFatMeasurement {
            id: new_record_id(),
            created_at: Utc::now(),
            date,
            gender: input.gender,
            age: input.age,
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            neck_cm: input.neck_cm,
            waist_cm: input.waist_cm,
            hip_cm: input.hip_cm,
            body_fat_pct: outcome.value,
            category: outcome.category.to_string(),
        };
        self.store.append(measurement.clone())?;
        Ok(measurement)
    }

    pub fn measurements(&self) -> Vec<BodyFatMeasurement> {
        self.store.load()
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.store.remove(id)
    }
}
