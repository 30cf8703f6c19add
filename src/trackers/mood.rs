//! Mood check-in tracker: the simplest persisted-log feature.

use anyhow::Result;
use chrono::{NaiveDate, Utc};

use crate::models::{new_record_id, MoodEntry};
use crate::store::{CollectionStore, Slots};
use crate::validate::{ValidationErrors, Validator};

pub const SLOT_KEY: &str = "mood_entries";

#[derive(Debug, Clone)]
pub struct MoodInput {
    pub date: NaiveDate,
    pub mood: u8,
    pub note: Option<String>,
}

impl MoodInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.integer_range("mood", "Mood", i64::from(self.mood), 1, 5);
        v.optional_text("note", "Note", self.note.as_deref(), 500);
        v.finish()
    }
}

pub struct MoodTracker<S: Slots> {
    store: CollectionStore<S, MoodEntry>,
}

impl<S: Slots> MoodTracker<S> {
    pub fn new(slots: S) -> Self {
        Self {
            store: CollectionStore::new(slots, SLOT_KEY),
        }
    }

    pub fn log(&self, input: &MoodInput) -> Result<MoodEntry> {
        let entry = MoodEntry {
            id: new_record_id(),
            created_at: Utc::now(),
            date: input.date,
            mood: input.mood,
            note: input.note.clone(),
        };
        self.store.append(entry.clone())?;
        Ok(entry)
    }

    pub fn entries(&self) -> Vec<MoodEntry> {
        self.store.load()
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.store.remove(id)
    }
}
