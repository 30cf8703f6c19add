pub mod calculators;
pub mod catalog;
pub mod db;
pub mod form;
pub mod forms;
pub mod models;
pub mod settings;
pub mod store;
pub mod trackers;
pub mod validate;
pub mod view;

use std::path::PathBuf;

use anyhow::Result;

pub use db::Database;
pub use settings::SettingsStore;

use trackers::{BodyFatTracker, MoodTracker, ReadingTracker, SleepTracker};

pub struct AppState {
    pub db: Database,
    pub settings: SettingsStore,
}

impl AppState {
    pub fn init(data_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)?;

        let db = Database::new(data_dir.join("svastha.sqlite3"))?;
        let settings = SettingsStore::new(data_dir.join("settings.json"))?;

        Ok(Self { db, settings })
    }

    pub fn sleep(&self) -> SleepTracker<Database> {
        SleepTracker::new(self.db.clone())
    }

    pub fn mood(&self) -> MoodTracker<Database> {
        MoodTracker::new(self.db.clone())
    }

    pub fn body_fat(&self) -> BodyFatTracker<Database> {
        BodyFatTracker::new(self.db.clone())
    }

    pub fn reading(&self) -> ReadingTracker<Database> {
        ReadingTracker::new(self.db.clone())
    }
}
