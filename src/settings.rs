use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::models::Gender;

/// Profile fields used to prefill calculator forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub height_cm: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserSettings {
    profile: ProfileSettings,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn profile(&self) -> ProfileSettings {
        self.data.read().unwrap().profile.clone()
    }

    pub fn update_profile(&self, profile: ProfileSettings) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            guard.profile = profile;
            self.persist(&guard)?;
        }
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)?;
        let data: UserSettings = serde_json::from_str(&contents)?;
        let mut guard = self.data.write().unwrap();
        *guard = data;
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn profile_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(store.profile(), ProfileSettings::default());

        let profile = ProfileSettings {
            gender: Some(Gender::Female),
            age: Some(28),
            height_cm: Some(165.0),
        };
        store.update_profile(profile.clone()).unwrap();

        let reopened = SettingsStore::new(path).unwrap();
        assert_eq!(reopened.profile(), profile);
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{broken").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.profile(), ProfileSettings::default());
    }

    #[test]
    fn reload_picks_up_external_edits() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        store.update_profile(ProfileSettings::default()).unwrap();

        fs::write(
            &path,
            r#"{"profile":{"gender":"male","age":40,"heightCm":178.0}}"#,
        )
        .unwrap();
        store.reload().unwrap();
        assert_eq!(store.profile().age, Some(40));
    }
}
