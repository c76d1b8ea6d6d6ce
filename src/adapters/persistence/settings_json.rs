//! Implements SettingsStore using a JSON file.
//!
//! One document per user, written with the write-replace pattern so a crash
//! mid-save never leaves a torn file behind.

use crate::domain::{DomainError, UserSettings};
use crate::ports::SettingsStore;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// JSON file-based settings storage.
pub struct SettingsJson {
    path: std::path::PathBuf,
}

impl SettingsJson {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl SettingsStore for SettingsJson {
    /// Missing file means the user never onboarded; a file that exists but
    /// does not parse is an error, not a silent reset.
    async fn load(&self) -> Result<Option<UserSettings>, DomainError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::Settings(format!(
                    "read settings file: {}",
                    e
                )));
            }
        };
        let settings = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Settings(format!("corrupt settings file: {}", e)))?;
        Ok(Some(settings))
    }

    /// Atomic save using write-replace:
    /// 1. Write to temp file
    /// 2. sync_all() to ensure flush to disk
    /// 3. Atomic rename to target path
    async fn save(&self, settings: &UserSettings) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| DomainError::Settings(format!("create settings dir: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| DomainError::Settings(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Settings(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Settings(format!("write temp file: {}", e)))?;
        // Ensure data is flushed to disk before rename
        f.sync_all()
            .await
            .map_err(|e| DomainError::Settings(format!("sync temp file: {}", e)))?;
        drop(f); // Close file handle before rename

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Settings(format!("atomic rename failed: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryToggles;

    #[tokio::test]
    async fn test_load_returns_none_before_first_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsJson::new(dir.path().join("settings.json"));

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsJson::new(dir.path().join("settings.json"));

        let settings = UserSettings {
            district: "마포구".to_string(),
            categories: CategoryToggles {
                weather: true,
                community: true,
                new_restaurants: false,
                hot_restaurants: true,
            },
            notification_time: "08:00".to_string(),
            weekend_notifications: false,
        };
        store.save(&settings).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(settings));
    }

    #[tokio::test]
    async fn test_save_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsJson::new(dir.path().join("nested/data/settings.json"));

        store.save(&UserSettings::default()).await.unwrap();

        assert!(store.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error_not_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let store = SettingsJson::new(&path);
        let err = store.load().await.unwrap_err();

        assert!(matches!(err, DomainError::Settings(_)));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsJson::new(dir.path().join("settings.json"));

        store.save(&UserSettings::default()).await.unwrap();
        let mut updated = UserSettings::default();
        updated.district = "종로구".to_string();
        store.save(&updated).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(updated));
    }
}
