//! Settings service. Load/save cycle behind the settings editor.

use crate::domain::{DomainError, UserSettings};
use crate::ports::SettingsStore;
use std::sync::Arc;
use tracing::info;

pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Settings for the editor to start from. Defaults stand in when nothing
    /// was saved yet.
    pub async fn current(&self) -> Result<UserSettings, DomainError> {
        Ok(self.store.load().await?.unwrap_or_default())
    }

    /// Validate and persist an edited snapshot.
    pub async fn update(&self, settings: &UserSettings) -> Result<(), DomainError> {
        settings.validate()?;
        self.store.save(settings).await?;
        info!(
            district = %settings.district,
            time = %settings.notification_time,
            "settings saved"
        );
        Ok(())
    }
}
