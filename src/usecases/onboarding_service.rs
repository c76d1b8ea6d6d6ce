//! Onboarding service. Backs the first-launch wizard.

use crate::domain::{DomainError, SEOUL_DISTRICTS, UserSettings};
use crate::ports::{BriefingGateway, SettingsStore};
use std::sync::Arc;
use tracing::{info, warn};

/// Service behind the three-step onboarding wizard (district, categories,
/// notification schedule).
pub struct OnboardingService {
    gateway: Arc<dyn BriefingGateway>,
    store: Arc<dyn SettingsStore>,
}

impl OnboardingService {
    pub fn new(gateway: Arc<dyn BriefingGateway>, store: Arc<dyn SettingsStore>) -> Self {
        Self { gateway, store }
    }

    /// Settings from a previous completion, `None` on first launch.
    pub async fn saved_settings(&self) -> Result<Option<UserSettings>, DomainError> {
        self.store.load().await
    }

    /// District choices for step one. A backend-provided list wins when one
    /// is configured and non-empty; otherwise the built-in Seoul set is used,
    /// so district selection keeps working offline.
    pub async fn district_options(&self) -> Vec<String> {
        match self.gateway.get_districts().await {
            Ok(districts) if !districts.is_empty() => districts,
            Ok(_) => builtin_districts(),
            Err(e) => {
                warn!(error = %e, "district list unavailable, using built-in Seoul set");
                builtin_districts()
            }
        }
    }

    /// Validate and persist the wizard result.
    pub async fn complete(&self, settings: &UserSettings) -> Result<(), DomainError> {
        settings.validate()?;
        self.store.save(settings).await?;
        info!(district = %settings.district, "onboarding complete");
        Ok(())
    }
}

fn builtin_districts() -> Vec<String> {
    SEOUL_DISTRICTS.iter().map(|d| d.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BriefingResponse, RestaurantsResponse, SentimentSummaryResponse, WeatherResponse,
    };
    use std::sync::Mutex;

    struct DistrictGateway {
        districts: Option<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl BriefingGateway for DistrictGateway {
        async fn get_briefing(&self, _district: &str) -> Result<BriefingResponse, DomainError> {
            Err(DomainError::Gateway("not wired in this test".to_string()))
        }

        async fn get_weather(&self, _district: &str) -> Result<WeatherResponse, DomainError> {
            Err(DomainError::Gateway("not wired in this test".to_string()))
        }

        async fn get_sentiment(
            &self,
            _district: &str,
            _days: u32,
        ) -> Result<SentimentSummaryResponse, DomainError> {
            Err(DomainError::Gateway("not wired in this test".to_string()))
        }

        async fn get_restaurants(
            &self,
            _district: &str,
        ) -> Result<RestaurantsResponse, DomainError> {
            Err(DomainError::Gateway("not wired in this test".to_string()))
        }

        async fn get_districts(&self) -> Result<Vec<String>, DomainError> {
            self.districts
                .clone()
                .ok_or_else(|| DomainError::Gateway("list endpoint down".to_string()))
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        inner: Mutex<Option<UserSettings>>,
    }

    #[async_trait::async_trait]
    impl SettingsStore for MemoryStore {
        async fn load(&self) -> Result<Option<UserSettings>, DomainError> {
            Ok(self.inner.lock().unwrap().clone())
        }

        async fn save(&self, settings: &UserSettings) -> Result<(), DomainError> {
            *self.inner.lock().unwrap() = Some(settings.clone());
            Ok(())
        }
    }

    fn service(districts: Option<Vec<String>>) -> (OnboardingService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let gateway = Arc::new(DistrictGateway { districts });
        (OnboardingService::new(gateway, store.clone()), store)
    }

    #[tokio::test]
    async fn test_district_options_prefer_backend_list() {
        let (service, _) = service(Some(vec![
            "수원시 장안구".to_string(),
            "성남시 분당구".to_string(),
        ]));

        let options = service.district_options().await;

        assert_eq!(options.len(), 2);
        assert_eq!(options[0], "수원시 장안구");
    }

    #[tokio::test]
    async fn test_district_options_fall_back_to_builtin() {
        let (down, _) = service(None);
        let options = down.district_options().await;
        assert_eq!(options.len(), 25);
        assert!(options.iter().any(|d| d == "강남구"));

        // An empty backend list is as useless as a dead one.
        let (empty, _) = service(Some(Vec::new()));
        assert_eq!(empty.district_options().await.len(), 25);
    }

    #[tokio::test]
    async fn test_complete_persists_settings() {
        let (service, store) = service(None);
        let mut settings = UserSettings::default();
        settings.district = "은평구".to_string();
        settings.notification_time = "09:00".to_string();

        service.complete(&settings).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(settings));
        assert!(service.saved_settings().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_complete_rejects_blank_district() {
        let (service, store) = service(None);
        let mut settings = UserSettings::default();
        settings.district = String::new();

        let err = service.complete(&settings).await.unwrap_err();

        assert!(matches!(err, DomainError::Input(_)));
        assert_eq!(store.load().await.unwrap(), None);
    }
}
