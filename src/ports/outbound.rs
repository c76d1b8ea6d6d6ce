//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{
    BriefingResponse, DomainError, RestaurantsResponse, SentimentSummaryResponse, UserSettings,
    WeatherResponse,
};

/// Briefing API gateway. Fetch briefings, weather, sentiment and restaurant
/// data for a district.
#[async_trait::async_trait]
pub trait BriefingGateway: Send + Sync {
    /// Fetch the full daily briefing for a district (sentiment snapshot plus
    /// per-category content blocks).
    async fn get_briefing(&self, district: &str) -> Result<BriefingResponse, DomainError>;

    /// Fetch current weather and the hourly forecast for a district.
    async fn get_weather(&self, district: &str) -> Result<WeatherResponse, DomainError>;

    /// Fetch the sentiment history for the trailing `days` window.
    async fn get_sentiment(
        &self,
        district: &str,
        days: u32,
    ) -> Result<SentimentSummaryResponse, DomainError>;

    /// Fetch newly licensed restaurants for a district.
    async fn get_restaurants(&self, district: &str) -> Result<RestaurantsResponse, DomainError>;

    /// Fetch the selectable district names. Falls back to the built-in Seoul
    /// list when the backend does not expose a district endpoint.
    async fn get_districts(&self) -> Result<Vec<String>, DomainError>;
}

/// Settings store port. Persist the user's briefing preferences.
#[async_trait::async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load saved settings. Returns `None` when the user has never completed
    /// onboarding.
    async fn load(&self) -> Result<Option<UserSettings>, DomainError>;

    /// Persist settings. Overwrites the previous snapshot atomically.
    async fn save(&self, settings: &UserSettings) -> Result<(), DomainError>;
}
