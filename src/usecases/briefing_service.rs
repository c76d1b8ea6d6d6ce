//! Briefing service. Assembles the dashboard for the user's district.
//!
//! Coordinates the gateway feeds so the UI gets one `Dashboard` value per
//! load, with failures confined to the slot that produced them.

use crate::domain::{
    BriefingResponse, Category, CategoryToggles, DomainError, RestaurantsResponse,
    SentimentSummaryResponse, UserSettings, WeatherResponse,
};
use crate::ports::BriefingGateway;
use std::sync::Arc;
use tracing::{info, warn};

/// One dashboard load. Feed slots carry their own results so the UI can
/// degrade per card: a dead weather feed must not blank the briefing.
pub struct Dashboard {
    pub district: String,
    pub categories: CategoryToggles,
    pub briefing: Result<BriefingResponse, DomainError>,
    /// `None` when the weather card is toggled off (the feed is not queried).
    pub weather: Option<Result<WeatherResponse, DomainError>>,
}

/// Service behind the briefing dashboard and its detail views.
pub struct BriefingService {
    gateway: Arc<dyn BriefingGateway>,
}

impl BriefingService {
    pub fn new(gateway: Arc<dyn BriefingGateway>) -> Self {
        Self { gateway }
    }

    /// Load the dashboard for the user's district. Briefing and weather are
    /// fetched concurrently; each failure stays inside its slot.
    pub async fn load_dashboard(&self, settings: &UserSettings) -> Dashboard {
        let district = settings.district.clone();
        let categories = settings.categories;
        info!(district = %district, "loading dashboard");

        let want_weather = categories.is_enabled(Category::Weather);
        let (briefing, weather) = tokio::join!(self.gateway.get_briefing(&district), async {
            if want_weather {
                Some(self.gateway.get_weather(&district).await)
            } else {
                None
            }
        });

        if let Err(e) = &briefing {
            warn!(district = %district, error = %e, "briefing feed failed");
        }
        if let Some(Err(e)) = &weather {
            warn!(district = %district, error = %e, "weather feed failed");
        }

        Dashboard {
            district,
            categories,
            briefing,
            weather,
        }
    }

    /// Sentiment history for the detail view.
    pub async fn sentiment_history(
        &self,
        district: &str,
        days: u32,
    ) -> Result<SentimentSummaryResponse, DomainError> {
        self.gateway.get_sentiment(district, days).await
    }

    /// Full list of newly licensed restaurants for the expanded view.
    pub async fn restaurants(&self, district: &str) -> Result<RestaurantsResponse, DomainError> {
        self.gateway.get_restaurants(district).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BriefingCategories, SentimentAverage, SentimentSnapshot, WeatherInfo,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubGateway {
        weather_calls: AtomicUsize,
        fail_briefing: bool,
        fail_weather: bool,
    }

    fn stub(fail_briefing: bool, fail_weather: bool) -> Arc<StubGateway> {
        Arc::new(StubGateway {
            weather_calls: AtomicUsize::new(0),
            fail_briefing,
            fail_weather,
        })
    }

    fn sample_briefing(district: &str) -> BriefingResponse {
        BriefingResponse {
            success: true,
            district: district.to_string(),
            date: "2025-08-25".to_string(),
            sentiment: SentimentSnapshot {
                temperature: 62.0,
                mood_emoji: "🙂".to_string(),
                description: "좋음".to_string(),
                positive_ratio: 41.2,
                negative_ratio: 18.0,
                influential_news: Vec::new(),
            },
            categories: BriefingCategories::default(),
        }
    }

    #[async_trait::async_trait]
    impl BriefingGateway for StubGateway {
        async fn get_briefing(&self, district: &str) -> Result<BriefingResponse, DomainError> {
            if self.fail_briefing {
                return Err(DomainError::Gateway("briefing feed down".to_string()));
            }
            Ok(sample_briefing(district))
        }

        async fn get_weather(&self, district: &str) -> Result<WeatherResponse, DomainError> {
            self.weather_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_weather {
                return Err(DomainError::Timeout { seconds: 10 });
            }
            Ok(WeatherResponse {
                success: true,
                district: district.to_string(),
                weather: WeatherInfo {
                    temp: "18°C".to_string(),
                    condition: "맑음".to_string(),
                    dust: "좋음".to_string(),
                    description: String::new(),
                    hourly_forecast: Vec::new(),
                },
            })
        }

        async fn get_sentiment(
            &self,
            district: &str,
            days: u32,
        ) -> Result<SentimentSummaryResponse, DomainError> {
            Ok(SentimentSummaryResponse {
                success: true,
                district: district.to_string(),
                period: format!("최근 {days}일"),
                average: SentimentAverage {
                    temperature: 55.0,
                    mood_emoji: "😐".to_string(),
                },
                summaries: Vec::new(),
            })
        }

        async fn get_restaurants(
            &self,
            _district: &str,
        ) -> Result<RestaurantsResponse, DomainError> {
            Ok(RestaurantsResponse {
                success: true,
                restaurants: Vec::new(),
            })
        }

        async fn get_districts(&self) -> Result<Vec<String>, DomainError> {
            Ok(vec!["강남구".to_string()])
        }
    }

    #[tokio::test]
    async fn test_dashboard_degrades_per_slot() {
        let service = BriefingService::new(stub(false, true));

        let dashboard = service.load_dashboard(&UserSettings::default()).await;

        assert!(dashboard.briefing.is_ok());
        assert!(matches!(
            dashboard.weather,
            Some(Err(DomainError::Timeout { .. }))
        ));
    }

    #[tokio::test]
    async fn test_dashboard_skips_weather_when_toggled_off() {
        let gateway = stub(false, false);
        let service = BriefingService::new(gateway.clone());

        let mut settings = UserSettings::default();
        settings.categories.weather = false;
        let dashboard = service.load_dashboard(&settings).await;

        assert!(dashboard.weather.is_none());
        assert_eq!(gateway.weather_calls.load(Ordering::SeqCst), 0);
        assert!(dashboard.briefing.is_ok());
    }

    #[tokio::test]
    async fn test_dashboard_survives_total_feed_failure() {
        let service = BriefingService::new(stub(true, true));

        let dashboard = service.load_dashboard(&UserSettings::default()).await;

        assert!(dashboard.briefing.is_err());
        assert!(matches!(dashboard.weather, Some(Err(_))));
        // The district label stays available for the error screen.
        assert_eq!(dashboard.district, "강남구");
    }

    #[tokio::test]
    async fn test_sentiment_history_passes_window_through() {
        let service = BriefingService::new(stub(false, false));

        let history = service.sentiment_history("마포구", 7).await.unwrap();

        assert_eq!(history.district, "마포구");
        assert_eq!(history.period, "최근 7일");
    }
}
