//! Domain entities. Pure data structures for the core business.
//!
//! Wire shapes of the briefing/weather endpoints and the locally persisted
//! user settings. No HTTP/IO types here; those stay in the adapters.

use serde::{Deserialize, Serialize};

/// Briefing categories a user can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Weather,
    Community,
    NewRestaurants,
    HotRestaurants,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Weather,
        Category::Community,
        Category::NewRestaurants,
        Category::HotRestaurants,
    ];

    /// Korean display label, as shown in the onboarding wizard and settings.
    pub fn label(self) -> &'static str {
        match self {
            Category::Weather => "날씨 정보",
            Category::Community => "동네 이슈",
            Category::NewRestaurants => "신규 개업 음식점",
            Category::HotRestaurants => "핫플 음식점",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-category subscription flags inside [`UserSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryToggles {
    pub weather: bool,
    pub community: bool,
    pub new_restaurants: bool,
    pub hot_restaurants: bool,
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self {
            weather: true,
            community: true,
            new_restaurants: true,
            hot_restaurants: true,
        }
    }
}

impl CategoryToggles {
    /// Build toggles from the categories picked in the onboarding wizard.
    pub fn from_selection(selected: &[Category]) -> Self {
        Self {
            weather: selected.contains(&Category::Weather),
            community: selected.contains(&Category::Community),
            new_restaurants: selected.contains(&Category::NewRestaurants),
            hot_restaurants: selected.contains(&Category::HotRestaurants),
        }
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Weather => self.weather,
            Category::Community => self.community,
            Category::NewRestaurants => self.new_restaurants,
            Category::HotRestaurants => self.hot_restaurants,
        }
    }
}

/// Notification times offered by the settings editor (morning slots only).
pub const NOTIFICATION_TIMES: [&str; 5] = ["06:00", "07:00", "08:00", "09:00", "10:00"];

/// User preference bundle. Persisted as a single JSON document by the
/// settings store; saving then loading must yield an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub district: String,
    pub categories: CategoryToggles,
    pub notification_time: String,
    pub weekend_notifications: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            district: crate::domain::districts::DEFAULT_DISTRICT.to_string(),
            categories: CategoryToggles::default(),
            notification_time: "07:00".to_string(),
            weekend_notifications: true,
        }
    }
}

impl UserSettings {
    /// Check the snapshot is storable: a district is picked and the
    /// notification time is one of the selectable slots.
    pub fn validate(&self) -> Result<(), crate::domain::errors::DomainError> {
        use crate::domain::errors::DomainError;

        if self.district.trim().is_empty() {
            return Err(DomainError::Input("no district selected".to_string()));
        }
        if !NOTIFICATION_TIMES.contains(&self.notification_time.as_str()) {
            return Err(DomainError::Input(format!(
                "unsupported notification time: {}",
                self.notification_time
            )));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Briefing endpoint (`type=briefing`)
// ─────────────────────────────────────────────────────────────────────────

/// Full briefing payload for one district and day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefingResponse {
    pub success: bool,
    pub district: String,
    pub date: String,
    pub sentiment: SentimentSnapshot,
    pub categories: BriefingCategories,
}

/// Aggregated district mood for the day. `temperature` is a 0-100 score
/// (positive minus negative ratio, recentered at 50 by the backend).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    pub temperature: f64,
    pub mood_emoji: String,
    pub description: String,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    /// Top items that drove the score. Absent on older backends.
    #[serde(default)]
    pub influential_news: Vec<NewsItem>,
}

/// Named category blocks of the briefing. Each block may be missing when the
/// backend has no data for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BriefingCategories {
    #[serde(default)]
    pub local_issues: Option<CategoryBlock<NewsItem>>,
    #[serde(default)]
    pub new_restaurants: Option<CategoryBlock<RestaurantItem>>,
    #[serde(default)]
    pub hot_restaurants: Option<CategoryBlock<RestaurantItem>>,
}

/// One titled block of briefing items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBlock<T> {
    pub title: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// A community issue / news entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub collected_at: Option<String>,
}

/// A restaurant listing entry (new openings and popular spots share a shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantItem {
    pub name: String,
    #[serde(rename = "type")]
    pub business_type: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub license_date: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────
// Weather endpoint
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub success: bool,
    pub district: String,
    pub weather: WeatherInfo,
}

/// Current conditions plus a short hourly outlook. `temp` is pre-formatted
/// by the backend ("18°C").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub temp: String,
    pub condition: String,
    pub dust: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hourly_forecast: Vec<HourlyForecast>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: String,
    pub temp: String,
    pub condition: String,
}

// ─────────────────────────────────────────────────────────────────────────
// Sentiment summary endpoint (`type=sentiment`)
// ─────────────────────────────────────────────────────────────────────────

/// N-day sentiment trend for a district.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSummaryResponse {
    pub success: bool,
    pub district: String,
    #[serde(default)]
    pub period: String,
    pub average: SentimentAverage,
    #[serde(default)]
    pub summaries: Vec<DailySentiment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentAverage {
    pub temperature: f64,
    pub mood_emoji: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySentiment {
    pub date: String,
    pub temperature: f64,
    pub mood_emoji: String,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub top_keywords: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────────────
// Restaurant listings endpoint (`type=restaurants`)
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantsResponse {
    pub success: bool,
    #[serde(default)]
    pub restaurants: Vec<RestaurantItem>,
}
