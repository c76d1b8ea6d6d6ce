//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the Seoul district registry, and the display mappings live
//! here. Dependencies flow inward.

pub mod display;
pub mod districts;
pub mod entities;
pub mod errors;

pub use districts::{DEFAULT_DISTRICT, SEOUL_DISTRICTS, is_seoul_district};
pub use entities::{
    BriefingCategories, BriefingResponse, Category, CategoryBlock, CategoryToggles,
    DailySentiment, HourlyForecast, NewsItem, RestaurantItem, RestaurantsResponse,
    SentimentAverage, SentimentSnapshot, SentimentSummaryResponse, UserSettings, WeatherInfo,
    WeatherResponse, NOTIFICATION_TIMES,
};
pub use errors::DomainError;
