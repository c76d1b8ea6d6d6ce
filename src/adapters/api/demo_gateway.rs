//! Demo gateway with canned briefing data.
//!
//! Lets the app run end to end without deployed endpoints. Every payload is
//! labeled so demo output is never mistaken for live data.

use crate::domain::display::mood_level;
use crate::domain::{
    BriefingCategories, BriefingResponse, CategoryBlock, DailySentiment, DomainError,
    HourlyForecast, NewsItem, RestaurantItem, RestaurantsResponse, SEOUL_DISTRICTS,
    SentimentAverage, SentimentSnapshot, SentimentSummaryResponse, WeatherInfo, WeatherResponse,
    is_seoul_district,
};
use crate::ports::BriefingGateway;
use chrono::{Duration as ChronoDuration, Local};
use std::time::Duration;
use tracing::info;

/// Temperature walk used for the sentiment history, one value per day back
/// from today.
const DEMO_TEMPERATURES: [f64; 7] = [72.0, 65.0, 58.0, 44.0, 61.0, 70.0, 55.0];

/// Demo gateway. Returns predetermined briefing data without network calls.
/// Simulates network latency with configurable delay.
pub struct DemoGateway {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl DemoGateway {
    /// Create a new demo gateway with default delay (300ms).
    pub fn new() -> Self {
        Self { delay_ms: 300 }
    }

    /// Create a demo gateway with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    async fn simulate_latency(&self) {
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
    }
}

impl Default for DemoGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BriefingGateway for DemoGateway {
    async fn get_briefing(&self, district: &str) -> Result<BriefingResponse, DomainError> {
        info!(district, "[DEMO] serving canned briefing");
        self.simulate_latency().await;

        Ok(BriefingResponse {
            success: true,
            district: district.to_string(),
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            sentiment: SentimentSnapshot {
                temperature: 72.0,
                mood_emoji: mood_level(72.0).emoji().to_string(),
                description: mood_level(72.0).label().to_string(),
                positive_ratio: 48.5,
                negative_ratio: 12.3,
                influential_news: vec![NewsItem {
                    title: format!("[데모] {} 도서관 리모델링 마치고 재개관", district),
                    source: "네이버 뉴스".to_string(),
                    url: Some("https://news.example.com/demo/1".to_string()),
                    view_count: Some(1520),
                    collected_at: Some("09:10".to_string()),
                }],
            },
            categories: BriefingCategories {
                local_issues: Some(CategoryBlock {
                    title: "동네 이슈".to_string(),
                    emoji: "💬".to_string(),
                    items: vec![
                        NewsItem {
                            title: format!("[데모] {} 버스 노선 개편 안내", district),
                            source: "유튜브".to_string(),
                            url: Some("https://video.example.com/demo/2".to_string()),
                            view_count: Some(15_000),
                            collected_at: Some("18:00".to_string()),
                        },
                        NewsItem {
                            title: "[데모] 주말 하천변 플리마켓이 열립니다".to_string(),
                            source: "네이버 블로그".to_string(),
                            url: Some("https://blog.example.com/demo/3".to_string()),
                            view_count: Some(230_000),
                            collected_at: Some("12:40".to_string()),
                        },
                    ],
                }),
                new_restaurants: Some(CategoryBlock {
                    title: "신규 개업 음식점".to_string(),
                    emoji: "🆕".to_string(),
                    items: vec![RestaurantItem {
                        name: "[데모] 소문난 국밥".to_string(),
                        business_type: "한식".to_string(),
                        address: Some(format!("서울시 {} 중앙로 12", district)),
                        license_date: Some("08/20".to_string()),
                        phone: None,
                    }],
                }),
                hot_restaurants: Some(CategoryBlock {
                    title: "핫플 음식점".to_string(),
                    emoji: "🔥".to_string(),
                    items: vec![RestaurantItem {
                        name: "[데모] 온도 커피".to_string(),
                        business_type: "카페".to_string(),
                        address: Some(format!("서울시 {} 테헤란로 88", district)),
                        license_date: None,
                        phone: Some("02-555-0101".to_string()),
                    }],
                }),
            },
        })
    }

    async fn get_weather(&self, district: &str) -> Result<WeatherResponse, DomainError> {
        info!(district, "[DEMO] serving canned weather");
        self.simulate_latency().await;

        // Canned data is Seoul-only; an unknown district gets an error, not
        // another district's weather relabeled.
        if !is_seoul_district(district) {
            return Err(DomainError::District(district.to_string()));
        }

        Ok(WeatherResponse {
            success: true,
            district: district.to_string(),
            weather: WeatherInfo {
                temp: "24°C".to_string(),
                condition: "맑음".to_string(),
                dust: "좋음".to_string(),
                description: "나들이하기 좋은 하루예요".to_string(),
                hourly_forecast: vec![
                    HourlyForecast {
                        time: "09시".to_string(),
                        temp: "22°C".to_string(),
                        condition: "맑음".to_string(),
                    },
                    HourlyForecast {
                        time: "12시".to_string(),
                        temp: "26°C".to_string(),
                        condition: "맑음".to_string(),
                    },
                    HourlyForecast {
                        time: "15시".to_string(),
                        temp: "25°C".to_string(),
                        condition: "구름많음".to_string(),
                    },
                    HourlyForecast {
                        time: "18시".to_string(),
                        temp: "21°C".to_string(),
                        condition: "흐림".to_string(),
                    },
                ],
            },
        })
    }

    async fn get_sentiment(
        &self,
        district: &str,
        days: u32,
    ) -> Result<SentimentSummaryResponse, DomainError> {
        info!(district, days, "[DEMO] serving canned sentiment history");
        self.simulate_latency().await;

        let today = Local::now().date_naive();
        let summaries: Vec<DailySentiment> = (0..days)
            .map(|offset| {
                let temperature = DEMO_TEMPERATURES[offset as usize % DEMO_TEMPERATURES.len()];
                let date = today - ChronoDuration::days(i64::from(offset));
                DailySentiment {
                    date: date.format("%Y-%m-%d").to_string(),
                    temperature,
                    mood_emoji: mood_level(temperature).emoji().to_string(),
                    positive_ratio: (temperature - 10.0).max(0.0),
                    negative_ratio: (70.0 - temperature).max(0.0),
                    total_count: 120 + u64::from(offset) * 17,
                    top_keywords: vec!["공원".to_string(), "맛집".to_string()],
                }
            })
            .collect();

        let average_temp = if summaries.is_empty() {
            50.0
        } else {
            summaries.iter().map(|s| s.temperature).sum::<f64>() / summaries.len() as f64
        };

        Ok(SentimentSummaryResponse {
            success: true,
            district: district.to_string(),
            period: format!("최근 {}일", days),
            average: SentimentAverage {
                temperature: average_temp,
                mood_emoji: mood_level(average_temp).emoji().to_string(),
            },
            summaries,
        })
    }

    async fn get_restaurants(&self, district: &str) -> Result<RestaurantsResponse, DomainError> {
        info!(district, "[DEMO] serving canned restaurant list");
        self.simulate_latency().await;

        let restaurants = vec![
            RestaurantItem {
                name: "[데모] 소문난 국밥".to_string(),
                business_type: "한식".to_string(),
                address: Some(format!("서울시 {} 중앙로 12", district)),
                license_date: Some("08/20".to_string()),
                phone: Some("02-555-0102".to_string()),
            },
            RestaurantItem {
                name: "[데모] 골목 파스타".to_string(),
                business_type: "양식".to_string(),
                address: Some(format!("서울시 {} 시장길 3", district)),
                license_date: Some("08/18".to_string()),
                phone: None,
            },
            RestaurantItem {
                name: "[데모] 하루 베이커리".to_string(),
                business_type: "제과점".to_string(),
                address: Some(format!("서울시 {} 언덕로 27", district)),
                license_date: Some("08/15".to_string()),
                phone: Some("02-555-0103".to_string()),
            },
            RestaurantItem {
                name: "[데모] 단골 분식".to_string(),
                business_type: "분식".to_string(),
                address: None,
                license_date: Some("08/11".to_string()),
                phone: None,
            },
        ];

        Ok(RestaurantsResponse {
            success: true,
            restaurants,
        })
    }

    async fn get_districts(&self) -> Result<Vec<String>, DomainError> {
        info!("[DEMO] serving built-in district list");
        self.simulate_latency().await;
        Ok(SEOUL_DISTRICTS.iter().map(|d| d.to_string()).collect())
    }
}
