//! Screen rendering. Builds the printable card blocks for the dashboard,
//! sentiment history, and restaurant list.
//!
//! Pure string builders over domain data: color comes from the display
//! mappings, layout stays here, and failed feeds render an error card
//! instead of substitute content.

use crate::domain::display::{
    Rgb, dust_level, format_korean_date, format_view_count, mood_forecast, mood_level,
    naver_map_url, weather_icon,
};
use crate::domain::{
    Category, CategoryBlock, DomainError, NewsItem, RestaurantItem, RestaurantsResponse,
    SentimentSnapshot, SentimentSummaryResponse, UserSettings, WeatherInfo,
};
use crate::usecases::Dashboard;
use chrono::NaiveDate;
use crossterm::style::{Color, Stylize};

/// Coral (#ff6b6b), the accent carried through headers and the banner.
const CORAL: Rgb = (255, 107, 107);
const POSITIVE: Rgb = (76, 175, 80);
const NEGATIVE: Rgb = (244, 67, 54);

fn rgb(color: Rgb) -> Color {
    Color::Rgb {
        r: color.0,
        g: color.1,
        b: color.2,
    }
}

/// Whole dashboard as one printable block. The header always carries the
/// district and the local date, even when every feed failed.
pub fn dashboard_screen(dashboard: &Dashboard, today: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&header_line(&dashboard.district, today));

    match &dashboard.briefing {
        Ok(briefing) => out.push_str(&sentiment_hero(&briefing.sentiment)),
        Err(e) => out.push_str(&error_card("브리핑", e)),
    }

    match &dashboard.weather {
        Some(Ok(weather)) => {
            out.push('\n');
            out.push_str(&weather_card(&weather.weather));
        }
        Some(Err(e)) => {
            out.push('\n');
            out.push_str(&error_card("날씨", e));
        }
        None => {}
    }

    if let Ok(briefing) = &dashboard.briefing {
        let toggles = &dashboard.categories;
        if toggles.is_enabled(Category::Community) {
            if let Some(block) = &briefing.categories.local_issues {
                out.push('\n');
                out.push_str(&news_block(block));
            }
        }
        if toggles.is_enabled(Category::NewRestaurants) {
            if let Some(block) = &briefing.categories.new_restaurants {
                out.push('\n');
                out.push_str(&restaurant_block(block));
            }
        }
        if toggles.is_enabled(Category::HotRestaurants) {
            if let Some(block) = &briefing.categories.hot_restaurants {
                out.push('\n');
                out.push_str(&restaurant_block(block));
            }
        }
    }

    out
}

/// Sentiment history detail: average hero plus a per-day trend list.
pub fn sentiment_screen(history: &SentimentSummaryResponse) -> String {
    let level = mood_level(history.average.temperature);
    let period = if history.period.is_empty() {
        "최근 추이"
    } else {
        history.period.as_str()
    };

    let mut out = format!(
        "{} · {}\n",
        format!("📈 {} 감성 온도", history.district)
            .with(rgb(CORAL))
            .bold(),
        period
    );
    out.push_str(&format!(
        "   평균 {}\n",
        format!(
            "{:.1}° {} {}",
            history.average.temperature,
            history.average.mood_emoji,
            level.label()
        )
        .with(rgb(level.color()))
        .bold()
    ));

    for day in &history.summaries {
        let day_level = mood_level(day.temperature);
        let forecast = mood_forecast(day.positive_ratio, day.negative_ratio);
        out.push_str(&format!(
            "   {}  {} {}  {}  {}\n",
            day.date,
            day.mood_emoji,
            format!("{:>5.1}°", day.temperature).with(rgb(day_level.color())),
            ratio_bar(day.temperature, 10).with(rgb(day_level.color())),
            format!("{} {}", forecast.emoji(), forecast.label()).dark_grey()
        ));
        if !day.top_keywords.is_empty() {
            let tags: Vec<String> = day.top_keywords.iter().map(|k| format!("#{}", k)).collect();
            out.push_str(&format!("           {}\n", tags.join(" ").dark_grey()));
        }
    }
    if history.summaries.is_empty() {
        out.push_str(&format!("   {}\n", "아직 쌓인 기록이 없어요".dark_grey()));
    }
    out
}

/// Standalone list of newly licensed restaurants.
pub fn restaurants_screen(district: &str, listing: &RestaurantsResponse) -> String {
    let mut out = format!(
        "{}\n",
        format!("🍽️ {} 새로 문 연 가게", district)
            .with(rgb(CORAL))
            .bold()
    );
    for (i, item) in listing.restaurants.iter().enumerate() {
        out.push_str(&restaurant_line(item, i + 1));
    }
    if listing.restaurants.is_empty() {
        out.push_str(&format!("   {}\n", "최근 등록된 가게가 없어요".dark_grey()));
    }
    out
}

/// Current preferences, shown before saving and from the settings menu.
pub fn settings_summary(settings: &UserSettings) -> String {
    let enabled: Vec<&str> = Category::ALL
        .iter()
        .filter(|c| settings.categories.is_enabled(**c))
        .map(|c| c.label())
        .collect();
    let categories = if enabled.is_empty() {
        "없음".to_string()
    } else {
        enabled.join(", ")
    };
    let weekend = if settings.weekend_notifications {
        "주말 포함"
    } else {
        "주말 제외"
    };

    format!(
        "📍 동네: {}\n🗂️ 카테고리: {}\n⏰ 알림: {} ({})\n",
        settings.district, categories, settings.notification_time, weekend
    )
}

/// Failure slot for a card. States what failed and why; no substitute data.
pub fn error_card(what: &str, err: &DomainError) -> String {
    format!(
        "{}\n   {}\n   {}\n",
        format!("⚠️ {} 정보를 불러오지 못했어요", what)
            .with(rgb(NEGATIVE))
            .bold(),
        err.to_string().dark_grey(),
        "잠시 후 다시 시도해주세요".dark_grey()
    )
}

fn header_line(district: &str, today: NaiveDate) -> String {
    format!(
        "{} · {}\n",
        format!("📍 {}", district).with(rgb(CORAL)).bold(),
        format_korean_date(today)
    )
}

/// The payload's emoji and description are shown as-is; only the color is
/// derived from the temperature bucket.
fn sentiment_hero(sentiment: &SentimentSnapshot) -> String {
    let level = mood_level(sentiment.temperature);
    let mut out = format!("{}\n", section_title("🌡️", "오늘의 감성 온도"));
    out.push_str(&format!(
        "   {} {}\n",
        sentiment.mood_emoji,
        format!("{:.1}°C", sentiment.temperature)
            .with(rgb(level.color()))
            .bold()
    ));
    out.push_str(&format!(
        "   {}\n",
        format!("오늘 우리 동네 분위기는 {}이에요", sentiment.description).dark_grey()
    ));
    let forecast = mood_forecast(sentiment.positive_ratio, sentiment.negative_ratio);
    out.push_str(&format!(
        "   {} 오늘 동네는 {}예요\n",
        forecast.emoji(),
        forecast.label()
    ));
    out.push_str(&format!(
        "   긍정 {} {:.1}%   부정 {} {:.1}%\n",
        ratio_bar(sentiment.positive_ratio, 10).with(rgb(POSITIVE)),
        sentiment.positive_ratio,
        ratio_bar(sentiment.negative_ratio, 10).with(rgb(NEGATIVE)),
        sentiment.negative_ratio
    ));
    if !sentiment.influential_news.is_empty() {
        out.push_str(&format!(
            "   {}\n",
            "오늘 온도를 움직인 소식".dark_grey()
        ));
        for item in &sentiment.influential_news {
            out.push_str(&news_line(item, "   · "));
        }
    }
    out
}

fn weather_card(weather: &WeatherInfo) -> String {
    let icon = weather_icon(&weather.condition);
    let dust = dust_level(&weather.dust);
    let mut out = format!("{}\n", section_title(icon.glyph(), "날씨"));
    out.push_str(&format!(
        "   {} · {} · 미세먼지 {}\n",
        weather.temp.as_str().bold(),
        weather.condition,
        weather.dust.as_str().with(rgb(dust.color()))
    ));
    if !weather.description.is_empty() {
        out.push_str(&format!("   {}\n", weather.description));
    }
    if !weather.hourly_forecast.is_empty() {
        let strip: Vec<String> = weather
            .hourly_forecast
            .iter()
            .take(3)
            .map(|h| format!("{} {} {}", h.time, h.temp, weather_icon(&h.condition).glyph()))
            .collect();
        out.push_str(&format!("   {}\n", strip.join("  |  ").dark_grey()));
    }
    out
}

fn news_block(block: &CategoryBlock<NewsItem>) -> String {
    let mut out = format!("{}\n", block_title(block.emoji.as_str(), &block.title));
    for (i, item) in block.items.iter().enumerate() {
        out.push_str(&news_line(item, &format!("   {}. ", i + 1)));
    }
    if block.items.is_empty() {
        out.push_str(&format!("   {}\n", "아직 모인 소식이 없어요".dark_grey()));
    }
    out
}

fn restaurant_block(block: &CategoryBlock<RestaurantItem>) -> String {
    let mut out = format!("{}\n", block_title(block.emoji.as_str(), &block.title));
    for (i, item) in block.items.iter().enumerate() {
        out.push_str(&restaurant_line(item, i + 1));
    }
    if block.items.is_empty() {
        out.push_str(&format!("   {}\n", "아직 모인 소식이 없어요".dark_grey()));
    }
    out
}

fn news_line(item: &NewsItem, prefix: &str) -> String {
    let mut meta: Vec<String> = vec![item.source.clone()];
    if let Some(views) = item.view_count {
        meta.push(format_view_count(views));
    }
    if let Some(at) = &item.collected_at {
        meta.push(at.clone());
    }

    let mut line = format!(
        "{}{}  {}\n",
        prefix,
        item.title,
        meta.join(" · ").dark_grey()
    );
    if let Some(url) = &item.url {
        line.push_str(&format!(
            "{}{}\n",
            " ".repeat(prefix.chars().count()),
            url.as_str().dark_grey().underlined()
        ));
    }
    line
}

fn restaurant_line(item: &RestaurantItem, index: usize) -> String {
    let mut line = format!(
        "   {}. {}  {}\n",
        index,
        item.name.as_str().bold(),
        item.business_type.as_str().dark_grey()
    );

    let mut meta: Vec<String> = Vec::new();
    if let Some(address) = &item.address {
        meta.push(address.clone());
    }
    if let Some(date) = &item.license_date {
        meta.push(format!("인허가 {}", date));
    }
    if let Some(phone) = &item.phone {
        meta.push(phone.clone());
    }
    if !meta.is_empty() {
        line.push_str(&format!("      {}\n", meta.join(" · ").dark_grey()));
    }

    line.push_str(&format!(
        "      {}\n",
        naver_map_url(&item.name, item.address.as_deref())
            .dark_grey()
            .underlined()
    ));
    line
}

fn section_title(emoji: &str, title: &str) -> String {
    format!("{} {}", emoji, title.bold())
}

fn block_title(emoji: &str, title: &str) -> String {
    let emoji = if emoji.is_empty() { "•" } else { emoji };
    section_title(emoji, title)
}

fn ratio_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64)
        .round()
        .clamp(0.0, width as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BriefingCategories, BriefingResponse, CategoryToggles, DailySentiment, HourlyForecast,
        SentimentAverage, WeatherResponse,
    };

    fn sample_briefing() -> BriefingResponse {
        BriefingResponse {
            success: true,
            district: "강남구".to_string(),
            date: "2025-08-25".to_string(),
            sentiment: SentimentSnapshot {
                temperature: 83.0,
                mood_emoji: "😊".to_string(),
                description: "매우 좋음".to_string(),
                positive_ratio: 61.0,
                negative_ratio: 8.0,
                influential_news: Vec::new(),
            },
            categories: BriefingCategories {
                local_issues: Some(CategoryBlock {
                    title: "동네 이슈".to_string(),
                    emoji: "💬".to_string(),
                    items: vec![NewsItem {
                        title: "선릉역 버스 노선 개편".to_string(),
                        source: "유튜브".to_string(),
                        url: Some("https://video.example.com/2".to_string()),
                        view_count: Some(15_000),
                        collected_at: None,
                    }],
                }),
                new_restaurants: None,
                hot_restaurants: Some(CategoryBlock {
                    title: "핫플 음식점".to_string(),
                    emoji: "🔥".to_string(),
                    items: vec![RestaurantItem {
                        name: "온도 커피".to_string(),
                        business_type: "카페".to_string(),
                        address: Some("서울시 강남구 테헤란로 88".to_string()),
                        license_date: None,
                        phone: None,
                    }],
                }),
            },
        }
    }

    fn sample_weather() -> WeatherResponse {
        WeatherResponse {
            success: true,
            district: "강남구".to_string(),
            weather: WeatherInfo {
                temp: "24°C".to_string(),
                condition: "맑음".to_string(),
                dust: "좋음".to_string(),
                description: String::new(),
                hourly_forecast: Vec::new(),
            },
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 25).unwrap()
    }

    #[test]
    fn test_dashboard_renders_all_enabled_cards() {
        let dashboard = Dashboard {
            district: "강남구".to_string(),
            categories: CategoryToggles::default(),
            briefing: Ok(sample_briefing()),
            weather: Some(Ok(sample_weather())),
        };

        let screen = dashboard_screen(&dashboard, monday());

        assert!(screen.contains("강남구"));
        assert!(screen.contains("2025년 8월 25일 월요일"));
        assert!(screen.contains("매우 좋음"));
        assert!(screen.contains("따뜻한 날씨"));
        assert!(screen.contains("1.5만회"));
        assert!(screen.contains("동네 이슈"));
        assert!(screen.contains("핫플 음식점"));
        assert!(screen.contains("미세먼지"));
        assert!(screen.contains("map.naver.com"));
    }

    #[test]
    fn test_dashboard_hides_toggled_off_categories() {
        let mut categories = CategoryToggles::default();
        categories.community = false;
        let dashboard = Dashboard {
            district: "강남구".to_string(),
            categories,
            briefing: Ok(sample_briefing()),
            weather: None,
        };

        let screen = dashboard_screen(&dashboard, monday());

        assert!(!screen.contains("동네 이슈"));
        assert!(!screen.contains("미세먼지"));
        assert!(screen.contains("핫플 음식점"));
    }

    #[test]
    fn test_dashboard_failure_slots_show_reason_not_data() {
        let dashboard = Dashboard {
            district: "은평구".to_string(),
            categories: CategoryToggles::default(),
            briefing: Err(DomainError::Api {
                status: 502,
                message: "upstream down".to_string(),
            }),
            weather: Some(Err(DomainError::Timeout { seconds: 10 })),
        };

        let screen = dashboard_screen(&dashboard, monday());

        assert!(screen.contains("은평구"));
        // The header date survives a total feed failure.
        assert!(screen.contains("2025년 8월 25일 월요일"));
        assert!(screen.contains("불러오지 못했어요"));
        assert!(screen.contains("API error 502"));
        assert!(screen.contains("timed out"));
        // No leftover cards from data that never arrived.
        assert!(!screen.contains("감성 온도"));
    }

    #[test]
    fn test_sentiment_screen_maps_day_forecasts() {
        let history = SentimentSummaryResponse {
            success: true,
            district: "마포구".to_string(),
            period: "최근 7일".to_string(),
            average: SentimentAverage {
                temperature: 64.0,
                mood_emoji: "🙂".to_string(),
            },
            summaries: vec![DailySentiment {
                date: "2025-08-24".to_string(),
                temperature: 75.0,
                mood_emoji: "🙂".to_string(),
                positive_ratio: 80.0,
                negative_ratio: 5.0,
                total_count: 120,
                top_keywords: vec!["공원".to_string()],
            }],
        };

        let screen = sentiment_screen(&history);

        assert!(screen.contains("마포구"));
        assert!(screen.contains("최근 7일"));
        assert!(screen.contains("맑은 날씨"));
        assert!(screen.contains("#공원"));
    }

    #[test]
    fn test_weather_card_caps_hourly_strip_at_three() {
        let mut weather = sample_weather();
        weather.weather.hourly_forecast = (9..13)
            .map(|h| HourlyForecast {
                time: format!("{h}시"),
                temp: format!("{h}°C"),
                condition: "맑음".to_string(),
            })
            .collect();

        let card = weather_card(&weather.weather);

        assert!(card.contains("11시"));
        assert!(!card.contains("12시"));
    }

    #[test]
    fn test_restaurants_screen_handles_empty_list() {
        let listing = RestaurantsResponse {
            success: true,
            restaurants: Vec::new(),
        };

        let screen = restaurants_screen("중구", &listing);

        assert!(screen.contains("중구"));
        assert!(screen.contains("최근 등록된 가게가 없어요"));
    }

    #[test]
    fn test_settings_summary_lists_enabled_categories() {
        let mut settings = UserSettings::default();
        settings.categories.new_restaurants = false;
        settings.categories.hot_restaurants = false;
        settings.weekend_notifications = false;

        let summary = settings_summary(&settings);

        assert!(summary.contains("날씨 정보, 동네 이슈"));
        assert!(!summary.contains("신규 개업 음식점"));
        assert!(summary.contains("주말 제외"));
    }

    #[test]
    fn test_ratio_bar_clamps_and_scales() {
        assert_eq!(ratio_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(ratio_bar(50.0, 10), "█████░░░░░");
        assert_eq!(ratio_bar(100.0, 10), "██████████");
        assert_eq!(ratio_bar(150.0, 10), "██████████");
    }
}
