//! Display mappings. Pure, total functions from response fields to the
//! visual vocabulary of the dashboard (buckets, glyphs, labels).
//!
//! Every function is deterministic and falls through to a catch-all default,
//! so any input renders something.

use chrono::{Datelike, NaiveDate};

/// RGB triple used by the renderer. Kept as plain data so the domain stays
/// free of terminal types.
pub type Rgb = (u8, u8, u8);

// ─────────────────────────────────────────────────────────────────────────
// Sentiment temperature → mood bucket
// ─────────────────────────────────────────────────────────────────────────

/// Five mood buckets over the 0-100 sentiment temperature, lower bounds
/// inclusive at 80/60/40/20.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodLevel {
    VeryGood,
    Good,
    Neutral,
    Bad,
    VeryBad,
}

impl MoodLevel {
    pub fn emoji(self) -> &'static str {
        match self {
            MoodLevel::VeryGood => "😊",
            MoodLevel::Good => "🙂",
            MoodLevel::Neutral => "😐",
            MoodLevel::Bad => "😕",
            MoodLevel::VeryBad => "😔",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodLevel::VeryGood => "매우 좋음",
            MoodLevel::Good => "좋음",
            MoodLevel::Neutral => "보통",
            MoodLevel::Bad => "나쁨",
            MoodLevel::VeryBad => "매우 나쁨",
        }
    }

    /// Gradient color pair for the bucket (warm at the top, cool at the
    /// bottom). The renderer uses the first color for plain text.
    pub fn gradient(self) -> (Rgb, Rgb) {
        match self {
            MoodLevel::VeryGood => ((255, 107, 107), (255, 142, 83)),
            MoodLevel::Good => ((255, 193, 7), (255, 152, 0)),
            MoodLevel::Neutral => ((158, 158, 158), (117, 117, 117)),
            MoodLevel::Bad => ((100, 181, 246), (66, 165, 245)),
            MoodLevel::VeryBad => ((63, 81, 181), (48, 63, 159)),
        }
    }

    pub fn color(self) -> Rgb {
        self.gradient().0
    }
}

/// Bucket a sentiment temperature. Total over all floats: anything below 20
/// (including NaN and negatives) is `VeryBad`.
pub fn mood_level(temperature: f64) -> MoodLevel {
    if temperature >= 80.0 {
        MoodLevel::VeryGood
    } else if temperature >= 60.0 {
        MoodLevel::Good
    } else if temperature >= 40.0 {
        MoodLevel::Neutral
    } else if temperature >= 20.0 {
        MoodLevel::Bad
    } else {
        MoodLevel::VeryBad
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Fine dust grade → color
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DustLevel {
    Good,
    Moderate,
    Bad,
}

impl DustLevel {
    pub fn color(self) -> Rgb {
        match self {
            DustLevel::Good => (76, 175, 80),
            DustLevel::Moderate => (255, 193, 7),
            DustLevel::Bad => (244, 67, 54),
        }
    }
}

/// Grade the forecast's dust string. Anything other than the two known good
/// grades (including "--" placeholders) renders as bad.
pub fn dust_level(dust: &str) -> DustLevel {
    match dust {
        "좋음" => DustLevel::Good,
        "보통" => DustLevel::Moderate,
        _ => DustLevel::Bad,
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Weather condition → icon
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sunny,
    Cloudy,
    Overcast,
    Rain,
    Snow,
}

impl WeatherIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Sunny => "☀️",
            WeatherIcon::Cloudy => "⛅",
            WeatherIcon::Overcast => "🌫️",
            WeatherIcon::Rain => "🌧️",
            WeatherIcon::Snow => "❄️",
        }
    }
}

/// Pick an icon by substring match on the Korean condition text, first match
/// wins; unknown conditions fall back to sunny.
pub fn weather_icon(condition: &str) -> WeatherIcon {
    if condition.contains("맑음") {
        WeatherIcon::Sunny
    } else if condition.contains("구름") {
        WeatherIcon::Cloudy
    } else if condition.contains("흐림") {
        WeatherIcon::Overcast
    } else if condition.contains("비") {
        WeatherIcon::Rain
    } else if condition.contains("눈") {
        WeatherIcon::Snow
    } else {
        WeatherIcon::Sunny
    }
}

// ─────────────────────────────────────────────────────────────────────────
// View count → Korean magnitude string
// ─────────────────────────────────────────────────────────────────────────

/// Format a view count with Korean magnitude units (천/만/억 + 회).
///
/// 억 always keeps one decimal; 천/만 drop the decimal when the quotient is
/// integral ("1천회" but "1.5천회").
pub fn format_view_count(count: u64) -> String {
    if count >= 100_000_000 {
        format!("{:.1}억회", count as f64 / 100_000_000.0)
    } else if count >= 10_000 {
        if count % 10_000 == 0 {
            format!("{}만회", count / 10_000)
        } else {
            format!("{:.1}만회", count as f64 / 10_000.0)
        }
    } else if count >= 1_000 {
        if count % 1_000 == 0 {
            format!("{}천회", count / 1_000)
        } else {
            format!("{:.1}천회", count as f64 / 1_000.0)
        }
    } else {
        format!("{count}회")
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Positive/negative ratios → weather metaphor (sentiment detail view)
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodForecast {
    Clear,
    Warm,
    Rainy,
    Cloudy,
    Average,
}

impl MoodForecast {
    pub fn label(self) -> &'static str {
        match self {
            MoodForecast::Clear => "맑은 날씨",
            MoodForecast::Warm => "따뜻한 날씨",
            MoodForecast::Rainy => "비오는 날씨",
            MoodForecast::Cloudy => "흐린 날씨",
            MoodForecast::Average => "보통 날씨",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodForecast::Clear => "☀️",
            MoodForecast::Warm => "🌤️",
            MoodForecast::Rainy => "🌧️",
            MoodForecast::Cloudy => "⛅",
            MoodForecast::Average => "⛅",
        }
    }
}

/// Map the day's positive/negative ratios (percent) to a weather metaphor.
/// Stronger signals are checked first so a 75% negative day reads rainy, not
/// merely cloudy.
pub fn mood_forecast(positive_ratio: f64, negative_ratio: f64) -> MoodForecast {
    if positive_ratio > 70.0 {
        MoodForecast::Clear
    } else if positive_ratio > 50.0 {
        MoodForecast::Warm
    } else if negative_ratio > 70.0 {
        MoodForecast::Rainy
    } else if negative_ratio > 50.0 {
        MoodForecast::Cloudy
    } else {
        MoodForecast::Average
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Misc formatting
// ─────────────────────────────────────────────────────────────────────────

const KOREAN_WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Dashboard header date, e.g. "2025년 8월 25일 월요일".
pub fn format_korean_date(date: NaiveDate) -> String {
    let weekday = KOREAN_WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{}년 {}월 {}일 {}요일",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}

/// Naver Maps search link for a restaurant; the address wins over the name
/// when present.
pub fn naver_map_url(name: &str, address: Option<&str>) -> String {
    let query = address.filter(|a| !a.is_empty()).unwrap_or(name);
    format!(
        "https://map.naver.com/v5/search/{}",
        urlencoding::encode(query)
    )
}
