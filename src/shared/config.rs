//! Application configuration. Endpoint URLs, paths, request tuning.

use serde::Deserialize;

/// Default timeout for gateway requests, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default trailing window for the sentiment history view, in days.
pub const DEFAULT_SENTIMENT_DAYS: u32 = 7;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Briefing/sentiment/restaurants endpoint URL. Read from LOCALBRIEF_DATA_URL.
    #[serde(default)]
    pub data_url: Option<String>,

    /// Weather endpoint URL. Read from LOCALBRIEF_WEATHER_URL.
    #[serde(default)]
    pub weather_url: Option<String>,

    /// Optional district list endpoint. Read from LOCALBRIEF_DISTRICTS_URL.
    #[serde(default)]
    pub districts_url: Option<String>,

    /// Directory holding the settings file. Read from LOCALBRIEF_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Gateway request timeout in seconds (default 10). Read from LOCALBRIEF_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Sentiment history window in days (default 7). Read from LOCALBRIEF_SENTIMENT_DAYS.
    #[serde(default)]
    pub sentiment_days: Option<u32>,

    /// Send data requests as GET with query parameters instead of POST JSON
    /// (for API Gateway deployments that only route GET). Read from LOCALBRIEF_HTTP_GET.
    #[serde(default)]
    pub http_get: Option<bool>,

    /// Run against the built-in demo gateway instead of live endpoints.
    /// Read from LOCALBRIEF_DEMO.
    #[serde(default)]
    pub demo: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("LOCALBRIEF"));
        if let Ok(path) = std::env::var("LOCALBRIEF_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Flags are re-read directly so shell one-liners like LOCALBRIEF_DEMO=1 work
        // regardless of how the file source spelled them.
        if let Ok(s) = std::env::var("LOCALBRIEF_DEMO") {
            cfg.demo = Some(parse_flag(&s));
        }
        if let Ok(s) = std::env::var("LOCALBRIEF_HTTP_GET") {
            cfg.http_get = Some(parse_flag(&s));
        }
        if let Ok(s) = std::env::var("LOCALBRIEF_REQUEST_TIMEOUT_SECS") {
            if let Ok(n) = s.parse::<u64>() {
                cfg.request_timeout_secs = Some(n);
            }
        }
        if let Ok(s) = std::env::var("LOCALBRIEF_SENTIMENT_DAYS") {
            if let Ok(n) = s.parse::<u32>() {
                cfg.sentiment_days = Some(n);
            }
        }
        Ok(cfg)
    }

    /// Returns the gateway request timeout in seconds. Defaults to 10 if unset.
    pub fn request_timeout_or_default(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// Returns the sentiment history window in days. Defaults to 7 if unset.
    pub fn sentiment_days_or_default(&self) -> u32 {
        self.sentiment_days.unwrap_or(DEFAULT_SENTIMENT_DAYS)
    }

    /// Returns the settings directory. Defaults to "./data".
    pub fn data_dir_or_default(&self) -> String {
        self.data_dir
            .clone()
            .or_else(|| std::env::var("LOCALBRIEF_DATA_DIR").ok())
            .unwrap_or_else(|| "./data".to_string())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Endpoint Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the data endpoint URL from config or LOCALBRIEF_DATA_URL env.
    pub fn data_url(&self) -> Option<String> {
        self.data_url
            .clone()
            .or_else(|| std::env::var("LOCALBRIEF_DATA_URL").ok())
    }

    /// Returns the weather endpoint URL from config or LOCALBRIEF_WEATHER_URL env.
    pub fn weather_url(&self) -> Option<String> {
        self.weather_url
            .clone()
            .or_else(|| std::env::var("LOCALBRIEF_WEATHER_URL").ok())
    }

    /// Returns the district list endpoint from config or LOCALBRIEF_DISTRICTS_URL env (optional).
    pub fn districts_url(&self) -> Option<String> {
        self.districts_url
            .clone()
            .or_else(|| std::env::var("LOCALBRIEF_DISTRICTS_URL").ok())
    }

    /// Returns true if both live endpoints are configured.
    pub fn is_api_configured(&self) -> bool {
        self.data_url().is_some() && self.weather_url().is_some()
    }

    /// Returns true when the built-in demo gateway was requested.
    pub fn demo_mode(&self) -> bool {
        self.demo.unwrap_or(false)
    }

    /// Returns true when data requests should go out as GET query strings.
    pub fn use_http_get(&self) -> bool {
        self.http_get.unwrap_or(false)
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
