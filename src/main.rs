//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; the flows live behind the input port.

use dotenv::dotenv;
use localbrief::adapters::api::{DemoGateway, HttpBriefingGateway};
use localbrief::adapters::persistence::SettingsJson;
use localbrief::adapters::ui::tui::TuiInputPort;
use localbrief::ports::{BriefingGateway, InputPort, SettingsStore};
use localbrief::usecases::{BriefingService, OnboardingService, SettingsService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    localbrief::adapters::ui::init_ui();

    let cfg = localbrief::shared::config::AppConfig::load().unwrap_or_default();

    let data_dir = cfg.data_dir_or_default();
    let settings_path = PathBuf::from(&data_dir).join("settings.json");
    info!(path = %settings_path.display(), "settings file");

    // --- Gateway: live endpoints, or the demo feed when asked for ---
    let gateway: Arc<dyn BriefingGateway> = if cfg.demo_mode() {
        warn!("LOCALBRIEF_DEMO is set, serving canned data");
        Arc::new(DemoGateway::new())
    } else if cfg.is_api_configured() {
        let data_url = cfg.data_url().unwrap_or_default();
        let weather_url = cfg.weather_url().unwrap_or_default();
        info!(data_url = %data_url, weather_url = %weather_url, "briefing API configured");
        Arc::new(
            HttpBriefingGateway::new(
                data_url,
                weather_url,
                cfg.districts_url(),
                cfg.request_timeout_or_default(),
                cfg.use_http_get(),
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    } else {
        anyhow::bail!(
            "Set LOCALBRIEF_DATA_URL and LOCALBRIEF_WEATHER_URL (env or .env), or run with LOCALBRIEF_DEMO=1"
        );
    };

    let store: Arc<dyn SettingsStore> = Arc::new(SettingsJson::new(&settings_path));

    // --- Services ---
    let briefing_service = Arc::new(BriefingService::new(Arc::clone(&gateway)));
    let onboarding_service = Arc::new(OnboardingService::new(
        Arc::clone(&gateway),
        Arc::clone(&store),
    ));
    let settings_service = Arc::new(SettingsService::new(Arc::clone(&store)));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        briefing_service,
        onboarding_service,
        settings_service,
        cfg.sentiment_days_or_default(),
    ));

    // --- Run (onboarding on first launch, then the main menu) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
