//! Implements InputPort. Inquire-based interactive flows.
//!
//! Main menu, the three-step onboarding wizard, and the settings editor.

use crate::adapters::ui::{progress, render};
use crate::domain::{Category, CategoryToggles, DomainError, NOTIFICATION_TIMES, UserSettings};
use crate::ports::InputPort;
use crate::usecases::{BriefingService, OnboardingService, SettingsService};
use async_trait::async_trait;
use chrono::Local;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, InquireError, MultiSelect, Select};
use std::sync::Arc;

const MENU_BRIEFING: &str = "📋 오늘의 브리핑";
const MENU_SENTIMENT: &str = "📈 감성 온도 히스토리";
const MENU_RESTAURANTS: &str = "🍽️ 새로 문 연 가게 전체 보기";
const MENU_SETTINGS: &str = "⚙️ 설정";
const MENU_ONBOARDING: &str = "🔁 온보딩 다시 하기";
const MENU_QUIT: &str = "👋 종료";

const MAIN_MENU: [&str; 6] = [
    MENU_BRIEFING,
    MENU_SENTIMENT,
    MENU_RESTAURANTS,
    MENU_SETTINGS,
    MENU_ONBOARDING,
    MENU_QUIT,
];

/// Applies the coral theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let coral = Color::Rgb {
        r: 255,
        g: 107,
        b: 107,
    };
    let purple = Color::Rgb {
        r: 132,
        g: 94,
        b: 194,
    };

    let mut config = RenderConfig::default_colored();
    config.prompt_prefix = Styled::new("▸").with_fg(coral);
    config.answered_prompt_prefix = Styled::new("✔").with_fg(purple);
    config.highlighted_option_prefix = Styled::new("❯").with_fg(coral);
    config.selected_checkbox = Styled::new("◉").with_fg(coral);
    config.unselected_checkbox = Styled::new("○");
    config.help_message = StyleSheet::new().with_fg(Color::DarkGrey);
    config.answer = StyleSheet::new().with_fg(purple).with_attr(Attributes::BOLD);
    inquire::set_global_render_config(config);
}

fn prompt_err(e: InquireError) -> DomainError {
    DomainError::Input(e.to_string())
}

/// TUI adapter. Inquire prompts over the application services.
pub struct TuiInputPort {
    briefing: Arc<BriefingService>,
    onboarding: Arc<OnboardingService>,
    settings: Arc<SettingsService>,
    sentiment_days: u32,
}

impl TuiInputPort {
    pub fn new(
        briefing: Arc<BriefingService>,
        onboarding: Arc<OnboardingService>,
        settings: Arc<SettingsService>,
        sentiment_days: u32,
    ) -> Self {
        Self {
            briefing,
            onboarding,
            settings,
            sentiment_days,
        }
    }

    async fn show_dashboard(&self, settings: &UserSettings) {
        let bar = progress::spinner("브리핑을 모으는 중...");
        let dashboard = self.briefing.load_dashboard(settings).await;
        bar.finish_and_clear();
        println!(
            "{}",
            render::dashboard_screen(&dashboard, Local::now().date_naive())
        );
    }

    async fn show_sentiment(&self, settings: &UserSettings) {
        let bar = progress::spinner("감성 온도를 불러오는 중...");
        let history = self
            .briefing
            .sentiment_history(&settings.district, self.sentiment_days)
            .await;
        bar.finish_and_clear();
        match history {
            Ok(history) => println!("{}", render::sentiment_screen(&history)),
            Err(e) => println!("{}", render::error_card("감성 온도", &e)),
        }
    }

    async fn show_restaurants(&self, settings: &UserSettings) {
        let bar = progress::spinner("새 가게를 찾는 중...");
        let listing = self.briefing.restaurants(&settings.district).await;
        bar.finish_and_clear();
        match listing {
            Ok(listing) => {
                println!("{}", render::restaurants_screen(&settings.district, &listing));
            }
            Err(e) => println!("{}", render::error_card("맛집", &e)),
        }
    }

    /// Three steps: district, categories, confirmation. Declining the
    /// confirmation restarts the wizard with the fresh answers as defaults.
    /// The notification schedule keeps its saved (or default) value; it is
    /// edited from the settings menu.
    async fn run_onboarding(
        &self,
        current: Option<&UserSettings>,
    ) -> Result<UserSettings, DomainError> {
        println!("우리 동네 소식을 모아 아침마다 브리핑해드려요.");
        println!("몇 가지만 여쭤볼게요.\n");

        let options = self.onboarding.district_options().await;
        let mut draft = current.cloned();

        loop {
            let defaults = draft.clone().unwrap_or_default();

            let start = options
                .iter()
                .position(|d| *d == defaults.district)
                .unwrap_or(0);
            let district = Select::new("1/3 · 살고 계신 동네를 선택해주세요", options.clone())
                .with_starting_cursor(start)
                .with_page_size(10)
                .prompt()
                .map_err(prompt_err)?;

            let preselected: Vec<usize> = Category::ALL
                .iter()
                .enumerate()
                .filter(|(_, c)| defaults.categories.is_enabled(**c))
                .map(|(i, _)| i)
                .collect();
            let picked = MultiSelect::new("2/3 · 받아볼 소식을 골라주세요", Category::ALL.to_vec())
                .with_default(&preselected)
                .with_help_message("스페이스로 선택, →로 전체 선택, 엔터로 확정")
                .prompt()
                .map_err(prompt_err)?;

            let settings = UserSettings {
                district,
                categories: CategoryToggles::from_selection(&picked),
                notification_time: defaults.notification_time.clone(),
                weekend_notifications: defaults.weekend_notifications,
            };

            println!("\n{}", render::settings_summary(&settings));
            let confirmed = Confirm::new("3/3 · 이대로 시작할까요?")
                .with_default(true)
                .prompt()
                .map_err(prompt_err)?;
            if confirmed {
                self.onboarding.complete(&settings).await?;
                println!(
                    "✅ 설정 완료! 매일 아침 {}에 만나요.\n",
                    settings.notification_time
                );
                return Ok(settings);
            }
            draft = Some(settings);
        }
    }

    /// One pass over every preference with the saved values preselected.
    async fn edit_settings(&self) -> Result<UserSettings, DomainError> {
        let current = self.settings.current().await?;
        println!("{}", render::settings_summary(&current));

        let options = self.onboarding.district_options().await;
        let start = options
            .iter()
            .position(|d| *d == current.district)
            .unwrap_or(0);
        let district = Select::new("동네", options)
            .with_starting_cursor(start)
            .with_page_size(10)
            .prompt()
            .map_err(prompt_err)?;

        let preselected: Vec<usize> = Category::ALL
            .iter()
            .enumerate()
            .filter(|(_, c)| current.categories.is_enabled(**c))
            .map(|(i, _)| i)
            .collect();
        let picked = MultiSelect::new("브리핑 카테고리", Category::ALL.to_vec())
            .with_default(&preselected)
            .prompt()
            .map_err(prompt_err)?;

        let time_start = NOTIFICATION_TIMES
            .iter()
            .position(|t| *t == current.notification_time)
            .unwrap_or(1);
        let time = Select::new("알림 시간", NOTIFICATION_TIMES.to_vec())
            .with_starting_cursor(time_start)
            .prompt()
            .map_err(prompt_err)?;
        let weekend = Confirm::new("주말에도 브리핑을 받을까요?")
            .with_default(current.weekend_notifications)
            .prompt()
            .map_err(prompt_err)?;

        let updated = UserSettings {
            district,
            categories: CategoryToggles::from_selection(&picked),
            notification_time: time.to_string(),
            weekend_notifications: weekend,
        };
        self.settings.update(&updated).await?;
        println!("✅ 설정이 저장되었습니다.\n");
        Ok(updated)
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut settings = match self.onboarding.saved_settings().await? {
            Some(saved) => saved,
            // First launch: the wizard runs before anything else. Cancelling
            // it just exits; nothing is persisted.
            None => match self.run_onboarding(None).await {
                Ok(settings) => settings,
                Err(DomainError::Input(_)) => {
                    println!("다음에 다시 설정할 수 있어요. 👋");
                    return Ok(());
                }
                Err(e) => return Err(e),
            },
        };

        loop {
            let choice = match Select::new("무엇을 볼까요?", MAIN_MENU.to_vec()).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(prompt_err(e)),
            };

            match choice {
                MENU_BRIEFING => self.show_dashboard(&settings).await,
                MENU_SENTIMENT => self.show_sentiment(&settings).await,
                MENU_RESTAURANTS => self.show_restaurants(&settings).await,
                MENU_SETTINGS => match self.edit_settings().await {
                    Ok(updated) => settings = updated,
                    Err(DomainError::Input(_)) => println!("변경을 취소했어요.\n"),
                    Err(e) => return Err(e),
                },
                MENU_ONBOARDING => {
                    let rerun = self.run_onboarding(Some(&settings)).await;
                    match rerun {
                        Ok(updated) => settings = updated,
                        Err(DomainError::Input(_)) => println!("변경을 취소했어요.\n"),
                        Err(e) => return Err(e),
                    }
                }
                _ => break,
            }
        }

        println!("👋 내일 아침에 또 만나요!");
        Ok(())
    }
}
