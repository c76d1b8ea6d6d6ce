//! Application use cases. Orchestrate domain logic via ports.

pub mod briefing_service;
pub mod onboarding_service;
pub mod settings_service;

pub use briefing_service::{BriefingService, Dashboard};
pub use onboarding_service::OnboardingService;
pub use settings_service::SettingsService;
