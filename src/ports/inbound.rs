//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the interactive terminal UI drives the application.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the app loop: onboard on first launch, then serve the main menu
    /// (briefing, sentiment detail, restaurants, settings) until exit.
    async fn run(&self) -> Result<(), DomainError>;
}
