//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. The API variants are the
//! single error surface for remote fetches: a failed fetch is reported, never
//! papered over with substitute data.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Remote endpoint rejected the request: non-2xx status, or a 2xx body
    /// with `success: false`. Carries the HTTP status for the UI.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Request did not complete within the configured timeout.
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Transport or payload failure before a status could be interpreted
    /// (connection refused, malformed JSON, ...).
    #[error("gateway error: {0}")]
    Gateway(String),

    #[error("settings store error: {0}")]
    Settings(String),

    /// Interactive prompt failed or was cancelled.
    #[error("input error: {0}")]
    Input(String),

    #[error("unknown district: {0}")]
    District(String),
}
