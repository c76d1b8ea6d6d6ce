//! Shared infrastructure concerns (configuration).

pub mod config;

pub use config::AppConfig;
