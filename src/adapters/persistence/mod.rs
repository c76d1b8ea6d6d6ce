//! Persistence adapters. JSON settings file.

pub mod settings_json;

pub use settings_json::SettingsJson;
