//! Infrastructure adapters. Implement outbound ports.
//!
//! HTTP gateway, settings file, terminal UI. Map errors to DomainError.

pub mod api;
pub mod persistence;
pub mod ui;
