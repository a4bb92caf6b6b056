//! Settings persistence.

mod service;

pub use service::SettingsService;
