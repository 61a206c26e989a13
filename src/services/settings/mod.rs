mod mapper;
mod service;

pub use mapper::{build_countdowns, refresh_interval};
pub use service::{SettingsService, CONFIG_ENV_VAR};
