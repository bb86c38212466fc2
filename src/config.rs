//! Build-time Configuration
//!
//! Values are baked in at compile time from the environment of the
//! `trunk build` invocation, e.g. `API_URL=https://boards.example.com trunk build`.

use log::LevelFilter;

/// REST server used when `API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Owner of created boards and tasks when `USER_ID` is not set
pub const DEFAULT_USER_ID: u32 = 1;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Application configuration, provided via context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST server, without trailing slash
    pub api_base_url: String,
    /// User id attached to created boards and tasks
    pub user_id: u32,
    /// Minimum level written to the browser console
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read configuration captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("USER_ID"),
            option_env!("LOG_LEVEL"),
        )
    }

    /// Build configuration from raw optional values, falling back to defaults
    pub fn from_values(api_url: Option<&str>, user_id: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let user_id = user_id
            .and_then(|id| id.trim().parse().ok())
            .unwrap_or(DEFAULT_USER_ID);

        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { api_base_url, user_id, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
