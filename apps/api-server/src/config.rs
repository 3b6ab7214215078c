//! Application configuration loaded from environment variables.

use std::env;

use roster_core::domain::Text;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Deployment label, only used in startup logs.
    pub env: String,
    /// Byte bound applied to new post text.
    pub post_text_max_len: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            env: env::var("ENV").unwrap_or_else(|_| "development".to_string()),
            post_text_max_len: env::var("POST_TEXT_MAX_LEN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Text::MAX_LEN),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            env: "development".to_string(),
            post_text_max_len: Text::MAX_LEN,
        }
    }
}
