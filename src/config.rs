use anyhow::{Context, Result};

/// Deployment environment, controls where analytics events go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> AppEnv {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => AppEnv::Production,
            _ => AppEnv::Development,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Telegram (contact form forwarding)
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub telegram_api_base: String,

    // Server
    pub port: u16,

    // Public site URL, used for sitemap entries
    pub base_url: String,

    // Environment
    pub app_env: AppEnv,

    // Analytics
    pub analytics_collector_url: Option<String>,

    // Admin access to the metrics endpoint (open when unset)
    pub admin_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Telegram
            telegram_bot_token: std::env::var("TELEGRAM_BOT_TOKEN")
                .context("TELEGRAM_BOT_TOKEN not set")?,
            telegram_chat_id: std::env::var("TELEGRAM_CHAT_ID")
                .context("TELEGRAM_CHAT_ID not set")?,
            telegram_api_base: std::env::var("TELEGRAM_API_BASE")
                .unwrap_or_else(|_| "https://api.telegram.org".to_string()),

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "https://www.ostt.uz".to_string())
                .trim_end_matches('/')
                .to_string(),

            app_env: AppEnv::parse(
                &std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            ),

            // Analytics
            analytics_collector_url: std::env::var("ANALYTICS_COLLECTOR_URL").ok(),

            // Admin
            admin_api_key: std::env::var("ADMIN_API_KEY").ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_env_parse_production() {
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("prod"), AppEnv::Production);
        assert_eq!(AppEnv::parse("PRODUCTION"), AppEnv::Production);
    }

    #[test]
    fn test_app_env_parse_defaults_to_development() {
        assert_eq!(AppEnv::parse("development"), AppEnv::Development);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
        assert_eq!(AppEnv::parse(""), AppEnv::Development);
    }
}
