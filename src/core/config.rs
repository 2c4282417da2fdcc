use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::error::ConfigError;

pub const REQUIRED_VARIABLES: [&str; 4] = ["TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID", "API_KEY", "API_ID"];

/// Upstream rejects nothing below this, and fewer results make gaps between polls likely.
pub const MIN_RESULTS_PER_PAGE: u32 = 5;

/// Newest-first ordering is what the novelty filter relies on.
pub const SORT_ORDER: &str = "date";

#[derive(Clone)]
pub struct Config {
    pub adzuna: AdzunaConfig,
    pub telegram: TelegramConfig,
    pub polling: PollingConfig,
}

#[derive(Clone)]
pub struct AdzunaConfig {
    pub app_id: String,
    pub app_key: String,
    pub base_url: String,
    pub country: String,
    pub results_per_page: u32,
    pub keyword: String,
    pub request_timeout: Duration,
}

#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_url: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct PollingConfig {
    pub interval: Duration,
}

impl AdzunaConfig {
    /// Search endpoint for the configured country, first page.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/search/1",
            self.base_url.trim_end_matches('/'),
            self.country
        )
    }
}

impl fmt::Debug for AdzunaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdzunaConfig")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("country", &self.country)
            .field("results_per_page", &self.results_per_page)
            .field("keyword", &self.keyword)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("adzuna", &self.adzuna)
            .field("telegram", &self.telegram)
            .field("polling", &self.polling)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// Empty values count as unset. Every missing required variable is
    /// reported at once rather than failing on the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let missing: Vec<String> = REQUIRED_VARIABLES
            .into_iter()
            .filter(|name| get(*name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }
        let required = |name: &str| get(name).unwrap_or_default();

        let results_per_page: u32 = parse_or(&get, "RESULTS_PER_PAGE", MIN_RESULTS_PER_PAGE)?;
        if results_per_page < MIN_RESULTS_PER_PAGE {
            return Err(ConfigError::InvalidValue {
                name: "RESULTS_PER_PAGE",
                value: results_per_page.to_string(),
                reason: format!("must be at least {}", MIN_RESULTS_PER_PAGE),
            });
        }

        let interval_secs: u64 = parse_or(&get, "POLL_INTERVAL_SECS", 600)?;
        if interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "POLL_INTERVAL_SECS",
                value: interval_secs.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        let timeout_secs: u64 = parse_or(&get, "REQUEST_TIMEOUT_SECS", 30)?;

        Ok(Config {
            adzuna: AdzunaConfig {
                app_id: required("API_ID"),
                app_key: required("API_KEY"),
                base_url: get("ADZUNA_BASE_URL")
                    .unwrap_or_else(|| "https://api.adzuna.com/v1/api/jobs".to_string()),
                country: get("ADZUNA_COUNTRY").unwrap_or_else(|| "mx".to_string()),
                results_per_page,
                keyword: get("SEARCH_KEYWORD").unwrap_or_else(|| "python".to_string()),
                request_timeout: Duration::from_secs(timeout_secs),
            },
            telegram: TelegramConfig {
                bot_token: required("TELEGRAM_TOKEN"),
                chat_id: required("TELEGRAM_CHAT_ID"),
                api_url: get("TELEGRAM_API_URL")
                    .unwrap_or_else(|| "https://api.telegram.org".to_string()),
                request_timeout: Duration::from_secs(timeout_secs),
            },
            polling: PollingConfig {
                interval: Duration::from_secs(interval_secs),
            },
        })
    }
}

fn parse_or<T, G>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            value: raw,
            reason: e.to_string(),
        }),
    }
}
