use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

const REQUIRED_TOKENS: [&str; 3] = [PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID];

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,

    pub endpoint: String,
    pub telegram_api_base_url: String,

    pub retry_period: Duration,
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment (after `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing = missing_tokens(&get);
        if !missing.is_empty() {
            return Err(ConfigError::MissingTokens(missing));
        }

        let retry_period = Duration::from_secs(parse_secs(
            "RETRY_PERIOD_SECS",
            get("RETRY_PERIOD_SECS"),
            DEFAULT_RETRY_PERIOD_SECS,
        )?);
        let http_timeout = Duration::from_secs(parse_secs(
            "HTTP_TIMEOUT_SECS",
            get("HTTP_TIMEOUT_SECS"),
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?);

        Ok(Self {
            practicum_token: get(PRACTICUM_TOKEN).unwrap_or_default(),
            telegram_token: get(TELEGRAM_TOKEN).unwrap_or_default(),
            telegram_chat_id: get(TELEGRAM_CHAT_ID).unwrap_or_default(),
            endpoint: get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_base_url: get("TELEGRAM_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE_URL.to_string()),
            retry_period,
            http_timeout,
        })
    }
}

/// True when all three credentials are present and non-empty.
pub fn check_tokens<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    missing_tokens(&|key: &str| lookup(key).filter(|v| !v.trim().is_empty())).is_empty()
}

fn missing_tokens(get: &dyn Fn(&str) -> Option<String>) -> Vec<&'static str> {
    REQUIRED_TOKENS
        .iter()
        .copied()
        .filter(|key| get(*key).is_none())
        .collect()
}

fn parse_secs(key: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().parse::<u64>() {
            Ok(secs) if secs >= 1 => Ok(secs),
            _ => Err(ConfigError::Invalid {
                key,
                value,
                expected: "positive whole number of seconds",
            }),
        },
    }
}
