use std::time::Duration;

use thiserror::Error;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const PRACTICUM_ENDPOINT: &str = "PRACTICUM_ENDPOINT";
pub const RETRY_PERIOD: &str = "HOMEWORK_RETRY_PERIOD";

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is missing")]
    Missing(&'static str),
    #[error("environment variable {0} is empty")]
    Empty(&'static str),
    #[error("{name} is not a valid url: {message}")]
    InvalidUrl { name: &'static str, message: String },
    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidPeriod { name: &'static str, value: String },
}

/// Everything the poller needs, read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub retry_period: Duration,
}

// Tokens stay out of logs.
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("retry_period", &self.retry_period)
            .finish()
    }
}

impl BotConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, then checks it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let retry_period = match lookup(RETRY_PERIOD) {
            None => DEFAULT_RETRY_PERIOD,
            Some(raw) => parse_period(&raw).ok_or(ConfigError::InvalidPeriod {
                name: RETRY_PERIOD,
                value: raw,
            })?,
        };

        let config = Self {
            practicum_token: required(PRACTICUM_TOKEN)?,
            telegram_token: required(TELEGRAM_TOKEN)?,
            telegram_chat_id: required(TELEGRAM_CHAT_ID)?,
            endpoint: lookup(PRACTICUM_ENDPOINT).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            retry_period,
        };
        config.check()?;
        Ok(config)
    }

    /// Rejects empty secrets and an unparsable endpoint.
    pub fn check(&self) -> Result<(), ConfigError> {
        let values = [
            (PRACTICUM_TOKEN, &self.practicum_token),
            (TELEGRAM_TOKEN, &self.telegram_token),
            (TELEGRAM_CHAT_ID, &self.telegram_chat_id),
            (PRACTICUM_ENDPOINT, &self.endpoint),
        ];
        for (name, value) in values {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(name));
            }
        }
        url::Url::parse(&self.endpoint).map_err(|err| ConfigError::InvalidUrl {
            name: PRACTICUM_ENDPOINT,
            message: err.to_string(),
        })?;
        if self.retry_period.is_zero() {
            return Err(ConfigError::InvalidPeriod {
                name: RETRY_PERIOD,
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_period(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
