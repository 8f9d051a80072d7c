//! Homework engine: configuration, HTTP capabilities and the poll driver.
mod config;
mod fetch;
mod notify;
mod poller;

pub use config::{
    BotConfig, ConfigError, DEFAULT_ENDPOINT, DEFAULT_RETRY_PERIOD, PRACTICUM_ENDPOINT,
    PRACTICUM_TOKEN, RETRY_PERIOD, TELEGRAM_CHAT_ID, TELEGRAM_TOKEN,
};
pub use fetch::{FetchSettings, ReqwestStatusSource, StatusSource};
pub use notify::{Notifier, TelegramNotifier, TELEGRAM_API_BASE};
pub use poller::Poller;
