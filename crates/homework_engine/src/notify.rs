use homework_core::{ErrorKind, PollError};
use serde::Serialize;

use crate::BotConfig;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Delivers text to the configured chat.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), PollError>;
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Telegram Bot API `sendMessage` client.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &BotConfig) -> Self {
        Self::with_api_base(config, TELEGRAM_API_BASE)
    }

    pub fn with_api_base(config: &BotConfig, api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        }
    }

    fn delivery_error(text: &str, reason: impl std::fmt::Display) -> PollError {
        PollError::new(
            ErrorKind::Notification,
            format!("{reason}, message {text:?}"),
        )
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), PollError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let body = serde_json::to_vec(&SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        })
        .map_err(|err| Self::delivery_error(text, err))?;

        // The url embeds the bot token, so errors are reported without it.
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| Self::delivery_error(text, err.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::delivery_error(
                text,
                format!("telegram answered {status}"),
            ));
        }
        Ok(())
    }
}
