use std::time::Duration;

use homework_core::{ErrorKind, PollError};
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::BotConfig;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub token: String,
    /// `None` leaves the transport defaults in place.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl FetchSettings {
    pub fn from_config(config: &BotConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// Source of raw homework status payloads.
#[async_trait::async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches homework updates since the Unix timestamp `from_date`.
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestStatusSource {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestStatusSource {
    pub fn new(settings: FetchSettings) -> Result<Self, PollError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| PollError::new(ErrorKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn request_url(&self, from_date: i64) -> Result<reqwest::Url, PollError> {
        let mut url = reqwest::Url::parse(&self.settings.endpoint).map_err(|err| {
            PollError::new(
                ErrorKind::Network,
                format!("invalid endpoint {}: {err}", self.settings.endpoint),
            )
        })?;
        url.query_pairs_mut()
            .append_pair("from_date", &from_date.to_string());
        Ok(url)
    }
}

#[async_trait::async_trait]
impl StatusSource for ReqwestStatusSource {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        let url = self.request_url(from_date)?;

        let response = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.settings.token))
            .send()
            .await
            .map_err(|err| {
                PollError::new(ErrorKind::Network, format!("GET {url} failed: {err}"))
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(PollError::new(
                ErrorKind::Endpoint(status.as_u16()),
                format!("GET {url} answered {status}"),
            ));
        }

        let body = response.bytes().await.map_err(|err| {
            PollError::new(ErrorKind::Network, format!("GET {url} body failed: {err}"))
        })?;
        serde_json::from_slice(&body)
            .map_err(|err| PollError::new(ErrorKind::Format, format!("GET {url}: {err}")))
    }
}
