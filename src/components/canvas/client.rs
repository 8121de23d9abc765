use super::models::Event;
use crate::config::Config;
use crate::error::{missing_token_error, upstream_error, CanvasResult, Error};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

/// Something that can list a user's upcoming events
#[async_trait]
pub trait AssignmentSource: Send + Sync + 'static {
    /// Fetch the upcoming events exactly as Canvas returned them
    async fn fetch_raw(&self, token: &str) -> CanvasResult<Vec<Value>>;

    /// Fetch the upcoming events and decode them
    async fn fetch_events(&self, token: &str) -> CanvasResult<Vec<Event>> {
        let raw = self.fetch_raw(token).await?;
        parse_events(raw)
    }
}

/// Decode raw upcoming event objects
pub fn parse_events(raw: Vec<Value>) -> CanvasResult<Vec<Event>> {
    raw.into_iter()
        .map(|value| serde_json::from_value::<Event>(value).map_err(Error::from))
        .collect()
}

/// HTTP client for the Canvas upcoming events endpoint
#[derive(Debug, Clone)]
pub struct CanvasClient {
    client: Client,
    url: Url,
}

impl CanvasClient {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    pub fn from_config(config: &Config) -> CanvasResult<Self> {
        Ok(Self::new(config.upcoming_events_url()?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl AssignmentSource for CanvasClient {
    async fn fetch_raw(&self, token: &str) -> CanvasResult<Vec<Value>> {
        let token = token.trim();
        if token.is_empty() {
            return Err(missing_token_error());
        }

        debug!("Requesting {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(upstream_error(status.as_u16(), &error_body));
        }

        let body = response.text().await?;
        let events: Vec<Value> = serde_json::from_str(&body)?;
        info!("Fetched {} upcoming events", events.len());

        Ok(events)
    }
}
