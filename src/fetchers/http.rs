use crate::error::{HarvestError, Result};
use crate::fetchers::PageSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches pages over HTTP(S) with a fixed User-Agent
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Build a client that identifies itself with `user_agent`
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| HarvestError::Http(e.to_string()))?;

        Ok(Self::with_client(client))
    }

    /// Use a preconfigured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn get(&self, url: &str, timeout: Duration) -> Result<String> {
        let parsed = Url::parse(url).map_err(|e| HarvestError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| classify(url, e))
    }
}

/// Map a transport error onto the harvest error taxonomy
fn classify(url: &str, error: reqwest::Error) -> HarvestError {
    if error.is_timeout() {
        HarvestError::Timeout(url.to_string())
    } else {
        HarvestError::Fetch {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
