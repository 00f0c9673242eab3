//! HTTP fetching of the raw feed body.

use reqwest::Url;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, SugarError};

/// Client fetching the feed from a single configured endpoint
#[derive(Debug, Clone)]
pub struct FeedClient {
    url: Url,
    http: reqwest::Client,
}

impl FeedClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            http: reqwest::Client::new(),
        }
    }

    /// Build a client for the endpoint in `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.server_url().clone())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the feed body
    ///
    /// Fails with [`SugarError::Network`] when the request cannot complete,
    /// [`SugarError::HttpStatus`] for non-2xx responses and
    /// [`SugarError::EmptyBody`] when a 2xx response carries no content.
    pub async fn fetch(&self) -> Result<String> {
        debug!("Fetching GET {}", self.url);

        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SugarError::HttpStatus {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| self.network_error(e))?;
        if body.is_empty() {
            return Err(SugarError::EmptyBody {
                url: self.url.to_string(),
            });
        }

        debug!("Received {} bytes from {}", body.len(), self.url);
        debug!("{}", body);

        Ok(body)
    }

    fn network_error(&self, source: reqwest::Error) -> SugarError {
        SugarError::Network {
            url: self.url.to_string(),
            source,
        }
    }
}
