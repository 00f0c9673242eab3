//! Fetch, parse and render pipeline exposed to callers.

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::feed::{FeedClient, FeedParser};
use crate::models::Reading;
use crate::render::render_selection;

/// Entry point answering "what are my latest readings" queries
///
/// Each call performs one fetch and one parse; nothing is cached between
/// calls.
#[derive(Debug, Clone)]
pub struct SugarChecker {
    client: FeedClient,
    parser: FeedParser,
}

impl SugarChecker {
    pub fn new(config: &Config) -> Self {
        Self {
            client: FeedClient::from_config(config),
            parser: FeedParser::from_config(config),
        }
    }

    /// Fetch and parse the feed into readings, newest first
    pub async fn fetch_readings(&self) -> Result<Vec<Reading>> {
        let body = self.client.fetch().await?;
        let readings = self.parser.parse_with_policy(&body)?;

        info!(
            "Fetched {} readings from {}",
            readings.len(),
            self.client.url()
        );
        Ok(readings)
    }

    /// Fetch the feed and render the requested number of readings
    ///
    /// `requested` is the raw count supplied by the caller; `None` renders
    /// only the latest reading.
    pub async fn get_readings(&self, requested: Option<&str>) -> Result<String> {
        let readings = self.fetch_readings().await?;
        let text = render_selection(&readings, requested)?;

        debug!("Rendered reply: {}", text);
        Ok(text)
    }
}
