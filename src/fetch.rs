use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::ScrapeError;

/// Blocking page download. Implementations return the body only for
/// successful responses.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrapeError::Http {
                url: url.to_string(),
                source: e,
            })?;
        let body = response.bytes().map_err(|e| ScrapeError::Http {
            url: url.to_string(),
            source: e,
        })?;
        Ok(body.to_vec())
    }
}
