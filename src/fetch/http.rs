//! HTTP document source: one GET, no retries.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;

use super::source::{DocumentSource, FetchError};

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Builds a source for `url`. `timeout` bounds the whole request; `None`
    /// keeps reqwest's default (no overall timeout).
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let url = url.into();
        Url::parse(&url).map_err(|e| FetchError::Config(format!("invalid URL '{url}': {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Self { url, client })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        info!("Fetching document from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Document fetch failed: {} - {}", status, self.url);
            return Err(FetchError::Status {
                status,
                url: self.url.clone(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        info!("Fetched {} bytes", text.len());
        Ok(text)
    }
}
