//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::fetch::{DocumentSource, FetchError};

/// A source that hands back fixed text, for tests that don't need HTTP.
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        Ok(self.text.clone())
    }
}

/// A source whose fetch always fails with a network error.
pub struct FailingSource;

#[async_trait]
impl DocumentSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        Err(FetchError::Network("connection refused".to_string()))
    }
}
