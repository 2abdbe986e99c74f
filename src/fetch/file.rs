//! Local file document source, for rendering documents saved to disk.

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

use super::source::{DocumentSource, FetchError};

pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        info!("Reading document from {}", self.name);
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(FetchError::Io)
    }
}
