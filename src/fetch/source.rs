use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while retrieving a document. All of them are fatal
/// to a rendering run.
#[derive(Debug)]
pub enum FetchError {
    /// Source misconfigured (unparseable URL, unbuildable client).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-2xx status.
    Status { status: u16, url: String },
    /// Local file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status, url } => {
                write!(f, "HTTP error {status} fetching {url}")
            }
            FetchError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can hand back the raw text of a grid document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable description (URL or path), used in logs.
    fn name(&self) -> &str;

    /// Retrieves the whole document. Called once per run.
    async fn fetch(&self) -> Result<String, FetchError>;
}
