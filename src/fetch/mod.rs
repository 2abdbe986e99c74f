pub mod file;
pub mod http;
pub mod source;

pub use file::FileSource;
pub use http::HttpSource;
pub use source::{DocumentSource, FetchError};
