use crate::error::ImportError;
use async_trait::async_trait;

mod request;

pub use self::request::RequestFetcher;

/// HTTP GET access used by the pipeline, one call per page and per image.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, ImportError>;

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ImportError>;
}
