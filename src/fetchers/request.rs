use super::Fetcher;
use crate::config::{ExtractConfig, DEFAULT_USER_AGENT};
use crate::error::ImportError;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use std::time::Duration;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ImportError> {
        Self::with_user_agent(timeout.unwrap_or(Duration::from_secs(15)), DEFAULT_USER_AGENT)
    }

    pub fn from_config(config: &ExtractConfig) -> Result<Self, ImportError> {
        Self::with_user_agent(config.timeout(), &config.user_agent)
    }

    fn with_user_agent(timeout: Duration, user_agent: &str) -> Result<Self, ImportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<Response, ImportError> {
        debug!("RequestFetcher: GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response)
    }
}

#[async_trait]
impl Fetcher for RequestFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, ImportError> {
        let html = self.get(url).await?.text().await?;
        Ok(html)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ImportError> {
        let bytes = self.get(url).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .match_header("user-agent", DEFAULT_USER_AGENT)
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let fetcher = RequestFetcher::new(None).unwrap();
        let body = fetcher
            .fetch_text(&format!("{}/page", server.url()))
            .await
            .unwrap();

        assert_eq!(body, "<html></html>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_a_fetch_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = RequestFetcher::new(Some(Duration::from_secs(5))).unwrap();
        let result = fetcher.fetch_bytes(&format!("{}/missing", server.url())).await;

        assert!(matches!(result, Err(ImportError::FetchError(_))));
    }
}
