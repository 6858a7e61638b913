use crate::domain::ports::PageSource;
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Plain GET with the client's defaults: no retries, no custom timeout or redirect policy.
#[derive(Debug, Clone, Default)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl PageSource for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Fetching page: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Page response status: {}", status);

        if status != StatusCode::OK {
            return Err(CheckError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Read {} bytes from page", body.len());
        Ok(body.to_vec())
    }
}
