//! The HTTP capability the client is built over.
//!
//! `SlackClient` never talks to the network directly; it hands a fully built
//! path-and-query string to a [`SlackTransport`] and gets the raw response
//! body back. [`HttpTransport`] is the production implementation; tests swap
//! in an in-memory fake.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;

use crate::errors::SlackError;

/// Root of Slack's Web API.
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// One HTTP round trip against the Slack Web API.
///
/// Implementations must be safe for sequential reuse across calls; the
/// client issues at most one request at a time.
#[async_trait]
pub trait SlackTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the request fails or the response status is not 2xx.
    async fn get(&self, path_and_query: &str) -> Result<String, SlackError>;

    /// # Errors
    ///
    /// Returns an error if the request fails or the response status is not 2xx.
    async fn post(&self, path_and_query: &str) -> Result<String, SlackError>;
}

/// Production transport backed by a shared `reqwest` client.
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the transport at a different API root (proxies, local test servers).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    async fn read_body(resp: reqwest::Response) -> Result<String, SlackError> {
        if !resp.status().is_success() {
            return Err(SlackError::HttpError(format!("HTTP {}", resp.status())));
        }

        Ok(resp.text().await?)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlackTransport for HttpTransport {
    async fn get(&self, path_and_query: &str) -> Result<String, SlackError> {
        let resp = HTTP_CLIENT.get(self.url_for(path_and_query)).send().await?;
        Self::read_body(resp).await
    }

    async fn post(&self, path_and_query: &str) -> Result<String, SlackError> {
        let resp = HTTP_CLIENT
            .post(self.url_for(path_and_query))
            .send()
            .await?;
        Self::read_body(resp).await
    }
}
