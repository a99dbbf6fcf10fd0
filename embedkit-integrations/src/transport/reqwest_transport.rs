//! Default transport backed by `reqwest`.

use async_trait::async_trait;
use embedkit_core::{
    EmbedKitError, Result,
    traits::{HttpRequest, HttpTransport},
};
use std::time::Duration;
use tracing::{debug, warn};

/// Longest response-body excerpt kept in error messages.
const SNIPPET_LEN: usize = 240;

/// [`HttpTransport`] implementation using a shared `reqwest::Client`.
///
/// Bring your own client via [`ReqwestTransport::with_client`] to control
/// proxies, TLS roots, or connection pooling.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Create a transport whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbedKitError::transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<serde_json::Value> {
        let HttpRequest { url, headers, body } = request;
        debug!(%url, "POST");

        let mut builder = self.client.post(&url).json(&body);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| map_send_error(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);
            warn!(%status, %url, %snippet, "embedding request returned non-success status");
            return Err(status_error(status.as_u16(), snippet));
        }

        response.json::<serde_json::Value>().await.map_err(|e| {
            EmbedKitError::embedding(format!("failed to decode JSON response from {url}: {e}"))
        })
    }
}

fn map_send_error(url: &str, error: &reqwest::Error) -> EmbedKitError {
    if error.is_timeout() {
        EmbedKitError::timeout(format!("POST {url}"))
    } else {
        EmbedKitError::transport(format!("POST {url} failed: {error}"))
    }
}

fn status_error(status_code: u16, snippet: String) -> EmbedKitError {
    match status_code {
        401 | 403 => EmbedKitError::Authentication,
        429 => EmbedKitError::RateLimit,
        _ => EmbedKitError::server(status_code, snippet),
    }
}

fn make_snippet(text: &str) -> String {
    text.trim().chars().take(SNIPPET_LEN).collect()
}
