//! HTTP transport abstraction.
//!
//! Embedding clients never open connections themselves. They describe a JSON
//! POST as an [`HttpRequest`] and hand it to whatever [`HttpTransport`] the
//! caller injected, so proxying, certificate handling, and test doubles are
//! all the caller's choice.

use async_trait::async_trait;

use crate::Result;

/// A JSON POST request to an embedding backend.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Absolute request URL.
    pub url: String,

    /// Extra request headers, in insertion order.
    pub headers: Vec<(String, String)>,

    /// JSON request body.
    pub body: serde_json::Value,
}

impl HttpRequest {
    /// Create a request with no extra headers.
    pub fn post<S: Into<String>>(url: S, body: serde_json::Value) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body,
        }
    }

    /// Add a header.
    #[must_use]
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add an `Authorization: Bearer` header.
    #[must_use]
    pub fn with_bearer_auth(self, token: &str) -> Self {
        self.with_header("Authorization", format!("Bearer {token}"))
    }

    /// Look up a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Sends JSON requests on behalf of embedding clients.
///
/// Implementations must map non-success HTTP statuses to errors; a returned
/// `Ok` value is always a decoded success body.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// POST `request.body` as JSON and decode the JSON response.
    async fn post_json(&self, request: HttpRequest) -> Result<serde_json::Value>;

    /// Get a human-readable name for this transport.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
