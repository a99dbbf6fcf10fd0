//! Ollama embedding client.
//!
//! Talks to `POST {root}/api/embed`. The configured `base_url` is the server
//! root; callers that hold the API-prefixed URL (`http://host:11434/api`)
//! should pass it through [`server_root`] first.

use async_trait::async_trait;
use embedkit_core::{
    EmbedKitError, Result,
    traits::{Embedder, HttpRequest, HttpTransport},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::{HEALTH_CHECK_TEXT, ensure_batch_len, join_url};

/// Strip a single trailing `/api` from an Ollama URL.
///
/// Only an exact `/api` suffix is removed; anything else is returned
/// unchanged.
///
/// ```rust
/// use embedkit_integrations::embedders::ollama::server_root;
///
/// assert_eq!(server_root("http://localhost:11434/api"), "http://localhost:11434");
/// assert_eq!(server_root("http://localhost:11434"), "http://localhost:11434");
/// ```
pub fn server_root(base_url: &str) -> &str {
    base_url.strip_suffix("/api").unwrap_or(base_url)
}

/// Configuration for [`OllamaEmbedder`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OllamaConfig {
    /// Ollama model name, e.g. `nomic-embed-text`.
    pub model: String,

    /// Server root, without the `/api` prefix.
    pub base_url: String,

    /// Sent verbatim as the request's `options` object.
    pub request_options: serde_json::Map<String, serde_json::Value>,

    /// Texts per request; `None` sends every input in one request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,
}

impl OllamaConfig {
    /// Option key used to request plain float vectors.
    pub const ENCODING_FORMAT_KEY: &'static str = "encoding-format";

    /// Create a configuration with no request options.
    pub fn new<M: Into<String>, U: Into<String>>(model: M, base_url: U) -> Self {
        Self {
            model: model.into(),
            base_url: base_url.into(),
            request_options: serde_json::Map::new(),
            batch_size: None,
        }
    }

    /// Add a request option.
    #[must_use]
    pub fn with_request_option<K: Into<String>, V: Into<serde_json::Value>>(
        mut self,
        key: K,
        value: V,
    ) -> Self {
        self.request_options.insert(key.into(), value.into());
        self
    }

    /// Ask the server for floating-point vectors.
    #[must_use]
    pub fn with_float_encoding(self) -> Self {
        self.with_request_option(Self::ENCODING_FORMAT_KEY, "float")
    }

    /// Limit the number of texts per request.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }
}

#[derive(Debug, Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<&'a serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct OllamaEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Embedding client for an Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaEmbedder {
    config: OllamaConfig,
    transport: Arc<dyn HttpTransport>,
}

impl OllamaEmbedder {
    /// Create a client that sends requests through `transport`.
    pub fn new(config: OllamaConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Build the request for one batch of texts.
    pub fn request_for(&self, batch: &[&str]) -> Result<HttpRequest> {
        let body = serde_json::to_value(OllamaEmbedRequest {
            model: &self.config.model,
            input: batch,
            options: (!self.config.request_options.is_empty())
                .then_some(&self.config.request_options),
        })?;

        Ok(HttpRequest::post(
            join_url(&self.config.base_url, "api/embed"),
            body,
        ))
    }
}

#[async_trait]
impl Embedder for OllamaEmbedder {
    async fn embed_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let batch_size = self.config.batch_size.unwrap_or(texts.len()).max(1);
        let mut embeddings = Vec::with_capacity(texts.len());

        for batch in texts.chunks(batch_size) {
            debug!(
                model = %self.config.model,
                batch_len = batch.len(),
                "requesting ollama embeddings"
            );
            let response = self.transport.post_json(self.request_for(batch)?).await?;
            let decoded: OllamaEmbedResponse = serde_json::from_value(response).map_err(|e| {
                EmbedKitError::embedding(format!(
                    "failed to decode ollama response: {e}; expected `embeddings[][]`"
                ))
            })?;
            ensure_batch_len("ollama", batch.len(), &decoded.embeddings)?;
            embeddings.extend(decoded.embeddings);
        }

        Ok(embeddings)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn batch_size(&self) -> Option<usize> {
        self.config.batch_size
    }

    async fn health_check(&self) -> Result<()> {
        self.embed(HEALTH_CHECK_TEXT).await.map(|_| ())
    }
}
