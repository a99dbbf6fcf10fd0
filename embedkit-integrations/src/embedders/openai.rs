//! OpenAI-compatible embedding client.
//!
//! Works against any service exposing `POST {base_url}/embeddings` with the
//! OpenAI request shape, including Azure OpenAI's v1 surface
//! (`https://<resource>.openai.azure.com/openai/v1`). The base URL is used
//! exactly as given; host-specific behaviour (proxies, certificates) belongs
//! to the injected transport.

use async_trait::async_trait;
use embedkit_core::{
    Result,
    traits::{Embedder, HttpRequest, HttpTransport},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::{HEALTH_CHECK_TEXT, decode_indexed, ensure_batch_len, join_url};

/// Configuration for [`OpenAiEmbedder`].
///
/// When `dimensions` is `None` the field is left out of both the serialized
/// configuration and every request body, rather than being sent as `null`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct OpenAiConfig {
    /// Model or deployment name, e.g. `text-embedding-3-small`.
    pub model: String,

    /// API key sent as a bearer token.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Requested dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,

    /// Texts per request.
    pub batch_size: usize,

    /// API root; `/embeddings` is appended.
    pub base_url: String,
}

impl OpenAiConfig {
    /// Texts per request unless overridden.
    pub const DEFAULT_BATCH_SIZE: usize = 10;

    /// Create a configuration with the default batch size and no dimensions.
    pub fn new<M, K, U>(model: M, api_key: K, base_url: U) -> Self
    where
        M: Into<String>,
        K: Into<String>,
        U: Into<String>,
    {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            dimensions: None,
            batch_size: Self::DEFAULT_BATCH_SIZE,
            base_url: base_url.into(),
        }
    }

    /// Set the requested dimensions; `None` omits the field.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Option<usize>) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Set the batch size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("dimensions", &self.dimensions)
            .field("batch_size", &self.batch_size)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct OpenAiEmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<usize>,
}

/// Embedding client for OpenAI-compatible APIs.
#[derive(Debug, Clone)]
pub struct OpenAiEmbedder {
    config: OpenAiConfig,
    transport: Arc<dyn HttpTransport>,
}

impl OpenAiEmbedder {
    /// Create a client that sends requests through `transport`.
    pub fn new(config: OpenAiConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Build the request for one batch of texts.
    pub fn request_for(&self, batch: &[&str]) -> Result<HttpRequest> {
        let body = serde_json::to_value(OpenAiEmbeddingsRequest {
            model: &self.config.model,
            input: batch,
            dimensions: self.config.dimensions,
        })?;

        Ok(
            HttpRequest::post(join_url(&self.config.base_url, "embeddings"), body)
                .with_bearer_auth(&self.config.api_key),
        )
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());

        for batch in texts.chunks(self.config.batch_size.max(1)) {
            debug!(
                model = %self.config.model,
                batch_len = batch.len(),
                dimensions = ?self.config.dimensions,
                "requesting openai-compatible embeddings"
            );
            let response = self.transport.post_json(self.request_for(batch)?).await?;
            let decoded = decode_indexed("openai", response)?;
            ensure_batch_len("openai", batch.len(), &decoded)?;
            embeddings.extend(decoded);
        }

        Ok(embeddings)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn dimension(&self) -> Option<usize> {
        self.config.dimensions
    }

    fn batch_size(&self) -> Option<usize> {
        Some(self.config.batch_size)
    }

    async fn health_check(&self) -> Result<()> {
        self.embed(HEALTH_CHECK_TEXT).await.map(|_| ())
    }
}
