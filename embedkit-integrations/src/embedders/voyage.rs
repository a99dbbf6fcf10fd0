//! Voyage AI embedding client.

use async_trait::async_trait;
use embedkit_core::{
    Result,
    traits::{Embedder, HttpRequest, HttpTransport},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::{HEALTH_CHECK_TEXT, decode_indexed, ensure_batch_len, join_url};

/// Configuration for [`VoyageEmbedder`].
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct VoyageConfig {
    /// Voyage model name, e.g. `voyage-2`.
    pub model: String,

    /// API key sent as a bearer token.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Requested output dimension, sent as `output_dimension`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dimension: Option<usize>,

    /// Texts per request.
    pub batch_size: usize,

    /// API root; `/embeddings` is appended.
    pub base_url: String,
}

impl VoyageConfig {
    /// Public Voyage API root.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.voyageai.com/v1";

    /// Texts per request unless overridden.
    pub const DEFAULT_BATCH_SIZE: usize = 8;

    /// Create a configuration with the default endpoint and batch size.
    pub fn new<M: Into<String>, K: Into<String>>(model: M, api_key: K) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            output_dimension: None,
            batch_size: Self::DEFAULT_BATCH_SIZE,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the output dimension.
    #[must_use]
    pub fn with_output_dimension(mut self, output_dimension: Option<usize>) -> Self {
        self.output_dimension = output_dimension;
        self
    }

    /// Set the batch size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Point the client at a different API root.
    #[must_use]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for VoyageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoyageConfig")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("output_dimension", &self.output_dimension)
            .field("batch_size", &self.batch_size)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct VoyageRequest<'a> {
    input: &'a [&'a str],
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dimension: Option<usize>,
}

/// Embedding client for the Voyage AI API.
#[derive(Debug, Clone)]
pub struct VoyageEmbedder {
    config: VoyageConfig,
    transport: Arc<dyn HttpTransport>,
}

impl VoyageEmbedder {
    /// Create a client that sends requests through `transport`.
    pub fn new(config: VoyageConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &VoyageConfig {
        &self.config
    }

    /// Build the request for one batch of texts.
    pub fn request_for(&self, batch: &[&str]) -> Result<HttpRequest> {
        let body = serde_json::to_value(VoyageRequest {
            input: batch,
            model: &self.config.model,
            output_dimension: self.config.output_dimension,
        })?;

        Ok(
            HttpRequest::post(join_url(&self.config.base_url, "embeddings"), body)
                .with_bearer_auth(&self.config.api_key),
        )
    }
}

#[async_trait]
impl Embedder for VoyageEmbedder {
    async fn embed_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());

        for batch in texts.chunks(self.config.batch_size.max(1)) {
            debug!(
                model = %self.config.model,
                batch_len = batch.len(),
                "requesting voyage embeddings"
            );
            let response = self.transport.post_json(self.request_for(batch)?).await?;
            let decoded = decode_indexed("voyageai", response)?;
            ensure_batch_len("voyageai", batch.len(), &decoded)?;
            embeddings.extend(decoded);
        }

        Ok(embeddings)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn dimension(&self) -> Option<usize> {
        self.config.output_dimension
    }

    fn batch_size(&self) -> Option<usize> {
        Some(self.config.batch_size)
    }

    async fn health_check(&self) -> Result<()> {
        self.embed(HEALTH_CHECK_TEXT).await.map(|_| ())
    }
}
