//! Provider dispatch for embedding clients.
//!
//! [`EmbeddingsFactory::create`] maps a [`ClientConfig`] plus
//! [`EmbeddingOptions`] onto exactly one backend client:
//!
//! | Provider tag | Client | Batch size | Dimensions | Endpoint |
//! |---|---|---|---|---|
//! | `voyageai` | [`VoyageEmbedder`] | 8 | always sent as `output_dimension` | Voyage default |
//! | `ollama` | [`OllamaEmbedder`] | all inputs at once | not sent | trailing `/api` stripped |
//! | anything else | [`OpenAiEmbedder`] | 10 | sent only if `send_dimensions` | unchanged |
//!
//! Construction performs no I/O and cannot fail. Unknown tags select the
//! OpenAI-compatible client, which also serves Azure OpenAI endpoints.

use async_trait::async_trait;
use embedkit_core::{
    Result,
    config::{ClientConfig, EmbeddingOptions, EmbeddingProvider},
    factory::EmbedderFactory,
    traits::{Embedder, HttpTransport},
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::embedders::{
    OllamaConfig, OllamaEmbedder, OpenAiConfig, OpenAiEmbedder, VoyageConfig, VoyageEmbedder,
    ollama::server_root,
};
use crate::transport::ReqwestTransport;

/// An embedding client for one of the supported backends.
///
/// All variants expose the same [`Embedder`] capability; the variant only
/// records how the client was built.
#[derive(Debug, Clone)]
pub enum EmbeddingClient {
    /// Voyage AI client.
    Voyage(VoyageEmbedder),
    /// Ollama client.
    Ollama(OllamaEmbedder),
    /// OpenAI-compatible client (OpenAI, Azure OpenAI, and other compatible hosts).
    OpenAiCompatible(OpenAiEmbedder),
}

impl EmbeddingClient {
    /// Backend family of this client.
    pub fn provider(&self) -> EmbeddingProvider {
        match self {
            Self::Voyage(_) => EmbeddingProvider::VoyageAi,
            Self::Ollama(_) => EmbeddingProvider::Ollama,
            Self::OpenAiCompatible(_) => EmbeddingProvider::OpenAiCompatible,
        }
    }

    fn inner(&self) -> &dyn Embedder {
        match self {
            Self::Voyage(embedder) => embedder,
            Self::Ollama(embedder) => embedder,
            Self::OpenAiCompatible(embedder) => embedder,
        }
    }
}

#[async_trait]
impl Embedder for EmbeddingClient {
    async fn embed_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
        self.inner().embed_batch(texts).await
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.inner().embed(text).await
    }

    fn model_name(&self) -> &str {
        self.inner().model_name()
    }

    fn dimension(&self) -> Option<usize> {
        self.inner().dimension()
    }

    fn batch_size(&self) -> Option<usize> {
        self.inner().batch_size()
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }

    async fn health_check(&self) -> Result<()> {
        self.inner().health_check().await
    }

    fn metadata(&self) -> HashMap<String, serde_json::Value> {
        let mut metadata = self.inner().metadata();
        metadata.insert("provider".to_string(), self.provider().as_str().into());
        metadata
    }
}

/// Builds embedding clients from caller-supplied configuration.
///
/// The factory only holds the transport handed to every client it creates.
///
/// # Examples
///
/// ```rust
/// use embedkit_core::config::{ClientConfig, EmbeddingOptions};
/// use embedkit_core::traits::Embedder;
/// use embedkit_integrations::factory::EmbeddingsFactory;
///
/// let factory = EmbeddingsFactory::default();
/// let client = factory.create(
///     &ClientConfig::new("voyageai", "voyage-2").with_api_key("k"),
///     &EmbeddingOptions::new().with_dimensions(512),
/// );
///
/// assert_eq!(client.batch_size(), Some(8));
/// assert_eq!(client.dimension(), Some(512));
/// ```
#[derive(Debug, Clone)]
pub struct EmbeddingsFactory {
    transport: Arc<dyn HttpTransport>,
}

impl EmbeddingsFactory {
    /// Create a factory whose clients send requests through `transport`.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Transport shared by the clients this factory creates.
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Build the client selected by `config.provider`.
    pub fn create(&self, config: &ClientConfig, options: &EmbeddingOptions) -> EmbeddingClient {
        Self::create_with(Arc::clone(&self.transport), config, options)
    }

    /// Stateless form of [`EmbeddingsFactory::create`].
    pub fn create_with(
        transport: Arc<dyn HttpTransport>,
        config: &ClientConfig,
        options: &EmbeddingOptions,
    ) -> EmbeddingClient {
        let provider = config.resolved_provider();
        debug!(
            tag = %config.provider,
            %provider,
            model = %config.model,
            "creating embedding client"
        );

        match provider {
            EmbeddingProvider::VoyageAi => {
                let voyage = VoyageConfig::new(config.model.as_str(), config.api_key.as_str())
                    .with_output_dimension(options.dimensions)
                    .with_batch_size(VoyageConfig::DEFAULT_BATCH_SIZE);
                EmbeddingClient::Voyage(VoyageEmbedder::new(voyage, transport))
            }
            EmbeddingProvider::Ollama => {
                let ollama =
                    OllamaConfig::new(config.model.as_str(), server_root(&config.base_url))
                        .with_float_encoding();
                EmbeddingClient::Ollama(OllamaEmbedder::new(ollama, transport))
            }
            // Default arm: any tag other than voyageai/ollama, Azure included.
            EmbeddingProvider::OpenAiCompatible => {
                let dimensions = if options.send_dimensions {
                    options.dimensions
                } else {
                    None
                };
                let openai = OpenAiConfig::new(
                    config.model.as_str(),
                    config.api_key.as_str(),
                    config.base_url.as_str(),
                )
                .with_dimensions(dimensions)
                .with_batch_size(OpenAiConfig::DEFAULT_BATCH_SIZE);
                EmbeddingClient::OpenAiCompatible(OpenAiEmbedder::new(openai, transport))
            }
        }
    }
}

impl Default for EmbeddingsFactory {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestTransport::default()))
    }
}

impl EmbedderFactory for EmbeddingsFactory {
    fn create_embedder(
        &self,
        config: &ClientConfig,
        options: &EmbeddingOptions,
    ) -> Arc<dyn Embedder> {
        Arc::new(self.create(config, options))
    }

    fn supported_providers(&self) -> Vec<EmbeddingProvider> {
        vec![
            EmbeddingProvider::VoyageAi,
            EmbeddingProvider::Ollama,
            EmbeddingProvider::OpenAiCompatible,
        ]
    }
}
