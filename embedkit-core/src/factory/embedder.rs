//! Factory trait for creating embedders from configuration.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    config::{ClientConfig, EmbeddingOptions, EmbeddingProvider},
    traits::Embedder,
};

/// Factory for creating embedders from configuration.
///
/// Construction is synchronous and total: a factory never performs network
/// I/O and never rejects a provider tag. Problems with credentials or
/// endpoints surface when the returned embedder issues its first request.
///
/// # Examples
///
/// ```rust,no_run
/// use embedkit_core::config::{ClientConfig, EmbeddingOptions, EmbeddingProvider};
/// use embedkit_core::factory::EmbedderFactory;
/// use embedkit_core::traits::Embedder;
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct MyEmbedderFactory;
///
/// impl EmbedderFactory for MyEmbedderFactory {
///     fn create_embedder(
///         &self,
///         config: &ClientConfig,
///         options: &EmbeddingOptions,
///     ) -> Arc<dyn Embedder> {
///         todo!("build an embedder for {}", config.model)
///     }
///
///     fn supported_providers(&self) -> Vec<EmbeddingProvider> {
///         vec![EmbeddingProvider::OpenAiCompatible]
///     }
/// }
/// ```
pub trait EmbedderFactory: Send + Sync + std::fmt::Debug {
    /// Create an embedder from configuration.
    fn create_embedder(
        &self,
        config: &ClientConfig,
        options: &EmbeddingOptions,
    ) -> Arc<dyn Embedder>;

    /// Backend families this factory can produce.
    fn supported_providers(&self) -> Vec<EmbeddingProvider>;

    /// Get a human-readable name for this factory.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Get metadata about this factory.
    fn metadata(&self) -> HashMap<String, serde_json::Value> {
        let providers: Vec<&'static str> = self
            .supported_providers()
            .iter()
            .map(EmbeddingProvider::as_str)
            .collect();

        let mut metadata = HashMap::new();
        metadata.insert("name".to_string(), self.name().into());
        metadata.insert("supported_providers".to_string(), providers.into());
        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct EchoEmbedder {
        model: String,
    }

    #[async_trait]
    impl Embedder for EchoEmbedder {
        async fn embed_batch(&self, texts: Vec<&str>) -> crate::Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|_| vec![0.0]).collect())
        }

        fn model_name(&self) -> &str {
            &self.model
        }
    }

    #[derive(Debug)]
    struct MockEmbedderFactory;

    impl EmbedderFactory for MockEmbedderFactory {
        fn create_embedder(
            &self,
            config: &ClientConfig,
            _options: &EmbeddingOptions,
        ) -> Arc<dyn Embedder> {
            Arc::new(EchoEmbedder {
                model: config.model.clone(),
            })
        }

        fn supported_providers(&self) -> Vec<EmbeddingProvider> {
            vec![EmbeddingProvider::Ollama, EmbeddingProvider::VoyageAi]
        }
    }

    #[test]
    fn test_factory_creates_embedder() {
        let factory = MockEmbedderFactory;
        let config = ClientConfig::new("ollama", "nomic-embed-text");
        let embedder = factory.create_embedder(&config, &EmbeddingOptions::default());

        assert_eq!(embedder.model_name(), "nomic-embed-text");
    }

    #[test]
    fn test_factory_metadata() {
        let metadata = MockEmbedderFactory.metadata();

        assert_eq!(
            metadata["supported_providers"],
            serde_json::json!(["ollama", "voyageai"])
        );
        assert!(
            metadata["name"]
                .as_str()
                .unwrap()
                .ends_with("MockEmbedderFactory")
        );
    }
}
