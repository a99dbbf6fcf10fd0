//! Embedding generation trait.
//!
//! Every embedding client produced by embedkit implements [`Embedder`], so
//! callers can hold any backend behind `Arc<dyn Embedder>`.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::Result;

/// Generates dense embeddings for text content.
///
/// # Examples
///
/// ```rust,no_run
/// use embedkit_core::traits::Embedder;
/// use embedkit_core::Result;
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct SimpleEmbedder {
///     dimension: usize,
/// }
///
/// #[async_trait]
/// impl Embedder for SimpleEmbedder {
///     async fn embed_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
///         Ok(texts.iter().map(|_| vec![0.1; self.dimension]).collect())
///     }
///
///     fn model_name(&self) -> &str {
///         "simple-embedder"
///     }
/// }
/// ```
#[async_trait]
pub trait Embedder: Send + Sync + std::fmt::Debug {
    /// Generate embeddings for multiple texts.
    ///
    /// The result holds exactly one vector per input, in input order. An
    /// empty input yields an empty output without contacting the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the request, is unreachable,
    /// or answers with a payload that cannot be decoded.
    async fn embed_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>>;

    /// Generate the embedding for a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let embeddings = self.embed_batch(vec![text]).await?;
        embeddings.into_iter().next().ok_or_else(|| {
            crate::EmbedKitError::embedding(format!(
                "{} returned no embedding for a single input",
                self.name()
            ))
        })
    }

    /// Get the name/identifier of the embedding model.
    fn model_name(&self) -> &str;

    /// Requested dimensionality, if the client was configured with one.
    ///
    /// This is what the client asks for, not a guarantee about what the
    /// backend returns.
    fn dimension(&self) -> Option<usize> {
        None
    }

    /// Number of texts sent per request, or `None` when every input goes out
    /// in a single request.
    fn batch_size(&self) -> Option<usize> {
        None
    }

    /// Get a human-readable name for this embedder.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Check if the embedder is healthy and ready to generate embeddings.
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    /// Get metadata about the embedding client.
    fn metadata(&self) -> HashMap<String, serde_json::Value> {
        let mut metadata = HashMap::new();
        metadata.insert("name".to_string(), self.name().into());
        metadata.insert("model_name".to_string(), self.model_name().into());
        if let Some(dimension) = self.dimension() {
            metadata.insert("dimension".to_string(), dimension.into());
        }
        if let Some(batch_size) = self.batch_size() {
            metadata.insert("batch_size".to_string(), batch_size.into());
        }
        metadata
    }
}
