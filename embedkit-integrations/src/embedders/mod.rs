//! Embedding client implementations.
//!
//! Each backend turns a batch of texts into one or more JSON requests,
//! sends them through the injected [`HttpTransport`](embedkit_core::traits::HttpTransport),
//! and decodes the vectors in input order.

pub mod ollama;
pub mod openai;
pub mod voyage;

#[cfg(test)]
mod tests;

pub use ollama::{OllamaConfig, OllamaEmbedder};
pub use openai::{OpenAiConfig, OpenAiEmbedder};
pub use voyage::{VoyageConfig, VoyageEmbedder};

use embedkit_core::{EmbedKitError, Result};
use serde::Deserialize;

/// Text used by `health_check` implementations.
pub(crate) const HEALTH_CHECK_TEXT: &str = "health check";

/// `{ "data": [{ "embedding": [...], "index": n }] }` as returned by
/// OpenAI-style `/embeddings` endpoints (Voyage uses the same shape).
#[derive(Debug, Deserialize)]
struct IndexedEmbeddings {
    data: Vec<IndexedEmbedding>,
}

#[derive(Debug, Deserialize)]
struct IndexedEmbedding {
    embedding: Vec<f32>,
    #[serde(default)]
    index: Option<usize>,
}

/// Decode an OpenAI-style embeddings response, ordering items by `index`.
///
/// Items without an index keep their position in the response.
pub(crate) fn decode_indexed(backend: &str, response: serde_json::Value) -> Result<Vec<Vec<f32>>> {
    let parsed: IndexedEmbeddings = serde_json::from_value(response).map_err(|e| {
        EmbedKitError::embedding(format!(
            "failed to decode {backend} response: {e}; expected `data[].embedding`"
        ))
    })?;

    let mut items: Vec<(usize, Vec<f32>)> = parsed
        .data
        .into_iter()
        .enumerate()
        .map(|(position, item)| (item.index.unwrap_or(position), item.embedding))
        .collect();
    items.sort_by_key(|(index, _)| *index);

    Ok(items.into_iter().map(|(_, embedding)| embedding).collect())
}

/// Fail unless a chunk decoded to exactly one vector per input.
pub(crate) fn ensure_batch_len(backend: &str, sent: usize, decoded: &[Vec<f32>]) -> Result<()> {
    if decoded.len() == sent {
        return Ok(());
    }
    Err(EmbedKitError::embedding(format!(
        "{backend} returned {} embeddings for {sent} inputs",
        decoded.len()
    )))
}

/// Join a base URL and a path without doubling the separator.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
