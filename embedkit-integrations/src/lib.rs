//! Embedding backends for embedkit.
//!
//! This crate provides the concrete embedding clients (Voyage AI, Ollama,
//! and OpenAI-compatible services), the HTTP transports they send requests
//! through, and [`EmbeddingsFactory`], which picks a client from a provider
//! tag.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod embedders;
pub mod factory;
pub mod transport;

// Re-export commonly used types
pub use embedders::{OllamaEmbedder, OpenAiEmbedder, VoyageEmbedder};
pub use factory::{EmbeddingClient, EmbeddingsFactory};
pub use transport::ReqwestTransport;

#[cfg(any(test, feature = "test-utils"))]
pub use transport::RecordingTransport;
