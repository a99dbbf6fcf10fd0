//! # embedkit - embedding clients from a provider tag
//!
//! embedkit turns a small configuration record (provider tag, model, API key,
//! base URL) plus embedding options into a ready-to-use embedding client for
//! Voyage AI, Ollama, or any OpenAI-compatible service (Azure OpenAI
//! included).
//!
//! ## Quick Start
//!
//! ```rust
//! use embedkit::prelude::*;
//!
//! let config = ClientConfig::new("ollama", "nomic-embed-text")
//!     .with_base_url("http://localhost:11434/api");
//! let client = EmbeddingsFactory::default().create(&config, &EmbeddingOptions::default());
//!
//! assert_eq!(client.provider(), EmbeddingProvider::Ollama);
//! assert_eq!(client.model_name(), "nomic-embed-text");
//! ```
//!
//! ## Architecture
//!
//! - **embedkit-core**: configuration, errors, and the `Embedder` / `HttpTransport` traits
//! - **embedkit-integrations**: backend clients, transports, and the factory

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export all public APIs from sub-crates
pub use embedkit_core as core;
pub use embedkit_integrations as integrations;

pub use embedkit_integrations::factory::{EmbeddingClient, EmbeddingsFactory};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and traits
/// from all embedkit crates.
pub mod prelude {
    pub use embedkit_core::prelude::*;

    pub use embedkit_integrations::embedders::{
        OllamaConfig, OllamaEmbedder, OpenAiConfig, OpenAiEmbedder, VoyageConfig, VoyageEmbedder,
    };
    pub use embedkit_integrations::factory::{EmbeddingClient, EmbeddingsFactory};
    pub use embedkit_integrations::transport::ReqwestTransport;
}

/// Version information for embedkit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
