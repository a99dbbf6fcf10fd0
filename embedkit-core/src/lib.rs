//! # embedkit Core
//!
//! Core traits, configuration, and error types for embedkit, the embedding
//! client layer of a knowledge-indexing pipeline.
//!
//! This crate provides:
//!
//! - **Configuration**: [`config::ClientConfig`] and [`config::EmbeddingOptions`],
//!   plus the closed [`config::EmbeddingProvider`] set a provider tag resolves to
//! - **Core traits**: [`traits::Embedder`] for callers and
//!   [`traits::HttpTransport`] for injected networking
//! - **Factories**: [`factory::EmbedderFactory`] for building embedders from
//!   configuration
//! - **Error handling**: [`EmbedKitError`] and the [`Result`] alias
//!
//! ## Quick Start
//!
//! ```rust
//! use embedkit_core::prelude::*;
//!
//! let config = ClientConfig::new("voyageai", "voyage-2").with_api_key("k");
//! let options = EmbeddingOptions::new().with_dimensions(512);
//!
//! assert_eq!(config.resolved_provider(), EmbeddingProvider::VoyageAi);
//! assert_eq!(options.dimensions, Some(512));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used types and traits
pub mod prelude;

// Core modules
pub mod config;
pub mod error;
pub mod factory;
pub mod traits;

// Re-export key types at crate root for convenience
pub use error::{EmbedKitError, Result};

// Re-export traits for convenience
pub use traits::*;

/// Version information for the embedkit core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the embedkit core library.
pub const NAME: &str = env!("CARGO_PKG_NAME");
