//! Prelude module for convenient imports.
//!
//! ```rust
//! use embedkit_core::prelude::*;
//!
//! let options = EmbeddingOptions::default();
//! assert!(options.send_dimensions);
//! ```

pub use crate::config::{ClientConfig, EmbeddingOptions, EmbeddingProvider};
pub use crate::error::{EmbedKitError, Result};
pub use crate::factory::EmbedderFactory;
pub use crate::traits::{Embedder, HttpRequest, HttpTransport};
