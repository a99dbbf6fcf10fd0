//! Core traits for embedkit.
//!
//! [`Embedder`] is the capability callers consume; [`HttpTransport`] is the
//! capability callers inject so clients can reach their backends.

pub mod embedder;
pub mod transport;

// Re-export all traits for convenience
pub use embedder::*;
pub use transport::*;
