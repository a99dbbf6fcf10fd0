//! Configuration types for embedkit.
//!
//! Configurations are plain serde records supplied by the caller. They are
//! never retained by the factory after a client has been built.

pub mod embedder;

pub use embedder::*;
