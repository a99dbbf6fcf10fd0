//! Factory traits for creating embedders from configuration.
//!
//! Factories let the indexing layer depend on a trait object rather than on
//! any concrete backend, which also keeps tests free of network access.

pub mod embedder;

pub use embedder::*;
