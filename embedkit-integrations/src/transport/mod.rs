//! [`HttpTransport`](embedkit_core::traits::HttpTransport) implementations.
//!
//! - [`ReqwestTransport`]: the default, backed by `reqwest`
//! - [`RecordingTransport`]: records requests and replays canned replies
//!   (available in tests or with the `test-utils` feature)

pub mod reqwest_transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod recording;

pub use reqwest_transport::ReqwestTransport;

#[cfg(any(test, feature = "test-utils"))]
pub use recording::RecordingTransport;
