//! Network-free transport for tests.

use async_trait::async_trait;
use embedkit_core::{
    EmbedKitError, Result,
    traits::{HttpRequest, HttpTransport},
};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
enum CannedReply {
    Json(serde_json::Value),
    Status { status_code: u16, message: String },
}

/// Records every request and answers from a queue of canned replies.
///
/// Replies are consumed in FIFO order. Once the queue is empty every request
/// fails with an internal error, which keeps unexpected calls visible.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<CannedReply>>,
}

impl RecordingTransport {
    /// Create a transport with an empty reply queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON reply.
    #[must_use]
    pub fn with_response(self, response: serde_json::Value) -> Self {
        self.push_response(response);
        self
    }

    /// Queue a JSON reply through a shared reference.
    pub fn push_response(&self, response: serde_json::Value) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(CannedReply::Json(response));
    }

    /// Queue a non-success HTTP status.
    pub fn push_status<S: Into<String>>(&self, status_code: u16, message: S) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(CannedReply::Status {
                status_code,
                message: message.into(),
            });
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<serde_json::Value> {
        let url = request.url.clone();
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match reply {
            Some(CannedReply::Json(value)) => Ok(value),
            Some(CannedReply::Status {
                status_code,
                message,
            }) => Err(EmbedKitError::server(status_code, message)),
            None => Err(EmbedKitError::internal(format!(
                "no canned reply queued for POST {url}"
            ))),
        }
    }
}
