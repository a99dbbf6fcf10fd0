//! Error types for embedkit.
//!
//! Construction of embedding clients never fails; every error in this module
//! is raised later, when a client issues requests against its backend.

use thiserror::Error;

/// Core error type for embedkit.
///
/// Covers configuration checks, transport failures, HTTP error responses,
/// and malformed backend payloads.
#[derive(Error, Debug)]
pub enum EmbedKitError {
    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Embedding generation errors, including undecodable backend responses
    #[error("Embedding error: {message}")]
    Embedding {
        /// Detailed error message
        message: String,
    },

    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// Detailed error message
        message: String,
    },

    /// Input validation errors
    #[error("Validation error: {message}")]
    Validation {
        /// Detailed error message
        message: String,
    },

    /// Network or connection errors raised by a transport
    #[error("Transport error: {message}")]
    Transport {
        /// Detailed error message
        message: String,
    },

    /// Non-success HTTP status returned by a backend
    #[error("Server error: {status_code} - {message}")]
    Server {
        /// HTTP status code
        status_code: u16,
        /// Truncated response body
        message: String,
    },

    /// Operation timeout errors
    #[error("Timeout: {operation}")]
    Timeout {
        /// Name of the operation that timed out
        operation: String,
    },

    /// Rate limiting errors
    #[error("Rate limit exceeded")]
    RateLimit,

    /// Authentication failures
    #[error("Authentication failed")]
    Authentication,

    /// Internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Detailed error message
        message: String,
    },

    /// Generic errors from external dependencies
    #[error("External error: {source}")]
    External {
        /// The underlying error
        #[source]
        source: anyhow::Error,
    },
}

impl EmbedKitError {
    /// Create a new embedding error with a message.
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create a new configuration error with a message.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new validation error with a message.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new transport error with a message.
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new server error from an HTTP status and response snippet.
    pub fn server<S: Into<String>>(status_code: u16, message: S) -> Self {
        Self::Server {
            status_code,
            message: message.into(),
        }
    }

    /// Create a new timeout error with an operation name.
    pub fn timeout<S: Into<String>>(operation: S) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    /// Create a new internal error with a message.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a new external error from any error that implements `Into<anyhow::Error>`.
    pub fn external<E: Into<anyhow::Error>>(error: E) -> Self {
        Self::External {
            source: error.into(),
        }
    }

    /// Check if this error is retryable.
    ///
    /// Returns `true` for transient failures: timeouts, rate limits,
    /// connection problems, and 5xx responses.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::RateLimit | Self::Transport { .. } => true,
            Self::Server { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }

    /// Check if this error is a client error (4xx-style).
    ///
    /// Returns `true` for errors caused by invalid input or configuration
    /// that won't be fixed by retrying.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Validation { .. } | Self::Configuration { .. } | Self::Authentication => true,
            Self::Server { status_code, .. } => (400..500).contains(status_code),
            _ => false,
        }
    }
}

/// Convert from `anyhow::Error` to `EmbedKitError`.
impl From<anyhow::Error> for EmbedKitError {
    fn from(error: anyhow::Error) -> Self {
        Self::External { source: error }
    }
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, EmbedKitError>;
