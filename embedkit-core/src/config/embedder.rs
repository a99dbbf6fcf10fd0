//! Configuration records for embedding clients.
//!
//! [`ClientConfig`] and [`EmbeddingOptions`] are supplied by the caller and
//! describe which backend to talk to and how. [`EmbeddingProvider`] is the
//! closed set of backends a provider tag resolves to.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{EmbedKitError, Result};

/// Backend family selected by a provider tag.
///
/// Tags are matched exactly. Anything other than `"voyageai"` or `"ollama"`
/// (including an empty tag, `"openai"` and `"azure"`) resolves to
/// [`EmbeddingProvider::OpenAiCompatible`]. Deserialization goes through
/// [`EmbeddingProvider::from_tag`], so it never rejects a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum EmbeddingProvider {
    /// Voyage AI embeddings API.
    #[serde(rename = "voyageai")]
    VoyageAi,
    /// Local or remote Ollama server.
    #[serde(rename = "ollama")]
    Ollama,
    /// Any OpenAI-compatible `/embeddings` endpoint, Azure OpenAI included.
    #[serde(rename = "openai_compatible")]
    OpenAiCompatible,
}

impl EmbeddingProvider {
    /// Tag that selects the Voyage backend.
    pub const VOYAGE_TAG: &'static str = "voyageai";

    /// Tag that selects the Ollama backend.
    pub const OLLAMA_TAG: &'static str = "ollama";

    /// Resolve a provider tag.
    ///
    /// Unrecognized tags fall back to [`EmbeddingProvider::OpenAiCompatible`];
    /// this is a policy, not an error.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::VOYAGE_TAG => Self::VoyageAi,
            Self::OLLAMA_TAG => Self::Ollama,
            _ => Self::OpenAiCompatible,
        }
    }

    /// Stable identifier used in logs and metadata.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VoyageAi => "voyageai",
            Self::Ollama => "ollama",
            Self::OpenAiCompatible => "openai_compatible",
        }
    }
}

impl From<String> for EmbeddingProvider {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl std::fmt::Display for EmbeddingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection details for one embedding backend.
///
/// Both snake_case and camelCase field names are accepted when
/// deserializing, and every field defaults to an empty string.
///
/// # Examples
///
/// ```rust
/// use embedkit_core::config::{ClientConfig, EmbeddingProvider};
///
/// let config = ClientConfig::new("ollama", "nomic-embed-text")
///     .with_base_url("http://localhost:11434/api");
///
/// assert_eq!(config.resolved_provider(), EmbeddingProvider::Ollama);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Provider tag, e.g. `"voyageai"`, `"ollama"`, `"openai"`.
    pub provider: String,

    /// Model identifier, passed verbatim to the backend.
    pub model: String,

    /// API key. Unused by Ollama.
    #[serde(alias = "apiKey")]
    pub api_key: String,

    /// Endpoint base URL. Its expected shape depends on the provider.
    #[serde(alias = "baseURL", alias = "baseUrl")]
    pub base_url: String,
}

impl ClientConfig {
    /// Create a configuration for a provider tag and model.
    pub fn new<P: Into<String>, M: Into<String>>(provider: P, model: M) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the endpoint base URL.
    #[must_use]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Backend family the provider tag resolves to.
    #[must_use]
    pub fn resolved_provider(&self) -> EmbeddingProvider {
        EmbeddingProvider::from_tag(&self.provider)
    }

    /// Validate the configuration.
    ///
    /// Client construction never calls this; it is available to callers who
    /// want to reject obviously broken settings before the first request.
    pub fn validate(&self) -> Result<()> {
        let provider = self.resolved_provider();
        debug!(%provider, model = %self.model, "validating client config");

        if self.model.trim().is_empty() {
            return Err(EmbedKitError::configuration("Model name cannot be empty"));
        }

        match provider {
            EmbeddingProvider::VoyageAi => {
                if self.api_key.is_empty() {
                    return Err(EmbedKitError::configuration(
                        "API key cannot be empty for voyageai",
                    ));
                }
            }
            EmbeddingProvider::Ollama => {
                Self::validate_base_url(&self.base_url)?;
            }
            EmbeddingProvider::OpenAiCompatible => {
                if self.api_key.is_empty() {
                    return Err(EmbedKitError::configuration(
                        "API key cannot be empty for OpenAI-compatible providers",
                    ));
                }
                Self::validate_base_url(&self.base_url)?;
            }
        }

        Ok(())
    }

    fn validate_base_url(base_url: &str) -> Result<()> {
        let parsed = url::Url::parse(base_url).map_err(|e| {
            EmbedKitError::configuration(format!("Invalid base URL '{base_url}': {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(EmbedKitError::configuration(format!(
                "Base URL '{base_url}' must use http or https"
            )));
        }
        Ok(())
    }
}

fn default_send_dimensions() -> bool {
    true
}

/// Per-call embedding options.
///
/// `send_dimensions` defaults to `true`. Some OpenAI-compatible services
/// reject requests that carry a `dimensions` field at all; setting it to
/// `false` drops the field for those backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingOptions {
    /// Requested vector length.
    #[serde(default)]
    pub dimensions: Option<usize>,

    /// Whether OpenAI-compatible requests carry the dimensions field.
    #[serde(default = "default_send_dimensions", alias = "sendDimensions")]
    pub send_dimensions: bool,
}

impl EmbeddingOptions {
    /// Options with no dimensionality preference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested vector length.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Control whether the dimensions field is sent to OpenAI-compatible backends.
    #[must_use]
    pub fn with_send_dimensions(mut self, send_dimensions: bool) -> Self {
        self.send_dimensions = send_dimensions;
        self
    }
}

impl Default for EmbeddingOptions {
    fn default() -> Self {
        Self {
            dimensions: None,
            send_dimensions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("voyageai", EmbeddingProvider::VoyageAi ; "voyage")]
    #[test_case("ollama", EmbeddingProvider::Ollama ; "ollama")]
    #[test_case("openai", EmbeddingProvider::OpenAiCompatible ; "openai")]
    #[test_case("azure", EmbeddingProvider::OpenAiCompatible ; "azure")]
    #[test_case("", EmbeddingProvider::OpenAiCompatible ; "empty")]
    #[test_case("VoyageAI", EmbeddingProvider::OpenAiCompatible ; "case sensitive")]
    #[test_case("some-unknown-provider", EmbeddingProvider::OpenAiCompatible ; "unknown")]
    fn test_provider_from_tag(tag: &str, expected: EmbeddingProvider) {
        assert_eq!(EmbeddingProvider::from_tag(tag), expected);
    }

    #[test_case("voyageai", EmbeddingProvider::VoyageAi ; "voyage")]
    #[test_case("ollama", EmbeddingProvider::Ollama ; "ollama")]
    #[test_case("openai_compatible", EmbeddingProvider::OpenAiCompatible ; "own tag")]
    #[test_case("openai", EmbeddingProvider::OpenAiCompatible ; "openai")]
    #[test_case("azure", EmbeddingProvider::OpenAiCompatible ; "azure")]
    fn test_provider_deserializes_like_from_tag(tag: &str, expected: EmbeddingProvider) {
        let parsed: EmbeddingProvider = serde_json::from_value(serde_json::json!(tag)).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(
            serde_json::to_value(parsed).unwrap(),
            serde_json::json!(expected.as_str())
        );
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new("openai", "text-embedding-3-small")
            .with_api_key("k")
            .with_base_url("https://api.openai.com/v1");

        assert_eq!(config.provider, "openai");
        assert_eq!(config.model, "text-embedding-3-small");
        assert_eq!(config.api_key, "k");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_client_config_accepts_camel_case() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"provider":"ollama","model":"nomic-embed-text","apiKey":"","baseURL":"http://host:11434/api"}"#,
        )
        .unwrap();

        assert_eq!(config.resolved_provider(), EmbeddingProvider::Ollama);
        assert_eq!(config.base_url, "http://host:11434/api");
    }

    #[test]
    fn test_client_config_missing_provider_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"model":"text-embedding-3-small"}"#).unwrap();

        assert_eq!(config.provider, "");
        assert_eq!(
            config.resolved_provider(),
            EmbeddingProvider::OpenAiCompatible
        );
    }

    #[test]
    fn test_validation_errors() {
        let empty_model = ClientConfig::new("ollama", "").with_base_url("http://localhost:11434");
        assert!(empty_model.validate().is_err());

        let voyage_without_key = ClientConfig::new("voyageai", "voyage-2");
        assert!(voyage_without_key.validate().is_err());

        let bad_url = ClientConfig::new("ollama", "nomic-embed-text").with_base_url("localhost");
        assert!(bad_url.validate().is_err());

        let ftp = ClientConfig::new("openai", "text-embedding-3-small")
            .with_api_key("k")
            .with_base_url("ftp://example.com");
        assert!(ftp.validate().is_err());

        let ollama_ok =
            ClientConfig::new("ollama", "nomic-embed-text").with_base_url("http://localhost:11434");
        assert!(ollama_ok.validate().is_ok());
    }

    #[test]
    fn test_embedding_options_defaults() {
        let options = EmbeddingOptions::default();
        assert_eq!(options.dimensions, None);
        assert!(options.send_dimensions);

        let parsed: EmbeddingOptions = serde_json::from_str(r#"{"dimensions":512}"#).unwrap();
        assert_eq!(parsed, EmbeddingOptions::new().with_dimensions(512));

        let parsed: EmbeddingOptions =
            serde_json::from_str(r#"{"dimensions":1536,"sendDimensions":false}"#).unwrap();
        assert_eq!(
            parsed,
            EmbeddingOptions::new()
                .with_dimensions(1536)
                .with_send_dimensions(false)
        );
    }
}
