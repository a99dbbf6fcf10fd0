//! Tests for the embedding clients.

use super::*;
use crate::transport::RecordingTransport;
use embedkit_core::{EmbedKitError, traits::Embedder};
use serde_json::{Value, json};
use std::sync::Arc;

/// OpenAI/Voyage-shaped response for `count` inputs starting at `offset`.
fn indexed_response(offset: usize, count: usize) -> Value {
    let data: Vec<Value> = (0..count)
        .map(|i| json!({ "embedding": [(offset + i) as f32], "index": i }))
        .collect();
    json!({ "data": data })
}

fn texts(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("text {i}")).collect()
}

#[cfg(test)]
mod voyage_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn embedder(transport: &Arc<RecordingTransport>) -> VoyageEmbedder {
        VoyageEmbedder::new(
            VoyageConfig::new("voyage-2", "vk").with_output_dimension(Some(512)),
            transport.clone(),
        )
    }

    #[test]
    fn test_config_defaults() {
        let config = VoyageConfig::new("voyage-2", "vk");

        assert_eq!(config.batch_size, 8);
        assert_eq!(config.output_dimension, None);
        assert_eq!(config.base_url, "https://api.voyageai.com/v1");
        assert!(!format!("{config:?}").contains("vk"));
    }

    #[tokio::test]
    async fn test_chunks_by_eight_and_preserves_order() {
        let transport = Arc::new(
            RecordingTransport::new()
                .with_response(indexed_response(0, 8))
                .with_response(indexed_response(8, 8))
                .with_response(indexed_response(16, 4)),
        );
        let inputs = texts(20);

        let embeddings = embedder(&transport)
            .embed_batch(inputs.iter().map(String::as_str).collect())
            .await
            .unwrap();

        let firsts: Vec<f32> = embeddings.iter().map(|e| e[0]).collect();
        let expected: Vec<f32> = (0..20).map(|i| i as f32).collect();
        assert_eq!(firsts, expected);

        let requests = transport.requests();
        let sizes: Vec<usize> = requests
            .iter()
            .map(|r| r.body["input"].as_array().unwrap().len())
            .collect();
        assert_eq!(sizes, vec![8, 8, 4]);
    }

    #[tokio::test]
    async fn test_request_shape() {
        let transport = Arc::new(RecordingTransport::new().with_response(indexed_response(0, 1)));

        embedder(&transport).embed("hello").await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.url, "https://api.voyageai.com/v1/embeddings");
        assert_eq!(request.header("authorization"), Some("Bearer vk"));
        assert_eq!(
            request.body,
            json!({ "input": ["hello"], "model": "voyage-2", "output_dimension": 512 })
        );
    }

    #[tokio::test]
    async fn test_absent_output_dimension_is_omitted() {
        let transport = Arc::new(RecordingTransport::new().with_response(indexed_response(0, 1)));
        let embedder = VoyageEmbedder::new(VoyageConfig::new("voyage-2", "vk"), transport.clone());

        embedder.embed("hello").await.unwrap();

        let body = &transport.requests()[0].body;
        assert!(body.get("output_dimension").is_none());
    }

    #[tokio::test]
    async fn test_empty_input_sends_nothing() {
        let transport = Arc::new(RecordingTransport::new());

        let embeddings = embedder(&transport).embed_batch(Vec::new()).await.unwrap();

        assert!(embeddings.is_empty());
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_short_response_is_rejected() {
        let transport = Arc::new(
            RecordingTransport::new()
                .with_response(indexed_response(0, 7))
                .with_response(indexed_response(8, 2)),
        );
        let inputs = texts(10);

        let err = embedder(&transport)
            .embed_batch(inputs.iter().map(String::as_str).collect())
            .await
            .unwrap_err();

        assert!(matches!(err, EmbedKitError::Embedding { .. }));
        assert!(err.to_string().contains("7 embeddings for 8 inputs"));
        assert_eq!(transport.request_count(), 1);
    }
}

#[cfg(test)]
mod ollama_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_root() {
        assert_eq!(ollama::server_root("http://h:11434/api"), "http://h:11434");
        assert_eq!(ollama::server_root("http://h:11434/api/"), "http://h:11434/api/");
        assert_eq!(ollama::server_root("http://h:11434"), "http://h:11434");
    }

    #[tokio::test]
    async fn test_single_request_with_float_options() {
        let transport = Arc::new(RecordingTransport::new().with_response(json!({
            "embeddings": [[0.1, 0.2], [0.3, 0.4], [0.5, 0.6]]
        })));
        let embedder = OllamaEmbedder::new(
            OllamaConfig::new("nomic-embed-text", "http://localhost:11434").with_float_encoding(),
            transport.clone(),
        );

        let embeddings = embedder
            .embed_batch(vec!["a", "b", "c"])
            .await
            .unwrap();

        assert_eq!(embeddings, vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5, 0.6]]);
        assert_eq!(transport.request_count(), 1);

        let request = &transport.requests()[0];
        assert_eq!(request.url, "http://localhost:11434/api/embed");
        assert_eq!(request.header("authorization"), None);
        assert_eq!(
            request.body,
            json!({
                "model": "nomic-embed-text",
                "input": ["a", "b", "c"],
                "options": { "encoding-format": "float" }
            })
        );
    }

    #[tokio::test]
    async fn test_options_omitted_when_empty() {
        let transport = Arc::new(RecordingTransport::new().with_response(json!({
            "embeddings": [[1.0]]
        })));
        let embedder = OllamaEmbedder::new(
            OllamaConfig::new("nomic-embed-text", "http://localhost:11434/"),
            transport.clone(),
        );

        embedder.embed("a").await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.url, "http://localhost:11434/api/embed");
        assert!(request.body.get("options").is_none());
    }

    #[tokio::test]
    async fn test_explicit_batch_size_chunks() {
        let transport = Arc::new(
            RecordingTransport::new()
                .with_response(json!({ "embeddings": [[1.0], [2.0]] }))
                .with_response(json!({ "embeddings": [[3.0]] })),
        );
        let embedder = OllamaEmbedder::new(
            OllamaConfig::new("m", "http://localhost:11434").with_batch_size(2),
            transport.clone(),
        );

        let embeddings = embedder.embed_batch(vec!["a", "b", "c"]).await.unwrap();

        assert_eq!(embeddings, vec![vec![1.0], vec![2.0], vec![3.0]]);
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let transport =
            Arc::new(RecordingTransport::new().with_response(json!({ "embedding": [1.0] })));
        let embedder = OllamaEmbedder::new(
            OllamaConfig::new("m", "http://localhost:11434"),
            transport,
        );

        let err = embedder.embed("a").await.unwrap_err();
        assert!(matches!(err, EmbedKitError::Embedding { .. }));
    }

    #[tokio::test]
    async fn test_short_response_is_rejected() {
        let transport = Arc::new(
            RecordingTransport::new().with_response(json!({ "embeddings": [[1.0], [2.0]] })),
        );
        let embedder = OllamaEmbedder::new(
            OllamaConfig::new("m", "http://localhost:11434"),
            transport,
        );

        let err = embedder.embed_batch(vec!["a", "b", "c"]).await.unwrap_err();

        assert!(matches!(err, EmbedKitError::Embedding { .. }));
        assert!(err.to_string().contains("ollama returned 2 embeddings for 3 inputs"));
    }
}

#[cfg(test)]
mod openai_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_chunks_by_ten() {
        let transport = Arc::new(
            RecordingTransport::new()
                .with_response(indexed_response(0, 10))
                .with_response(indexed_response(10, 10))
                .with_response(indexed_response(20, 5)),
        );
        let embedder = OpenAiEmbedder::new(
            OpenAiConfig::new("text-embedding-3-small", "ok", "https://api.openai.com/v1"),
            transport.clone(),
        );
        let inputs = texts(25);

        let embeddings = embedder
            .embed_batch(inputs.iter().map(String::as_str).collect())
            .await
            .unwrap();

        assert_eq!(embeddings.len(), 25);
        assert_eq!(embeddings[24], vec![24.0]);
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_reorders_by_index() {
        let transport = Arc::new(RecordingTransport::new().with_response(json!({
            "data": [
                { "embedding": [2.0], "index": 2 },
                { "embedding": [0.0], "index": 0 },
                { "embedding": [1.0], "index": 1 }
            ]
        })));
        let embedder = OpenAiEmbedder::new(
            OpenAiConfig::new("m", "ok", "https://api.openai.com/v1"),
            transport,
        );

        let embeddings = embedder.embed_batch(vec!["a", "b", "c"]).await.unwrap();

        assert_eq!(embeddings, vec![vec![0.0], vec![1.0], vec![2.0]]);
    }

    #[tokio::test]
    async fn test_azure_url_and_dimensions() {
        let transport = Arc::new(RecordingTransport::new().with_response(indexed_response(0, 1)));
        let embedder = OpenAiEmbedder::new(
            OpenAiConfig::new(
                "text-embedding-3-large",
                "azure-key",
                "https://res.openai.azure.com/openai/v1/",
            )
            .with_dimensions(Some(256)),
            transport.clone(),
        );

        embedder.embed("hello").await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(
            request.url,
            "https://res.openai.azure.com/openai/v1/embeddings"
        );
        assert_eq!(request.header("Authorization"), Some("Bearer azure-key"));
        assert_eq!(
            request.body,
            json!({ "model": "text-embedding-3-large", "input": ["hello"], "dimensions": 256 })
        );
    }

    #[tokio::test]
    async fn test_absent_dimensions_is_omitted() {
        let transport = Arc::new(RecordingTransport::new().with_response(indexed_response(0, 1)));
        let embedder = OpenAiEmbedder::new(
            OpenAiConfig::new("m", "ok", "https://api.openai.com/v1"),
            transport.clone(),
        );

        embedder.embed("hello").await.unwrap();

        let body = transport.requests()[0].body.clone();
        assert_eq!(body, json!({ "model": "m", "input": ["hello"] }));
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let transport = RecordingTransport::new();
        transport.push_status(400, "dimensions not supported");
        let embedder = OpenAiEmbedder::new(
            OpenAiConfig::new("m", "ok", "https://api.openai.com/v1").with_dimensions(Some(3)),
            Arc::new(transport),
        );

        let err = embedder.embed("hello").await.unwrap_err();
        assert!(matches!(
            err,
            EmbedKitError::Server {
                status_code: 400,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_health_check_uses_probe_text() {
        let transport = Arc::new(RecordingTransport::new().with_response(indexed_response(0, 1)));
        let embedder = OpenAiEmbedder::new(
            OpenAiConfig::new("m", "ok", "https://api.openai.com/v1"),
            transport.clone(),
        );

        embedder.health_check().await.unwrap();

        assert_eq!(transport.requests()[0].body["input"], json!([HEALTH_CHECK_TEXT]));
    }

    #[tokio::test]
    async fn test_short_response_is_rejected() {
        let transport = Arc::new(
            RecordingTransport::new()
                .with_response(indexed_response(0, 9))
                .with_response(indexed_response(10, 2)),
        );
        let embedder = OpenAiEmbedder::new(
            OpenAiConfig::new("m", "ok", "https://api.openai.com/v1"),
            transport.clone(),
        );
        let inputs = texts(12);

        let err = embedder
            .embed_batch(inputs.iter().map(String::as_str).collect())
            .await
            .unwrap_err();

        assert!(matches!(err, EmbedKitError::Embedding { .. }));
        assert!(err.to_string().contains("openai returned 9 embeddings for 10 inputs"));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_long_response_is_rejected() {
        let transport = Arc::new(RecordingTransport::new().with_response(indexed_response(0, 2)));
        let embedder = OpenAiEmbedder::new(
            OpenAiConfig::new("m", "ok", "https://api.openai.com/v1"),
            transport,
        );

        let err = embedder.embed("hello").await.unwrap_err();
        assert!(matches!(err, EmbedKitError::Embedding { .. }));
    }
}

#[cfg(test)]
mod decode_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_index_keeps_position() {
        let decoded = decode_indexed(
            "openai",
            json!({ "data": [{ "embedding": [1.0] }, { "embedding": [2.0] }] }),
        )
        .unwrap();

        assert_eq!(decoded, vec![vec![1.0], vec![2.0]]);
    }

    #[test]
    fn test_wrong_shape_is_embedding_error() {
        let err = decode_indexed("voyageai", json!({ "embeddings": [[1.0]] })).unwrap_err();

        assert!(matches!(err, EmbedKitError::Embedding { .. }));
        assert!(err.to_string().contains("voyageai"));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://a/v1/", "/embeddings"), "http://a/v1/embeddings");
        assert_eq!(join_url("http://a/v1", "embeddings"), "http://a/v1/embeddings");
    }
}
