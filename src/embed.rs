//! Embedding trait and the hosted embedding-service client.

use serde::{Deserialize, Serialize};

use crate::config::EmbedderConfig;
use crate::error::{Result, ScholarError};
use crate::http::send_with_retry;

const SERVICE: &str = "embeddings";

/// Texts sent per embedding request when batching chunk uploads.
const BATCH_SIZE: usize = 64;

/// Maps text to a fixed-length vector.
///
/// Sync-time chunk embedding and ask-time query embedding must go through
/// the same implementation so vectors are comparable; the persisted index
/// additionally pins the model name and refuses mismatched embedders.
pub trait Embedder {
    fn model_name(&self) -> &str;

    fn dimension(&self) -> usize;

    fn embed_query(&self, text: &str) -> Result<Vec<f32>>;

    fn embed_texts(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.embed_query(text)?);
        }
        Ok(embeddings)
    }
}

/// OpenAI-compatible `/embeddings` client.
pub struct ApiEmbedder {
    client: reqwest::blocking::Client,
    config: EmbedderConfig,
    endpoint: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl ApiEmbedder {
    pub fn new(config: EmbedderConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        let endpoint = embeddings_endpoint(&config.base_url);
        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    fn request_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let response = send_with_retry(SERVICE, || {
            let mut request = self.client.post(&self.endpoint).json(&EmbeddingRequest {
                model: &self.config.model,
                input: texts.to_vec(),
            });
            if let Some(key) = &self.config.api_key {
                request = request.bearer_auth(key);
            }
            request.send()
        })?;

        let parsed: EmbeddingResponse = response.json()?;
        if parsed.data.len() != texts.len() {
            return Err(ScholarError::MalformedResponse {
                service: SERVICE.to_string(),
                reason: format!(
                    "expected {} embeddings, got {}",
                    texts.len(),
                    parsed.data.len()
                ),
            });
        }

        let mut embeddings = Vec::with_capacity(parsed.data.len());
        for data in parsed.data {
            if data.embedding.len() != self.config.dimension {
                return Err(ScholarError::DimensionMismatch {
                    expected: self.config.dimension,
                    actual: data.embedding.len(),
                });
            }
            embeddings.push(data.embedding);
        }
        Ok(embeddings)
    }
}

impl Embedder for ApiEmbedder {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        self.request_batch(&[text])?
            .pop()
            .ok_or_else(|| ScholarError::MalformedResponse {
                service: SERVICE.to_string(),
                reason: "empty embedding response".into(),
            })
    }

    fn embed_texts(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for batch in texts.chunks(BATCH_SIZE) {
            embeddings.extend(self.request_batch(batch)?);
        }
        tracing::debug!(texts = texts.len(), "embedded batch");
        Ok(embeddings)
    }
}

fn embeddings_endpoint(base_url: &str) -> String {
    if base_url.ends_with("/embeddings") {
        base_url.to_string()
    } else {
        format!("{base_url}/embeddings")
    }
}
