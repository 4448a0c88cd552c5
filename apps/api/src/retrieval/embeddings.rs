//! Embedding client used by the pgvector retriever.
//!
//! Talks to an OpenAI-compatible `/v1/embeddings` endpoint and retries on 429
//! and 5xx with exponential backoff.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const OPENAI_EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_MODEL: &str = "text-embedding-ada-002";
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Embedding response contained no vectors")]
    Empty,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct EmbeddingClient {
    client: Client,
    api_key: String,
    model: String,
    url: String,
}

impl EmbeddingClient {
    pub fn new(api_key: String, model: String) -> Result<Self, EmbeddingError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
            url: OPENAI_EMBEDDINGS_URL.to_string(),
        })
    }

    /// Points the client at another OpenAI-compatible endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Embeds one text. Retries on 429 (rate limit) and 5xx errors.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request_body = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let mut last_error: Option<EmbeddingError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Embedding attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&self.url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(EmbeddingError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Embedding API returned {}: {}", status, body);
                last_error = Some(EmbeddingError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(EmbeddingError::Api {
                    status: status.as_u16(),
                    message: api_error_message(body),
                });
            }

            let parsed: EmbeddingResponse = response.json().await?;
            let embedding = first_embedding(parsed)?;
            debug!("Embedded {} chars into {} dims", text.len(), embedding.len());
            return Ok(embedding);
        }

        Err(last_error.unwrap_or(EmbeddingError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

fn first_embedding(response: EmbeddingResponse) -> Result<Vec<f32>, EmbeddingError> {
    response
        .data
        .into_iter()
        .next()
        .map(|d| d.embedding)
        .filter(|e| !e.is_empty())
        .ok_or(EmbeddingError::Empty)
}

fn api_error_message(body: String) -> String {
    serde_json::from_str::<ApiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Formats a vector as a pgvector text literal, e.g. `[0.1,0.2]`.
pub fn to_vector_literal(embedding: &[f32]) -> String {
    let parts: Vec<String> = embedding.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(","))
}
