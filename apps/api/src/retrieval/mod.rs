//! Retrieval: pluggable providers of domain-expertise chunks.
//!
//! Default: `KeywordRetriever` (in-memory corpus, deterministic, no network).
//! Optional: `PgVectorRetriever` (embeddings + pgvector similarity search).
//!
//! `AppState` holds an `Arc<dyn RetrievalProvider>`, chosen at startup from
//! `RETRIEVAL_BACKEND` and wrapped in a `TimeoutRetriever`.
//!
//! Providers never fail. Any error, including a timeout, is logged and becomes
//! an empty result, which downstream code treats as "nothing relevant found".

pub mod embeddings;
pub mod keyword;
pub mod pgvector;
pub mod sample;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::router::types::{Domain, Stage};

pub use keyword::KeywordRetriever;
pub use pgvector::PgVectorRetriever;

/// Most chunks ever merged into one prompt.
pub const MAX_CHUNKS: usize = 3;

/// One ranked piece of domain expertise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub content: String,
    pub similarity: f64,
    pub domain: Domain,
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub section: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A source of domain-expertise chunks. Implement this to swap backends
/// without touching the orchestrator.
#[async_trait]
pub trait RetrievalProvider: Send + Sync {
    /// Short backend label reported in telemetry.
    fn name(&self) -> &'static str;

    /// Ranked chunks for `query` in `domain`, best first. Empty on any failure.
    async fn retrieve(&self, query: &str, domain: Domain) -> Vec<RetrievedChunk>;
}

/// Fetches at most `MAX_CHUNKS` chunks. The general domain never reaches the provider.
pub async fn retrieve_context(
    provider: &dyn RetrievalProvider,
    query: &str,
    domain: Domain,
) -> Vec<RetrievedChunk> {
    if domain == Domain::General || query.trim().is_empty() {
        return Vec::new();
    }
    let mut chunks = provider.retrieve(query, domain).await;
    chunks.truncate(MAX_CHUNKS);
    chunks
}

// ────────────────────────────────────────────────────────────────────────────
// TimeoutRetriever
// ────────────────────────────────────────────────────────────────────────────

/// Puts a deadline on another provider. A miss yields an empty result.
pub struct TimeoutRetriever {
    inner: Arc<dyn RetrievalProvider>,
    timeout: Duration,
}

impl TimeoutRetriever {
    pub fn new(inner: Arc<dyn RetrievalProvider>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl RetrievalProvider for TimeoutRetriever {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn retrieve(&self, query: &str, domain: Domain) -> Vec<RetrievedChunk> {
        match tokio::time::timeout(self.timeout, self.inner.retrieve(query, domain)).await {
            Ok(chunks) => chunks,
            Err(_) => {
                warn!(
                    provider = self.inner.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    %domain,
                    "Retrieval timed out, continuing without domain context"
                );
                Vec::new()
            }
        }
    }
}
