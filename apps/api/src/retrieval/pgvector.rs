//! pgvector retriever: embeds the query and runs a cosine search over
//! `content_chunks`.
//!
//! Expected table:
//! ```sql
//! CREATE TABLE content_chunks (
//!     id        BIGSERIAL PRIMARY KEY,
//!     content   TEXT NOT NULL,
//!     embedding VECTOR(1536) NOT NULL,
//!     domain    TEXT NOT NULL,
//!     stage     TEXT,
//!     section   TEXT
//! );
//! ```

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::models::chunk::ContentChunkRow;
use crate::retrieval::embeddings::{to_vector_literal, EmbeddingClient};
use crate::retrieval::{RetrievalProvider, RetrievedChunk, MAX_CHUNKS};
use crate::router::types::{Domain, Stage};

/// Minimum cosine similarity for a chunk to count as relevant.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

const SEARCH_SQL: &str = r#"
SELECT content, domain, stage, section,
       1 - (embedding <=> $1::vector) AS similarity
FROM content_chunks
WHERE domain = $2
  AND 1 - (embedding <=> $1::vector) > $3
ORDER BY embedding <=> $1::vector
LIMIT $4
"#;

pub struct PgVectorRetriever {
    db: PgPool,
    embeddings: EmbeddingClient,
}

impl PgVectorRetriever {
    pub fn new(db: PgPool, embeddings: EmbeddingClient) -> Self {
        Self { db, embeddings }
    }

    async fn search(&self, query: &str, domain: Domain) -> Result<Vec<RetrievedChunk>> {
        let embedding = self.embeddings.embed(query).await?;

        let rows = sqlx::query_as::<_, ContentChunkRow>(SEARCH_SQL)
            .bind(to_vector_literal(&embedding))
            .bind(domain.as_str())
            .bind(SIMILARITY_THRESHOLD)
            .bind(MAX_CHUNKS as i64)
            .fetch_all(&self.db)
            .await?;

        debug!("pgvector returned {} chunks for {domain}", rows.len());
        Ok(rows.into_iter().map(|row| into_chunk(row, domain)).collect())
    }
}

#[async_trait]
impl RetrievalProvider for PgVectorRetriever {
    fn name(&self) -> &'static str {
        "pgvector"
    }

    async fn retrieve(&self, query: &str, domain: Domain) -> Vec<RetrievedChunk> {
        match self.search(query, domain).await {
            Ok(chunks) => chunks,
            Err(e) => {
                warn!(%domain, "Retrieval failed, continuing without domain context: {e:#}");
                Vec::new()
            }
        }
    }
}

/// Rows are already filtered by domain, so the requested domain is authoritative.
fn into_chunk(row: ContentChunkRow, domain: Domain) -> RetrievedChunk {
    RetrievedChunk {
        content: row.content,
        similarity: row.similarity,
        domain,
        stage: row.stage.as_deref().and_then(parse_stage),
        section: row.section,
    }
}

fn parse_stage(raw: &str) -> Option<Stage> {
    Stage::DETECTION_ORDER
        .into_iter()
        .find(|stage| stage.as_str() == raw)
}
