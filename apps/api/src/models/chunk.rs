use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `content_chunks` row as returned by the similarity search.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentChunkRow {
    pub content: String,
    pub domain: String,
    pub stage: Option<String>,
    pub section: Option<String>,
    pub similarity: f64,
}
