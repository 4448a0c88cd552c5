//! In-memory keyword retriever.
//!
//! Algorithm:
//! 1. Tokenize query and chunk into lowercase alphanumeric terms, minus stopwords.
//! 2. similarity = |shared terms| / sqrt(|query terms| × |chunk terms|)
//! 3. Keep chunks in the requested domain scoring at least `SIMILARITY_THRESHOLD`,
//!    best first, ties by corpus order.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::retrieval::sample::sample_chunks;
use crate::retrieval::{RetrievalProvider, RetrievedChunk, MAX_CHUNKS};
use crate::router::types::{Domain, Stage};

pub const SIMILARITY_THRESHOLD: f64 = 0.1;

const STOPWORDS: &[&str] = &[
    "the", "and", "for", "you", "your", "with", "that", "this", "are", "was", "what", "how",
    "can", "but", "not", "have", "has", "from", "they", "them", "about", "into", "more",
    "need", "help", "want", "should", "would", "could", "just", "get", "its", "it's",
];

/// A corpus entry as stored on disk (`CHUNKS_PATH`) or built in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusChunk {
    pub content: String,
    pub domain: Domain,
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub section: Option<String>,
}

struct IndexedChunk {
    chunk: CorpusChunk,
    terms: HashSet<String>,
}

pub struct KeywordRetriever {
    index: Vec<IndexedChunk>,
}

impl KeywordRetriever {
    pub fn new(chunks: Vec<CorpusChunk>) -> Self {
        let index = chunks
            .into_iter()
            .map(|chunk| IndexedChunk {
                terms: terms(&chunk.content),
                chunk,
            })
            .collect();
        Self { index }
    }

    /// Retriever over the built-in sample corpus.
    pub fn with_sample_corpus() -> Self {
        Self::new(sample_chunks())
    }

    /// Loads a JSON array of `CorpusChunk`s.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read chunk corpus at {}", path.display()))?;
        let chunks: Vec<CorpusChunk> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid chunk corpus JSON in {}", path.display()))?;
        info!("Loaded {} retrieval chunks from {}", chunks.len(), path.display());
        Ok(Self::new(chunks))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn search(&self, query: &str, domain: Domain) -> Vec<RetrievedChunk> {
        let query_terms = terms(query);
        if query_terms.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &CorpusChunk)> = self
            .index
            .iter()
            .filter(|entry| entry.chunk.domain == domain)
            .map(|entry| (similarity(&query_terms, &entry.terms), &entry.chunk))
            .filter(|(score, _)| *score >= SIMILARITY_THRESHOLD)
            .collect();

        // stable sort keeps corpus order for ties
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        scored
            .into_iter()
            .take(MAX_CHUNKS)
            .map(|(similarity, chunk)| RetrievedChunk {
                content: chunk.content.clone(),
                similarity,
                domain: chunk.domain,
                stage: chunk.stage,
                section: chunk.section.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl RetrievalProvider for KeywordRetriever {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn retrieve(&self, query: &str, domain: Domain) -> Vec<RetrievedChunk> {
        self.search(query, domain)
    }
}

fn terms(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\''))
        .filter(|t| t.chars().count() >= 3 && !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

fn similarity(query: &HashSet<String>, chunk: &HashSet<String>) -> f64 {
    if query.is_empty() || chunk.is_empty() {
        return 0.0;
    }
    let shared = query.intersection(chunk).count() as f64;
    shared / ((query.len() * chunk.len()) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn corpus_chunk(domain: Domain, content: &str) -> CorpusChunk {
        CorpusChunk {
            content: content.to_string(),
            domain,
            stage: None,
            section: None,
        }
    }

    #[test]
    fn test_terms_drop_stopwords_and_short_words() {
        let t = terms("How do I fix the ATS formatting on my resume?");
        assert!(t.contains("ats"));
        assert!(t.contains("formatting"));
        assert!(t.contains("resume"));
        assert!(!t.contains("how"));
        assert!(!t.contains("the"));
        assert!(!t.contains("do"));
    }

    #[test]
    fn test_similarity_is_zero_without_overlap() {
        let a = terms("salary negotiation");
        let b = terms("headline formula");
        assert_eq!(similarity(&a, &b), 0.0);
        assert!(similarity(&a, &a) > 0.99);
    }

    #[tokio::test]
    async fn test_sample_corpus_answers_star_question() {
        let retriever = KeywordRetriever::with_sample_corpus();
        let chunks = retriever
            .retrieve("interview interviewing star method situation task action result", Domain::Interview)
            .await;
        assert!(!chunks.is_empty());
        assert!(chunks[0].content.starts_with("STAR method"));
        assert!(chunks.iter().all(|c| c.domain == Domain::Interview));
        assert!(chunks.windows(2).all(|w| w[0].similarity >= w[1].similarity));
    }

    #[tokio::test]
    async fn test_filters_by_domain() {
        let retriever = KeywordRetriever::new(vec![
            corpus_chunk(Domain::Resume, "resume bullets need results"),
            corpus_chunk(Domain::Linkedin, "resume bullets on linkedin"),
        ]);
        let chunks = retriever.retrieve("resume bullets", Domain::Resume).await;
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].domain, Domain::Resume);
    }

    #[tokio::test]
    async fn test_below_threshold_returns_nothing() {
        let retriever = KeywordRetriever::new(vec![corpus_chunk(
            Domain::Networking,
            "coffee chat outreach template",
        )]);
        assert!(retriever
            .retrieve("negotiation equity vesting", Domain::Networking)
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_caps_results() {
        let chunks = (0..6)
            .map(|i| corpus_chunk(Domain::Resume, &format!("resume tip number{i}")))
            .collect();
        let retriever = KeywordRetriever::new(chunks);
        assert_eq!(retriever.retrieve("resume tip", Domain::Resume).await.len(), MAX_CHUNKS);
    }

    #[test]
    fn test_loads_corpus_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"content":"Negotiate base first","domain":"negotiation","stage":"negotiating"}},
               {{"content":"Headline formula","domain":"linkedin","section":"headline"}}]"#
        )
        .unwrap();

        let retriever = KeywordRetriever::from_path(file.path()).unwrap();
        assert_eq!(retriever.len(), 2);
    }

    #[test]
    fn test_bad_corpus_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(KeywordRetriever::from_path(file.path()).is_err());
        assert!(KeywordRetriever::from_path(Path::new("/nonexistent/chunks.json")).is_err());
    }
}
