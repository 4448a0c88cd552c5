use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::retrieval::embeddings::DEFAULT_MODEL;

/// Which retrieval provider backs the domain-expertise section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalBackend {
    /// In-memory keyword scoring over a JSON corpus (or the bundled sample).
    Keyword,
    /// Embedding search over a Postgres `content_chunks` table.
    PgVector,
}

impl FromStr for RetrievalBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(RetrievalBackend::Keyword),
            "pgvector" => Ok(RetrievalBackend::PgVector),
            other => bail!("RETRIEVAL_BACKEND must be 'keyword' or 'pgvector', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if the selected backend is missing what it needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub retrieval_backend: RetrievalBackend,
    pub retrieval_timeout_ms: u64,
    /// JSON corpus for the keyword backend. Bundled sample when unset.
    pub chunks_path: Option<PathBuf>,
    pub database_url: Option<String>,
    pub openai_api_key: Option<String>,
    pub embedding_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            retrieval_backend: RetrievalBackend::Keyword,
            retrieval_timeout_ms: 3000,
            chunks_path: None,
            database_url: None,
            openai_api_key: None,
            embedding_model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            retrieval_backend: optional_env("RETRIEVAL_BACKEND")
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or(defaults.retrieval_backend),
            retrieval_timeout_ms: optional_env("RETRIEVAL_TIMEOUT_MS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("RETRIEVAL_TIMEOUT_MS must be a whole number of milliseconds")?
                .unwrap_or(defaults.retrieval_timeout_ms),
            chunks_path: optional_env("CHUNKS_PATH").map(PathBuf::from),
            database_url: optional_env("DATABASE_URL"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            embedding_model: optional_env("EMBEDDING_MODEL").unwrap_or(defaults.embedding_model),
        };

        if config.retrieval_backend == RetrievalBackend::PgVector {
            config.require(&config.database_url, "DATABASE_URL")?;
            config.require(&config.openai_api_key, "OPENAI_API_KEY")?;
        }

        Ok(config)
    }

    /// Returns the value of a setting the current backend cannot run without.
    pub fn require<'a>(&self, value: &'a Option<String>, key: &str) -> Result<&'a str> {
        value.as_deref().with_context(|| {
            format!("Required environment variable '{key}' is not set (RETRIEVAL_BACKEND=pgvector)")
        })
    }
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
