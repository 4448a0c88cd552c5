mod assembler;
mod config;
mod db;
mod errors;
mod models;
mod modules;
mod orchestrator;
mod retrieval;
mod router;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, RetrievalBackend};
use crate::db::create_pool;
use crate::modules::ModuleRegistry;
use crate::retrieval::embeddings::EmbeddingClient;
use crate::retrieval::{KeywordRetriever, PgVectorRetriever, RetrievalProvider, TimeoutRetriever};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing backend settings)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Coach API v{}", env!("CARGO_PKG_VERSION"));

    // Module registry: refuse to start on a table the router and assembler disagree with
    let registry = ModuleRegistry::builtin();
    registry
        .validate()
        .context("Built-in module registry is inconsistent")?;
    info!("Module registry loaded ({} modules)", registry.len());

    let retriever = build_retriever(&config).await?;
    info!(
        "Retrieval backend: {} (timeout {}ms)",
        retriever.name(),
        config.retrieval_timeout_ms
    );

    let state = AppState {
        config: config.clone(),
        registry: Arc::new(registry),
        retriever,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the configured retrieval provider, wrapped in the per-call timeout.
async fn build_retriever(config: &Config) -> Result<Arc<dyn RetrievalProvider>> {
    let inner: Arc<dyn RetrievalProvider> = match config.retrieval_backend {
        RetrievalBackend::Keyword => {
            let retriever = match &config.chunks_path {
                Some(path) => KeywordRetriever::from_path(path)?,
                None => KeywordRetriever::with_sample_corpus(),
            };
            if retriever.is_empty() {
                warn!("Keyword corpus is empty, turns will run without domain context");
            } else {
                info!("Keyword index built ({} chunks)", retriever.len());
            }
            Arc::new(retriever)
        }
        RetrievalBackend::PgVector => {
            let database_url = config.require(&config.database_url, "DATABASE_URL")?;
            let api_key = config.require(&config.openai_api_key, "OPENAI_API_KEY")?;
            let db = create_pool(database_url).await?;
            let embeddings = EmbeddingClient::new(api_key.to_string(), config.embedding_model.clone())?;
            info!("Embedding client initialized (model: {})", embeddings.model());
            Arc::new(PgVectorRetriever::new(db, embeddings))
        }
    };

    Ok(Arc::new(TimeoutRetriever::new(
        inner,
        Duration::from_millis(config.retrieval_timeout_ms),
    )))
}
