use std::sync::Arc;

use crate::config::Config;
use crate::modules::ModuleRegistry;
use crate::retrieval::RetrievalProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Validated at startup and never mutated afterwards.
    pub registry: Arc<ModuleRegistry>,
    /// Pluggable retrieval backend. Keyword by default, swap via RETRIEVAL_BACKEND.
    pub retriever: Arc<dyn RetrievalProvider>,
}
