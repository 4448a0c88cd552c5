pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::not_found;
use crate::orchestrator::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/turns", post(handlers::handle_turn))
        .route("/api/v1/modules", get(handlers::handle_list_modules))
        .route("/api/v1/tools", get(handlers::handle_list_tools))
        .fallback(not_found)
        .with_state(state)
}
