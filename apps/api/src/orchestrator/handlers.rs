//! Axum route handlers for the turn, module and tool APIs.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assembler::estimate_tokens;
use crate::errors::AppError;
use crate::modules::{ModuleId, ModulePriority, ModuleType};
use crate::orchestrator::conversation::ChatMessage;
use crate::orchestrator::memory::{build_memory_summary, CareerFile, MemoryItem};
use crate::orchestrator::{generate, GenerateInput, TurnResult};
use crate::router::tools::Tool;
use crate::router::types::RouterState;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TurnRequest {
    pub user_text: String,
    #[serde(default)]
    pub prev_state: Option<RouterState>,
    /// Ready-made summary. Wins over `career_file` / `memory_items`.
    #[serde(default)]
    pub memory_summary: Option<String>,
    #[serde(default)]
    pub career_file: Option<CareerFile>,
    #[serde(default)]
    pub memory_items: Vec<MemoryItem>,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
    #[serde(default)]
    pub tools_index: Option<String>,
    #[serde(default)]
    pub active_tool_prompt: Option<String>,
    #[serde(default)]
    pub web_search_config: Option<String>,
    #[serde(default)]
    pub web_search_results: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ModuleSummary {
    pub id: ModuleId,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub purpose: &'static str,
    pub priority: ModulePriority,
    pub estimated_tokens: usize,
}

#[derive(Debug, Serialize)]
pub struct ModuleListResponse {
    pub modules: Vec<ModuleSummary>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ToolSummary {
    pub id: Tool,
    pub display_name: &'static str,
    pub has_wizard: bool,
}

#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/turns
///
/// Routes one user turn and returns the assembled system prompt, the state the
/// caller must send back next turn, and the decision telemetry.
pub async fn handle_turn(
    State(state): State<AppState>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<TurnResult>, AppError> {
    if request.user_text.trim().is_empty() {
        return Err(AppError::Validation("user_text cannot be empty".to_string()));
    }

    let memory_summary = request
        .memory_summary
        .filter(|s| !s.trim().is_empty())
        .or_else(|| build_memory_summary(request.career_file.as_ref(), &request.memory_items));

    let result = generate(
        &state.registry,
        state.retriever.as_ref(),
        GenerateInput {
            user_text: &request.user_text,
            prev_state: request.prev_state,
            memory_summary: memory_summary.as_deref(),
            conversation_history: &request.conversation_history,
            tools_index: request.tools_index.as_deref(),
            active_tool_prompt: request.active_tool_prompt.as_deref(),
            web_search_config: request.web_search_config.as_deref(),
            web_search_results: request.web_search_results.as_deref(),
        },
    )
    .await?;

    Ok(Json(result))
}

/// GET /api/v1/modules
///
/// Lists the registry with per-module token estimates. Debugging aid.
pub async fn handle_list_modules(State(state): State<AppState>) -> Json<ModuleListResponse> {
    let modules: Vec<ModuleSummary> = state
        .registry
        .modules()
        .into_iter()
        .map(|m| ModuleSummary {
            id: m.id,
            module_type: m.module_type,
            purpose: m.purpose,
            priority: m.priority,
            estimated_tokens: estimate_tokens(&m.content),
        })
        .collect();

    Json(ModuleListResponse {
        total: modules.len(),
        modules,
    })
}

/// GET /api/v1/tools
///
/// Tool catalogue, so clients can label `active_tool` / `wizard_offer` values.
pub async fn handle_list_tools() -> Json<ToolListResponse> {
    Json(ToolListResponse {
        tools: Tool::ALL
            .into_iter()
            .map(|tool| ToolSummary {
                id: tool,
                display_name: tool.display_name(),
                has_wizard: tool.has_wizard(),
            })
            .collect(),
    })
}
