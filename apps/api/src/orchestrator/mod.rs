//! Orchestrator: the single entry point for one conversational turn.
//!
//! Router → (optional) retrieval → assembler, strictly in sequence. Retrieval
//! is the only await point; everything else is pure. The returned telemetry
//! exposes every intermediate decision and is part of the response contract.

pub mod conversation;
pub mod handlers;
pub mod memory;

use serde::Serialize;
use tracing::info;

use crate::assembler::{assemble, AssembleInput, InvariantViolation};
use crate::modules::{ModuleId, ModuleRegistry};
use crate::orchestrator::conversation::{turn_count, ChatMessage};
use crate::retrieval::{retrieve_context, RetrievalProvider};
use crate::router::tools::Tool;
use crate::router::types::{
    Domain, Friction, Posture, Priority, RouterState, Stage, Urgency, UserEnergy,
};
use crate::router::{route_turn, RouteInput};

/// Separator placed between retrieved chunks.
pub const CHUNK_SEPARATOR: &str = "\n\n---\n\n";

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateInput<'a> {
    pub user_text: &'a str,
    pub prev_state: Option<RouterState>,
    pub memory_summary: Option<&'a str>,
    pub conversation_history: &'a [ChatMessage],
    pub tools_index: Option<&'a str>,
    pub active_tool_prompt: Option<&'a str>,
    pub web_search_config: Option<&'a str>,
    pub web_search_results: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Telemetry {
    pub posture: Posture,
    pub priority: Priority,
    pub domain: Domain,
    pub stage: Stage,
    pub urgency: Urgency,
    pub friction: Friction,
    pub user_energy: UserEnergy,
    pub modules_included: Vec<ModuleId>,
    pub modules_dropped: Vec<ModuleId>,
    pub tokens_used: usize,
    pub retrieval_query: Option<String>,
    pub chunks_retrieved: usize,
    /// Set only when the provider was actually called.
    pub retrieval_provider: Option<&'static str>,
    pub turn_count: usize,
    pub needs_web_search: bool,
    pub active_tool: Option<Tool>,
    pub wizard_offer: Option<Tool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnResult {
    pub system_prompt: String,
    pub next_state: RouterState,
    pub active_tool: Option<Tool>,
    pub wizard_offer: Option<Tool>,
    pub telemetry: Telemetry,
}

pub async fn generate(
    registry: &ModuleRegistry,
    retriever: &dyn RetrievalProvider,
    input: GenerateInput<'_>,
) -> Result<TurnResult, InvariantViolation> {
    let turn_count = turn_count(input.conversation_history);

    let route = route_turn(RouteInput {
        user_text: input.user_text,
        prev_state: input.prev_state.unwrap_or_default(),
        memory_summary: input.memory_summary,
        turn_count,
    });
    let next_state = route.next_state;

    let mut module_ids = route.module_ids;
    if !module_ids.contains(&ModuleId::BrandAuthority) {
        module_ids.push(ModuleId::BrandAuthority);
    }

    let domain_covered = module_ids
        .iter()
        .any(|id| id.covered_domain() == Some(next_state.domain));

    let mut retrieved_chunk = None;
    let mut chunks_retrieved = 0;
    let mut retrieval_provider = None;
    if let Some(query) = route.retrieval_query.as_deref() {
        if next_state.domain != Domain::General && !domain_covered {
            let chunks = retrieve_context(retriever, query, next_state.domain).await;
            retrieval_provider = Some(retriever.name());
            chunks_retrieved = chunks.len();
            if !chunks.is_empty() {
                let joined = chunks
                    .iter()
                    .map(|c| c.content.as_str())
                    .collect::<Vec<_>>()
                    .join(CHUNK_SEPARATOR);
                retrieved_chunk = Some(joined);
            }
        }
    }

    let assembled = assemble(
        registry,
        &AssembleInput {
            module_ids: &module_ids,
            memory_summary: input.memory_summary,
            retrieved_chunk: retrieved_chunk.as_deref(),
            tools_index: input.tools_index,
            active_tool_prompt: input.active_tool_prompt,
            web_search_config: input.web_search_config,
            web_search_results: input.web_search_results,
        },
    )?;

    info!(
        posture = %next_state.posture,
        priority = %next_state.priority,
        domain = %next_state.domain,
        stage = %next_state.stage,
        urgency = %next_state.urgency,
        tokens_used = assembled.tokens_used,
        dropped = assembled.modules_dropped.len(),
        chunks = chunks_retrieved,
        turn_count,
        active_tool = route.active_tool.map(Tool::as_str),
        wizard_offer = route.wizard_offer.map(Tool::as_str),
        "Turn assembled"
    );

    Ok(TurnResult {
        system_prompt: assembled.system_prompt,
        next_state,
        active_tool: route.active_tool,
        wizard_offer: route.wizard_offer,
        telemetry: Telemetry {
            posture: next_state.posture,
            priority: next_state.priority,
            domain: next_state.domain,
            stage: next_state.stage,
            urgency: next_state.urgency,
            friction: next_state.friction,
            user_energy: next_state.user_energy,
            modules_included: assembled.modules_included,
            modules_dropped: assembled.modules_dropped,
            tokens_used: assembled.tokens_used,
            retrieval_query: route.retrieval_query,
            chunks_retrieved,
            retrieval_provider,
            turn_count,
            needs_web_search: route.needs_web_search,
            active_tool: route.active_tool,
            wizard_offer: route.wizard_offer,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::conversation::Role;
    use crate::retrieval::test_support::StubRetriever;
    use crate::retrieval::KeywordRetriever;

    fn input(text: &str) -> GenerateInput<'_> {
        GenerateInput {
            user_text: text,
            ..GenerateInput::default()
        }
    }

    #[tokio::test]
    async fn test_distress_turn_end_to_end() {
        let registry = ModuleRegistry::builtin();
        let stub = StubRetriever::with_contents(Domain::Interview, &["unused"]);
        let result = generate(
            &registry,
            &stub,
            input("I can't do this, I'm panicking about my interview tomorrow"),
        )
        .await
        .unwrap();

        assert_eq!(result.next_state.posture, Posture::Companion);
        assert_eq!(result.telemetry.friction, Friction::Low);
        assert!(result.system_prompt.contains("### posture_companion"));
        assert!(result.telemetry.modules_included.contains(&ModuleId::ToolInterviewPrep));
        // interview tool covers the domain
        assert_eq!(stub.calls(), 0);
        assert_eq!(result.telemetry.retrieval_provider, None);
        assert_eq!(result.active_tool, Some(Tool::InterviewPrep));
    }

    #[tokio::test]
    async fn test_retrieval_runs_when_no_tool_covers_domain() {
        let registry = ModuleRegistry::builtin();
        let stub = StubRetriever::with_contents(Domain::Resume, &["first chunk", "second chunk"]);
        let prev = RouterState {
            domain: Domain::Resume,
            ..RouterState::default()
        };
        let result = generate(
            &registry,
            &stub,
            GenerateInput {
                user_text: "my job search is all over the place",
                prev_state: Some(prev),
                ..GenerateInput::default()
            },
        )
        .await
        .unwrap();

        assert!(result
            .telemetry
            .modules_included
            .contains(&ModuleId::ToolJobseekerOps));
        assert_eq!(stub.calls(), 1);
        assert_eq!(result.telemetry.chunks_retrieved, 2);
        assert_eq!(result.telemetry.retrieval_provider, Some("stub"));
        assert!(result
            .system_prompt
            .contains("### DOMAIN EXPERTISE\nfirst chunk\n\n---\n\nsecond chunk"));
    }

    #[tokio::test]
    async fn test_general_domain_skips_retrieval() {
        let registry = ModuleRegistry::builtin();
        let stub = StubRetriever::with_contents(Domain::General, &["x"]);
        let result = generate(&registry, &stub, input("hello")).await.unwrap();
        assert_eq!(stub.calls(), 0);
        assert_eq!(result.telemetry.retrieval_query, None);
        assert_eq!(result.telemetry.chunks_retrieved, 0);
    }

    #[tokio::test]
    async fn test_empty_retrieval_is_not_an_error() {
        let registry = ModuleRegistry::builtin();
        let stub = StubRetriever::with_contents(Domain::Resume, &[]);
        let prev = RouterState {
            domain: Domain::Resume,
            ..RouterState::default()
        };
        let result = generate(
            &registry,
            &stub,
            GenerateInput {
                user_text: "tracking applications is a mess",
                prev_state: Some(prev),
                ..GenerateInput::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(stub.calls(), 1);
        assert_eq!(result.telemetry.chunks_retrieved, 0);
        assert!(!result.system_prompt.contains("DOMAIN EXPERTISE"));
    }

    #[tokio::test]
    async fn test_state_roundtrips_between_turns() {
        let registry = ModuleRegistry::builtin();
        let retriever = KeywordRetriever::with_sample_corpus();

        let first = generate(&registry, &retriever, input("I need help with my resume"))
            .await
            .unwrap();
        assert_eq!(first.next_state.domain, Domain::Resume);
        assert_eq!(first.wizard_offer, Some(Tool::Resumes));

        let history = vec![
            ChatMessage::new(Role::User, "I need help with my resume"),
            ChatMessage::new(Role::Assistant, "Sure."),
        ];
        let second = generate(
            &registry,
            &retriever,
            GenerateInput {
                user_text: "ok thanks",
                prev_state: Some(first.next_state),
                conversation_history: &history,
                ..GenerateInput::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(second.next_state.domain, Domain::Resume);
        assert_eq!(second.telemetry.turn_count, 1);
    }

    #[tokio::test]
    async fn test_memory_summary_lands_in_prompt() {
        let registry = ModuleRegistry::builtin();
        let stub = StubRetriever::with_contents(Domain::General, &[]);
        let result = generate(
            &registry,
            &stub,
            GenerateInput {
                user_text: "hello",
                memory_summary: Some("CAREER FILE:\n- Name: Sam"),
                ..GenerateInput::default()
            },
        )
        .await
        .unwrap();
        assert!(result
            .system_prompt
            .contains("### CAREER FILE & MEMORY\nCAREER FILE:\n- Name: Sam"));
        assert!(result
            .telemetry
            .modules_included
            .contains(&ModuleId::MemoryBehavior));
    }

    #[tokio::test]
    async fn test_telemetry_mirrors_state() {
        let registry = ModuleRegistry::builtin();
        let stub = StubRetriever::with_contents(Domain::General, &[]);
        let result = generate(&registry, &stub, input("which one should I choose"))
            .await
            .unwrap();
        let t = &result.telemetry;
        assert_eq!(t.posture, result.next_state.posture);
        assert_eq!(t.priority, Priority::Decide);
        assert_eq!(t.user_energy, result.next_state.user_energy);
        assert!(t.tokens_used > 0);
        assert!(t.modules_dropped.is_empty());
        for id in ModuleId::REQUIRED {
            assert!(t.modules_included.contains(&id));
        }
    }

    #[tokio::test]
    async fn test_incomplete_registry_surfaces_invariant_violation() {
        let registry = ModuleRegistry::from_modules(
            ModuleRegistry::builtin()
                .modules()
                .into_iter()
                .filter(|m| m.id != ModuleId::Boundaries)
                .cloned(),
        );
        let stub = StubRetriever::with_contents(Domain::General, &[]);
        let err = generate(&registry, &stub, input("hello")).await.unwrap_err();
        assert_eq!(err, InvariantViolation::MissingRequired(ModuleId::Boundaries));
    }
}
