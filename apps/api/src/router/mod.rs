//! Turn router: user text + previous state to next state and module selection.
//!
//! Pipeline: detect signals, pick domain/stage/urgency (sticky), resolve posture
//! against the merged state, select module ids, build the retrieval query. Side
//! outputs (active tool, wizard offer, web-search need) never feed back into state.
//!
//! The router cannot fail. Every branch has a fallback; a bad module selection
//! surfaces later as an assembler invariant violation.

pub mod lexicon;
pub mod posture;
pub mod signals;
pub mod tools;
pub mod types;

use serde::Serialize;

use crate::modules::ModuleId;
use crate::router::posture::resolve_posture;
use crate::router::signals::{contains_phrase, detect_signals, normalize};
use crate::router::tools::{detect_active_tool, detect_wizard_offer, needs_web_search, Tool};
use crate::router::types::{Domain, Friction, Priority, RouterState, Signals, Stage, Urgency};

/// Retrieval queries are cut to this many characters.
pub const MAX_QUERY_CHARS: usize = 500;

/// Phrases that mean "help me run my search", which outranks any single domain.
const JOBSEEKER_OPS_PHRASES: &[&str] = &[
    "job search",
    "all over the place",
    "get organized",
    "search strategy",
    "tracking applications",
    "pipeline",
    "job hunt",
    "organize my search",
    "search operations",
    "tracking",
    "applications",
    "applying",
    "overwhelmed with search",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RouteInput<'a> {
    pub user_text: &'a str,
    pub prev_state: RouterState,
    pub memory_summary: Option<&'a str>,
    /// Prior user messages in this conversation. Echoed only; routing ignores it.
    pub turn_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOutput {
    pub next_state: RouterState,
    pub module_ids: Vec<ModuleId>,
    pub retrieval_query: Option<String>,
    pub needs_web_search: bool,
    pub active_tool: Option<Tool>,
    pub wizard_offer: Option<Tool>,
}

pub fn route_turn(input: RouteInput<'_>) -> RouteOutput {
    let signals = detect_signals(input.user_text);
    let prev = input.prev_state;

    let domain = pick_domain(&signals, prev.domain);
    let stage = pick_stage(&signals, domain, prev.stage);
    let urgency = pick_urgency(&signals, prev.urgency);

    let active_tool = detect_active_tool(input.user_text, domain, urgency);

    let merged = RouterState {
        domain,
        stage,
        urgency,
        ..prev
    };
    let decision = resolve_posture(&signals, &merged);

    let next_state = RouterState {
        posture: decision.posture,
        priority: decision.priority,
        friction: decision.friction,
        user_energy: decision.user_energy,
        ..merged
    };

    let has_memory = input
        .memory_summary
        .is_some_and(|summary| !summary.trim().is_empty());
    let module_ids = select_modules(&next_state, input.user_text, has_memory);

    RouteOutput {
        next_state,
        module_ids,
        retrieval_query: build_retrieval_query(domain, stage, input.user_text),
        needs_web_search: needs_web_search(input.user_text),
        active_tool,
        wizard_offer: detect_wizard_offer(input.user_text, domain),
    }
}

fn pick_domain(signals: &Signals, prev: Domain) -> Domain {
    Domain::DETECTION_ORDER
        .into_iter()
        .find(|d| signals.hits_domain(*d))
        .unwrap_or(prev)
}

fn pick_stage(signals: &Signals, domain: Domain, prev: Stage) -> Stage {
    if let Some(stage) = Stage::DETECTION_ORDER
        .into_iter()
        .find(|s| signals.hints_stage(*s))
    {
        return stage;
    }
    match domain {
        Domain::Interview => Stage::Interviewing,
        Domain::Negotiation => Stage::Negotiating,
        _ => prev,
    }
}

fn pick_urgency(signals: &Signals, prev: Urgency) -> Urgency {
    if signals.urgency_high {
        Urgency::High
    } else if signals.urgency_medium {
        Urgency::Medium
    } else {
        prev
    }
}

/// Module ids for the turn, in reading order. The assembler re-sorts by priority.
pub fn select_modules(state: &RouterState, user_text: &str, has_memory: bool) -> Vec<ModuleId> {
    let mut ids = ModuleId::REQUIRED.to_vec();

    if has_memory {
        ids.push(ModuleId::MemoryBehavior);
    }
    ids.push(ModuleId::MemoryProposal);

    ids.push(state.posture.module_id());

    match state.urgency {
        Urgency::High => ids.push(ModuleId::TempoFast),
        Urgency::Medium => ids.push(ModuleId::TempoNormal),
        Urgency::Low => {}
    }

    match state.friction {
        Friction::High => ids.push(ModuleId::FrictionHigh),
        Friction::Medium => ids.push(ModuleId::FrictionMedium),
        Friction::Low => {}
    }

    if state.priority == Priority::Decide {
        ids.push(ModuleId::DecisionPhilosophy);
    }

    if let Some(tool) = select_tool_module(state.domain, user_text) {
        ids.push(tool);
    }

    ids.push(ModuleId::PovCore);
    ids
}

fn select_tool_module(domain: Domain, user_text: &str) -> Option<ModuleId> {
    let normalized = normalize(user_text);
    let wants_ops = JOBSEEKER_OPS_PHRASES
        .iter()
        .any(|p| contains_phrase(&normalized, p));
    if wants_ops {
        Some(ModuleId::ToolJobseekerOps)
    } else {
        domain.tool_module()
    }
}

/// `None` for the general domain; otherwise "domain [stage] text", capped.
pub fn build_retrieval_query(domain: Domain, stage: Stage, user_text: &str) -> Option<String> {
    if domain == Domain::General {
        return None;
    }
    let mut parts = vec![domain.as_str()];
    if stage != Stage::Unknown {
        parts.push(stage.as_str());
    }
    parts.push(user_text.trim());
    Some(parts.join(" ").chars().take(MAX_QUERY_CHARS).collect())
}
