//! Module assembler: turns selected module ids and caller-supplied blocks into
//! one system prompt that fits the token budget.
//!
//! Pure: no I/O, no logging, no shared state. Invariant violations are returned
//! as errors and are always a module-selection bug, never a user condition.
//!
//! # Packing
//! 1. Resolve ids through the registry (unknown ids are skipped), check invariants.
//! 2. Stable-sort modules by priority, then append the optional blocks in fixed
//!    order: tools index, active tool prompt, web search config, web search
//!    results, memory summary, retrieved domain context.
//! 3. Over budget: evict `DROP_ORDER` modules one by one until it fits.
//! 4. Still over: truncate retrieved context (floor 300), then memory (floor 200).
//! 5. Anything left over is accepted. Required sections are never touched.

mod packing;

use serde::Serialize;
use thiserror::Error;

use crate::modules::{ModuleId, ModuleRegistry, ModuleType, PromptModule};

pub use packing::{Packing, Section, SectionKind};

/// Estimated token ceiling for the assembled prompt.
pub const TOKEN_BUDGET: usize = 2500;
pub const RETRIEVAL_FLOOR_TOKENS: usize = 300;
pub const MEMORY_FLOOR_TOKENS: usize = 200;

/// Modules evicted under budget pressure, first to go first.
pub const DROP_ORDER: [ModuleId; 7] = [
    ModuleId::PovCore,
    ModuleId::TempoSlow,
    ModuleId::TempoNormal,
    ModuleId::FrictionMedium,
    ModuleId::FrictionHigh,
    ModuleId::TempoFast,
    ModuleId::DecisionPhilosophy,
];

/// `ceil(chars / 4)`.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("INVARIANT VIOLATION: Missing required module: {0}")]
    MissingRequired(ModuleId),

    #[error("INVARIANT VIOLATION: Expected 1 posture module, got {0}")]
    PostureCount(usize),
}

/// Everything the assembler packs. Blank optional blocks count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssembleInput<'a> {
    pub module_ids: &'a [ModuleId],
    pub memory_summary: Option<&'a str>,
    pub retrieved_chunk: Option<&'a str>,
    pub tools_index: Option<&'a str>,
    pub active_tool_prompt: Option<&'a str>,
    pub web_search_config: Option<&'a str>,
    pub web_search_results: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledPrompt {
    pub system_prompt: String,
    pub modules_included: Vec<ModuleId>,
    pub tokens_used: usize,
    pub modules_dropped: Vec<ModuleId>,
}

pub fn assemble(
    registry: &ModuleRegistry,
    input: &AssembleInput<'_>,
) -> Result<AssembledPrompt, InvariantViolation> {
    let mut modules = registry.resolve(input.module_ids);
    check_invariants(&modules)?;
    modules.sort_by_key(|m| m.priority);

    let mut sections: Vec<Section<'_>> = modules
        .iter()
        .map(|m| Section::new(SectionKind::Module(m.id), m.content.as_ref()))
        .collect();

    let optional = [
        (SectionKind::ToolsIndex, input.tools_index),
        (SectionKind::ActiveToolPrompt, input.active_tool_prompt),
        (SectionKind::WebSearchConfig, input.web_search_config),
        (SectionKind::WebSearchResults, input.web_search_results),
        (SectionKind::MemorySummary, input.memory_summary),
        (SectionKind::RetrievedContext, input.retrieved_chunk),
    ];
    sections.extend(optional.into_iter().filter_map(|(kind, text)| {
        text.filter(|t| !t.trim().is_empty())
            .map(|t| Section::new(kind, t))
    }));

    let packing = Packing::new(sections)
        .evict(&DROP_ORDER, TOKEN_BUDGET)
        .truncate(SectionKind::RetrievedContext, RETRIEVAL_FLOOR_TOKENS, TOKEN_BUDGET)
        .truncate(SectionKind::MemorySummary, MEMORY_FLOOR_TOKENS, TOKEN_BUDGET);

    Ok(AssembledPrompt {
        system_prompt: packing.render(),
        modules_included: packing.included_modules(),
        tokens_used: packing.total_tokens,
        modules_dropped: packing.dropped,
    })
}

fn check_invariants(modules: &[&PromptModule]) -> Result<(), InvariantViolation> {
    for required in ModuleId::REQUIRED {
        if !modules.iter().any(|m| m.id == required) {
            return Err(InvariantViolation::MissingRequired(required));
        }
    }

    let postures = modules
        .iter()
        .filter(|m| m.module_type == ModuleType::Posture)
        .count();
    if postures != 1 {
        return Err(InvariantViolation::PostureCount(postures));
    }

    Ok(())
}
