//! Section packing: eviction and truncation as value-to-value steps.
//!
//! A `Packing` is never mutated in place. Each step consumes one and returns the
//! next, so the eviction loop is a fold over the drop order and every
//! intermediate state can be inspected in tests.

use std::borrow::Cow;

use crate::assembler::estimate_tokens;
use crate::modules::ModuleId;

const ELLIPSIS: &str = "...";
const CHARS_PER_TOKEN: usize = 4;

/// What a section holds. Decides its header and how it may be shrunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Module(ModuleId),
    ToolsIndex,
    ActiveToolPrompt,
    WebSearchConfig,
    WebSearchResults,
    MemorySummary,
    RetrievedContext,
}

impl SectionKind {
    fn header(self) -> Option<Cow<'static, str>> {
        match self {
            SectionKind::Module(id) => Some(Cow::Owned(format!("### {id}"))),
            SectionKind::WebSearchResults => Some(Cow::Borrowed("### WEB SEARCH RESULTS")),
            SectionKind::MemorySummary => Some(Cow::Borrowed("### CAREER FILE & MEMORY")),
            SectionKind::RetrievedContext => Some(Cow::Borrowed("### DOMAIN EXPERTISE")),
            SectionKind::ToolsIndex | SectionKind::ActiveToolPrompt | SectionKind::WebSearchConfig => {
                None
            }
        }
    }
}

/// One independently countable block of the prompt.
///
/// `tokens` estimates the body only; headers are not counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub body: Cow<'a, str>,
    pub tokens: usize,
}

impl<'a> Section<'a> {
    pub fn new(kind: SectionKind, body: impl Into<Cow<'a, str>>) -> Self {
        let body = body.into();
        let tokens = estimate_tokens(&body);
        Self { kind, body, tokens }
    }

    pub fn render(&self) -> String {
        match self.kind.header() {
            Some(header) => format!("{header}\n{}", self.body),
            None => self.body.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Packing<'a> {
    pub sections: Vec<Section<'a>>,
    pub dropped: Vec<ModuleId>,
    pub total_tokens: usize,
}

impl<'a> Packing<'a> {
    pub fn new(sections: Vec<Section<'a>>) -> Self {
        let total_tokens = sections.iter().map(|s| s.tokens).sum();
        Self {
            sections,
            dropped: Vec::new(),
            total_tokens,
        }
    }

    pub fn is_within(&self, budget: usize) -> bool {
        self.total_tokens <= budget
    }

    /// Removes modules in `drop_order` one at a time until the budget is met.
    pub fn evict(self, drop_order: &[ModuleId], budget: usize) -> Self {
        drop_order
            .iter()
            .fold(self, |packing, id| packing.without_module(*id, budget))
    }

    fn without_module(self, id: ModuleId, budget: usize) -> Self {
        if self.is_within(budget) {
            return self;
        }
        let Some(idx) = self.position(SectionKind::Module(id)) else {
            return self;
        };

        let mut sections = self.sections;
        let removed = sections.remove(idx);
        let mut dropped = self.dropped;
        dropped.push(id);

        Self {
            sections,
            dropped,
            total_tokens: self.total_tokens - removed.tokens,
        }
    }

    /// Shrinks the section of `kind` by the current excess, never below `floor`.
    ///
    /// No-op when within budget, when the section is absent, or when it is
    /// already at or under the floor.
    pub fn truncate(self, kind: SectionKind, floor: usize, budget: usize) -> Self {
        if self.is_within(budget) {
            return self;
        }
        let Some(idx) = self.position(kind) else {
            return self;
        };
        let current = self.sections[idx].tokens;
        if current <= floor {
            return self;
        }

        let excess = self.total_tokens - budget;
        let target = floor.max(current.saturating_sub(excess));

        let mut sections = self.sections;
        let section = &mut sections[idx];
        section.body = Cow::Owned(truncate_to_tokens(&section.body, target));
        section.tokens = target;

        Self {
            total_tokens: sections.iter().map(|s| s.tokens).sum(),
            sections,
            dropped: self.dropped,
        }
    }

    fn position(&self, kind: SectionKind) -> Option<usize> {
        self.sections.iter().position(|s| s.kind == kind)
    }

    /// Module ids still present, in prompt order.
    pub fn included_modules(&self) -> Vec<ModuleId> {
        self.sections
            .iter()
            .filter_map(|s| match s.kind {
                SectionKind::Module(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(Section::render)
            .collect::<Vec<_>>()
            .join("\n\n")
            .trim()
            .to_string()
    }
}

/// Hard character cut to `max_tokens` worth of text plus an ellipsis.
pub fn truncate_to_tokens(text: &str, max_tokens: usize) -> String {
    let max_chars = max_tokens * CHARS_PER_TOKEN;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str(ELLIPSIS);
    cut
}
