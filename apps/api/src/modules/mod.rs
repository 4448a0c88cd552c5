// Prompt modules: the static building blocks of every system prompt.
// Module text lives in prompts.rs; the registry maps ids to module definitions.

pub mod prompts;
pub mod registry;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::router::types::Domain;

pub use registry::ModuleRegistry;

// ────────────────────────────────────────────────────────────────────────────
// Module identifiers
// ────────────────────────────────────────────────────────────────────────────

/// Every prompt module the system knows about.
///
/// Closed on purpose: selection, eviction and the invariant checks all name
/// modules through this enum, so a renamed module is a compile error rather
/// than a silent lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    CoreIdentity,
    Boundaries,
    VoiceBaseline,
    BrandAuthority,
    MemoryBehavior,
    MemoryProposal,
    PostureCalmExpert,
    PostureCoach,
    PostureStrategist,
    PostureOperator,
    PostureCompanion,
    TempoFast,
    TempoNormal,
    TempoSlow,
    FrictionHigh,
    FrictionMedium,
    DecisionPhilosophy,
    PovCore,
    ToolResumes,
    ToolInterviewPrep,
    ToolLinkedin,
    ToolNegotiations,
    ToolNetworking,
    ToolConfidence,
    ToolJobseekerOps,
}

impl ModuleId {
    pub const ALL: [ModuleId; 25] = [
        ModuleId::CoreIdentity,
        ModuleId::Boundaries,
        ModuleId::VoiceBaseline,
        ModuleId::BrandAuthority,
        ModuleId::MemoryBehavior,
        ModuleId::MemoryProposal,
        ModuleId::PostureCalmExpert,
        ModuleId::PostureCoach,
        ModuleId::PostureStrategist,
        ModuleId::PostureOperator,
        ModuleId::PostureCompanion,
        ModuleId::TempoFast,
        ModuleId::TempoNormal,
        ModuleId::TempoSlow,
        ModuleId::FrictionHigh,
        ModuleId::FrictionMedium,
        ModuleId::DecisionPhilosophy,
        ModuleId::PovCore,
        ModuleId::ToolResumes,
        ModuleId::ToolInterviewPrep,
        ModuleId::ToolLinkedin,
        ModuleId::ToolNegotiations,
        ModuleId::ToolNetworking,
        ModuleId::ToolConfidence,
        ModuleId::ToolJobseekerOps,
    ];

    /// Modules that must be present in every assembled prompt.
    pub const REQUIRED: [ModuleId; 4] = [
        ModuleId::CoreIdentity,
        ModuleId::Boundaries,
        ModuleId::VoiceBaseline,
        ModuleId::BrandAuthority,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleId::CoreIdentity => "core_identity",
            ModuleId::Boundaries => "boundaries",
            ModuleId::VoiceBaseline => "voice_baseline",
            ModuleId::BrandAuthority => "brand_authority",
            ModuleId::MemoryBehavior => "memory_behavior",
            ModuleId::MemoryProposal => "memory_proposal",
            ModuleId::PostureCalmExpert => "posture_calm_expert",
            ModuleId::PostureCoach => "posture_coach",
            ModuleId::PostureStrategist => "posture_strategist",
            ModuleId::PostureOperator => "posture_operator",
            ModuleId::PostureCompanion => "posture_companion",
            ModuleId::TempoFast => "tempo_fast",
            ModuleId::TempoNormal => "tempo_normal",
            ModuleId::TempoSlow => "tempo_slow",
            ModuleId::FrictionHigh => "friction_high",
            ModuleId::FrictionMedium => "friction_medium",
            ModuleId::DecisionPhilosophy => "decision_philosophy",
            ModuleId::PovCore => "pov_core",
            ModuleId::ToolResumes => "tool_resumes",
            ModuleId::ToolInterviewPrep => "tool_interview_prep",
            ModuleId::ToolLinkedin => "tool_linkedin",
            ModuleId::ToolNegotiations => "tool_negotiations",
            ModuleId::ToolNetworking => "tool_networking",
            ModuleId::ToolConfidence => "tool_confidence",
            ModuleId::ToolJobseekerOps => "tool_jobseeker_ops",
        }
    }

    /// The domain whose expertise this tool module already carries.
    /// Job-search operations is cross-domain and covers none.
    pub fn covered_domain(self) -> Option<Domain> {
        match self {
            ModuleId::ToolResumes => Some(Domain::Resume),
            ModuleId::ToolInterviewPrep => Some(Domain::Interview),
            ModuleId::ToolLinkedin => Some(Domain::Linkedin),
            ModuleId::ToolNegotiations => Some(Domain::Negotiation),
            ModuleId::ToolNetworking => Some(Domain::Networking),
            ModuleId::ToolConfidence => Some(Domain::Confidence),
            _ => None,
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown module id '{0}'")]
pub struct UnknownModuleId(pub String);

impl FromStr for ModuleId {
    type Err = UnknownModuleId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownModuleId(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Module definition
// ────────────────────────────────────────────────────────────────────────────

/// Category of a module. Governs selection and the posture invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
    Core,
    Posture,
    Policy,
    Decision,
    Voice,
    Pov,
    Memory,
    Tool,
}

/// Retention tier. Ordered so that sorting ascending puts `Keep` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModulePriority {
    /// 1: never dropped.
    Keep,
    /// 2: dropped if the prompt is over budget.
    Prefer,
    /// 3: dropped first.
    Expendable,
}

impl ModulePriority {
    pub fn level(self) -> u8 {
        match self {
            ModulePriority::Keep => 1,
            ModulePriority::Prefer => 2,
            ModulePriority::Expendable => 3,
        }
    }
}

impl Serialize for ModulePriority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

/// A named block of system-prompt text.
#[derive(Debug, Clone, Serialize)]
pub struct PromptModule {
    pub id: ModuleId,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub purpose: &'static str,
    pub priority: ModulePriority,
    pub content: Cow<'static, str>,
}

impl PromptModule {
    pub const fn new(
        id: ModuleId,
        module_type: ModuleType,
        priority: ModulePriority,
        purpose: &'static str,
        content: &'static str,
    ) -> Self {
        Self {
            id,
            module_type,
            purpose,
            priority,
            content: Cow::Borrowed(content),
        }
    }
}
