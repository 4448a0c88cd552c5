//! Router state and signal types.
//!
//! `RouterState` is the only value that survives between turns. The caller stores
//! it next to the conversation and sends it back as `prev_state` on the next turn,
//! so every field is a flat enum that serializes as a snake_case string.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::modules::ModuleId;

// ────────────────────────────────────────────────────────────────────────────
// State enums
// ────────────────────────────────────────────────────────────────────────────

/// Behavioral mode for a turn. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Posture {
    #[default]
    CalmExpert,
    Coach,
    Strategist,
    Operator,
    Companion,
}

impl Posture {
    pub const ALL: [Posture; 5] = [
        Posture::CalmExpert,
        Posture::Coach,
        Posture::Strategist,
        Posture::Operator,
        Posture::Companion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Posture::CalmExpert => "calm_expert",
            Posture::Coach => "coach",
            Posture::Strategist => "strategist",
            Posture::Operator => "operator",
            Posture::Companion => "companion",
        }
    }

    /// The posture module carrying this posture's behavior rules.
    pub fn module_id(self) -> ModuleId {
        match self {
            Posture::CalmExpert => ModuleId::PostureCalmExpert,
            Posture::Coach => ModuleId::PostureCoach,
            Posture::Strategist => ModuleId::PostureStrategist,
            Posture::Operator => ModuleId::PostureOperator,
            Posture::Companion => ModuleId::PostureCompanion,
        }
    }
}

/// What the turn optimizes for. Follows from the posture rule that fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    ReduceStress,
    MoveNow,
    Decide,
    Teach,
    #[default]
    IncreaseOdds,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::ReduceStress => "reduce_stress",
            Priority::MoveNow => "move_now",
            Priority::Decide => "decide",
            Priority::Teach => "teach",
            Priority::IncreaseOdds => "increase_odds",
        }
    }
}

/// Career topic the conversation is about. Sticky across turns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Resume,
    Linkedin,
    Networking,
    Interview,
    Negotiation,
    Confidence,
    #[default]
    General,
}

impl Domain {
    /// Scan order when several domains fire on the same turn. `General` never fires.
    pub const DETECTION_ORDER: [Domain; 6] = [
        Domain::Negotiation,
        Domain::Interview,
        Domain::Resume,
        Domain::Linkedin,
        Domain::Networking,
        Domain::Confidence,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Resume => "resume",
            Domain::Linkedin => "linkedin",
            Domain::Networking => "networking",
            Domain::Interview => "interview",
            Domain::Negotiation => "negotiation",
            Domain::Confidence => "confidence",
            Domain::General => "general",
        }
    }

    /// Domain-expertise tool module for this domain. `General` has none.
    pub fn tool_module(self) -> Option<ModuleId> {
        match self {
            Domain::Resume => Some(ModuleId::ToolResumes),
            Domain::Interview => Some(ModuleId::ToolInterviewPrep),
            Domain::Linkedin => Some(ModuleId::ToolLinkedin),
            Domain::Negotiation => Some(ModuleId::ToolNegotiations),
            Domain::Networking => Some(ModuleId::ToolNetworking),
            Domain::Confidence => Some(ModuleId::ToolConfidence),
            Domain::General => None,
        }
    }
}

/// Where the user is in their search. Sticky across turns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Applying,
    Interviewing,
    Negotiating,
    Pivoting,
    Stuck,
    #[default]
    Unknown,
}

impl Stage {
    /// Scan order when several stage hints fire on the same turn.
    pub const DETECTION_ORDER: [Stage; 5] = [
        Stage::Negotiating,
        Stage::Interviewing,
        Stage::Applying,
        Stage::Pivoting,
        Stage::Stuck,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Applying => "applying",
            Stage::Interviewing => "interviewing",
            Stage::Negotiating => "negotiating",
            Stage::Pivoting => "pivoting",
            Stage::Stuck => "stuck",
            Stage::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
    #[default]
    Low,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

/// How hard the assistant pushes back to force clarity. Recomputed every turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Friction {
    High,
    #[default]
    Medium,
    Low,
}

impl Friction {
    pub fn as_str(self) -> &'static str {
        match self {
            Friction::High => "high",
            Friction::Medium => "medium",
            Friction::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserEnergy {
    High,
    #[default]
    Neutral,
    Low,
}

impl UserEnergy {
    pub fn as_str(self) -> &'static str {
        match self {
            UserEnergy::High => "high",
            UserEnergy::Neutral => "neutral",
            UserEnergy::Low => "low",
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),* $(,)?) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_via_as_str!(Posture, Priority, Domain, Stage, Urgency, Friction, UserEnergy);

// ────────────────────────────────────────────────────────────────────────────
// RouterState
// ────────────────────────────────────────────────────────────────────────────

/// Per-conversation router state, round-tripped through the caller every turn.
///
/// The default is the first-turn state: calm expert, general domain, unknown stage,
/// low urgency, medium friction, neutral energy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterState {
    pub posture: Posture,
    pub priority: Priority,
    pub domain: Domain,
    pub stage: Stage,
    pub urgency: Urgency,
    pub friction: Friction,
    pub user_energy: UserEnergy,
}

// ────────────────────────────────────────────────────────────────────────────
// Signals
// ────────────────────────────────────────────────────────────────────────────

/// Patterns detected in one user message. Built fresh per turn, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signals {
    pub distress: bool,
    pub overwhelm: bool,
    pub ready_to_act: bool,
    pub decision_ask: bool,
    pub teach_ask: bool,
    pub urgency_high: bool,
    pub urgency_medium: bool,
    pub domain_hits: BTreeSet<Domain>,
    pub stage_hints: BTreeSet<Stage>,
}

impl Signals {
    pub fn hits_domain(&self, domain: Domain) -> bool {
        self.domain_hits.contains(&domain)
    }

    pub fn hints_stage(&self, stage: Stage) -> bool {
        self.stage_hints.contains(&stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_first_turn_state() {
        let s = RouterState::default();
        assert_eq!(s.posture, Posture::CalmExpert);
        assert_eq!(s.priority, Priority::IncreaseOdds);
        assert_eq!(s.domain, Domain::General);
        assert_eq!(s.stage, Stage::Unknown);
        assert_eq!(s.urgency, Urgency::Low);
        assert_eq!(s.friction, Friction::Medium);
        assert_eq!(s.user_energy, UserEnergy::Neutral);
    }

    #[test]
    fn test_router_state_serializes_flat_snake_case() {
        let state = RouterState {
            posture: Posture::CalmExpert,
            priority: Priority::MoveNow,
            domain: Domain::Linkedin,
            stage: Stage::Negotiating,
            urgency: Urgency::High,
            friction: Friction::Low,
            user_energy: UserEnergy::Neutral,
        };
        let value = serde_json::to_value(state).unwrap();
        assert_eq!(value["posture"], "calm_expert");
        assert_eq!(value["priority"], "move_now");
        assert_eq!(value["domain"], "linkedin");
        assert_eq!(value["stage"], "negotiating");
        assert_eq!(value["user_energy"], "neutral");
        assert!(value.as_object().unwrap().values().all(|v| v.is_string()));
    }

    #[test]
    fn test_router_state_roundtrips_through_client_json() {
        let json = r#"{
            "posture": "companion",
            "priority": "reduce_stress",
            "domain": "confidence",
            "stage": "stuck",
            "urgency": "medium",
            "friction": "low",
            "user_energy": "low"
        }"#;
        let state: RouterState = serde_json::from_str(json).unwrap();
        assert_eq!(state.posture, Posture::Companion);
        assert_eq!(state.stage, Stage::Stuck);
        let back: RouterState = serde_json::from_str(&serde_json::to_string(&state).unwrap()).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let json = r#"{"posture": "drill_sergeant", "priority": "decide", "domain": "general",
            "stage": "unknown", "urgency": "low", "friction": "medium", "user_energy": "neutral"}"#;
        assert!(serde_json::from_str::<RouterState>(json).is_err());
    }

    #[test]
    fn test_every_posture_maps_to_a_distinct_posture_module() {
        let mut ids: Vec<_> = Posture::ALL.iter().map(|p| p.module_id()).collect();
        ids.sort_by_key(|id| id.as_str());
        ids.dedup();
        assert_eq!(ids.len(), Posture::ALL.len());
        assert!(ids.iter().all(|id| id.as_str().starts_with("posture_")));
    }

    #[test]
    fn test_general_domain_has_no_tool_module() {
        assert_eq!(Domain::General.tool_module(), None);
        for d in Domain::DETECTION_ORDER {
            assert!(d.tool_module().is_some(), "{d} should map to a tool module");
        }
    }
}
