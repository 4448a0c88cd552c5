//! Posture resolution: the priority-ordered rule table at the center of the router.
//!
//! First matching rule wins:
//! 1. distress            → companion / reduce_stress / friction low / energy low
//! 2. urgency_high | act  → operator / move_now / friction low / energy: low lifts to neutral
//! 3. decision_ask        → strategist / decide / friction medium / energy neutral
//! 4. teach_ask           → coach / teach / friction medium / energy neutral
//! 5. overwhelm           → strategist / increase_odds / friction high / energy neutral
//! 6. default             → calm_expert / increase_odds / friction medium / energy kept
//!
//! Distress pre-empts everything, including explicit requests to act.

use crate::router::types::{Friction, Posture, Priority, RouterState, Signals, UserEnergy};

/// The posture-dependent part of the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostureDecision {
    pub posture: Posture,
    pub priority: Priority,
    pub friction: Friction,
    pub user_energy: UserEnergy,
}

pub fn resolve_posture(signals: &Signals, prev: &RouterState) -> PostureDecision {
    if signals.distress {
        return PostureDecision {
            posture: Posture::Companion,
            priority: Priority::ReduceStress,
            friction: Friction::Low,
            user_energy: UserEnergy::Low,
        };
    }

    if signals.urgency_high || signals.ready_to_act {
        let user_energy = match prev.user_energy {
            UserEnergy::Low => UserEnergy::Neutral,
            other => other,
        };
        return PostureDecision {
            posture: Posture::Operator,
            priority: Priority::MoveNow,
            friction: Friction::Low,
            user_energy,
        };
    }

    if signals.decision_ask {
        return PostureDecision {
            posture: Posture::Strategist,
            priority: Priority::Decide,
            friction: Friction::Medium,
            user_energy: UserEnergy::Neutral,
        };
    }

    if signals.teach_ask {
        return PostureDecision {
            posture: Posture::Coach,
            priority: Priority::Teach,
            friction: Friction::Medium,
            user_energy: UserEnergy::Neutral,
        };
    }

    if signals.overwhelm {
        return PostureDecision {
            posture: Posture::Strategist,
            priority: Priority::IncreaseOdds,
            friction: Friction::High,
            user_energy: UserEnergy::Neutral,
        };
    }

    PostureDecision {
        posture: Posture::CalmExpert,
        priority: Priority::IncreaseOdds,
        friction: Friction::Medium,
        user_energy: prev.user_energy,
    }
}
