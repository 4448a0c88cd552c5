//! Side outputs of routing: tool recommendation, wizard offer, web-search need.
//!
//! None of these touch `RouterState`. They are hints the caller may act on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::router::signals::{contains_phrase, normalize};
use crate::router::types::{Domain, Urgency};

/// Guided tools the product can launch from a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Resumes,
    InterviewPrep,
    Networking,
    Negotiations,
    LinkedinPresence,
    ConfidenceBuilder,
    JobseekerOperations,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Resumes,
        Tool::InterviewPrep,
        Tool::Networking,
        Tool::Negotiations,
        Tool::LinkedinPresence,
        Tool::ConfidenceBuilder,
        Tool::JobseekerOperations,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Resumes => "resumes",
            Tool::InterviewPrep => "interview_prep",
            Tool::Networking => "networking",
            Tool::Negotiations => "negotiations",
            Tool::LinkedinPresence => "linkedin_presence",
            Tool::ConfidenceBuilder => "confidence_builder",
            Tool::JobseekerOperations => "jobseeker_operations",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Tool::Resumes => "Résumé Makeover",
            Tool::InterviewPrep => "Interview Prep",
            Tool::Networking => "Networking Strategy",
            Tool::Negotiations => "Salary Negotiation",
            Tool::LinkedinPresence => "LinkedIn Presence",
            Tool::ConfidenceBuilder => "Confidence Builder",
            Tool::JobseekerOperations => "Job Search Strategy",
        }
    }

    /// Only the résumé tool has a step-by-step wizard today.
    pub fn has_wizard(self) -> bool {
        matches!(self, Tool::Resumes)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const INTERVIEW_TOOL_PHRASES: &[&str] = &["interview", "interviewing", "phone screen", "onsite"];

/// Narrow résumé questions answered in chat; anything broader gets the wizard offer.
const QUICK_RESUME_QUESTIONS: &[&str] = &[
    "rewrite this bullet",
    "fix this sentence",
    "is this good",
    "does this sound",
    "what verb should",
    "how do i say",
    "should i include",
    "can i put",
];

const VERY_RECENT: &[&str] = &[
    "today",
    "tonight",
    "this week",
    "this month",
    "yesterday",
    "last week",
    "last month",
    "latest",
    "recent news",
    "just announced",
];

const CURRENT_STATE_QUESTIONS: &[&str] = &[
    "who won",
    "who is the current",
    "what is the current price",
    "stock price",
    "who holds",
    "current ceo",
    "current president",
];

const CURRENT_YEARS: &[&str] = &["2025", "2026"];

/// Recommends the interview-prep tool when an interview is close and named.
pub fn detect_active_tool(text: &str, domain: Domain, urgency: Urgency) -> Option<Tool> {
    if domain != Domain::Interview || urgency == Urgency::Low {
        return None;
    }
    let normalized = normalize(text);
    INTERVIEW_TOOL_PHRASES
        .iter()
        .any(|p| contains_phrase(&normalized, p))
        .then_some(Tool::InterviewPrep)
}

/// Offers the résumé wizard for broad résumé requests.
pub fn detect_wizard_offer(text: &str, domain: Domain) -> Option<Tool> {
    if domain != Domain::Resume {
        return None;
    }
    let normalized = normalize(text);
    let quick = QUICK_RESUME_QUESTIONS
        .iter()
        .any(|p| normalized.contains(p));
    (!quick).then_some(Tool::Resumes)
}

/// True only for clearly current-events questions.
pub fn needs_web_search(text: &str) -> bool {
    let normalized = normalize(text);
    let has = |phrases: &[&str]| phrases.iter().any(|p| normalized.contains(p));

    let recent = has(VERY_RECENT);
    let current_year = has(CURRENT_YEARS);
    let current_state = has(CURRENT_STATE_QUESTIONS);

    (recent && (current_year || current_state)) || (current_state && current_year)
}
