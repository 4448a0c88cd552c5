//! Phrase lists behind signal detection.
//!
//! Kept as data, separate from the detector, so the lists can be reviewed and
//! tested against fixtures on their own. Every phrase is lowercase and matched as
//! a whole phrase, so inflections that should fire are listed explicitly.

use crate::router::types::{Domain, Stage};

pub type PhraseList = &'static [&'static str];

/// The full set of phrase lists used by the signal detector.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub distress: PhraseList,
    pub overwhelm: PhraseList,
    pub ready_to_act: PhraseList,
    pub decision_ask: PhraseList,
    pub teach_ask: PhraseList,
    pub urgency_high: PhraseList,
    pub urgency_medium: PhraseList,
    pub domains: &'static [(Domain, PhraseList)],
    pub stages: &'static [(Stage, PhraseList)],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            distress: DISTRESS,
            overwhelm: OVERWHELM,
            ready_to_act: READY_TO_ACT,
            decision_ask: DECISION_ASK,
            teach_ask: TEACH_ASK,
            urgency_high: URGENCY_HIGH,
            urgency_medium: URGENCY_MEDIUM,
            domains: DOMAINS,
            stages: STAGES,
        }
    }
}

// ── Emotional state ─────────────────────────────────────────────────────────

const DISTRESS: PhraseList = &[
    "burnt out",
    "burned out",
    "burnout",
    "hopeless",
    "hopelessly",
    "panic",
    "panics",
    "panicked",
    "panicking",
    "panicky",
    "anxious",
    "anxiety",
    "overwhelmed",
    "overwhelming",
    "i can't",
    "i cant",
    "can't do this",
    "stuck",
    "giving up",
    "give up",
    "want to quit",
    "so stressed",
    "stressed out",
    "stressing out",
    "breaking down",
    "freaking out",
    "freaked out",
    "scared",
    "terrified",
];

const OVERWHELM: PhraseList = &[
    "everything",
    "all of it",
    "don't know where to start",
    "dont know where to start",
    "too much",
    "so many",
    "all these options",
    "paralyzed",
    "can't decide",
    "too many choices",
];

// ── Intent ──────────────────────────────────────────────────────────────────

const READY_TO_ACT: PhraseList = &[
    "help me write",
    "write me",
    "rewrite",
    "rewriting",
    "draft",
    "drafting",
    "send",
    "sending",
    "apply",
    "applying",
    "submit",
    "submitting",
    "today",
    "tomorrow",
    "in an hour",
    "asap",
    "right now",
    "need to send",
    "deadline",
    "deadlines",
    "due",
];

const DECISION_ASK: PhraseList = &[
    "should i",
    "which one",
    "which should",
    "choose",
    "choosing",
    "decision",
    "decide",
    "take the offer",
    "accept",
    "accepting",
    "counter",
    "counteroffer",
    "negotiate",
    "pivot",
    "pivoting",
    "or",
    "vs",
    "versus",
    "can't decide",
    "help me decide",
];

const TEACH_ASK: PhraseList = &[
    "teach me",
    "how do i",
    "how can i",
    "how to",
    "explain",
    "why",
    "what is",
    "what's the difference",
    "help me understand",
    "walk me through",
    "show me how",
    "learn",
    "learning",
];

// ── Urgency ─────────────────────────────────────────────────────────────────

const URGENCY_HIGH: PhraseList = &[
    "in an hour",
    "today",
    "tonight",
    "tomorrow",
    "asap",
    "deadline",
    "deadlines",
    "offer expires",
    "right now",
    "immediately",
    "urgent",
];

const URGENCY_MEDIUM: PhraseList = &[
    "this week",
    "soon",
    "in a few days",
    "next week",
    "coming up",
    "upcoming",
];

// ── Domains ─────────────────────────────────────────────────────────────────

const DOMAINS: &[(Domain, PhraseList)] = &[
    (
        Domain::Resume,
        &[
            "resume",
            "resumes",
            "résumé",
            "bullet",
            "bullets",
            "ats",
            "experience",
            "experiences",
            "experienced",
            "cv",
            "work history",
            "accomplishment",
            "accomplishments",
            "quantify",
            "cover letter",
        ],
    ),
    (
        Domain::Linkedin,
        &[
            "linkedin",
            "headline",
            "about",
            "about section",
            "profile",
            "profiles",
            "banner",
            "summary",
            "open to work",
        ],
    ),
    (
        Domain::Networking,
        &[
            "network",
            "networks",
            "networking",
            "referral",
            "referrals",
            "reach out",
            "reaching out",
            "message",
            "messages",
            "messaging",
            "coffee chat",
            "informational",
            "cold email",
            "outreach",
        ],
    ),
    (
        Domain::Interview,
        &[
            "interview",
            "interviews",
            "interviewed",
            "interviewer",
            "interviewers",
            "interviewing",
            "recruiter screen",
            "hiring manager",
            "tell me about yourself",
            "star",
            "star method",
            "behavioral",
            "phone screen",
            "onsite",
            "final round",
        ],
    ),
    (
        Domain::Negotiation,
        &[
            "salary",
            "offer",
            "offers",
            "offered",
            "negotiate",
            "negotiated",
            "negotiating",
            "negotiation",
            "comp",
            "equity",
            "counter",
            "counteroffer",
            "package",
            "compensation",
            "stock options",
        ],
    ),
    (
        Domain::Confidence,
        &[
            "confidence",
            "imposter",
            "impostor",
            "self-doubt",
            "not good enough",
            "feel like a fraud",
        ],
    ),
];

// ── Stages ──────────────────────────────────────────────────────────────────

const STAGES: &[(Stage, PhraseList)] = &[
    (
        Stage::Applying,
        &[
            "applying",
            "applications",
            "apply",
            "job search",
            "looking for",
            "searching for",
        ],
    ),
    (
        Stage::Interviewing,
        &[
            "interview",
            "interviews",
            "interviewed",
            "interviewer",
            "interviewing",
            "screen",
            "screens",
            "screening",
            "round",
            "rounds",
            "onsite",
        ],
    ),
    (
        Stage::Negotiating,
        &[
            "offer",
            "offers",
            "offered",
            "negotiate",
            "negotiated",
            "negotiating",
            "counter",
            "counteroffer",
            "compensation",
            "accepted",
        ],
    ),
    (
        Stage::Pivoting,
        &[
            "career change",
            "switch industry",
            "switch industries",
            "pivot",
            "pivoting",
            "transition",
            "transitioning",
            "changing careers",
        ],
    ),
    (
        Stage::Stuck,
        &[
            "stuck",
            "can't start",
            "haven't applied",
            "havent applied",
            "no progress",
            "not getting anywhere",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_lists(lex: &Lexicon) -> Vec<PhraseList> {
        let mut lists = vec![
            lex.distress,
            lex.overwhelm,
            lex.ready_to_act,
            lex.decision_ask,
            lex.teach_ask,
            lex.urgency_high,
            lex.urgency_medium,
        ];
        lists.extend(lex.domains.iter().map(|(_, p)| *p));
        lists.extend(lex.stages.iter().map(|(_, p)| *p));
        lists
    }

    fn domain_phrases(lex: &Lexicon, domain: Domain) -> PhraseList {
        lex.domains
            .iter()
            .find(|(d, _)| *d == domain)
            .map(|(_, phrases)| *phrases)
            .unwrap_or(&[])
    }

    fn stage_phrases(lex: &Lexicon, stage: Stage) -> PhraseList {
        lex.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, phrases)| *phrases)
            .unwrap_or(&[])
    }

    #[test]
    fn test_phrases_are_lowercase_and_trimmed() {
        for list in all_lists(&Lexicon::default()) {
            for phrase in list {
                assert_eq!(*phrase, phrase.to_lowercase(), "'{phrase}' not lowercase");
                assert_eq!(*phrase, phrase.trim(), "'{phrase}' has padding");
                assert!(!phrase.is_empty());
            }
        }
    }

    #[test]
    fn test_every_signal_domain_has_phrases() {
        let lex = Lexicon::default();
        for domain in Domain::DETECTION_ORDER {
            assert!(!domain_phrases(&lex, domain).is_empty(), "{domain} has no phrases");
        }
        assert!(domain_phrases(&lex, Domain::General).is_empty());
    }

    #[test]
    fn test_every_stage_has_phrases() {
        let lex = Lexicon::default();
        for stage in Stage::DETECTION_ORDER {
            assert!(!stage_phrases(&lex, stage).is_empty(), "{stage} has no phrases");
        }
    }
}
