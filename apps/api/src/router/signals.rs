//! Signal detection: raw user text to a `Signals` struct.
//!
//! Pure and total: every input, including the empty string, yields a complete
//! `Signals`. Conflicts between signals are resolved downstream by the posture
//! resolver and the domain/stage pickers, never here.

use crate::router::lexicon::Lexicon;
use crate::router::types::{Domain, Signals};

/// Detects signals with the built-in lexicon.
pub fn detect_signals(text: &str) -> Signals {
    detect_signals_with(text, &Lexicon::default())
}

/// Detects signals against an explicit lexicon.
pub fn detect_signals_with(text: &str, lexicon: &Lexicon) -> Signals {
    let normalized = normalize(text);
    let has_any = |phrases: &[&str]| phrases.iter().any(|p| contains_phrase(&normalized, p));

    let distress = has_any(lexicon.distress);
    let urgency_high = has_any(lexicon.urgency_high);

    let mut domain_hits: std::collections::BTreeSet<Domain> = lexicon
        .domains
        .iter()
        .filter(|(_, phrases)| has_any(phrases))
        .map(|(domain, _)| *domain)
        .collect();
    // Distress is a confidence problem before it is anything else.
    if distress {
        domain_hits.insert(Domain::Confidence);
    }

    let stage_hints = lexicon
        .stages
        .iter()
        .filter(|(_, phrases)| has_any(phrases))
        .map(|(stage, _)| *stage)
        .collect();

    Signals {
        distress,
        overwhelm: has_any(lexicon.overwhelm),
        ready_to_act: has_any(lexicon.ready_to_act),
        decision_ask: has_any(lexicon.decision_ask),
        teach_ask: has_any(lexicon.teach_ask),
        urgency_high,
        urgency_medium: !urgency_high && has_any(lexicon.urgency_medium),
        domain_hits,
        stage_hints,
    }
}

/// Lowercases, trims and folds typographic apostrophes to `'`.
pub(crate) fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .replace(['\u{2019}', '\u{2018}'], "'")
}

/// True if `phrase` occurs in `text` bounded by non-alphanumeric characters
/// (or the ends of the text). `"or"` matches "a or b" but not "work".
pub(crate) fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    text.match_indices(phrase).any(|(start, matched)| {
        let before = text[..start].chars().next_back();
        let after = text[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::types::Stage;

    #[test]
    fn test_phrase_match_respects_word_boundaries() {
        assert!(contains_phrase("offer a or offer b", "or"));
        assert!(!contains_phrase("my work history", "or"));
        assert!(!contains_phrase("what are the stats", "ats"));
        assert!(contains_phrase("does it pass ats?", "ats"));
        assert!(contains_phrase("i can't do this", "i can't"));
        assert!(!contains_phrase("", "resume"));
        assert!(!contains_phrase("resume", ""));
    }

    #[test]
    fn test_phrase_match_finds_later_bounded_occurrence() {
        // first "or" is inside "for", second is standalone
        assert!(contains_phrase("for a or b", "or"));
    }

    #[test]
    fn test_normalize_folds_curly_apostrophes() {
        assert_eq!(normalize("  I Can\u{2019}t  "), "i can't");
    }

    #[test]
    fn test_panicking_about_interview_tomorrow() {
        let s = detect_signals("I can't do this, I'm panicking about my interview tomorrow");
        assert!(s.distress);
        assert!(s.urgency_high);
        assert!(!s.urgency_medium);
        assert!(s.hits_domain(Domain::Interview));
        assert!(s.hits_domain(Domain::Confidence), "distress implies confidence");
        assert!(s.hints_stage(Stage::Interviewing));
    }

    #[test]
    fn test_offer_decision_today() {
        let s = detect_signals("should I take offer A or offer B, need to decide today");
        assert!(s.decision_ask);
        assert!(s.urgency_high);
        assert!(s.ready_to_act);
        assert!(s.hits_domain(Domain::Negotiation));
        assert!(s.hints_stage(Stage::Negotiating));
        assert!(!s.distress);
    }

    #[test]
    fn test_teach_resume_bullet() {
        let s = detect_signals("teach me how to write a resume bullet");
        assert!(s.teach_ask);
        assert!(s.hits_domain(Domain::Resume));
        assert!(!s.decision_ask);
        assert!(!s.ready_to_act);
        assert!(!s.urgency_high);
        assert!(!s.distress);
    }

    #[test]
    fn test_small_talk_fires_nothing() {
        let s = detect_signals("ok thanks");
        assert_eq!(s, Signals::default());
    }

    #[test]
    fn test_empty_text_is_total() {
        assert_eq!(detect_signals(""), Signals::default());
        assert_eq!(detect_signals("   \n\t "), Signals::default());
    }

    #[test]
    fn test_urgency_medium_only_without_high() {
        let s = detect_signals("I have an interview next week");
        assert!(s.urgency_medium);
        assert!(!s.urgency_high);

        let s = detect_signals("interview next week and a deadline today");
        assert!(s.urgency_high);
        assert!(!s.urgency_medium);
    }

    #[test]
    fn test_overwhelm_without_distress() {
        let s = detect_signals("there's so much, I don't know where to start");
        assert!(s.overwhelm);
        assert!(!s.distress);
    }

    #[test]
    fn test_multiple_domains_can_fire_together() {
        let s = detect_signals("my linkedin headline and my resume bullets");
        assert!(s.hits_domain(Domain::Linkedin));
        assert!(s.hits_domain(Domain::Resume));
    }

    #[test]
    fn test_stage_hints() {
        assert!(detect_signals("thinking about a career change into design")
            .hints_stage(Stage::Pivoting));
        assert!(detect_signals("I haven't applied anywhere in months")
            .hints_stage(Stage::Stuck));
        assert!(detect_signals("sent 40 applications this month")
            .hints_stage(Stage::Applying));
    }

    #[test]
    fn test_detection_is_idempotent() {
        let text = "Should I negotiate the offer? The deadline is tomorrow and I'm anxious";
        assert_eq!(detect_signals(text), detect_signals(text));
    }

    #[test]
    fn test_inflected_distress_fires() {
        for text in [
            "I panicked in my interview",
            "this search is overwhelming",
            "honestly I'm stressed out",
            "I freaked out on the call",
        ] {
            assert!(detect_signals(text).distress, "'{text}' should read as distress");
        }
    }

    #[test]
    fn test_negotiation_verbs_are_decision_asks() {
        assert!(detect_signals("how do I negotiate my salary").decision_ask);
        assert!(detect_signals("can I counter at 150").decision_ask);
        assert!(detect_signals("thinking I might pivot to product").decision_ask);
    }

    #[test]
    fn test_broad_domain_words() {
        let s = detect_signals("can you look at my work experience section");
        assert!(s.hits_domain(Domain::Resume));

        let s = detect_signals("my summary feels flat");
        assert!(s.hits_domain(Domain::Linkedin));

        let s = detect_signals("what should I write in the message");
        assert!(s.hits_domain(Domain::Networking));

        let s = detect_signals("the interviewer asked a star question");
        assert!(s.hits_domain(Domain::Interview));
        assert!(s.hints_stage(Stage::Interviewing));
    }

    #[test]
    fn test_custom_lexicon_is_honored() {
        let lexicon = Lexicon {
            distress: &["meltdown"],
            ..Lexicon::default()
        };
        assert!(detect_signals_with("total meltdown", &lexicon).distress);
        assert!(!detect_signals("total meltdown").distress);
    }
}
