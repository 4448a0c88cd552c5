//! Built-in expertise corpus used when no `CHUNKS_PATH` is configured.

use crate::retrieval::keyword::CorpusChunk;
use crate::router::types::{Domain, Stage};

fn chunk(domain: Domain, stage: Option<Stage>, section: &str, content: &str) -> CorpusChunk {
    CorpusChunk {
        content: content.to_string(),
        domain,
        stage,
        section: Some(section.to_string()),
    }
}

pub fn sample_chunks() -> Vec<CorpusChunk> {
    use Domain as D;
    use Stage as S;

    vec![
        // Interview
        chunk(
            D::Interview,
            Some(S::Interviewing),
            "interview_prep",
            "Interview prep checklist for the night before:
1. Pick 3 stories: one challenge you overcame, one win, one growth moment
2. Practice \"tell me about yourself\" out loud once, not more
3. Prepare 2 questions to ask them
4. Research the company's recent news and the interviewer's background

Don't overdo it. Sleep matters more than perfect prep.",
        ),
        chunk(
            D::Interview,
            Some(S::Interviewing),
            "behavioral_interviews",
            "STAR method:
Situation: 1-2 sentences of context
Task: what you needed to accomplish
Action: what YOU specifically did (spend most of the answer here)
Result: the quantified outcome and what you learned

Common mistake: too much time on situation and task. Get to the action fast.",
        ),
        chunk(
            D::Interview,
            Some(S::Interviewing),
            "common_questions",
            "\"Tell me about yourself\" structure:
1. Now: current role and one key win (30 sec)
2. How: the 1-2 past roles that led here (30 sec)
3. Why: why this role and company excite you (15 sec)

75 seconds total. Practice with a timer; most people ramble for five minutes.",
        ),
        // Resume
        chunk(
            D::Resume,
            Some(S::Applying),
            "resume_bullets",
            "Resume bullet formula:
[Action verb] + [what you did] + [how or why it mattered] + [result]

Weak: \"Responsible for managing team projects\"
Strong: \"Led a 5-person sprint team to ship the redesign 2 weeks early, lifting engagement 40%\"

Every bullet needs a result. No responsibilities, only accomplishments.",
        ),
        chunk(
            D::Resume,
            Some(S::Applying),
            "ats_optimization",
            "ATS (applicant tracking system) rules:
1. Use standard section headers: Experience, Education, Skills
2. No tables, text boxes, or decorative formatting
3. Mirror exact keyword phrases from the job description
4. PDF is fine, despite old advice
5. One page under 10 years of experience, two pages beyond

Most ATS failures are formatting, not content.",
        ),
        // Networking
        chunk(
            D::Networking,
            Some(S::Applying),
            "networking_framework",
            "Networking means helpful conversations, not asking for favors.

Coffee chat outreach:
\"Hi [Name], I'm exploring [role type]. Would you share 15 minutes on how you got there?\"

Show up with 3 good questions. Follow up with a thank-you and one insight you took away.",
        ),
        chunk(
            D::Networking,
            Some(S::Applying),
            "referral_requests",
            "Referral request template:

\"Hi [Name], I saw you work at [Company] as a [Role]. I'm exploring [type of role]
opportunities and [Company] is at the top of my list. Would you be open to a quick
chat about your experience there? Happy to share my background if a referral makes sense.\"

Personalize the brackets. Send when ready.",
        ),
        // Negotiation
        chunk(
            D::Negotiation,
            Some(S::Negotiating),
            "offer_evaluation",
            "Offer evaluation:

You have options in hand, so decide between them instead of interviewing more.
Key question: which offer gets you closer to your 3-year goal?
No 3-year goal yet? Ask which role builds skills you don't have.

Culture versus comp: if the culture gap is real, take the better culture. Comp can be
negotiated later; a bad culture is expensive.",
        ),
        chunk(
            D::Negotiation,
            Some(S::Negotiating),
            "negotiation_tactics",
            "Counter-offer strategy:
1. Always negotiate. Even if you will accept: \"I'm excited. Can we discuss compensation?\"
2. Anchor 10-20% above their offer
3. Have several asks ready: base, equity, sign-on bonus, start date, title, remote flexibility
4. If they say no to one, pivot to another
5. Get everything in writing before accepting

Accepting the first offer without discussion signals you undervalue yourself.",
        ),
        // LinkedIn
        chunk(
            D::Linkedin,
            Some(S::Applying),
            "linkedin_optimization",
            "LinkedIn headline formula:

Weak: \"Product Manager at Company\"
Strong: \"Product Manager | Building AI tools that reduce churn | Ex-Google\"

Structure: [Title] | [Value you create] | [Credibility signals]
The headline shows in recruiter search results. Make it searchable.",
        ),
        chunk(
            D::Linkedin,
            Some(S::Applying),
            "about_section",
            "LinkedIn about section structure:
Paragraph 1: what you do now and why it matters
Paragraph 2: how you got here (1-2 key transitions)
Paragraph 3: what you're looking for, with a call to action

Keep it under 200 words and write like you talk. It's a conversation starter, not a resume.",
        ),
        // Confidence
        chunk(
            D::Confidence,
            None,
            "reframing_rejection",
            "Rejection is data, not a verdict.

Every no teaches you something:
- Wrong role fit: refine the target
- Interview didn't land: practice storytelling
- Resume didn't pass: optimize keywords

Track the patterns. You're not bad at this; you're learning a skill, and reps beat perfection.",
        ),
        chunk(
            D::Confidence,
            None,
            "action_over_perfection",
            "Momentum beats perfection.

Waiting for the perfect resume or profile is stalling disguised as preparation.
Send the 80% version. Five real applications teach more than five hours of tweaking.

Confidence follows action. Act first, feel ready later.",
        ),
    ]
}
