//! Ordered keyword-intent table mapping query substrings to canned replies.

use crate::assistant::knowledge::KnowledgeBase;

#[cfg(test)]
#[path = "intents_test.rs"]
mod intents_test;

/// One matching rule: if any key occurs in the lowercased query, `respond`
/// produces the reply.
pub struct Intent {
    pub keys: &'static [&'static str],
    pub respond: fn(&KnowledgeBase) -> String,
}

/// Intent table in priority order; the responder takes the first match.
pub const INTENTS: &[Intent] = &[
    Intent { keys: &["name", "what is your name"], respond: name_reply },
    Intent { keys: &["age", "old are you"], respond: age_reply },
    Intent { keys: &["grade", "school"], respond: grade_reply },
    Intent { keys: &["skill", "skills", "tech"], respond: skills_reply },
    Intent { keys: &["project", "projects", "portfolio"], respond: projects_reply },
    Intent { keys: &["weakness", "weak sides"], respond: weaknesses_reply },
    Intent { keys: &["goal", "goals"], respond: goals_reply },
    Intent { keys: &["why"], respond: why_reply },
    Intent { keys: &["help", "assistant", "ai", "bot"], respond: help_reply },
];

fn name_reply(kb: &KnowledgeBase) -> String {
    format!("My name is: {}.", kb.name)
}

fn age_reply(kb: &KnowledgeBase) -> String {
    format!("I am {} years old.", kb.age)
}

fn grade_reply(kb: &KnowledgeBase) -> String {
    format!("I am in {}.", kb.grade)
}

fn skills_reply(kb: &KnowledgeBase) -> String {
    format!("Technical skills: {}.", kb.tech_skills.join("; "))
}

fn projects_reply(kb: &KnowledgeBase) -> String {
    format!("Projects: {}.", kb.projects.join("; "))
}

fn weaknesses_reply(kb: &KnowledgeBase) -> String {
    format!("Weaknesses: {}.", kb.weaknesses.join("; "))
}

fn goals_reply(kb: &KnowledgeBase) -> String {
    format!(
        "Short-term: {}. Long-term: {}.",
        kb.goals_short.join("; "),
        kb.goals_long.join("; ")
    )
}

fn why_reply(kb: &KnowledgeBase) -> String {
    kb.why.to_owned()
}

fn help_reply(_kb: &KnowledgeBase) -> String {
    "I answer based on the information about Qaisar on this site. Try asking: “skills”, “projects”, “goals”."
        .to_owned()
}
