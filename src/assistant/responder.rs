//! First-match responder over the intent table, with ad hoc topic rules and
//! a fixed fallback suggestion.

use crate::assistant::intents::INTENTS;
use crate::assistant::knowledge::KnowledgeBase;

#[cfg(test)]
#[path = "responder_test.rs"]
mod responder_test;

/// Suggestion returned when nothing matches.
pub const FALLBACK: &str =
    "Try making your question more specific: for example, “skills”, “projects”, “goals”, “age”, “why you?”.";

/// Compute the assistant's reply for a raw query.
///
/// The query is lowercased; the first intent with any key contained in it
/// wins. Ad hoc topic rules come after the table, then the fallback.
#[must_use]
pub fn answer(kb: &KnowledgeBase, query: &str) -> String {
    let query = query.to_lowercase();
    for intent in INTENTS {
        if intent.keys.iter().any(|key| query.contains(key)) {
            return (intent.respond)(kb);
        }
    }
    if query.contains("python") {
        return "Python: experience with games, logic and algorithms.".to_owned();
    }
    if query.contains("sql") || query.contains("supabase") {
        return "Experience with databases and Supabase: storing and retrieving data in projects.".to_owned();
    }
    if query.contains("university") || query.contains("education") {
        return "Goal: to study at an international university and build technology products.".to_owned();
    }
    FALLBACK.to_owned()
}
