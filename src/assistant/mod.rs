//! The canned "AI assistant": a static knowledge base, an ordered intent
//! table, and a first-match keyword responder.
//!
//! Every reply is a deterministic function of the knowledge base; nothing
//! leaves the page and nothing is learned or persisted.

pub mod intents;
pub mod knowledge;
pub mod responder;
