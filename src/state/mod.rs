//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by widget (`assistant`, `menu`) so components depend on
//! small focused models. Structs are plain data with pure transition
//! methods; the browser shims only schedule when those transitions run.

pub mod assistant;
pub mod menu;
