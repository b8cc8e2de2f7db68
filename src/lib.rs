//! # portfolio
//!
//! Leptos + WASM front-end for a personal portfolio page. Everything runs
//! client-side: the page content is rendered from a static knowledge base,
//! and the decorative behaviors (background particle network, hero
//! typewriter, scroll reveal, random blink, canned AI assistant, dropdown
//! menu) are driven by browser timers and observers. There is no backend.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component: contexts, routing, post-mount animators |
//! | [`assistant`] | Knowledge base, intent table, and the responder |
//! | [`components`] | Page widgets (particle canvas, typewriter, menu, assistant panel) |
//! | [`pages`] | Page assembly |
//! | [`state`] | Plain state structs shared via context |
//! | [`util`] | Motion preference, reveal observer, blink loop |

pub mod app;
pub mod assistant;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
