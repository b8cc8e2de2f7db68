//! Background particle network for the portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the decorative canvas: seeding a small set of drifting
//! dots, stepping their positions each animation frame, linking nearby pairs
//! with fading lines, and drawing the result to a 2D context. The host UI
//! layer is responsible only for mounting the canvas element, driving the
//! frame loop, and forwarding viewport resizes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-owning engine around the testable [`field::ParticleField`] |
//! | [`field`] | Pure particle state: seeding, movement, bounces, pair links |
//! | [`render`] | Drawing the field to a `CanvasRenderingContext2d` |
//! | [`consts`] | Shared numeric constants (particle cap, link distance, palette) |

pub mod consts;
pub mod engine;
pub mod field;
pub mod render;
