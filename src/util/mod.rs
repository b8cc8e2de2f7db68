//! Browser-facing helpers shared across the page.
//!
//! DESIGN
//! ======
//! Each concern is one module: the one-shot motion preference read, the
//! scroll reveal observer, and the random blink loop. Pure parts stay
//! natively testable; all DOM wiring is gated behind `csr`.

pub mod blink;
pub mod motion;
pub mod reveal;
