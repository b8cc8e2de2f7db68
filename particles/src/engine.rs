//! Canvas-owning engine around the pure [`ParticleField`].
//!
//! `Engine` holds the canvas element and its 2D context; everything that can
//! run without a browser lives in [`crate::field`]. Construction returns
//! `None` when the context is unavailable, so a missing or unusable surface
//! degrades to a silent no-op for the whole renderer.

use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::ParticleField;
use crate::render;

/// The full particle engine. Wraps the pure [`ParticleField`] and owns the
/// browser canvas element and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub field: ParticleField,
}

impl Engine {
    /// Wrap a canvas element, acquiring its 2D context.
    ///
    /// Returns `None` if the context cannot be acquired; callers treat that
    /// as "no particle effect" rather than an error.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx, field: ParticleField::new() })
    }

    /// Match the drawing surface and the bounce bounds to a viewport size.
    /// Existing particles are kept as-is.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.resize(width, height);
    }

    /// Seed the field for the current viewport.
    pub fn seed(&mut self, rng: &mut SmallRng) {
        self.field.seed(rng);
    }

    /// Draw one frame: links at current positions, then advance the field,
    /// then the discs at their new positions.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        render::clear(&self.ctx, &self.field);
        render::draw_links(&self.ctx, &self.field);
        self.field.step();
        render::draw_particles(&self.ctx, &self.field)
    }
}
