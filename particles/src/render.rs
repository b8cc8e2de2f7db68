//! Drawing the particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the field and produces pixels — it never
//! mutates particle state.
//!
//! Fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`; the
//! top-level caller ([`crate::engine::Engine::frame`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{CORE_COLOR, EDGE_COLOR, GRADIENT_RADIUS_SCALE, LINK_ALPHA_MAX, LINK_WIDTH};
use crate::field::ParticleField;

/// Clear the full surface.
pub fn clear(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    ctx.clear_rect(0.0, 0.0, field.width, field.height);
}

/// Stroke every pair link, fading with distance.
pub fn draw_links(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    ctx.set_line_width(LINK_WIDTH);
    for link in field.links() {
        let alpha = LINK_ALPHA_MAX * link.strength;
        ctx.set_stroke_style_str(&format!("rgba(13,110,253,{alpha})"));
        ctx.begin_path();
        ctx.move_to(link.ax, link.ay);
        ctx.line_to(link.bx, link.by);
        ctx.stroke();
    }
}

/// Draw every particle as a radial-gradient disc, solid core fading outward.
///
/// # Errors
///
/// Returns `Err` if a `Canvas2D` call fails (e.g. an invalid gradient radius).
pub fn draw_particles(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    for p in &field.particles {
        let grad = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, p.r * GRADIENT_RADIUS_SCALE)?;
        grad.add_color_stop(0.0, CORE_COLOR)?;
        grad.add_color_stop(1.0, EDGE_COLOR)?;
        ctx.set_fill_style_canvas_gradient(&grad);
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.r, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}
