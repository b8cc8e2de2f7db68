//! Shared numeric constants for the particle field.

// ── Population ──────────────────────────────────────────────────

/// Hard upper bound on the particle count, independent of viewport size.
pub const MAX_PARTICLES: usize = 70;

/// Surface area (in CSS px²) that yields one particle before the cap.
pub const AREA_PER_PARTICLE: f64 = 18_000.0;

// ── Motion ──────────────────────────────────────────────────────

/// Magnitude scale for each velocity component at seed time.
pub const MAX_SPEED: f64 = 0.4;

/// Smallest particle radius in CSS pixels.
pub const RADIUS_MIN: f64 = 0.6;

/// Random span added on top of [`RADIUS_MIN`].
pub const RADIUS_SPAN: f64 = 1.8;

// ── Linking ─────────────────────────────────────────────────────

/// Maximum distance between two particles at which a line is drawn.
pub const LINK_DIST: f64 = 120.0;

/// Stroke alpha of a link at distance zero; decays linearly to zero
/// at [`LINK_DIST`].
pub const LINK_ALPHA_MAX: f64 = 0.15;

/// Link stroke width in CSS pixels.
pub const LINK_WIDTH: f64 = 1.0;

// ── Palette ─────────────────────────────────────────────────────

/// Gradient core color of a particle disc.
pub const CORE_COLOR: &str = "rgba(13,110,253,0.8)";

/// Gradient edge color of a particle disc.
pub const EDGE_COLOR: &str = "rgba(58,176,255,0.6)";

/// Outer gradient radius as a multiple of the particle radius.
pub const GRADIENT_RADIUS_SCALE: f64 = 2.4;
