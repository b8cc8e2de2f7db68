//! Pure particle state: seeding, per-frame movement, and pair linking.
//!
//! Everything in this module is plain math over plain structs so the bounce
//! and linking rules can be tested without a browser. The canvas side lives
//! in [`crate::engine`] and [`crate::render`].

use rand::Rng;
use rand::rngs::SmallRng;

use crate::consts::{AREA_PER_PARTICLE, LINK_DIST, MAX_PARTICLES, MAX_SPEED, RADIUS_MIN, RADIUS_SPAN};

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// One drifting dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: f64,
}

/// A line between two particles closer than [`LINK_DIST`].
///
/// `strength` is 1.0 at distance zero and decays linearly to 0.0 at the
/// link-distance threshold.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub ax: f64,
    pub ay: f64,
    pub bx: f64,
    pub by: f64,
    pub strength: f64,
}

/// Particle population plus the bounds it bounces inside.
///
/// Bounds track the viewport: [`ParticleField::resize`] updates them without
/// re-seeding, so existing particles keep their positions and drift back in
/// via the bounce rule.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
}

/// Particle count for a surface area: one per [`AREA_PER_PARTICLE`] px²,
/// capped at [`MAX_PARTICLES`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn count_for_area(width: f64, height: f64) -> usize {
    let raw = (width * height / AREA_PER_PARTICLE).round() as usize;
    raw.min(MAX_PARTICLES)
}

impl ParticleField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the bounce bounds. Never re-seeds; particles left outside the
    /// new bounds are pulled back by the next bounce check.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Replace the population with freshly randomized particles for the
    /// current bounds.
    pub fn seed(&mut self, rng: &mut SmallRng) {
        let count = count_for_area(self.width, self.height);
        self.particles = (0..count)
            .map(|_| Particle {
                x: rng.random::<f64>() * self.width,
                y: rng.random::<f64>() * self.height,
                vx: (rng.random::<f64>() - 0.5) * MAX_SPEED,
                vy: (rng.random::<f64>() - 0.5) * MAX_SPEED,
                r: rng.random::<f64>() * RADIUS_SPAN + RADIUS_MIN,
            })
            .collect();
    }

    /// Advance every particle by its velocity, flipping the velocity sign on
    /// each axis whose position left the bounds.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    /// Collect all pair links strictly under the link-distance threshold.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i];
                let b = self.particles[j];
                let dist = (a.x - b.x).hypot(a.y - b.y);
                if dist < LINK_DIST {
                    links.push(Link {
                        ax: a.x,
                        ay: a.y,
                        bx: b.x,
                        by: b.y,
                        strength: 1.0 - dist / LINK_DIST,
                    });
                }
            }
        }
        links
    }
}
