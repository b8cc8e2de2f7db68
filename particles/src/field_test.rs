#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

fn field_with(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
    ParticleField { width, height, particles }
}

fn still_dot(x: f64, y: f64) -> Particle {
    Particle { x, y, vx: 0.0, vy: 0.0, r: 1.0 }
}

// --- count_for_area ---

#[test]
fn count_zero_area_is_zero() {
    assert_eq!(count_for_area(0.0, 0.0), 0);
    assert_eq!(count_for_area(1920.0, 0.0), 0);
}

#[test]
fn count_scales_with_area() {
    // 180_000 px² / 18_000 px² per particle = 10
    assert_eq!(count_for_area(400.0, 450.0), 10);
}

#[test]
fn count_rounds_to_nearest() {
    // 27_000 / 18_000 = 1.5 rounds up
    assert_eq!(count_for_area(300.0, 90.0), 2);
    // 24_000 / 18_000 ≈ 1.33 rounds down
    assert_eq!(count_for_area(300.0, 80.0), 1);
}

#[test]
fn count_is_capped_for_large_viewports() {
    assert_eq!(count_for_area(1920.0, 1080.0), MAX_PARTICLES);
    assert_eq!(count_for_area(10_000.0, 10_000.0), MAX_PARTICLES);
}

// --- seeding ---

#[test]
fn seed_population_matches_area() {
    let mut field = ParticleField::new();
    field.resize(400.0, 450.0);
    field.seed(&mut rng(1));
    assert_eq!(field.particles.len(), 10);
}

#[test]
fn seed_positions_are_within_bounds() {
    let mut field = ParticleField::new();
    field.resize(1920.0, 1080.0);
    field.seed(&mut rng(2));
    for p in &field.particles {
        assert!(p.x >= 0.0 && p.x < field.width);
        assert!(p.y >= 0.0 && p.y < field.height);
    }
}

#[test]
fn seed_velocities_are_bounded_by_max_speed() {
    let mut field = ParticleField::new();
    field.resize(1920.0, 1080.0);
    field.seed(&mut rng(3));
    for p in &field.particles {
        assert!(p.vx.abs() <= MAX_SPEED / 2.0);
        assert!(p.vy.abs() <= MAX_SPEED / 2.0);
    }
}

#[test]
fn seed_radii_are_within_range() {
    let mut field = ParticleField::new();
    field.resize(1920.0, 1080.0);
    field.seed(&mut rng(4));
    for p in &field.particles {
        assert!(p.r >= RADIUS_MIN);
        assert!(p.r < RADIUS_MIN + RADIUS_SPAN);
    }
}

#[test]
fn seed_is_deterministic_for_a_seed() {
    let mut a = ParticleField::new();
    a.resize(800.0, 600.0);
    a.seed(&mut rng(42));
    let mut b = ParticleField::new();
    b.resize(800.0, 600.0);
    b.seed(&mut rng(42));
    assert_eq!(a.particles, b.particles);
}

#[test]
fn reseed_replaces_the_population() {
    let mut field = ParticleField::new();
    field.resize(400.0, 450.0);
    field.seed(&mut rng(5));
    let first = field.particles.clone();
    field.seed(&mut rng(6));
    assert_eq!(field.particles.len(), first.len());
    assert_ne!(field.particles, first);
}

// --- stepping and bounces ---

#[test]
fn step_advances_by_velocity() {
    let mut field = field_with(
        100.0,
        100.0,
        vec![Particle { x: 10.0, y: 20.0, vx: 0.3, vy: -0.2, r: 1.0 }],
    );
    field.step();
    let p = field.particles[0];
    assert!(approx_eq(p.x, 10.3));
    assert!(approx_eq(p.y, 19.8));
}

#[test]
fn crossing_right_edge_flips_vx_only() {
    let mut field = field_with(
        100.0,
        100.0,
        vec![Particle { x: 99.9, y: 50.0, vx: 0.3, vy: 0.1, r: 1.0 }],
    );
    field.step();
    let p = field.particles[0];
    assert!(approx_eq(p.vx, -0.3));
    assert!(approx_eq(p.vy, 0.1));
}

#[test]
fn crossing_left_edge_flips_vx_only() {
    let mut field = field_with(
        100.0,
        100.0,
        vec![Particle { x: 0.1, y: 50.0, vx: -0.3, vy: 0.1, r: 1.0 }],
    );
    field.step();
    let p = field.particles[0];
    assert!(approx_eq(p.vx, 0.3));
    assert!(approx_eq(p.vy, 0.1));
}

#[test]
fn crossing_bottom_edge_flips_vy_only() {
    let mut field = field_with(
        100.0,
        100.0,
        vec![Particle { x: 50.0, y: 99.9, vx: 0.1, vy: 0.3, r: 1.0 }],
    );
    field.step();
    let p = field.particles[0];
    assert!(approx_eq(p.vx, 0.1));
    assert!(approx_eq(p.vy, -0.3));
}

#[test]
fn corner_crossing_flips_both_axes() {
    let mut field = field_with(
        100.0,
        100.0,
        vec![Particle { x: 99.9, y: 99.9, vx: 0.3, vy: 0.3, r: 1.0 }],
    );
    field.step();
    let p = field.particles[0];
    assert!(approx_eq(p.vx, -0.3));
    assert!(approx_eq(p.vy, -0.3));
}

#[test]
fn interior_particle_keeps_its_velocity() {
    let mut field = field_with(
        100.0,
        100.0,
        vec![Particle { x: 50.0, y: 50.0, vx: 0.3, vy: -0.2, r: 1.0 }],
    );
    field.step();
    let p = field.particles[0];
    assert!(approx_eq(p.vx, 0.3));
    assert!(approx_eq(p.vy, -0.2));
}

// --- links ---

#[test]
fn no_links_between_distant_particles() {
    let field = field_with(1000.0, 1000.0, vec![still_dot(0.0, 0.0), still_dot(500.0, 500.0)]);
    assert!(field.links().is_empty());
}

#[test]
fn link_exists_strictly_under_threshold() {
    let field = field_with(1000.0, 1000.0, vec![still_dot(0.0, 0.0), still_dot(119.9, 0.0)]);
    assert_eq!(field.links().len(), 1);
}

#[test]
fn no_link_at_exact_threshold() {
    let field = field_with(1000.0, 1000.0, vec![still_dot(0.0, 0.0), still_dot(LINK_DIST, 0.0)]);
    assert!(field.links().is_empty());
}

#[test]
fn link_strength_is_full_at_zero_distance() {
    let field = field_with(1000.0, 1000.0, vec![still_dot(10.0, 10.0), still_dot(10.0, 10.0)]);
    let links = field.links();
    assert_eq!(links.len(), 1);
    assert!(approx_eq(links[0].strength, 1.0));
}

#[test]
fn link_strength_decays_with_distance() {
    let near = field_with(1000.0, 1000.0, vec![still_dot(0.0, 0.0), still_dot(30.0, 0.0)]);
    let far = field_with(1000.0, 1000.0, vec![still_dot(0.0, 0.0), still_dot(90.0, 0.0)]);
    let near_strength = near.links()[0].strength;
    let far_strength = far.links()[0].strength;
    assert!(approx_eq(near_strength, 0.75));
    assert!(approx_eq(far_strength, 0.25));
    assert!(near_strength > far_strength);
}

#[test]
fn links_cover_every_close_pair() {
    let field = field_with(
        1000.0,
        1000.0,
        vec![still_dot(0.0, 0.0), still_dot(50.0, 0.0), still_dot(0.0, 50.0)],
    );
    // All three pairs are under the threshold (max distance ≈ 70.7).
    assert_eq!(field.links().len(), 3);
}

// --- resize ---

#[test]
fn resize_updates_bounds_without_reseeding() {
    let mut field = ParticleField::new();
    field.resize(400.0, 450.0);
    field.seed(&mut rng(7));
    let before = field.particles.clone();
    field.resize(200.0, 200.0);
    assert_eq!(field.width, 200.0);
    assert_eq!(field.height, 200.0);
    assert_eq!(field.particles, before);
}

#[test]
fn out_of_bounds_after_shrink_bounces_back_inward() {
    let mut field = field_with(
        100.0,
        100.0,
        vec![Particle { x: 150.0, y: 50.0, vx: 0.3, vy: 0.0, r: 1.0 }],
    );
    field.step();
    // Still outside, but now heading back toward the surface.
    assert!(approx_eq(field.particles[0].vx, -0.3));
}
