use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

#[test]
fn empty_pool_yields_no_pick() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(pick_index(0, &mut rng), None);
}

#[test]
fn picks_stay_within_the_pool() {
    let mut rng = SmallRng::seed_from_u64(2);
    for _ in 0..200 {
        let idx = pick_index(7, &mut rng).unwrap();
        assert!(idx < 7);
    }
}

#[test]
fn picks_are_deterministic_for_a_seed() {
    let mut a = SmallRng::seed_from_u64(42);
    let mut b = SmallRng::seed_from_u64(42);
    let seq_a: Vec<_> = (0..16).map(|_| pick_index(5, &mut a)).collect();
    let seq_b: Vec<_> = (0..16).map(|_| pick_index(5, &mut b)).collect();
    assert_eq!(seq_a, seq_b);
}

#[test]
fn single_element_pool_always_picks_it() {
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..8 {
        assert_eq!(pick_index(1, &mut rng), Some(0));
    }
}
