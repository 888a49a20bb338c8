#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use foragers::simulation::geometric_utils::Bounds;
use foragers::simulation::sampler::{FloatRange, IntRange, TraitSampler};

#[test]
fn test_same_seed_same_sequence() {
    let mut a = TraitSampler::from_seed(99);
    let mut b = TraitSampler::from_seed(99);
    for _ in 0..100 {
        assert_eq!(a.int_between(-50, 50), b.int_between(-50, 50));
        assert_eq!(a.float_between(0.0, 1.0), b.float_between(0.0, 1.0));
    }
}

#[test]
fn test_ranges_are_inclusive() {
    let mut sampler = TraitSampler::from_seed(1);
    let mut seen = [false; 3];
    for _ in 0..500 {
        let v = sampler.int(IntRange::new(2, 4));
        assert!((2..=4).contains(&v));
        seen[(v - 2) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));

    assert_eq!(sampler.uniform(FloatRange::new(3.0, 3.0)), 3.0);
    assert_eq!(sampler.int_between(5, 5), 5);
}

#[test]
fn test_swapped_bounds() {
    let mut sampler = TraitSampler::from_seed(2);
    for _ in 0..100 {
        let v = sampler.float_between(5.0, -5.0);
        assert!((-5.0..=5.0).contains(&v));
        let n = sampler.int_between(3, -3);
        assert!((-3..=3).contains(&n));
    }
}

#[test]
fn test_chance_extremes() {
    let mut sampler = TraitSampler::from_seed(3);
    for _ in 0..100 {
        assert!(sampler.chance(1.0));
        assert!(!sampler.chance(0.0));
    }
}

#[test]
fn test_point_in_bounds() {
    let mut sampler = TraitSampler::from_seed(4);
    let bounds = Bounds::new(50.0, 60.0, 850.0, 600.0);
    for _ in 0..200 {
        let p = sampler.point_in(&bounds);
        assert!(p.x() >= 50.0 && p.x() <= 850.0);
        assert!(p.y() >= 60.0 && p.y() <= 600.0);
    }
}

#[test]
fn test_offsets_respect_spread() {
    let mut sampler = TraitSampler::from_seed(5);
    for _ in 0..200 {
        let [a, b, c] = sampler.offsets([0, 3, 16]);
        assert_eq!(a, 0);
        assert!((-3..=3).contains(&b));
        assert!((-16..=16).contains(&c));
    }
}
