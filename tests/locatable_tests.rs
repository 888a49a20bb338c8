#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use foragers::simulation::food::{Food, FoodId};
use foragers::simulation::geometric_utils::{Bounds, centered_rect, distance, step_toward};
use foragers::simulation::locatable::{Locatable, nearest};
use foragers::simulation::organism::{Organism, OrganismId, SpawnTraits};
use foragers::simulation::params::Params;
use foragers::simulation::sampler::TraitSampler;
use geo::Point;

#[test]
fn test_food_locatable() {
    let food = Food::new(FoodId(0), Point::new(10.0, 20.0), 4.0, 6.0);

    assert_eq!(food.pos(), Point::new(10.0, 20.0));
    assert_eq!(food.size(), (4.0, 6.0));

    let hitbox = food.hitbox();
    assert_eq!(hitbox.min().x, 8.0);
    assert_eq!(hitbox.min().y, 17.0);
    assert_eq!(hitbox.max().x, 12.0);
    assert_eq!(hitbox.max().y, 23.0);
}

#[test]
fn test_organism_locatable() {
    let params = Params::default();
    let mut sampler = TraitSampler::from_seed(0);
    let organism = Organism::spawn(
        OrganismId(0),
        Point::new(100.0, 50.0),
        [0, 0, 0],
        3.0,
        SpawnTraits::default(),
        &mut sampler,
        &params,
    );

    assert_eq!(organism.pos(), Point::new(100.0, 50.0));
    assert_eq!(
        organism.size(),
        (params.arena.organism_width, params.arena.organism_height)
    );
    assert_eq!(organism.hitbox().width(), params.arena.organism_width);
}

#[test]
fn test_locatable_trait_polymorphism() {
    let params = Params::default();
    let mut sampler = TraitSampler::from_seed(1);
    let food = Food::new(FoodId(0), Point::new(5.0, 5.0), 10.0, 10.0);
    let organism = Organism::spawn(
        OrganismId(0),
        Point::new(10.0, 10.0),
        [0, 0, 0],
        3.0,
        SpawnTraits::default(),
        &mut sampler,
        &params,
    );

    fn get_distance(a: &dyn Locatable, b: &dyn Locatable) -> f32 {
        a.distance_to(b)
    }

    let d = get_distance(&food, &organism);
    assert!((d - 7.071).abs() < 0.01); // sqrt(5^2 + 5^2)
}

#[test]
fn test_nearest_first_wins_on_tie() {
    let food = [
        Food::new(FoodId(0), Point::new(0.0, 3.0), 1.0, 1.0),
        Food::new(FoodId(1), Point::new(3.0, 0.0), 1.0, 1.0),
        Food::new(FoodId(2), Point::new(-3.0, 0.0), 1.0, 1.0),
    ];

    let found = nearest(Point::new(0.0, 0.0), food.iter()).unwrap();
    assert_eq!(found.id, FoodId(0));

    let empty: [Food; 0] = [];
    assert!(nearest(Point::new(0.0, 0.0), empty.iter()).is_none());
}

#[test]
fn test_step_toward() {
    let from = Point::new(0.0, 0.0);

    let next = step_toward(from, Point::new(6.0, 8.0), 5.0).unwrap();
    assert!((next.x() - 3.0).abs() < 1e-5);
    assert!((next.y() - 4.0).abs() < 1e-5);

    // never overshoots
    assert_eq!(
        step_toward(from, Point::new(1.0, 0.0), 5.0),
        Some(Point::new(1.0, 0.0))
    );

    // coincident points have no direction
    assert!(step_toward(from, from, 5.0).is_none());
}

#[test]
fn test_geometry_helpers() {
    assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);

    let rect = centered_rect(Point::new(0.0, 0.0), 2.0, 4.0);
    assert_eq!(rect.min().x, -1.0);
    assert_eq!(rect.max().y, 2.0);

    let bounds = Bounds::new(0.0, 0.0, 10.0, 5.0);
    assert!(bounds.is_valid());
    assert_eq!(bounds.to_rect().height(), 5.0);
    assert!(!Bounds::new(10.0, 0.0, 0.0, 5.0).is_valid());
}
