#![allow(missing_docs)]

use foragers::simulation::error::Error;
use foragers::simulation::params::{ArrivalRule, Params};
use std::fs;

fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("foragers_{}_{name}", std::process::id()))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_presets_are_valid() {
    for params in [Params::default(), Params::simple(), Params::low_mutation()] {
        params.validate().expect("preset should validate");
    }
    assert_eq!(Params::simple().seed.colors.len(), 3);
    assert_eq!(Params::low_mutation().arena.arrival, ArrivalRule::OverlapsBox);
}

#[test]
fn test_save_and_load() {
    let mut params = Params::simple();
    params.max_population = 250;
    params.stats_path = Some("stats.json".to_string());

    let save_path = temp_path("params.json");
    params
        .save_to_file(&save_path)
        .expect("Failed to save params");

    let loaded = Params::load_from_file(&save_path).expect("Failed to load params");
    assert_eq!(loaded, params);

    fs::remove_file(&save_path).ok();
}

#[test]
fn test_load_rejects_invalid_params() {
    let mut params = Params::default();
    params.food.spawn_probability = 1.5;

    let save_path = temp_path("invalid_params.json");
    params.save_to_file(&save_path).expect("Failed to save params");

    let result = Params::load_from_file(&save_path);
    assert!(matches!(result, Err(Error::InvalidParams(_))));

    fs::remove_file(&save_path).ok();
}

#[test]
fn test_load_missing_file() {
    let result = Params::load_from_file(&temp_path("does_not_exist.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_load_malformed_json() {
    let save_path = temp_path("malformed.json");
    fs::write(&save_path, "{ not json").unwrap();

    let result = Params::load_from_file(&save_path);
    assert!(matches!(result, Err(Error::Json(_))));

    fs::remove_file(&save_path).ok();
}

#[test]
fn test_validate_catches_bad_values() {
    let mut params = Params::default();
    params.seed.colors.clear();
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.max_population = 0;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.seed.max_age.min = 500;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.mutation.min_speed = 0.0;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.mutation.max_age_fallback.max = 5000;
    assert!(params.validate().is_err());
}
