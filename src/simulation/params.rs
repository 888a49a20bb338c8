use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::geometric_utils::Bounds;
use super::sampler::{FloatRange, IntRange};

/// How an organism decides it has reached its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrivalRule {
    /// The organism's box contains the food's center.
    ContainsPoint,
    /// The organism's box overlaps the food's box.
    OverlapsBox,
}

/// How offspring obtain their reproduction threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdPolicy {
    /// Draw a fresh value from the seed range.
    Resample,
    /// Copy the parent's threshold.
    Inherit,
}

/// Arena geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaParams {
    /// Arena width.
    pub width: f32,
    /// Arena height.
    pub height: f32,
    /// Area new food is placed in.
    pub food_bounds: Bounds,
    /// Area founder organisms are placed in.
    pub seed_bounds: Bounds,
    /// Organism box width.
    pub organism_width: f32,
    /// Organism box height.
    pub organism_height: f32,
    /// Rule used to decide that an organism reached its food.
    pub arrival: ArrivalRule,
}

/// Food supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodParams {
    /// Food items placed on reset.
    pub initial_count: usize,
    /// Box size range for food placed on reset.
    pub initial_size: FloatRange,
    /// Per-tick probability of a spawn event.
    pub spawn_probability: f64,
    /// Number of items placed by one spawn event.
    pub batch_size: IntRange,
    /// Box size range for spawned food.
    pub size: FloatRange,
}

/// Founder population and default trait ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedParams {
    /// One founder organism is created per color.
    pub colors: Vec<[u8; 3]>,
    /// Founder speed range.
    pub speed: FloatRange,
    /// Default per-channel color mutation weight range.
    pub color_weights: IntRange,
    /// Default lifespan range in ticks.
    pub max_age: IntRange,
    /// Default number of meals needed to reproduce.
    pub reproduce_threshold: IntRange,
    /// Default upper bound of offspring per reproduction.
    pub litter_size: IntRange,
}

/// Mutation magnitudes and clamp bounds applied on reproduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationParams {
    /// Offspring speed is drawn from `parent ± speed_delta`.
    pub speed_delta: f32,
    /// Lowest speed an offspring can end up with.
    pub min_speed: f32,
    /// Offspring lifespan is drawn from `parent ± age_delta`.
    pub age_delta: i64,
    /// Lifespans at or above this value are re-rolled.
    pub max_age_ceiling: u32,
    /// Range used to re-roll a lifespan that hit the ceiling.
    pub max_age_fallback: IntRange,
    /// Upper clamp for color mutation weights.
    pub max_color_weight: u8,
    /// Upper clamp for litter size.
    pub max_litter_size: u32,
    /// Source of the offspring's reproduction threshold.
    pub threshold_policy: ThresholdPolicy,
}

/// Simulation parameters that control ecosystem behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Arena geometry.
    pub arena: ArenaParams,
    /// Food supply.
    pub food: FoodParams,
    /// Founder population.
    pub seed: SeedParams,
    /// Reproduction mutation.
    pub mutation: MutationParams,
    /// Maximum organism population (hard cap).
    pub max_population: usize,
    /// Channel value the color deviation statistic is measured against.
    pub color_baseline: u8,
    /// Ticks between two recorded statistics samples.
    pub stats_interval: u64,
    /// Maximum number of statistics samples kept.
    pub max_stats_samples: usize,
    /// File the driver writes the statistics history to on exit.
    pub stats_path: Option<String>,
}

impl Default for Params {
    /// A single grey founder with fast, wide mutation.
    fn default() -> Self {
        Self {
            arena: ArenaParams {
                width: 900.0,
                height: 700.0,
                food_bounds: Bounds::new(50.0, 50.0, 850.0, 600.0),
                seed_bounds: Bounds::new(100.0, 100.0, 800.0, 650.0),
                organism_width: 20.0,
                organism_height: 20.0,
                arrival: ArrivalRule::ContainsPoint,
            },
            food: FoodParams {
                initial_count: 100,
                initial_size: FloatRange::new(20.0, 40.0),
                spawn_probability: 1.0 / 6.0,
                batch_size: IntRange::new(1, 4),
                size: FloatRange::new(10.0, 20.0),
            },
            seed: SeedParams {
                colors: vec![[128, 128, 128]],
                speed: FloatRange::new(3.5, 6.0),
                color_weights: IntRange::new(0, 5),
                max_age: IntRange::new(100, 400),
                reproduce_threshold: IntRange::new(2, 4),
                litter_size: IntRange::new(2, 4),
            },
            mutation: MutationParams {
                speed_delta: 7.0,
                min_speed: 0.1,
                age_delta: 100,
                max_age_ceiling: 1200,
                max_age_fallback: IntRange::new(200, 300),
                max_color_weight: 16,
                max_litter_size: 11,
                threshold_policy: ThresholdPolicy::Resample,
            },
            max_population: 10_000,
            color_baseline: 128,
            stats_interval: 100,
            max_stats_samples: 10_000,
            stats_path: None,
        }
    }
}

impl Params {
    /// Three primary-colored founders with the widest color weights.
    pub fn simple() -> Self {
        let mut params = Self::default();
        params.seed.colors = vec![[255, 0, 0], [0, 255, 0], [0, 0, 255]];
        params.seed.speed = FloatRange::new(1.0, 6.0);
        params.seed.color_weights = IntRange::new(0, 16);
        params
    }

    /// Slow drift: small speed and lifespan changes, sparse single food drops.
    pub fn low_mutation() -> Self {
        let mut params = Self::simple();
        params.arena.width = 1000.0;
        params.arena.food_bounds = Bounds::new(50.0, 50.0, 950.0, 650.0);
        params.arena.seed_bounds = Bounds::new(100.0, 100.0, 900.0, 650.0);
        params.arena.organism_width = 25.0;
        params.arena.organism_height = 25.0;
        params.arena.arrival = ArrivalRule::OverlapsBox;
        params.food.initial_count = 300;
        params.food.spawn_probability = 1.0 / 30.0;
        params.food.batch_size = IntRange::new(1, 1);
        params.food.size = FloatRange::new(20.0, 40.0);
        params.seed.speed = FloatRange::new(3.0, 4.0);
        params.seed.color_weights = IntRange::new(0, 0);
        params.seed.max_age = IntRange::new(300, 540);
        params.seed.reproduce_threshold = IntRange::new(3, 5);
        params.seed.litter_size = IntRange::new(1, 1);
        params.mutation.speed_delta = 0.1;
        params.mutation.age_delta = 2;
        params.mutation.max_litter_size = 1;
        params
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<()> {
        let arena = &self.arena;
        if !(arena.width > 0.0 && arena.height > 0.0) {
            return invalid("arena size must be positive");
        }
        if !arena.food_bounds.is_valid() || !arena.seed_bounds.is_valid() {
            return invalid("spawn bounds must be finite and non-inverted");
        }
        if !(arena.organism_width > 0.0 && arena.organism_height > 0.0) {
            return invalid("organism box size must be positive");
        }

        let food = &self.food;
        if !(0.0..=1.0).contains(&food.spawn_probability) {
            return invalid("food spawn probability must lie in [0, 1]");
        }
        if !food.batch_size.is_valid() || food.batch_size.min < 0 {
            return invalid("food batch size range must be non-negative and ordered");
        }
        for size in [food.size, food.initial_size] {
            if !size.is_valid() || size.min <= 0.0 {
                return invalid("food size range must be positive and ordered");
            }
        }

        let seed = &self.seed;
        if seed.colors.is_empty() {
            return invalid("at least one founder color is required");
        }
        if !seed.speed.is_valid() || seed.speed.min <= 0.0 {
            return invalid("founder speed range must be positive and ordered");
        }
        for (name, range, min) in [
            ("color weight", seed.color_weights, 0),
            ("max age", seed.max_age, 1),
            ("reproduce threshold", seed.reproduce_threshold, 1),
            ("litter size", seed.litter_size, 0),
        ] {
            if !range.is_valid() || range.min < min {
                return Err(Error::InvalidParams(format!(
                    "{name} range must be ordered with a minimum of at least {min}"
                )));
            }
        }

        let mutation = &self.mutation;
        if !(mutation.speed_delta >= 0.0 && mutation.min_speed > 0.0) {
            return invalid("speed mutation needs a non-negative delta and a positive floor");
        }
        if mutation.age_delta < 0 {
            return invalid("age delta must be non-negative");
        }
        if !mutation.max_age_fallback.is_valid()
            || mutation.max_age_fallback.min < 1
            || mutation.max_age_fallback.max >= i64::from(mutation.max_age_ceiling)
        {
            return invalid("max age fallback range must be positive and below the ceiling");
        }

        if self.max_population == 0 {
            return invalid("population cap must be at least 1");
        }
        if self.stats_interval == 0 {
            return invalid("stats interval must be at least 1");
        }
        Ok(())
    }

    /// Loads parameters from a JSON file and validates them.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Saves parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn invalid(reason: &str) -> Result<()> {
    Err(Error::InvalidParams(reason.to_string()))
}
