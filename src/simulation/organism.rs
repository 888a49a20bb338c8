//! Organism behavior, state, and lifecycle management.
//!
//! Organisms chase the nearest uneaten food, eat it, reproduce once they have
//! eaten enough, and die of old age. Offspring inherit the parent's traits
//! with clamped random drift.

use geo::{Contains, Intersects, Point};

use super::food::{Food, FoodId, find_food};
use super::geometric_utils::step_toward;
use super::locatable::{Locatable, nearest};
use super::params::{ArrivalRule, MutationParams, Params, SeedParams, ThresholdPolicy};
use super::sampler::TraitSampler;

/// Stable identifier of an organism, unique within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrganismId(pub u64);

impl OrganismId {
    /// Takes the next identifier from `counter`.
    pub(crate) fn allocate(counter: &mut u64) -> Self {
        let id = Self(*counter);
        *counter += 1;
        id
    }
}

/// Heritable traits, fixed for the lifetime of an organism.
#[derive(Debug, Clone, PartialEq)]
pub struct Traits {
    /// RGB color.
    pub color: [u8; 3],
    /// Per-channel spread of the color mutation applied to offspring.
    pub color_weights: [u8; 3],
    /// Distance covered per tick.
    pub speed: f32,
    /// Number of reproduction events in the organism's ancestry.
    pub generation: u32,
    /// Age in ticks past which the organism dies.
    pub max_age: u32,
    /// Meals needed to reproduce.
    pub reproduce_threshold: u32,
    /// Upper bound of offspring per reproduction event.
    pub litter_size: u32,
}

/// Optional traits for a new organism.
///
/// Every field left as `None` is drawn from the seed ranges when the organism
/// is spawned, independently for each organism.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnTraits {
    /// Defaults to 0.
    pub generation: Option<u32>,
    /// Per-channel color mutation weights.
    pub color_weights: Option<[u8; 3]>,
    /// Lifespan in ticks.
    pub max_age: Option<u32>,
    /// Meals needed to reproduce.
    pub reproduce_threshold: Option<u32>,
    /// Upper bound of offspring per reproduction event.
    pub litter_size: Option<u32>,
}

impl SpawnTraits {
    fn resolve(
        self,
        color: [u8; 3],
        speed: f32,
        sampler: &mut TraitSampler,
        seed: &SeedParams,
        mutation: &MutationParams,
    ) -> Traits {
        let color_weights = self.color_weights.unwrap_or_else(|| {
            [(); 3].map(|()| clamp_u8(sampler.int(seed.color_weights), mutation.max_color_weight))
        });
        let max_age = self
            .max_age
            .unwrap_or_else(|| clamp_u32(sampler.int(seed.max_age), 1, u32::MAX));
        let reproduce_threshold = self
            .reproduce_threshold
            .unwrap_or_else(|| clamp_u32(sampler.int(seed.reproduce_threshold), 1, u32::MAX));
        let litter_size = self.litter_size.unwrap_or_else(|| {
            clamp_u32(sampler.int(seed.litter_size), 0, mutation.max_litter_size)
        });

        Traits {
            color,
            color_weights: color_weights.map(|w| w.min(mutation.max_color_weight)),
            speed: speed.max(mutation.min_speed),
            generation: self.generation.unwrap_or(0),
            max_age: max_age.max(1),
            reproduce_threshold: reproduce_threshold.max(1),
            litter_size: litter_size.min(mutation.max_litter_size),
        }
    }
}

/// Result of one movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The target was eaten by someone else or removed; it has been cleared.
    TargetLost,
    /// The organism moved toward its target.
    Moved,
    /// The organism reached and ate its target.
    Ate(FoodId),
}

/// A simulated organism that forages for food.
#[derive(Debug, Clone, PartialEq)]
pub struct Organism {
    /// Unique identifier for this organism.
    pub id: OrganismId,
    /// Heritable traits.
    pub traits: Traits,
    /// Center of the organism's box.
    pub pos: Point<f32>,
    /// Box width.
    pub width: f32,
    /// Box height.
    pub height: f32,
    /// Ticks survived.
    pub age: u32,
    /// Meals since the last reproduction.
    pub food_eaten: u32,
    /// Food currently being chased. Only an identifier: it is revalidated
    /// against the live food set on every step.
    pub target: Option<FoodId>,
}

impl Organism {
    /// Creates a new organism.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `pos` - Initial center
    /// * `color` - RGB color
    /// * `speed` - Distance per tick, raised to the configured minimum if lower
    /// * `traits` - Explicit traits; missing ones are sampled fresh
    /// * `sampler` - Random source for the missing traits
    /// * `params` - Simulation parameters (box size, seed ranges, clamp bounds)
    pub fn spawn(
        id: OrganismId,
        pos: Point<f32>,
        color: [u8; 3],
        speed: f32,
        traits: SpawnTraits,
        sampler: &mut TraitSampler,
        params: &Params,
    ) -> Self {
        Self {
            id,
            traits: traits.resolve(color, speed, sampler, &params.seed, &params.mutation),
            pos,
            width: params.arena.organism_width,
            height: params.arena.organism_height,
            age: 0,
            food_eaten: 0,
            target: None,
        }
    }

    /// Points the organism at the nearest uneaten food item.
    ///
    /// Ties keep the first item in `food` order. With no uneaten food the
    /// target stays unset.
    pub fn select_target(&mut self, food: &[Food]) {
        self.target = nearest(self.pos, food.iter().filter(|item| item.is_available()))
            .map(|item| item.id);
    }

    /// Moves toward the current target and eats it on arrival.
    ///
    /// `food` must be ordered by id. A target that is missing or already eaten
    /// is cleared without moving.
    ///
    /// # Panics
    ///
    /// Panics if the organism has no target. Callers must run
    /// [`Organism::select_target`] first and only step when it found one.
    pub fn step(&mut self, food: &mut [Food], arrival: ArrivalRule) -> StepOutcome {
        let Some(target_id) = self.target else {
            panic!("organism {:?} stepped without a target", self.id);
        };

        let Some(index) = find_food(food, target_id).filter(|&i| food[i].is_available()) else {
            self.target = None;
            return StepOutcome::TargetLost;
        };

        if !self.has_reached(&food[index], arrival) {
            let target_pos = food[index].pos;
            if let Some(next) = step_toward(self.pos, target_pos, self.traits.speed) {
                self.pos = next;
                if next != target_pos && !self.has_reached(&food[index], arrival) {
                    return StepOutcome::Moved;
                }
            }
        }

        food[index].mark_eaten();
        self.target = None;
        self.food_eaten += 1;
        StepOutcome::Ate(target_id)
    }

    /// Returns `true` if the organism touches `food` under the given rule.
    pub fn has_reached(&self, food: &Food, arrival: ArrivalRule) -> bool {
        match arrival {
            ArrivalRule::ContainsPoint => self.hitbox().contains(&food.pos),
            ArrivalRule::OverlapsBox => self.hitbox().intersects(&food.hitbox()),
        }
    }

    /// Returns `true` once the organism has eaten enough to reproduce.
    pub fn ready_to_reproduce(&self) -> bool {
        self.food_eaten >= self.traits.reproduce_threshold
    }

    /// Returns `true` once the organism has outlived its lifespan.
    pub fn is_past_max_age(&self) -> bool {
        self.age > self.traits.max_age
    }

    /// Advances the organism's age by one tick.
    pub fn grow_older(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    /// Produces a litter of mutated offspring at the parent's position.
    ///
    /// The litter size is drawn from `[0, litter_size]` and truncated to
    /// `max_offspring`. The caller resets the parent's meal counter.
    ///
    /// # Arguments
    ///
    /// * `sampler` - Random source
    /// * `params` - Simulation parameters
    /// * `max_offspring` - Remaining room under the population cap
    /// * `next_id` - Organism id counter
    pub fn reproduce(
        &self,
        sampler: &mut TraitSampler,
        params: &Params,
        max_offspring: usize,
        next_id: &mut u64,
    ) -> Vec<Self> {
        let drawn = sampler.int_between(0, i64::from(self.traits.litter_size)) as usize;
        let count = drawn.min(max_offspring);

        (0..count)
            .map(|_| {
                let (color, speed, traits) = self.mutate(sampler, params);
                Self::spawn(
                    OrganismId::allocate(next_id),
                    self.pos,
                    color,
                    speed,
                    traits,
                    sampler,
                    params,
                )
            })
            .collect()
    }

    fn mutate(&self, sampler: &mut TraitSampler, params: &Params) -> ([u8; 3], f32, SpawnTraits) {
        let mutation = &params.mutation;
        let parent = &self.traits;

        let offsets = sampler.offsets(parent.color_weights);
        let mut color = parent.color;
        for (channel, offset) in color.iter_mut().zip(offsets) {
            *channel = clamp_u8(i64::from(*channel) + offset, u8::MAX);
        }

        let color_weights = parent.color_weights.map(|w| {
            let w = i64::from(w);
            clamp_u8(sampler.int_between(w - 1, w + 1).abs(), mutation.max_color_weight)
        });

        let litter = i64::from(parent.litter_size);
        let litter_size = clamp_u32(
            sampler.int_between(litter - 1, litter + 1).abs(),
            0,
            mutation.max_litter_size,
        );

        let speed = sampler
            .float_between(
                parent.speed - mutation.speed_delta,
                parent.speed + mutation.speed_delta,
            )
            .max(mutation.min_speed);

        let age = i64::from(parent.max_age);
        let mut max_age = sampler.int_between(age - mutation.age_delta, age + mutation.age_delta);
        if max_age >= i64::from(mutation.max_age_ceiling) {
            max_age = sampler.int(mutation.max_age_fallback);
        }

        let reproduce_threshold = match mutation.threshold_policy {
            ThresholdPolicy::Resample => None,
            ThresholdPolicy::Inherit => Some(parent.reproduce_threshold),
        };

        let traits = SpawnTraits {
            generation: Some(parent.generation.saturating_add(1)),
            color_weights: Some(color_weights),
            max_age: Some(clamp_u32(max_age, 1, u32::MAX)),
            reproduce_threshold,
            litter_size: Some(litter_size),
        };
        (color, speed, traits)
    }
}

impl Locatable for Organism {
    fn pos(&self) -> Point<f32> {
        self.pos
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

fn clamp_u8(value: i64, max: u8) -> u8 {
    value.clamp(0, i64::from(max)) as u8
}

fn clamp_u32(value: i64, min: u32, max: u32) -> u32 {
    value.clamp(i64::from(min), i64::from(max)) as u32
}
