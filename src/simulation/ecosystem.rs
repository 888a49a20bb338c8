//! Main ecosystem simulation.
//!
//! The ecosystem owns the live organisms and food and advances them one tick
//! at a time:
//! - Stochastic food spawning
//! - A single organism pass (death check, targeting, movement and eating,
//!   reproduction, ageing) that records structural changes as events
//! - A commit that removes the dead, appends newborns and prunes eaten food

use geo::Point;
use tracing::{debug, info};

use super::events::{self, EventQueue, SimulationEvent};
use super::food::{Food, FoodId};
use super::organism::{Organism, OrganismId, SpawnTraits, StepOutcome};
use super::params::Params;
use super::sampler::TraitSampler;
use super::stats::{TickSummary, TraitStats};

/// Description of one founder organism passed to [`Ecosystem::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeedOrganism {
    /// Initial center.
    pub pos: Point<f32>,
    /// RGB color.
    pub color: [u8; 3],
    /// Distance per tick.
    pub speed: f32,
    /// Explicit traits; missing ones are sampled.
    pub traits: SpawnTraits,
}

impl SeedOrganism {
    /// A founder with every optional trait sampled.
    pub fn new(pos: Point<f32>, color: [u8; 3], speed: f32) -> Self {
        Self {
            pos,
            color,
            speed,
            traits: SpawnTraits::default(),
        }
    }

    /// Replaces the optional traits.
    #[must_use]
    pub fn with_traits(mut self, traits: SpawnTraits) -> Self {
        self.traits = traits;
        self
    }
}

/// The main ecosystem containing all simulation state.
#[derive(Debug, Clone)]
pub struct Ecosystem {
    params: Params,
    organisms: Vec<Organism>,
    food: Vec<Food>,
    sampler: TraitSampler,
    tick: u64,
    next_organism_id: u64,
    next_food_id: u64,
}

impl Ecosystem {
    /// Creates a new ecosystem with the configured founders and food.
    pub fn new(params: Params) -> Self {
        Self::populated(params, TraitSampler::from_entropy())
    }

    /// Creates a reproducible ecosystem with the configured founders and food.
    pub fn with_seed(params: Params, seed: u64) -> Self {
        Self::populated(params, TraitSampler::from_seed(seed))
    }

    /// Creates a reproducible ecosystem with no organisms and no food.
    pub fn empty(params: Params, seed: u64) -> Self {
        Self {
            params,
            organisms: Vec::new(),
            food: Vec::new(),
            sampler: TraitSampler::from_seed(seed),
            tick: 0,
            next_organism_id: 0,
            next_food_id: 0,
        }
    }

    fn populated(params: Params, sampler: TraitSampler) -> Self {
        let mut ecosystem = Self {
            sampler,
            ..Self::empty(params, 0)
        };
        ecosystem.restart();
        ecosystem
    }

    /// Draws the configured founder population: one organism per seed color,
    /// at a random point of the seed area, with a random founder speed.
    pub fn seed_population(&mut self) -> Vec<SeedOrganism> {
        let seed = &self.params.seed;
        let bounds = self.params.arena.seed_bounds;
        seed.colors
            .iter()
            .map(|&color| {
                let pos = self.sampler.point_in(&bounds);
                let speed = self.sampler.uniform(seed.speed);
                SeedOrganism::new(pos, color, speed)
            })
            .collect()
    }

    /// Restarts the simulation from the configured founders and food count.
    pub fn restart(&mut self) {
        let seeds = self.seed_population();
        let food_count = self.params.food.initial_count;
        self.reset(&seeds, food_count);
    }

    /// Discards all state and starts over with the given founders and
    /// `food_count` randomly placed food items.
    pub fn reset(&mut self, seeds: &[SeedOrganism], food_count: usize) {
        self.organisms.clear();
        self.food.clear();
        self.tick = 0;
        self.next_organism_id = 0;
        self.next_food_id = 0;

        for seed in seeds {
            self.spawn_organism(seed.clone());
        }

        let size = self.params.food.initial_size;
        let bounds = self.params.arena.food_bounds;
        for _ in 0..food_count {
            let id = FoodId::allocate(&mut self.next_food_id);
            let item = Food::new_random(id, &mut self.sampler, size, &bounds);
            self.food.push(item);
        }

        info!(
            organisms = self.organisms.len(),
            food = self.food.len(),
            "ecosystem reset"
        );
    }

    /// Adds an organism to the live set. It takes part from the next tick on.
    pub fn spawn_organism(&mut self, seed: SeedOrganism) -> OrganismId {
        let id = OrganismId::allocate(&mut self.next_organism_id);
        let organism = Organism::spawn(
            id,
            seed.pos,
            seed.color,
            seed.speed,
            seed.traits,
            &mut self.sampler,
            &self.params,
        );
        self.organisms.push(organism);
        id
    }

    /// Places an uneaten food item of the given size at `pos`.
    pub fn place_food(&mut self, pos: Point<f32>, width: f32, height: f32) -> FoodId {
        let id = FoodId::allocate(&mut self.next_food_id);
        self.food.push(Food::new(id, pos, width, height));
        id
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) -> TickSummary {
        self.tick += 1;
        let was_alive = !self.organisms.is_empty();
        let food_spawned = self.spawn_food();

        let mut queue = EventQueue::new();
        let Self {
            params,
            organisms,
            food,
            sampler,
            next_organism_id,
            ..
        } = self;

        // births and deaths go to the queue; `live` tracks the committed size
        let mut live = organisms.len();
        for organism in organisms.iter_mut() {
            if organism.is_past_max_age() {
                queue.push(SimulationEvent::OrganismDied {
                    organism_id: organism.id,
                    age: organism.age,
                });
                live -= 1;
                continue;
            }

            if organism.target.is_none() {
                organism.select_target(food);
            }

            if organism.target.is_some() {
                if let StepOutcome::Ate(food_id) = organism.step(food, params.arena.arrival) {
                    queue.push(SimulationEvent::FoodConsumed {
                        organism_id: organism.id,
                        food_id,
                    });
                }
            }

            if organism.ready_to_reproduce() {
                let headroom = params.max_population.saturating_sub(live);
                let offspring = organism.reproduce(sampler, params, headroom, next_organism_id);
                organism.food_eaten = 0;
                live += offspring.len();
                if !offspring.is_empty() {
                    queue.push(SimulationEvent::LitterBorn {
                        parent_id: organism.id,
                        offspring,
                    });
                }
            }

            organism.grow_older();
            if organism.is_past_max_age() {
                queue.push(SimulationEvent::OrganismDied {
                    organism_id: organism.id,
                    age: organism.age,
                });
                live -= 1;
            }
        }

        let tally = events::apply_events(organisms, food, queue);
        debug_assert_eq!(live, organisms.len());

        let summary = TickSummary {
            tick: self.tick,
            organism_count: self.organisms.len(),
            food_count: self.food.len(),
            food_spawned,
            births: tally.births,
            deaths: tally.deaths,
            meals: tally.meals,
            extinct: self.organisms.is_empty(),
            stats: TraitStats::from_population(&self.organisms, self.params.color_baseline),
        };

        debug!(
            tick = summary.tick,
            organisms = summary.organism_count,
            food = summary.food_count,
            births = summary.births,
            deaths = summary.deaths,
            meals = summary.meals,
            "tick"
        );
        if was_alive && summary.extinct {
            info!(tick = summary.tick, "population went extinct");
        }

        summary
    }

    /// Runs the stochastic food spawn and returns how many items were placed.
    fn spawn_food(&mut self) -> usize {
        let food_params = &self.params.food;
        if !self.sampler.chance(food_params.spawn_probability) {
            return 0;
        }

        let count = self.sampler.int(food_params.batch_size).max(0) as usize;
        let size = food_params.size;
        let bounds = self.params.arena.food_bounds;
        for _ in 0..count {
            let id = FoodId::allocate(&mut self.next_food_id);
            let item = Food::new_random(id, &mut self.sampler, size, &bounds);
            self.food.push(item);
        }
        count
    }

    /// Live organisms, as of the most recent tick.
    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    /// Live food items in id order, as of the most recent tick.
    pub fn food(&self) -> &[Food] {
        &self.food
    }

    /// Looks up a live organism.
    pub fn organism(&self, id: OrganismId) -> Option<&Organism> {
        self.organisms.iter().find(|organism| organism.id == id)
    }

    /// Looks up a live food item.
    pub fn food_item(&self, id: FoodId) -> Option<&Food> {
        super::food::find_food(&self.food, id).map(|index| &self.food[index])
    }

    /// Simulation parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Ticks run since the last reset.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Returns `true` when no organism is left.
    pub fn is_extinct(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Trait statistics of the current population.
    pub fn stats(&self) -> Option<TraitStats> {
        TraitStats::from_population(&self.organisms, self.params.color_baseline)
    }
}
