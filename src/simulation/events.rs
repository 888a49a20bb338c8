//! Event system for committing population changes at the end of a tick.
//!
//! The organism pass never changes the shape of the live collections. Deaths,
//! births and meals are pushed to an [`EventQueue`] and applied in one go by
//! [`apply_events`], so every organism present at tick start is visited
//! exactly once and newborns only act from the next tick on.

use std::collections::HashSet;

use tracing::trace;

use super::food::{Food, FoodId, find_food};
use super::organism::{Organism, OrganismId};

/// Events that modify simulation state.
#[derive(Debug, Clone)]
pub enum SimulationEvent {
    /// An organism ate a food item.
    FoodConsumed {
        /// ID of the organism that ate.
        organism_id: OrganismId,
        /// ID of the eaten food.
        food_id: FoodId,
    },
    /// An organism outlived its lifespan and should be removed.
    OrganismDied {
        /// ID of the organism that died.
        organism_id: OrganismId,
        /// Age at death.
        age: u32,
    },
    /// An organism produced offspring.
    LitterBorn {
        /// ID of the parent.
        parent_id: OrganismId,
        /// The newborn organisms.
        offspring: Vec<Organism>,
    },
}

/// Queue for collecting simulation events during the organism pass.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<SimulationEvent>,
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been queued.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, SimulationEvent> {
        self.events.drain(..)
    }
}

/// Counts of what one commit changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventTally {
    /// Organisms added.
    pub births: usize,
    /// Organisms removed.
    pub deaths: usize,
    /// Food items eaten.
    pub meals: usize,
}

/// Applies all queued events to the live collections.
///
/// Removes dead organisms, appends newborns, prunes eaten food and clears any
/// target that no longer refers to a live food item.
pub fn apply_events(
    organisms: &mut Vec<Organism>,
    food: &mut Vec<Food>,
    mut queue: EventQueue,
) -> EventTally {
    let mut tally = EventTally::default();
    let mut dead: HashSet<OrganismId> = HashSet::new();
    let mut newborns: Vec<Organism> = Vec::new();

    for event in queue.drain() {
        match event {
            SimulationEvent::FoodConsumed {
                organism_id,
                food_id,
            } => {
                trace!(?organism_id, ?food_id, "food consumed");
                tally.meals += 1;
            }
            SimulationEvent::OrganismDied { organism_id, age } => {
                trace!(?organism_id, age, "organism died");
                if dead.insert(organism_id) {
                    tally.deaths += 1;
                }
            }
            SimulationEvent::LitterBorn {
                parent_id,
                offspring,
            } => {
                trace!(?parent_id, litter = offspring.len(), "litter born");
                tally.births += offspring.len();
                newborns.extend(offspring);
            }
        }
    }

    if !dead.is_empty() {
        organisms.retain(|organism| !dead.contains(&organism.id));
    }
    organisms.extend(newborns);

    food.retain(Food::is_available);

    for organism in organisms.iter_mut() {
        if let Some(target) = organism.target {
            if find_food(food, target).is_none() {
                organism.target = None;
            }
        }
    }

    tally
}
