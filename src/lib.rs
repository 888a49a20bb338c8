//! # Foragers - Evolving Forager Simulation
//!
//! A population of box-shaped organisms forages for static food. Each
//! organism chases the nearest uneaten item, eats it on arrival, produces a
//! litter of mutated offspring once it has eaten enough, and dies of old age.
//!
//! ## Features
//!
//! - Nearest-food targeting with per-tick target revalidation
//! - Heritable traits (color, color mutation weights, speed, lifespan,
//!   litter size) with clamped random drift
//! - Deterministic tick protocol: births and deaths are committed after the
//!   organism pass, never during it
//! - Seeded randomness for reproducible runs
//! - Population statistics with a sampled history for charting
//! - Real-time visualization with macroquad
//!
//! ## Core Modules
//!
//! - [`simulation::organism`] - Organism behavior and state
//! - [`simulation::food`] - Food items
//! - [`simulation::ecosystem`] - Main simulation logic
//! - [`simulation::events`] - Deferred population changes
//! - [`simulation::params`] - Simulation parameters

/// Core simulation logic and data structures.
pub mod simulation {
    /// Main ecosystem simulation and tick protocol.
    pub mod ecosystem;
    /// Error type for configuration and export.
    pub mod error;
    /// Event system for committing births, deaths and meals.
    pub mod events;
    /// Food items that organisms can consume.
    pub mod food;
    /// Geometric utility functions for distance calculations.
    pub mod geometric_utils;
    /// Trait for entities with a position and a box footprint.
    ///
    /// The [`locatable::Locatable`] trait is implemented by every entity in
    /// the arena (Food, Organism) and backs the nearest-target search.
    pub mod locatable;
    /// Organism behavior, state, and lifecycle.
    pub mod organism;
    /// Simulation parameters.
    pub mod params;
    /// Random source and trait sampling.
    pub mod sampler;
    /// Population statistics.
    pub mod stats;
}
