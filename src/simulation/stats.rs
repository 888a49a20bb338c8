//! Population statistics and their sampled history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::organism::Organism;

/// Aggregate trait statistics over a non-empty population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitStats {
    /// Number of organisms the averages were taken over.
    pub population: usize,
    /// Mean generation.
    pub avg_generation: f64,
    /// Highest generation alive.
    pub highest_generation: u32,
    /// Mean over organisms of the summed per-channel distance from the
    /// baseline color value.
    pub avg_color_deviation: f64,
    /// Mean speed.
    pub avg_speed: f64,
    /// Mean lifespan.
    pub avg_max_age: f64,
    /// Mean litter size.
    pub avg_litter_size: f64,
}

impl TraitStats {
    /// Computes statistics for `organisms`.
    ///
    /// Returns `None` for an empty population, so callers never divide by zero.
    pub fn from_population(organisms: &[Organism], color_baseline: u8) -> Option<Self> {
        if organisms.is_empty() {
            return None;
        }

        let n = organisms.len() as f64;
        let baseline = i32::from(color_baseline);
        let mut generation_sum = 0.0;
        let mut highest_generation: u32 = 0;
        let mut deviation_sum = 0.0;
        let mut speed_sum = 0.0;
        let mut max_age_sum = 0.0;
        let mut litter_sum = 0.0;

        for organism in organisms {
            let traits = &organism.traits;
            generation_sum += f64::from(traits.generation);
            highest_generation = highest_generation.max(traits.generation);
            deviation_sum += traits
                .color
                .iter()
                .map(|&c| f64::from((i32::from(c) - baseline).abs()))
                .sum::<f64>();
            speed_sum += f64::from(traits.speed);
            max_age_sum += f64::from(traits.max_age);
            litter_sum += f64::from(traits.litter_size);
        }

        Some(Self {
            population: organisms.len(),
            avg_generation: generation_sum / n,
            highest_generation,
            avg_color_deviation: deviation_sum / n,
            avg_speed: speed_sum / n,
            avg_max_age: max_age_sum / n,
            avg_litter_size: litter_sum / n,
        })
    }
}

/// What one call to [`Ecosystem::tick`](super::ecosystem::Ecosystem::tick) did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSummary {
    /// Number of ticks run since the last reset, including this one.
    pub tick: u64,
    /// Live organisms after the tick.
    pub organism_count: usize,
    /// Live food items after the tick.
    pub food_count: usize,
    /// Food items placed by this tick's spawn event.
    pub food_spawned: usize,
    /// Organisms born this tick.
    pub births: usize,
    /// Organisms that died this tick.
    pub deaths: usize,
    /// Food items eaten this tick.
    pub meals: usize,
    /// `true` once no organism is left.
    pub extinct: bool,
    /// Trait averages, absent when the population is empty.
    pub stats: Option<TraitStats>,
}

/// Bounded history of tick summaries, sampled at a fixed tick interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsHistory {
    samples: VecDeque<TickSummary>,
    interval: u64,
    max_samples: usize,
}

impl StatsHistory {
    /// Creates an empty history that keeps every `interval`-th tick.
    pub fn new(interval: u64, max_samples: usize) -> Self {
        Self {
            samples: VecDeque::new(),
            interval: interval.max(1),
            max_samples,
        }
    }

    /// Records `summary` if its tick falls on the sampling interval.
    ///
    /// Returns `true` if the sample was kept. The oldest sample is dropped
    /// once the history is full.
    pub fn record(&mut self, summary: &TickSummary) -> bool {
        if summary.tick % self.interval != 0 || self.max_samples == 0 {
            return false;
        }
        self.samples.push_back(summary.clone());
        while self.samples.len() > self.max_samples {
            self.samples.pop_front();
        }
        true
    }

    /// Recorded samples, oldest first.
    pub fn samples(&self) -> &VecDeque<TickSummary> {
        &self.samples
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Clears all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Saves the samples to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.samples)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
