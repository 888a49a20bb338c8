//! Food items that organisms forage for.
//!
//! Food is static and single-use: once an organism marks it eaten it is
//! ignored by targeting and pruned when the tick commits.

use geo::Point;
use serde::{Deserialize, Serialize};

use super::geometric_utils::Bounds;
use super::locatable::Locatable;
use super::sampler::{FloatRange, TraitSampler};

/// Stable identifier of a food item, unique within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FoodId(pub u64);

impl FoodId {
    /// Takes the next identifier from `counter`.
    pub(crate) fn allocate(counter: &mut u64) -> Self {
        let id = Self(*counter);
        *counter += 1;
        id
    }
}

/// A food item that organisms can consume.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    /// Identifier used by organisms to refer to this item.
    pub id: FoodId,
    /// Center of the food box.
    pub pos: Point<f32>,
    /// Width of the food box.
    pub width: f32,
    /// Height of the food box.
    pub height: f32,
    /// Set once an organism has consumed the item.
    pub eaten: bool,
}

impl Food {
    /// Creates an uneaten food item of the given size at `pos`.
    pub fn new(id: FoodId, pos: Point<f32>, width: f32, height: f32) -> Self {
        Self {
            id,
            pos,
            width,
            height,
            eaten: false,
        }
    }

    /// Creates a food item with a sampled box size at a random point inside
    /// `spawn_bounds`.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier for the new item
    /// * `sampler` - Random source
    /// * `size_range` - Range the width and height are drawn from
    /// * `spawn_bounds` - Area the center is placed in
    pub fn new_random(
        id: FoodId,
        sampler: &mut TraitSampler,
        size_range: FloatRange,
        spawn_bounds: &Bounds,
    ) -> Self {
        let width = sampler.uniform(size_range);
        let height = sampler.uniform(size_range);
        let pos = sampler.point_in(spawn_bounds);
        Self::new(id, pos, width, height)
    }

    /// Returns `true` while the item can still be targeted.
    pub fn is_available(&self) -> bool {
        !self.eaten
    }

    /// Marks this food as eaten. Calling it twice has no further effect.
    pub fn mark_eaten(&mut self) {
        self.eaten = true;
    }
}

impl Locatable for Food {
    fn pos(&self) -> Point<f32> {
        self.pos
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Finds the index of the food item with the given id.
///
/// `food` must be ordered by id, which holds for the ecosystem's live set
/// because ids are allocated in increasing order and pruning keeps order.
pub fn find_food(food: &[Food], id: FoodId) -> Option<usize> {
    food.binary_search_by_key(&id, |item| item.id).ok()
}
