//! Trait for entities that occupy a box in the arena.
//!
//! Food and organisms are both drawn and collided as axis-aligned boxes
//! centered on their position.

use geo::{Point, Rect};

use super::geometric_utils::{centered_rect, distance};

/// Trait for entities with a position and a box-shaped footprint.
pub trait Locatable {
    /// Returns the center of the entity.
    fn pos(&self) -> Point<f32>;

    /// Returns the width and height of the entity's box.
    fn size(&self) -> (f32, f32);

    /// Returns the entity's box in arena coordinates.
    fn hitbox(&self) -> Rect<f32> {
        let (width, height) = self.size();
        centered_rect(self.pos(), width, height)
    }

    /// Returns the Euclidean distance between the centers of two entities.
    fn distance_to(&self, other: &dyn Locatable) -> f32 {
        distance(self.pos(), other.pos())
    }
}

/// Returns the candidate whose center is closest to `origin`.
///
/// On an exact distance tie the first candidate in iteration order wins.
pub fn nearest<'a, T, I>(origin: Point<f32>, candidates: I) -> Option<&'a T>
where
    T: Locatable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut best: Option<(&'a T, f32)> = None;
    for candidate in candidates {
        let d = distance(origin, candidate.pos());
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((candidate, d)),
        }
    }
    best.map(|(candidate, _)| candidate)
}
