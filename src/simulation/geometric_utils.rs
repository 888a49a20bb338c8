//! Geometric utility functions for distance calculations and spatial operations.

use geo::algorithm::Distance;
use geo::{Coord, Euclidean, Point, Rect};
use serde::{Deserialize, Serialize};

/// Axis-aligned area of the arena, used for spawn regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub min_x: f32,
    /// Top edge.
    pub min_y: f32,
    /// Right edge.
    pub max_x: f32,
    /// Bottom edge.
    pub max_y: f32,
}

impl Bounds {
    /// Creates bounds from two corners.
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns `true` if both axes are finite and non-inverted.
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Converts to a `geo` rectangle.
    pub fn to_rect(&self) -> Rect<f32> {
        Rect::new(
            Coord {
                x: self.min_x,
                y: self.min_y,
            },
            Coord {
                x: self.max_x,
                y: self.max_y,
            },
        )
    }
}

/// Builds the axis-aligned box of the given size centered on `center`.
pub fn centered_rect(center: Point<f32>, width: f32, height: f32) -> Rect<f32> {
    let half = Coord {
        x: width / 2.0,
        y: height / 2.0,
    };
    Rect::new(center.0 - half, center.0 + half)
}

/// Euclidean distance between two points.
pub fn distance(a: Point<f32>, b: Point<f32>) -> f32 {
    Euclidean.distance(a, b)
}

/// Moves `from` toward `to` by at most `max_step`.
///
/// Returns `None` when the points coincide, since there is no direction to
/// move in. The result never overshoots `to`.
pub fn step_toward(from: Point<f32>, to: Point<f32>, max_step: f32) -> Option<Point<f32>> {
    let d = distance(from, to);
    if d <= 0.0 {
        return None;
    }
    if max_step >= d {
        return Some(to);
    }
    let delta = to - from;
    Some(Point::new(
        from.x() + delta.x() / d * max_step,
        from.y() + delta.y() / d * max_step,
    ))
}
