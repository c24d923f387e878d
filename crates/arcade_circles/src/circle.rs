//! Circle geometry.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A circle on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Radius.
    pub radius: f64,
}

impl Circle {
    /// Creates a circle.
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// Distance between the two centers.
    pub fn distance_to(&self, other: &Circle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// True when the circles overlap or touch.
#[instrument]
pub fn intersects(a: &Circle, b: &Circle) -> bool {
    a.distance_to(b) <= a.radius + b.radius
}
