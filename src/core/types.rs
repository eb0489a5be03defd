use serde::{Deserialize, Serialize};

/// Plane coordinate, the universal output unit of all geometry components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Direction angle from `self` toward `other`, in radians.
    #[must_use]
    pub fn direction_to(self, other: Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
