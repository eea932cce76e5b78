use num_traits::{Float, Num, Signed};
use serde::{Deserialize, Serialize};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).hypot(y1 - y2)
}


/// 2D Point
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight line distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }

    /// Axis aligned distance to another point
    pub fn manhattan(&self, other: &Point) -> f64 {
        manhattan_distance(self.x, self.y, other.x, other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
