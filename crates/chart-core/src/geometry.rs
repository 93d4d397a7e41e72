// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for canvas pixel math.

/// Canvas coordinate; origin top-left, y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    pub fn offset(&self, dx: f64, dy: f64) -> Self { Self { x: self.x + dx, y: self.y + dy } }
}
