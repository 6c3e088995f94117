use std::ops::{Add, Mul};

/// A surface position in render units (canvas-local physical pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Per-axis absolute offset to `other`. Touch slop is checked on each axis separately.
    pub fn abs_delta(self, other: Self) -> Self {
        Self::new((self.x - other.x).abs(), (self.y - other.y).abs())
    }

    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// Weighted sums of control points when sampling curves.
impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, weight: f32) -> Self {
        Self::new(self.x * weight, self.y * weight)
    }
}
