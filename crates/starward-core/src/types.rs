//! Fundamental geometric and simulation types.
//!
//! Coordinates are screen-space pixels: x = right, y = down, origin at the
//! top-left of the playfield. Entity positions are the top-left corner of
//! their bounding box; projectile positions are their center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner.
    pub min: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// True iff the two boxes intersect with non-zero area.
    /// Touching edges do not count as overlap, so adjacent formation
    /// slots never collide spuriously.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.right()
            && other.min.x < self.right()
            && self.min.y < other.bottom()
            && other.min.y < self.bottom()
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed steps.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one step of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
