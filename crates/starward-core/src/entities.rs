//! Entity value records.
//!
//! Entities are plain data with no behavior beyond bounding-box accessors.
//! Game logic lives in the sim crate's systems, not here. Each snapshot
//! owns its entities outright; there are no shared references.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, ProjectileSource};
use crate::id::EntityId;
use crate::types::Aabb;

/// The player's ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: EntityId,
    /// Top-left corner of the bounding box.
    pub pos: Vec2,
    pub size: Vec2,
    /// Remaining hit points. Zero is terminal (match loss).
    pub health: u32,
    /// Visual asset reference, opaque to the engine.
    pub sprite: Option<String>,
    /// Seconds until the ship may fire again.
    pub fire_cooldown: f32,
}

impl Ship {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Muzzle position: top-center of the bounding box.
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x * 0.5, self.pos.y)
    }
}

/// A formation enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    /// Top-left corner of the bounding box.
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: EnemyKind,
    /// Visual asset reference, opaque to the engine.
    pub sprite: Option<String>,
    /// Seconds until this enemy is eligible to fire again.
    pub fire_cooldown: f32,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Where enemy shots emerge: bottom-center of the bounding box.
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x * 0.5, self.pos.y + self.size.y)
    }
}

/// A projectile in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    /// Center of the projectile.
    pub pos: Vec2,
    pub radius: f32,
    /// Fixed velocity vector in pixels per second.
    pub velocity: Vec2,
    pub source: ProjectileSource,
    /// Who fired it. Scoring attribution only; never affects lifecycle.
    pub fired_by: EntityId,
}

impl Projectile {
    /// Square bounding box around the center.
    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            self.pos - Vec2::splat(self.radius),
            Vec2::splat(self.radius * 2.0),
        )
    }
}
