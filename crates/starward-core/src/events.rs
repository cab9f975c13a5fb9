//! Events emitted by the simulation for renderer and audio feedback.
//!
//! Each snapshot carries the events produced by the step that built it.
//! The feed is cleared at the start of every step; the engine itself
//! never reads it back.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// The ship fired a projectile.
    ShipFired { projectile_id: EntityId },
    /// An enemy fired a projectile.
    EnemyFired {
        enemy_id: EntityId,
        projectile_id: EntityId,
    },
    /// An enemy was destroyed by a ship projectile.
    EnemyDestroyed {
        enemy_id: EntityId,
        /// Owner of the projectile that scored the kill.
        attributed_to: EntityId,
    },
    /// The ship took a hit.
    ShipHit { remaining_health: u32 },
}
