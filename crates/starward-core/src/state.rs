//! World snapshot — the complete game state between two steps — and the
//! tagged result of advancing it.

use serde::{Deserialize, Serialize};

use crate::config::Playfield;
use crate::entities::{Enemy, Projectile, Ship};
use crate::enums::{LossCause, WinCause};
use crate::events::MatchEvent;
use crate::types::SimTime;

/// Immutable aggregate of the entire game world at one instant.
///
/// The step function consumes a snapshot by value and returns a fresh
/// successor; no entity is ever shared between two snapshots. Enemy and
/// projectile collections are kept sorted by ascending id so iteration
/// order is stable regardless of insertion history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub ship: Ship,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    /// Match RNG seed. Combined with the tick counter to derive the
    /// per-step RNG stream, keeping the snapshot plain serializable data.
    pub rng_seed: u64,
    /// Events produced by the step that built this snapshot.
    pub events: Vec<MatchEvent>,
}

impl WorldSnapshot {
    /// The single victory rule, evaluated on post-step state.
    ///
    /// Triggers, in order: the formation was cleared (no enemies left), or
    /// at least one enemy remains and every survivor's top edge is past
    /// the bottom of the playfield.
    pub fn win_cause(&self, field: Playfield) -> Option<WinCause> {
        if self.enemies.is_empty() {
            return Some(WinCause::FormationCleared);
        }
        if self.enemies.iter().all(|e| e.pos.y > field.height) {
            return Some(WinCause::FormationExited);
        }
        None
    }

    /// Data the driver needs to build a persisted score record.
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            score: self.score,
            duration_secs: self.time.elapsed_secs,
            enemies_remaining: self.enemies.len() as u32,
            ship_health: self.ship.health,
        }
    }

    /// Restore the sorted-by-id invariant after spawns.
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by(|a, b| a.id.cmp(&b.id));
        self.projectiles.sort_by(|a, b| a.id.cmp(&b.id));
        debug_assert!(
            self.enemies.windows(2).all(|w| w[0].id != w[1].id)
                && self.projectiles.windows(2).all(|w| w[0].id != w[1].id),
            "duplicate entity id in snapshot"
        );
    }
}

/// Result of one step. Callers branch on this instead of catching an
/// exception; `Win` and `Loss` carry the final snapshot for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// Match continues; feed this snapshot into the next step.
    Continue(WorldSnapshot),
    /// Match won. Expected end of play, not an error.
    Win {
        cause: WinCause,
        world: WorldSnapshot,
    },
    /// Match lost. Expected end of play, not an error.
    Loss {
        cause: LossCause,
        world: WorldSnapshot,
    },
}

impl StepOutcome {
    /// The snapshot carried by any variant.
    pub fn world(&self) -> &WorldSnapshot {
        match self {
            StepOutcome::Continue(world)
            | StepOutcome::Win { world, .. }
            | StepOutcome::Loss { world, .. } => world,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepOutcome::Continue(_))
    }
}

/// Final-match digest handed to the persistence collaborator. The
/// persisted record shape (player name, timestamp, ...) is owned by the
/// driver, not the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub score: u32,
    pub duration_secs: f32,
    pub enemies_remaining: u32,
    pub ship_health: u32,
}
