//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Enemy variant. Behavior differences (descent speed, fire cadence,
/// hit-box size) live in the sim crate's policy table, so adding a kind
/// is a data change rather than new branching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline descender.
    #[default]
    Basic,
    /// Quicker, smaller hit box.
    Fast,
    /// Slow, large hit box, shoots more often.
    Heavy,
}

/// Who fired a projectile. Decides which collisions are valid:
/// ship projectiles only hit enemies, enemy projectiles only hit the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileSource {
    Ship,
    Enemy,
}

/// Why a match was won. Both triggers form one explicit rule, checked in
/// declaration order after collisions and cleanup each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCause {
    /// Every enemy was destroyed.
    FormationCleared,
    /// At least one enemy survived and all survivors crossed the bottom
    /// edge of the playfield.
    FormationExited,
}

impl fmt::Display for WinCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinCause::FormationCleared => write!(f, "all enemies destroyed"),
            WinCause::FormationExited => {
                write!(f, "the surviving enemies left the playfield")
            }
        }
    }
}

/// Why a match was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// Ship health reached zero.
    ShipDestroyed,
}

impl fmt::Display for LossCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossCause::ShipDestroyed => write!(f, "the ship was destroyed"),
        }
    }
}
