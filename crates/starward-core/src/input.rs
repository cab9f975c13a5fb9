//! Player input intent.
//!
//! The engine consumes a per-step intent produced by an external input
//! source; key repeat and debouncing live there, not here.

use serde::{Deserialize, Serialize};

/// Horizontal movement request. A closed enum so an out-of-range axis
/// cannot be expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveAxis {
    Left,
    #[default]
    Still,
    Right,
}

impl MoveAxis {
    /// Signed direction multiplier.
    pub fn sign(&self) -> f32 {
        match self {
            MoveAxis::Left => -1.0,
            MoveAxis::Still => 0.0,
            MoveAxis::Right => 1.0,
        }
    }
}

/// What the player is asking for this step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    pub move_axis: MoveAxis,
    pub firing: bool,
}
