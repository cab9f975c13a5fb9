//! Level configuration and playfield extents.

use serde::{Deserialize, Serialize};

/// Static tunables for one match. Immutable once the match starts;
/// read-only input to the step function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Base enemy descent speed in pixels per second.
    pub enemy_speed: f32,
    /// Base seconds between shots for one enemy.
    pub enemy_fire_interval_secs: f32,
    /// Enemies laid out by the initializer.
    pub initial_enemy_count: u32,
    /// Per-second difficulty ramp factor. Scales enemy speed up and fire
    /// intervals down as elapsed time grows.
    pub time_acceleration: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            enemy_speed: 80.0,
            enemy_fire_interval_secs: 1.2,
            initial_enemy_count: 12,
            time_acceleration: 0.02,
        }
    }
}

/// Playfield extents in pixels. Supplied per call by the driver, which
/// owns the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}
