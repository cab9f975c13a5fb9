//! Per-kind behavior table and the time-difficulty ramp.
//!
//! Consolidates every tunable that distinguishes enemy kinds, so adding a
//! kind is a table row rather than new branching in the systems.

use glam::Vec2;

use starward_core::config::LevelConfig;
use starward_core::constants::ENEMY_SIZE;
use starward_core::enums::EnemyKind;

/// Behavioral traits for an enemy kind.
pub struct KindTraits {
    /// Multiplier on the level's base descent speed.
    pub speed_factor: f32,
    /// Multiplier on the level's base fire interval. Below 1.0 fires
    /// more often.
    pub fire_interval_factor: f32,
    /// Bounding box.
    pub size: Vec2,
}

/// Get the trait row for a kind. Factors are stable tuning values, not a
/// contract; the size differences are what give Heavy its larger
/// effective hit area.
pub fn traits(kind: EnemyKind) -> KindTraits {
    match kind {
        EnemyKind::Basic => KindTraits {
            speed_factor: 1.0,
            fire_interval_factor: 1.0,
            size: ENEMY_SIZE,
        },
        EnemyKind::Fast => KindTraits {
            speed_factor: 1.6,
            fire_interval_factor: 1.2,
            size: ENEMY_SIZE * 0.85,
        },
        EnemyKind::Heavy => KindTraits {
            speed_factor: 0.6,
            fire_interval_factor: 0.75,
            size: ENEMY_SIZE * 1.3,
        },
    }
}

/// Difficulty ramp: grows linearly with elapsed match time.
/// Pure, so replay from the same snapshot is exact.
pub fn difficulty_scale(acceleration: f32, elapsed_secs: f32) -> f32 {
    1.0 + acceleration * elapsed_secs
}

/// Descent speed for a kind at a point in the match.
pub fn descent_speed(kind: EnemyKind, config: &LevelConfig, elapsed_secs: f32) -> f32 {
    config.enemy_speed
        * traits(kind).speed_factor
        * difficulty_scale(config.time_acceleration, elapsed_secs)
}

/// Fire interval for a kind at a point in the match. The ramp divides, so
/// enemies shoot more often as the match drags on.
pub fn fire_interval(kind: EnemyKind, config: &LevelConfig, elapsed_secs: f32) -> f32 {
    config.enemy_fire_interval_secs * traits(kind).fire_interval_factor
        / difficulty_scale(config.time_acceleration, elapsed_secs)
}
