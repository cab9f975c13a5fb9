//! Enemy motion: straight descent at kind-scaled, ramped speed.

use starward_core::config::LevelConfig;
use starward_core::state::WorldSnapshot;

use crate::policy;

/// Advance every enemy downward. `elapsed_secs` is the match time sampled
/// at step entry, so the whole formation shares one difficulty scale.
pub fn run(world: &mut WorldSnapshot, delta: f32, config: &LevelConfig, elapsed_secs: f32) {
    for enemy in &mut world.enemies {
        let speed = policy::descent_speed(enemy.kind, config, elapsed_secs);
        enemy.pos.y += speed * delta;
    }
}
