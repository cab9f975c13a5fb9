//! Enemy firing: cooldown expiry plus a seeded eligibility roll.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starward_core::config::LevelConfig;
use starward_core::constants::*;
use starward_core::entities::Projectile;
use starward_core::enums::ProjectileSource;
use starward_core::events::MatchEvent;
use starward_core::id::IdSource;
use starward_core::state::WorldSnapshot;

use crate::policy;

/// Fire enemy shots. Enemies are visited in ascending id order (snapshot
/// invariant), so the RNG consumption sequence is reproducible. An enemy
/// whose cooldown expired fires with [`ENEMY_FIRE_CHANCE`]; on a failed
/// roll it stays eligible and retries next step. Everyone else just
/// counts down.
pub fn run(
    world: &mut WorldSnapshot,
    delta: f32,
    config: &LevelConfig,
    elapsed_secs: f32,
    ids: &mut dyn IdSource,
    rng: &mut ChaCha8Rng,
) {
    // Spawns are buffered so the projectile list is untouched mid-pass.
    let mut spawned: Vec<Projectile> = Vec::new();

    for enemy in &mut world.enemies {
        if enemy.fire_cooldown <= 0.0 {
            if rng.gen_bool(ENEMY_FIRE_CHANCE) {
                let id = ids.next_id();
                spawned.push(Projectile {
                    id: id.clone(),
                    pos: enemy.muzzle(),
                    radius: PROJECTILE_RADIUS,
                    velocity: Vec2::new(0.0, ENEMY_PROJECTILE_SPEED),
                    source: ProjectileSource::Enemy,
                    fired_by: enemy.id.clone(),
                });
                enemy.fire_cooldown = policy::fire_interval(enemy.kind, config, elapsed_secs);
                world.events.push(MatchEvent::EnemyFired {
                    enemy_id: enemy.id.clone(),
                    projectile_id: id,
                });
            }
        } else {
            enemy.fire_cooldown = (enemy.fire_cooldown - delta).max(0.0);
        }
    }

    world.projectiles.extend(spawned);
}
