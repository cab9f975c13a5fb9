//! Collision resolution — ship projectiles vs enemies, enemy projectiles
//! vs the ship.
//!
//! Both passes gather hits first and apply removals afterward, walking
//! projectiles and enemies in ascending id order. That fixed order is the
//! tie-break for simultaneous hits: the first projectile to claim an
//! enemy kills it, later overlaps with the same enemy are skipped, so a
//! double hit scores once.

use starward_core::constants::{KILL_SCORE, PROJECTILE_DAMAGE};
use starward_core::enums::ProjectileSource;
use starward_core::events::MatchEvent;
use starward_core::id::EntityId;
use starward_core::state::WorldSnapshot;

pub fn run(world: &mut WorldSnapshot) {
    // (enemy, attribution) per kill, in resolution order.
    let mut kills: Vec<(EntityId, EntityId)> = Vec::new();
    let mut spent_projectiles: Vec<EntityId> = Vec::new();

    for projectile in &world.projectiles {
        if projectile.source != ProjectileSource::Ship {
            continue;
        }
        let bb = projectile.aabb();
        for enemy in &world.enemies {
            if kills.iter().any(|(dead, _)| *dead == enemy.id) {
                continue;
            }
            if bb.overlaps(&enemy.aabb()) {
                kills.push((enemy.id.clone(), projectile.fired_by.clone()));
                spent_projectiles.push(projectile.id.clone());
                break; // one kill per projectile
            }
        }
    }

    let ship_bb = world.ship.aabb();
    let mut ship_hits = 0u32;
    for projectile in &world.projectiles {
        if projectile.source != ProjectileSource::Enemy {
            continue;
        }
        if projectile.aabb().overlaps(&ship_bb) {
            spent_projectiles.push(projectile.id.clone());
            ship_hits += 1;
        }
    }

    if kills.is_empty() && ship_hits == 0 {
        return;
    }

    world
        .enemies
        .retain(|e| !kills.iter().any(|(dead, _)| *dead == e.id));
    world.projectiles.retain(|p| !spent_projectiles.contains(&p.id));

    world.score += KILL_SCORE * kills.len() as u32;
    for (enemy_id, attributed_to) in kills {
        world.events.push(MatchEvent::EnemyDestroyed {
            enemy_id,
            attributed_to,
        });
    }

    for _ in 0..ship_hits {
        world.ship.health = world.ship.health.saturating_sub(PROJECTILE_DAMAGE);
        world.events.push(MatchEvent::ShipHit {
            remaining_health: world.ship.health,
        });
    }
}
