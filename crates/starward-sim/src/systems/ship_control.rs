//! Ship movement and firing.

use glam::Vec2;

use starward_core::config::Playfield;
use starward_core::constants::*;
use starward_core::entities::Projectile;
use starward_core::enums::ProjectileSource;
use starward_core::events::MatchEvent;
use starward_core::id::IdSource;
use starward_core::input::InputIntent;
use starward_core::state::WorldSnapshot;

/// Apply the player's intent: horizontal movement clamped to the
/// playfield, then cooldown-gated firing from the muzzle.
pub fn run(
    world: &mut WorldSnapshot,
    input: &InputIntent,
    delta: f32,
    field: Playfield,
    ids: &mut dyn IdSource,
) {
    let ship = &mut world.ship;

    ship.pos.x += input.move_axis.sign() * SHIP_SPEED * delta;
    ship.pos.x = ship.pos.x.clamp(0.0, field.width - ship.size.x);

    if input.firing && ship.fire_cooldown <= 0.0 {
        let id = ids.next_id();
        let projectile = Projectile {
            id: id.clone(),
            pos: ship.muzzle(),
            radius: PROJECTILE_RADIUS,
            velocity: Vec2::new(0.0, -SHIP_PROJECTILE_SPEED),
            source: ProjectileSource::Ship,
            fired_by: ship.id.clone(),
        };
        ship.fire_cooldown = SHIP_FIRE_INTERVAL_SECS;
        world.projectiles.push(projectile);
        world
            .events
            .push(MatchEvent::ShipFired { projectile_id: id });
    } else {
        ship.fire_cooldown = (ship.fire_cooldown - delta).max(0.0);
    }
}
