//! Cleanup system: removes projectiles that left the playfield.

use starward_core::config::Playfield;
use starward_core::state::WorldSnapshot;

/// Drop any projectile whose position has exited the playfield extents,
/// on the same step it exits. Enemies are never bounds-culled: the
/// exit-win rule needs to observe survivors below the bottom edge.
pub fn run(world: &mut WorldSnapshot, field: Playfield) {
    world.projectiles.retain(|p| {
        p.pos.x >= 0.0 && p.pos.x <= field.width && p.pos.y >= 0.0 && p.pos.y <= field.height
    });
}
