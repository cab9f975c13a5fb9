//! Kinematic integration for projectiles.

use starward_core::state::WorldSnapshot;

/// Advance every projectile along its fixed velocity vector, including
/// ones spawned earlier in the same step.
pub fn run(world: &mut WorldSnapshot, delta: f32) {
    for projectile in &mut world.projectiles {
        projectile.pos += projectile.velocity * delta;
    }
}
