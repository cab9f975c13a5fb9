//! The simulation step — one deterministic advance of the world.
//!
//! The snapshot moves in by value and a successor moves out, so a caller
//! cannot keep mutating the state it handed over. Expected end-of-play is
//! a tagged [`StepOutcome`]; only contract violations panic.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starward_core::config::{LevelConfig, Playfield};
use starward_core::enums::LossCause;
use starward_core::id::IdSource;
use starward_core::input::InputIntent;
use starward_core::state::{StepOutcome, WorldSnapshot};

use crate::systems;

/// Advance the world by `delta` seconds.
///
/// Contract: `delta` is strictly positive and finite, and `world` is a
/// live match (not one a previous step already concluded). Violations
/// panic rather than being clamped, since a silent fixup would corrupt
/// replay determinism.
pub fn step(
    mut world: WorldSnapshot,
    input: &InputIntent,
    delta: f32,
    config: &LevelConfig,
    field: Playfield,
    ids: &mut dyn IdSource,
) -> StepOutcome {
    assert!(
        delta > 0.0 && delta.is_finite(),
        "step delta must be strictly positive and finite, got {delta}"
    );
    assert!(
        world.ship.health > 0,
        "step called on a snapshot from a lost match"
    );
    assert!(
        world.win_cause(field).is_none(),
        "step called on a snapshot from a won match"
    );

    world.events.clear();

    // Every system in this step sees one difficulty scale, sampled at entry.
    let elapsed_secs = world.time.elapsed_secs;
    let mut rng = step_rng(world.rng_seed, world.time.tick);

    // Sub-step order is part of the determinism contract.
    // 1-2. Ship movement and firing
    systems::ship_control::run(&mut world, input, delta, field, ids);
    // 3. Enemy movement
    systems::enemy_motion::run(&mut world, delta, config, elapsed_secs);
    // 4. Enemy firing
    systems::enemy_fire::run(&mut world, delta, config, elapsed_secs, ids, &mut rng);

    // Spawning is done for this step; re-sort so collision resolution
    // walks both collections in ascending id order.
    world.normalize_order();

    // 5. Projectile movement
    systems::projectile_motion::run(&mut world, delta);
    // 6. Collision resolution
    systems::collision::run(&mut world);
    // 7. Out-of-bounds cleanup
    systems::cleanup::run(&mut world, field);

    world.time.advance(delta);

    // 8. Terminal checks on post-step state. Loss takes precedence when the
    // ship and the last enemy die on the same step.
    if world.ship.health == 0 {
        let cause = LossCause::ShipDestroyed;
        log::info!(
            "match lost after {:.1}s ({cause}), score {}",
            world.time.elapsed_secs,
            world.score
        );
        return StepOutcome::Loss { cause, world };
    }
    if let Some(cause) = world.win_cause(field) {
        log::info!(
            "match won after {:.1}s ({cause}), score {}",
            world.time.elapsed_secs,
            world.score
        );
        return StepOutcome::Win { cause, world };
    }

    StepOutcome::Continue(world)
}

/// Per-step RNG: the match seed selects the keystream family, the tick
/// selects the stream, so replaying a snapshot reproduces the same rolls
/// without storing RNG state in the snapshot.
fn step_rng(seed: u64, tick: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(tick);
    rng
}
