//! Match initializer — builds the opening world snapshot.
//!
//! Pure: the same config, playfield, id sequence, and seed always produce
//! the same snapshot, which is what makes restart reproducible.

use glam::Vec2;

use starward_core::config::{LevelConfig, Playfield};
use starward_core::constants::*;
use starward_core::entities::{Enemy, Ship};
use starward_core::enums::EnemyKind;
use starward_core::id::IdSource;
use starward_core::state::WorldSnapshot;
use starward_core::types::SimTime;

use crate::policy;

/// Build the initial snapshot: ship centered near the bottom, enemy
/// formation at the top, no projectiles, zero score and elapsed time.
///
/// The ship's id is minted first, then one id per formation slot in
/// row-major order.
pub fn new_match(
    config: &LevelConfig,
    field: Playfield,
    ids: &mut dyn IdSource,
    rng_seed: u64,
) -> WorldSnapshot {
    assert!(
        config.initial_enemy_count >= 1,
        "a match needs at least one enemy; zero would be born already won"
    );

    let ship = Ship {
        id: ids.next_id(),
        pos: Vec2::new(
            (field.width - SHIP_SIZE.x) * 0.5,
            field.height - SHIP_BOTTOM_MARGIN - SHIP_SIZE.y,
        ),
        size: SHIP_SIZE,
        health: SHIP_MAX_HEALTH,
        sprite: None,
        fire_cooldown: 0.0,
    };

    let mut world = WorldSnapshot {
        time: SimTime::default(),
        ship,
        enemies: layout_formation(config, field, ids),
        projectiles: Vec::new(),
        score: 0,
        rng_seed,
        events: Vec::new(),
    };
    world.normalize_order();
    world
}

/// Lay out `initial_enemy_count` enemies in a row-major grid. Column count
/// derives from the playfield width; rows follow by ceiling division.
fn layout_formation(config: &LevelConfig, field: Playfield, ids: &mut dyn IdSource) -> Vec<Enemy> {
    let count = config.initial_enemy_count;
    let usable = (field.width - 2.0 * FORMATION_MARGIN).max(FORMATION_COL_SPACING);
    let cols = ((usable / FORMATION_COL_SPACING) as u32).clamp(1, count);

    let mut enemies = Vec::with_capacity(count as usize);
    for slot in 0..count {
        let row = slot / cols;
        let col = slot % cols;
        let kind = kind_for_row(row);

        enemies.push(Enemy {
            id: ids.next_id(),
            pos: Vec2::new(
                FORMATION_MARGIN + col as f32 * FORMATION_COL_SPACING,
                FORMATION_TOP_OFFSET + row as f32 * FORMATION_ROW_SPACING,
            ),
            size: policy::traits(kind).size,
            kind,
            sprite: None,
            // Column-based stagger keeps the opening volley from landing
            // all at once.
            fire_cooldown: config.enemy_fire_interval_secs
                * (1.0 + col as f32 * FORMATION_FIRE_STAGGER),
        });
    }
    enemies
}

/// Deterministic kind assignment by formation row.
fn kind_for_row(row: u32) -> EnemyKind {
    match row % 3 {
        0 => EnemyKind::Heavy,
        1 => EnemyKind::Basic,
        _ => EnemyKind::Fast,
    }
}
