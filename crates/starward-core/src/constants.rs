//! Simulation constants and tuning parameters.
//!
//! Distances are pixels, durations seconds, speeds pixels per second.

use glam::Vec2;

// --- Ship ---

/// Horizontal ship speed.
pub const SHIP_SPEED: f32 = 240.0;

/// Ship bounding box.
pub const SHIP_SIZE: Vec2 = Vec2::new(48.0, 32.0);

/// Starting hit points.
pub const SHIP_MAX_HEALTH: u32 = 3;

/// Seconds between ship shots.
pub const SHIP_FIRE_INTERVAL_SECS: f32 = 0.35;

/// Gap between the bottom of the playfield and the bottom of the ship.
pub const SHIP_BOTTOM_MARGIN: f32 = 48.0;

// --- Projectiles ---

/// Radius of every projectile.
pub const PROJECTILE_RADIUS: f32 = 5.0;

/// Upward speed of ship projectiles.
pub const SHIP_PROJECTILE_SPEED: f32 = 250.0;

/// Downward speed of enemy projectiles.
pub const ENEMY_PROJECTILE_SPEED: f32 = 240.0;

/// Hit points removed from the ship per enemy projectile hit.
pub const PROJECTILE_DAMAGE: u32 = 1;

// --- Scoring ---

/// Score awarded per destroyed enemy.
pub const KILL_SCORE: u32 = 10;

// --- Enemy formation ---

/// Baseline enemy bounding box; per-kind sizes scale from this.
pub const ENEMY_SIZE: Vec2 = Vec2::new(40.0, 32.0);

/// Horizontal gap between the playfield edge and the first column.
pub const FORMATION_MARGIN: f32 = 40.0;

/// Horizontal distance between formation columns.
pub const FORMATION_COL_SPACING: f32 = 56.0;

/// Vertical distance between formation rows.
pub const FORMATION_ROW_SPACING: f32 = 44.0;

/// Distance from the top of the playfield to the first row.
pub const FORMATION_TOP_OFFSET: f32 = 40.0;

/// Per-column initial fire-cooldown stagger so the formation's opening
/// volley does not land all at once.
pub const FORMATION_FIRE_STAGGER: f32 = 0.25;

// --- Enemy firing ---

/// Chance an enemy with an expired cooldown fires on a given step.
/// Failed rolls retry the next step.
pub const ENEMY_FIRE_CHANCE: f64 = 0.6;
