//! Simulation engine for Starward.
//!
//! All gameplay logic lives here and must stay pure and deterministic:
//! - Snapshot in, snapshot out; no hidden state between steps
//! - Seeded RNG only, derived from snapshot data
//! - Stable iteration order (ascending entity id)
//! - No rendering, timing, or platform dependencies

pub mod match_setup;
pub mod policy;
pub mod step;
pub mod systems;

pub use match_setup::new_match;
pub use starward_core as core;
pub use step::step;
