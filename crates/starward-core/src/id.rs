//! Entity identity and the id-minting capability.
//!
//! Ids are opaque strings minted by an injected [`IdSource`], never by a
//! global generator. The engine only relies on ids being unique within a
//! snapshot and totally ordered; it never parses them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier for a ship, enemy, or projectile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capability for minting unique entity ids.
///
/// Injected into the initializer and the step function so the engine stays
/// free of ambient state. Two sources yielding the same id sequence must
/// produce identical matches.
pub trait IdSource {
    fn next_id(&mut self) -> EntityId;
}

/// Deterministic counter-backed source. Ids are zero-padded so their
/// lexicographic order equals mint order.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdSource {
    next: u64,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> EntityId {
        let id = EntityId::new(format!("{:08}", self.next));
        self.next += 1;
        id
    }
}
