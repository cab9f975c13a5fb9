//! Core types and definitions for the Starward simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entities, enums, level configuration, input intent, snapshots, events,
//! and constants. It has no dependency on any runtime framework and
//! performs no I/O.

pub mod config;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod id;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
