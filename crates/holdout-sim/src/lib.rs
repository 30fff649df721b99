//! Simulation engine for HOLDOUT.
//!
//! Owns the pooled entities and the per-frame systems, runs them in a
//! fixed order, and produces GameStateSnapshots for presentation layers.

pub mod engine;
pub mod pool;
pub mod systems;

pub use engine::{SimConfig, SimulationEngine};
pub use holdout_core as core;

#[cfg(test)]
mod tests;
