//! Enemy behavior for HOLDOUT.
//!
//! Implements the per-enemy state machine, archetype profiles, and the
//! `EnemyInstance` record the simulation pools and the combat resolver
//! mutates through its damage and melee entrypoints.

pub mod enemy;
pub mod fsm;
pub mod profiles;

pub use holdout_core as core;
