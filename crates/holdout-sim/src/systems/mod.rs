//! Per-frame simulation systems.
//!
//! Each system owns its slice of state and exposes an update step. The
//! engine calls them in a fixed order once per frame and threads the
//! shared RNG and event buffer through them.

pub mod combat;
pub mod enemies;
pub mod player;
pub mod powerups;
pub mod projectiles;
pub mod snapshot;
pub mod wave_director;
pub mod weapon;
