//! Core types and definitions for the HOLDOUT combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! constants, enums, handles, commands, per-frame input, events, and
//! state snapshots. It contains no gameplay logic and no dependency on
//! rendering, audio, or UI collaborators.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
