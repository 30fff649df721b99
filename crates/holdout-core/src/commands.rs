//! Discrete player commands sent from the input/UI layer to the simulation.
//!
//! Commands are queued and processed at the start of the next tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::ShopResult;

/// All discrete player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// Reset every subsystem and start wave 1.
    StartGame,
    Pause,
    Resume,
    /// Abandon the session and clear the arena.
    ReturnToMenu,

    // --- Weapon ---
    Reload,
    SwitchWeapon { kind: WeaponKind },

    // --- Waves / shop ---
    /// Begin the next wave. Only honored at a wave boundary.
    StartNextWave,
    /// Apply a finished shop visit. Held until the next wave boundary.
    ApplyShopResult { result: ShopResult },
}
