//! Handle, time, and progression types shared across crates.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_UPGRADE_LEVEL;
use crate::enums::{UpgradeKind, WeaponKind};

/// Generational reference to a pooled slot.
///
/// A handle stays valid until its slot is released. Once the slot is
/// reused the generation differs and lookups through the stale handle
/// return nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle {
    pub index: u32,
    pub generation: u32,
}

impl Handle {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames simulated while the world was running.
    pub frame: u64,
    /// Seconds of simulated time (sum of clamped frame deltas).
    pub elapsed_secs: f64,
}

impl SimTime {
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Purchased level of every shop upgrade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    pub damage: u32,
    pub fire_rate: u32,
    pub mag_size: u32,
    pub max_health: u32,
    pub shield_regen: u32,
}

impl UpgradeLevels {
    pub fn get(&self, kind: UpgradeKind) -> u32 {
        match kind {
            UpgradeKind::Damage => self.damage,
            UpgradeKind::FireRate => self.fire_rate,
            UpgradeKind::MagSize => self.mag_size,
            UpgradeKind::MaxHealth => self.max_health,
            UpgradeKind::ShieldRegen => self.shield_regen,
        }
    }

    /// Set a level, clamped to `MAX_UPGRADE_LEVEL`.
    pub fn set(&mut self, kind: UpgradeKind, level: u32) {
        let level = level.min(MAX_UPGRADE_LEVEL);
        match kind {
            UpgradeKind::Damage => self.damage = level,
            UpgradeKind::FireRate => self.fire_rate = level,
            UpgradeKind::MagSize => self.mag_size = level,
            UpgradeKind::MaxHealth => self.max_health = level,
            UpgradeKind::ShieldRegen => self.shield_regen = level,
        }
    }
}

/// Outcome of a shop visit, applied by the engine at the next wave boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopResult {
    pub levels: UpgradeLevels,
    pub selected_weapon: WeaponKind,
    pub points_remaining: u64,
}
