//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Enemy archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Slow, fragile, arrives in numbers.
    #[default]
    Walker,
    /// Fast and aggressive, appears from wave 3.
    Runner,
    /// Heavy bruiser, appears from wave 5.
    Tank,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Walker, EnemyKind::Runner, EnemyKind::Tank];
}

/// Per-enemy behavior phase. The data-carrying state machine lives in
/// `holdout-ai`; this is the flat tag exposed in snapshots and events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyPhase {
    /// Scaling in at the spawn point. Takes damage but cannot move or melee.
    #[default]
    Spawning,
    /// Closing distance to the player.
    Approaching,
    /// Within melee range, swinging on cooldown.
    Attacking,
    /// Death animation running. Ignores all interaction.
    Dying,
}

/// Wave lifecycle phase. Transitions are strictly linear:
/// Idle → Announcing → Spawning → Active → Complete → Idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WavePhase {
    #[default]
    Idle,
    Announcing,
    Spawning,
    Active,
    Complete,
}

/// Collectible pickup type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Instant heal.
    #[default]
    Health,
    /// Timed movement speed boost.
    Speed,
    /// Timed weapon damage boost.
    Damage,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [PowerupKind::Health, PowerupKind::Speed, PowerupKind::Damage];

    /// Notification text shown when the pickup is collected.
    pub fn label(self) -> &'static str {
        match self {
            PowerupKind::Health => "+HEALTH",
            PowerupKind::Speed => "SPEED BOOST",
            PowerupKind::Damage => "2X DAMAGE",
        }
    }

    /// Effect duration in seconds, or `None` for instantaneous pickups.
    pub fn duration(self) -> Option<f32> {
        match self {
            PowerupKind::Health => None,
            PowerupKind::Speed => Some(SPEED_BOOST_DURATION),
            PowerupKind::Damage => Some(DAMAGE_BOOST_DURATION),
        }
    }

    /// Relative weight in the drop table.
    pub fn drop_weight(self) -> u32 {
        match self {
            PowerupKind::Health => DROP_WEIGHT_HEALTH,
            PowerupKind::Speed => DROP_WEIGHT_SPEED,
            PowerupKind::Damage => DROP_WEIGHT_DAMAGE,
        }
    }
}

/// Player weapon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Pistol,
    Shotgun,
    Smg,
    Sniper,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 4] = [
        WeaponKind::Pistol,
        WeaponKind::Shotgun,
        WeaponKind::Smg,
        WeaponKind::Sniper,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Pistol => "PISTOL",
            WeaponKind::Shotgun => "SHOTGUN",
            WeaponKind::Smg => "SMG",
            WeaponKind::Sniper => "SNIPER",
        }
    }
}

/// Stat upgrade sold in the between-wave shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    Damage,
    FireRate,
    MagSize,
    MaxHealth,
    ShieldRegen,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 5] = [
        UpgradeKind::Damage,
        UpgradeKind::FireRate,
        UpgradeKind::MagSize,
        UpgradeKind::MaxHealth,
        UpgradeKind::ShieldRegen,
    ];
}

/// Session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Playing,
    Paused,
    /// Between waves, waiting for `StartNextWave`.
    Intermission,
    GameOver,
}
