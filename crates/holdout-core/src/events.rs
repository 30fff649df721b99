//! Events emitted by the simulation for audio, VFX, and HUD collaborators.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// A notable thing that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile damaged an enemy without killing it.
    EnemyHit {
        slot: u32,
        kind: EnemyKind,
        position: Vec3,
        damage: f32,
    },
    /// A projectile killed an enemy.
    EnemyKilled {
        slot: u32,
        kind: EnemyKind,
        position: Vec3,
        score_delta: u64,
        combo: u32,
        multiplier: f32,
    },
    /// An enemy landed a melee hit.
    PlayerDamaged {
        amount: f32,
        shield: f32,
        health: f32,
    },
    PlayerDied,
    WavePhaseChanged {
        wave: u32,
        from: WavePhase,
        to: WavePhase,
    },
    WaveAnnounced { wave: u32, subtext: String },
    PickupSpawned {
        slot: u32,
        kind: PowerupKind,
        position: Vec3,
    },
    PickupCollected { kind: PowerupKind, label: String },
    /// A timed buff ran out.
    EffectExpired { kind: PowerupKind },
    ShotFired { weapon: WeaponKind, pellets: u32 },
    ReloadStarted { weapon: WeaponKind },
    ShopApplied { points_remaining: u64 },
}
