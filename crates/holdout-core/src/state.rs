//! Game state snapshot: the complete visible state handed to presentation
//! collaborators after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{SimTime, UpgradeLevels};

/// Complete game state produced by every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub player: PlayerView,
    pub weapon: WeaponView,
    /// Sorted by pool slot.
    pub enemies: Vec<EnemyView>,
    /// Sorted by pool slot.
    pub projectiles: Vec<ProjectileView>,
    /// Sorted by pool slot.
    pub pickups: Vec<PickupView>,
    pub effects: Vec<EffectView>,
    pub score: ScoreView,
    /// Everything that happened during this tick, in order.
    pub events: Vec<GameEvent>,
}

/// Wave director status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub number: u32,
    pub phase: WavePhase,
    /// Enemies still waiting in the spawn queue.
    pub queued: u32,
    /// Enemies on the field that are not dying.
    pub live_enemies: u32,
    pub total_this_wave: u32,
    pub killed_this_wave: u32,
    pub subtext: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Eye position.
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
    pub max_health: f32,
    pub shield: f32,
    pub max_shield: f32,
    pub speed_multiplier: f32,
    pub alive: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub kind: WeaponKind,
    pub ammo: u32,
    pub magazine_size: u32,
    pub reloading: bool,
    /// 0.0 when idle, rising to 1.0 as the reload completes.
    pub reload_progress: f32,
    pub damage_multiplier: f32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    /// Percent.
    pub accuracy: f32,
    pub upgrades: UpgradeLevels,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub slot: u32,
    pub kind: EnemyKind,
    pub phase: EnemyPhase,
    pub position: Vec3,
    pub health: f32,
    pub max_health: f32,
    /// Render scale: grows 0→1 while spawning, shrinks while dying.
    pub scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub slot: u32,
    pub position: Vec3,
    pub direction: Vec3,
    pub owner_is_player: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub slot: u32,
    pub kind: PowerupKind,
    pub position: Vec3,
    pub age: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: PowerupKind,
    pub remaining: f32,
}

/// Scoring state for the HUD and the game-over screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub combo: u32,
    pub multiplier: f32,
    pub combo_timer: f32,
    pub total_kills: u32,
    pub highest_combo: u32,
}
