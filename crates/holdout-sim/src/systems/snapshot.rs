//! Snapshot system: reads every subsystem and builds a GameStateSnapshot.
//!
//! This system is read-only; it never modifies simulation state.

use holdout_core::enums::GamePhase;
use holdout_core::events::GameEvent;
use holdout_core::state::*;
use holdout_core::types::SimTime;

use crate::systems::combat::CombatResolver;
use crate::systems::enemies::EnemyRoster;
use crate::systems::player::PlayerController;
use crate::systems::powerups::PowerupDirector;
use crate::systems::projectiles::ProjectileSimulator;
use crate::systems::wave_director::WaveDirector;
use crate::systems::weapon::Weapon;

/// Everything the snapshot reads, borrowed from the engine.
pub struct SnapshotSources<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub waves: &'a WaveDirector,
    pub player: &'a PlayerController,
    pub weapon: &'a Weapon,
    pub enemies: &'a EnemyRoster,
    pub projectiles: &'a ProjectileSimulator,
    pub powerups: &'a PowerupDirector,
    pub combat: &'a CombatResolver,
}

/// Build a complete GameStateSnapshot. Entity lists come out in slot order.
pub fn build_snapshot(src: SnapshotSources<'_>, events: Vec<GameEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *src.time,
        phase: src.phase,
        wave: build_wave(src.waves, src.enemies),
        player: build_player(src.player),
        weapon: build_weapon(src.weapon),
        enemies: build_enemies(src.enemies),
        projectiles: build_projectiles(src.projectiles),
        pickups: src.powerups.pickup_views(),
        effects: src.powerups.effect_views(),
        score: src.combat.view(),
        events,
    }
}

fn build_wave(waves: &WaveDirector, enemies: &EnemyRoster) -> WaveView {
    WaveView {
        number: waves.wave(),
        phase: waves.phase(),
        queued: waves.queued() as u32,
        live_enemies: enemies.live_count() as u32,
        total_this_wave: waves.total_this_wave(),
        killed_this_wave: waves.killed_this_wave(),
        subtext: waves.subtext().to_string(),
    }
}

fn build_player(player: &PlayerController) -> PlayerView {
    PlayerView {
        position: player.position,
        velocity: player.velocity,
        yaw: player.yaw,
        pitch: player.pitch,
        health: player.health,
        max_health: player.max_health,
        shield: player.shield,
        max_shield: player.max_shield,
        speed_multiplier: player.speed_multiplier,
        alive: player.alive,
    }
}

fn build_weapon(weapon: &Weapon) -> WeaponView {
    WeaponView {
        kind: weapon.kind(),
        ammo: weapon.ammo(),
        magazine_size: weapon.magazine_size(),
        reloading: weapon.is_reloading(),
        reload_progress: weapon.reload_progress(),
        damage_multiplier: weapon.damage_multiplier(),
        shots_fired: weapon.shots_fired(),
        shots_hit: weapon.shots_hit(),
        accuracy: weapon.accuracy(),
        upgrades: *weapon.upgrades(),
    }
}

fn build_enemies(enemies: &EnemyRoster) -> Vec<EnemyView> {
    enemies
        .iter()
        .map(|(handle, enemy)| EnemyView {
            slot: handle.index,
            kind: enemy.kind,
            phase: enemy.phase(),
            position: enemy.position,
            health: enemy.health,
            max_health: enemy.max_health,
            scale: enemy.scale(),
        })
        .collect()
}

fn build_projectiles(projectiles: &ProjectileSimulator) -> Vec<ProjectileView> {
    projectiles
        .iter()
        .map(|(handle, p)| ProjectileView {
            slot: handle.index,
            position: p.position,
            direction: p.direction,
            owner_is_player: p.owner_is_player,
        })
        .collect()
}
