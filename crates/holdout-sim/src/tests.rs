//! Tests for the simulation engine: session flow, tick ordering, shop
//! application, and determinism.

use glam::{Vec2, Vec3};

use holdout_core::commands::PlayerCommand;
use holdout_core::constants::*;
use holdout_core::enums::*;
use holdout_core::events::GameEvent;
use holdout_core::input::FrameInput;
use holdout_core::state::GameStateSnapshot;
use holdout_core::types::{ShopResult, UpgradeLevels};

use crate::engine::{SimConfig, SimulationEngine};

const DT: f32 = 1.0 / 30.0;

fn started(seed: u64) -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartGame);
    engine
}

fn firing() -> FrameInput {
    FrameInput {
        fire: true,
        movement: Vec2::new(0.3, 0.0),
        look_delta: Vec2::new(0.02, 0.0),
        ..FrameInput::default()
    }
}

fn run_until(
    engine: &mut SimulationEngine,
    max_ticks: usize,
    mut done: impl FnMut(&GameStateSnapshot) -> bool,
) -> GameStateSnapshot {
    for _ in 0..max_ticks {
        let snap = engine.tick(&FrameInput::idle(), DT);
        if done(&snap) {
            return snap;
        }
    }
    panic!("condition not reached in {max_ticks} ticks");
}

fn kill_all(engine: &mut SimulationEngine) {
    for (_, enemy) in engine.enemies_mut().iter_mut() {
        enemy.take_damage(1.0e6);
    }
}

/// Kill everything as it spawns until the wave boundary is reached.
fn clear_wave(engine: &mut SimulationEngine) -> GameStateSnapshot {
    for _ in 0..2000 {
        kill_all(engine);
        let snap = engine.tick(&FrameInput::idle(), DT);
        if snap.phase == GamePhase::Intermission {
            return snap;
        }
    }
    panic!("wave never cleared");
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = started(12345);
    let mut engine_b = started(12345);

    for _ in 0..600 {
        let snap_a = engine_a.tick(&firing(), DT);
        let snap_b = engine_b.tick(&firing(), DT);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = started(111);
    let mut engine_b = started(222);

    let mut diverged = false;
    for _ in 0..300 {
        let snap_a = engine_a.tick(&FrameInput::idle(), DT);
        let snap_b = engine_b.tick(&FrameInput::idle(), DT);
        if serde_json::to_string(&snap_a).unwrap() != serde_json::to_string(&snap_b).unwrap() {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce different spawns");
}

// ---- Session flow ----

#[test]
fn test_no_simulation_before_start() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = engine.tick(&firing(), DT);
    assert_eq!(snap.phase, GamePhase::MainMenu);
    assert_eq!(snap.time.frame, 0);
    assert!(snap.projectiles.is_empty());
}

#[test]
fn test_start_game_announces_wave_one() {
    let mut engine = started(1);
    let snap = engine.tick(&FrameInput::idle(), DT);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.wave.number, 1);
    assert_eq!(snap.wave.phase, WavePhase::Announcing);
    assert_eq!(snap.wave.subtext, "Walkers approaching");
    assert!(snap.events.iter().any(|e| matches!(
        e,
        GameEvent::WaveAnnounced { wave: 1, .. }
    )));
}

#[test]
fn test_dt_is_clamped() {
    let mut engine = started(1);
    let snap = engine.tick(&FrameInput::idle(), 1.0);
    assert!((snap.time.elapsed_secs - MAX_FRAME_DT as f64).abs() < 1e-6);
    let snap = engine.tick(&FrameInput::idle(), -1.0);
    assert!((snap.time.elapsed_secs - MAX_FRAME_DT as f64).abs() < 1e-6);
    let snap = engine.tick(&FrameInput::idle(), f32::NAN);
    assert_eq!(snap.time.frame, 3);
}

#[test]
fn test_invalid_frame_cap_falls_back() {
    let config: SimConfig = serde_json::from_str(r#"{"max_frame_dt": -1.0}"#).unwrap();
    let mut engine = SimulationEngine::new(config);
    assert_eq!(engine.config().max_frame_dt, MAX_FRAME_DT);
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick(&FrameInput::idle(), 0.016);
    assert!((snap.time.elapsed_secs - 0.016).abs() < 1e-6);

    let nan = SimulationEngine::new(SimConfig {
        max_frame_dt: f32::NAN,
        ..Default::default()
    });
    assert_eq!(nan.config().max_frame_dt, MAX_FRAME_DT);
}

#[test]
fn test_pause_freezes_world() {
    let mut engine = started(5);
    engine.tick(&FrameInput::idle(), DT);
    engine.queue_command(PlayerCommand::Pause);
    let paused = engine.tick(&firing(), DT);
    assert_eq!(paused.phase, GamePhase::Paused);
    let frame = paused.time.frame;

    for _ in 0..10 {
        let snap = engine.tick(&firing(), DT);
        assert_eq!(snap.time.frame, frame);
        assert!(snap.projectiles.is_empty());
    }

    engine.queue_command(PlayerCommand::Resume);
    let snap = engine.tick(&FrameInput::idle(), DT);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.time.frame, frame + 1);
}

#[test]
fn test_enemies_spawn_after_announcement() {
    let mut engine = started(9);
    let snap = run_until(&mut engine, 400, |s| !s.enemies.is_empty());
    assert!(snap.time.elapsed_secs >= WAVE_ANNOUNCE_DURATION as f64 - 1e-3);
    assert_eq!(snap.wave.phase, WavePhase::Spawning);
    assert_eq!(snap.enemies[0].phase, EnemyPhase::Spawning);
}

#[test]
fn test_snapshot_lists_sorted_by_slot() {
    let mut engine = started(3);
    for _ in 0..300 {
        let snap = engine.tick(&firing(), DT);
        assert!(snap.enemies.windows(2).all(|w| w[0].slot < w[1].slot));
        assert!(snap.projectiles.windows(2).all(|w| w[0].slot < w[1].slot));
    }
}

// ---- Weapon ----

#[test]
fn test_fire_spawns_projectiles_and_events() {
    let mut engine = started(4);
    let snap = engine.tick(&firing(), DT);
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(snap.weapon.ammo, 19);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ShotFired { pellets: 1, .. })));
}

#[test]
fn test_reload_command() {
    let mut engine = started(4);
    engine.tick(&firing(), DT);
    engine.queue_command(PlayerCommand::Reload);
    let snap = engine.tick(&FrameInput::idle(), DT);
    assert!(snap.weapon.reloading);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ReloadStarted { .. })));
}

#[test]
fn test_switch_weapon_command() {
    let mut engine = started(4);
    engine.queue_command(PlayerCommand::SwitchWeapon {
        kind: WeaponKind::Shotgun,
    });
    let snap = engine.tick(&firing(), DT);
    assert_eq!(snap.weapon.kind, WeaponKind::Shotgun);
    assert_eq!(snap.projectiles.len(), 6);
}

// ---- Tick ordering ----

#[test]
fn test_last_kill_completes_wave_same_frame() {
    let mut engine = started(21);
    run_until(&mut engine, 1000, |s| s.wave.phase == WavePhase::Active);

    // Leave exactly one live enemy and put a slow projectile on it.
    let handles: Vec<_> = engine.enemies().iter().map(|(h, _)| h).collect();
    let (last, rest) = handles.split_last().unwrap();
    for h in rest {
        engine.enemies_mut().get_mut(*h).unwrap().take_damage(1.0e6);
    }
    let target = engine.enemies().get(*last).unwrap().position;
    engine
        .projectiles_mut()
        .spawn(target, Vec3::Y, 0.01, 1.0e6, true)
        .unwrap();

    let snap = engine.tick(&FrameInput::idle(), DT);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::EnemyKilled { .. })));
    assert_eq!(snap.wave.phase, WavePhase::Complete);
    assert!(snap.events.iter().any(|e| matches!(
        e,
        GameEvent::WavePhaseChanged {
            to: WavePhase::Complete,
            ..
        }
    )));
    assert_eq!(snap.score.total_kills, 1);
}

#[test]
fn test_intermission_waits_for_start_next_wave() {
    let mut engine = started(8);
    let snap = clear_wave(&mut engine);
    assert_eq!(snap.wave.phase, WavePhase::Idle);

    for _ in 0..50 {
        let snap = engine.tick(&FrameInput::idle(), DT);
        assert_eq!(snap.phase, GamePhase::Intermission);
        assert_eq!(snap.wave.number, 1);
    }

    engine.queue_command(PlayerCommand::StartNextWave);
    let snap = engine.tick(&FrameInput::idle(), DT);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.wave.number, 2);
}

#[test]
fn test_start_next_wave_ignored_mid_wave() {
    let mut engine = started(8);
    engine.tick(&FrameInput::idle(), DT);
    engine.queue_command(PlayerCommand::StartNextWave);
    let snap = engine.tick(&FrameInput::idle(), DT);
    assert_eq!(snap.wave.number, 1);
}

#[test]
fn test_auto_advance_waves() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 8,
        auto_advance_waves: true,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartGame);
    for _ in 0..2000 {
        kill_all(&mut engine);
        let snap = engine.tick(&FrameInput::idle(), DT);
        assert_ne!(snap.phase, GamePhase::Intermission);
        if snap.wave.number == 2 {
            assert_eq!(snap.wave.phase, WavePhase::Announcing);
            return;
        }
    }
    panic!("wave 2 never started");
}

// ---- Shop ----

fn shop_result() -> ShopResult {
    ShopResult {
        levels: UpgradeLevels {
            damage: 1,
            max_health: 1,
            shield_regen: 2,
            ..UpgradeLevels::default()
        },
        selected_weapon: WeaponKind::Smg,
        points_remaining: 75,
    }
}

#[test]
fn test_shop_result_held_until_wave_boundary() {
    let mut engine = started(13);
    engine.tick(&FrameInput::idle(), DT);
    engine.queue_command(PlayerCommand::ApplyShopResult {
        result: shop_result(),
    });
    let snap = engine.tick(&FrameInput::idle(), DT);
    assert!(engine.has_pending_shop());
    assert_eq!(snap.weapon.kind, WeaponKind::Pistol);
    assert_eq!(snap.player.max_health, PLAYER_MAX_HEALTH);

    let snap = clear_wave(&mut engine);
    assert!(!engine.has_pending_shop());
    assert_eq!(snap.weapon.kind, WeaponKind::Smg);
    assert_eq!(snap.weapon.upgrades.damage, 1);
    assert_eq!(snap.player.max_health, 125.0);
    assert_eq!(engine.player().shield_regen_rate, 9.0);
    assert_eq!(snap.score.score, 75);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ShopApplied { points_remaining: 75 })));
}

#[test]
fn test_shop_result_applies_immediately_in_intermission() {
    let mut engine = started(13);
    clear_wave(&mut engine);
    engine.queue_command(PlayerCommand::ApplyShopResult {
        result: shop_result(),
    });
    let snap = engine.tick(&FrameInput::idle(), DT);
    assert_eq!(snap.weapon.kind, WeaponKind::Smg);
    assert_eq!(snap.score.score, 75);
}

// ---- Death ----

#[test]
fn test_player_death_ends_session() {
    let mut engine = started(17);
    engine.tick(&FrameInput::idle(), DT);
    let h = engine
        .enemies_mut()
        .spawn(EnemyKind::Tank, Vec3::new(0.5, 0.0, 0.0))
        .unwrap();
    engine.enemies_mut().get_mut(h).unwrap().state = holdout_ai::fsm::EnemyState::Attacking;
    {
        let player = engine.player_mut();
        player.shield = 0.0;
        player.health = 5.0;
    }

    let snap = engine.tick(&FrameInput::idle(), DT);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert!(!snap.player.alive);
    assert_eq!(snap.player.health, 0.0);
    assert!(snap.events.contains(&GameEvent::PlayerDied));

    let frame = snap.time.frame;
    let snap = engine.tick(&firing(), DT);
    assert_eq!(snap.time.frame, frame);

    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick(&FrameInput::idle(), DT);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert!(snap.player.alive);
    assert_eq!(snap.wave.number, 1);
    assert!(snap.enemies.is_empty());
}

#[test]
fn test_return_to_menu_clears_arena() {
    let mut engine = started(2);
    run_until(&mut engine, 1000, |s| !s.enemies.is_empty());
    engine.queue_command(PlayerCommand::Pause);
    engine.queue_command(PlayerCommand::ReturnToMenu);
    let snap = engine.tick(&FrameInput::idle(), DT);
    assert_eq!(snap.phase, GamePhase::MainMenu);
    assert!(snap.enemies.is_empty());
    assert!(snap.projectiles.is_empty());
}

#[test]
fn test_return_to_menu_resets_session_views() {
    let mut engine = started(4);
    clear_wave(&mut engine);
    {
        let player = engine.player_mut();
        player.health = 40.0;
        player.speed_multiplier = SPEED_BOOST_MULTIPLIER;
    }
    engine.queue_command(PlayerCommand::ReturnToMenu);
    let snap = engine.tick(&FrameInput::idle(), DT);
    assert_eq!(snap.phase, GamePhase::MainMenu);
    assert_eq!(snap.wave.number, 0);
    assert_eq!(snap.wave.phase, WavePhase::Idle);
    assert_eq!(snap.score.score, 0);
    assert_eq!(snap.score.total_kills, 0);
    assert_eq!(snap.player.health, PLAYER_MAX_HEALTH);
    assert_eq!(snap.player.speed_multiplier, 1.0);
    assert_eq!(snap.time.frame, 0);
}
