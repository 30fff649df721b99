//! holdout-runner: headless HOLDOUT session driver.
//!
//! Plays a seeded session with a simple autopilot and prints a JSON summary.
//!
//! Usage:
//!   holdout-runner --seed 7 --frames 36000
//!   holdout-runner --config sim.json --snapshot final.json --verbose

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use log::{info, warn};
use serde::Serialize;

use holdout_core::commands::PlayerCommand;
use holdout_core::enums::{EnemyPhase, GamePhase, UpgradeKind, WeaponKind};
use holdout_core::input::FrameInput;
use holdout_core::state::GameStateSnapshot;
use holdout_shop::Shop;
use holdout_sim::{SimConfig, SimulationEngine};

const DT: f32 = 1.0 / 60.0;

#[derive(Parser)]
#[command(author, version, about = "Run a headless HOLDOUT session", long_about = None)]
struct Cli {
    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of 60 Hz frames to simulate
    #[arg(long, default_value_t = 60 * 60 * 5)]
    frames: u64,
    /// JSON file holding a SimConfig
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log wave and shop activity
    #[arg(short, long)]
    verbose: bool,
    /// Write the final snapshot to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    frames: u64,
    wave: u32,
    score: u64,
    total_kills: u32,
    highest_combo: u32,
    accuracy: f32,
    weapon: WeaponKind,
    alive: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    let seed = config.seed;

    let mut engine = SimulationEngine::new(config);
    let mut shop = Shop::new();
    engine.queue_command(PlayerCommand::StartGame);
    let mut snap = engine.tick(&FrameInput::idle(), DT);

    let mut frames = 1;
    while frames < cli.frames {
        match snap.phase {
            GamePhase::GameOver => break,
            GamePhase::Intermission => {
                for command in visit_shop(&mut shop, &snap) {
                    engine.queue_command(command);
                }
            }
            _ => {}
        }
        let input = autopilot(&snap, frames);
        snap = engine.tick(&input, DT);
        frames += 1;
    }

    if snap.phase == GamePhase::GameOver {
        info!("overrun on wave {} after {frames} frames", snap.wave.number);
    } else {
        warn!("frame limit reached on wave {}", snap.wave.number);
    }

    if let Some(path) = &cli.snapshot {
        let json = serde_json::to_string_pretty(&snap)?;
        fs::write(path, json).with_context(|| format!("write snapshot: {}", path.display()))?;
    }

    let summary = Summary {
        seed,
        frames,
        wave: snap.wave.number,
        score: snap.score.score,
        total_kills: snap.score.total_kills,
        highest_combo: snap.score.highest_combo,
        accuracy: snap.weapon.accuracy,
        weapon: snap.weapon.kind,
        alive: snap.player.alive,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<SimConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config: {}", path.display()))
}

/// Aim at the nearest standing enemy, hold the trigger, and strafe in a circle.
fn autopilot(snap: &GameStateSnapshot, frame: u64) -> FrameInput {
    // Alternate strafe direction every four seconds.
    let strafe = if (frame / 240) % 2 == 0 { 1.0 } else { -1.0 };
    let eye = snap.player.position;
    let target = snap
        .enemies
        .iter()
        .filter(|e| e.phase != EnemyPhase::Dying)
        .min_by(|a, b| {
            a.position
                .distance_squared(eye)
                .total_cmp(&b.position.distance_squared(eye))
        });
    let Some(target) = target else {
        return FrameInput {
            movement: Vec2::new(strafe, 0.0),
            ..FrameInput::idle()
        };
    };

    let to = target.position - eye;
    let want_yaw = (-to.x).atan2(-to.z);
    let want_pitch = to.y.atan2(Vec2::new(to.x, to.z).length());
    let yaw_delta = (want_yaw - snap.player.yaw + std::f32::consts::PI)
        .rem_euclid(std::f32::consts::TAU)
        - std::f32::consts::PI;

    FrameInput {
        movement: Vec2::new(strafe, 0.0),
        look_delta: Vec2::new(-yaw_delta, want_pitch - snap.player.pitch),
        sprint: false,
        fire: true,
    }
}

/// Spend the intermission's points, then ask for the next wave.
fn visit_shop(shop: &mut Shop, snap: &GameStateSnapshot) -> Vec<PlayerCommand> {
    shop.open(snap.score.score);

    // Shotgun first, then damage and health before the rest.
    if !shop.owns(WeaponKind::Shotgun) {
        if let Err(err) = shop.purchase_weapon(WeaponKind::Shotgun) {
            info!("shop: {err}");
        }
    }
    let priority = [
        UpgradeKind::Damage,
        UpgradeKind::MaxHealth,
        UpgradeKind::FireRate,
        UpgradeKind::ShieldRegen,
        UpgradeKind::MagSize,
    ];
    for kind in priority {
        while shop.purchase_upgrade(kind).is_ok() {}
    }

    let result = shop.close();
    info!(
        "shop closed after wave {} with {} points left",
        snap.wave.number, result.points_remaining
    );
    vec![
        PlayerCommand::ApplyShopResult { result },
        PlayerCommand::StartNextWave,
    ]
}
