//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns every subsystem, processes player commands,
//! runs one fixed-order tick per rendered frame, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use holdout_core::commands::PlayerCommand;
use holdout_core::constants::*;
use holdout_core::enums::GamePhase;
use holdout_core::events::GameEvent;
use holdout_core::input::FrameInput;
use holdout_core::state::GameStateSnapshot;
use holdout_core::types::{ShopResult, SimTime};

use crate::systems;
use crate::systems::combat::CombatResolver;
use crate::systems::enemies::EnemyRoster;
use crate::systems::player::PlayerController;
use crate::systems::powerups::PowerupDirector;
use crate::systems::projectiles::ProjectileSimulator;
use crate::systems::snapshot::SnapshotSources;
use crate::systems::wave_director::WaveDirector;
use crate::systems::weapon::Weapon;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    /// Start the next wave automatically instead of pausing in Intermission.
    pub auto_advance_waves: bool,
    /// Upper bound on a single frame's delta (seconds).
    pub max_frame_dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            auto_advance_waves: false,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

/// The simulation engine. Owns all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,

    player: PlayerController,
    weapon: Weapon,
    projectiles: ProjectileSimulator,
    enemies: EnemyRoster,
    waves: WaveDirector,
    combat: CombatResolver,
    powerups: PowerupDirector,

    /// Shop result waiting for a wave boundary.
    pending_shop: Option<ShopResult>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(mut config: SimConfig) -> Self {
        if !(config.max_frame_dt.is_finite() && config.max_frame_dt > 0.0) {
            warn!(
                "invalid max_frame_dt {}, using {MAX_FRAME_DT}",
                config.max_frame_dt
            );
            config.max_frame_dt = MAX_FRAME_DT;
        }
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            player: PlayerController::new(),
            weapon: Weapon::new(),
            projectiles: ProjectileSimulator::new(),
            enemies: EnemyRoster::new(),
            waves: WaveDirector::new(),
            combat: CombatResolver::new(),
            powerups: PowerupDirector::new(),
            pending_shop: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// `dt` is clamped into `[0, max_frame_dt]`; non-finite deltas count as 0.
    pub fn tick(&mut self, input: &FrameInput, dt: f32) -> GameStateSnapshot {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.config.max_frame_dt)
        } else {
            0.0
        };

        self.process_commands();

        match self.phase {
            GamePhase::Playing => {
                self.run_systems(input, dt);
                self.time.advance(dt);
            }
            // World frozen. Shop results arriving here apply on receipt.
            GamePhase::MainMenu
            | GamePhase::Paused
            | GamePhase::Intermission
            | GamePhase::GameOver => {}
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state, draining pending events.
    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            SnapshotSources {
                time: &self.time,
                phase: self.phase,
                waves: &self.waves,
                player: &self.player,
                weapon: &self.weapon,
                enemies: &self.enemies,
                projectiles: &self.projectiles,
                powerups: &self.powerups,
                combat: &self.combat,
            },
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn enemies(&self) -> &EnemyRoster {
        &self.enemies
    }

    pub fn projectiles(&self) -> &ProjectileSimulator {
        &self.projectiles
    }

    pub fn waves(&self) -> &WaveDirector {
        &self.waves
    }

    pub fn combat(&self) -> &CombatResolver {
        &self.combat
    }

    pub fn powerups(&self) -> &PowerupDirector {
        &self.powerups
    }

    /// True while a shop result is held for the next wave boundary.
    pub fn has_pending_shop(&self) -> bool {
        self.pending_shop.is_some()
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerController {
        &mut self.player
    }

    #[cfg(test)]
    pub fn enemies_mut(&mut self) -> &mut EnemyRoster {
        &mut self.enemies
    }

    #[cfg(test)]
    pub fn projectiles_mut(&mut self) -> &mut ProjectileSimulator {
        &mut self.projectiles
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_game();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase != GamePhase::MainMenu {
                    self.clear_session();
                    self.phase = GamePhase::MainMenu;
                    info!("returned to menu");
                }
            }
            PlayerCommand::Reload => {
                if self.is_in_session() && self.weapon.start_reload() {
                    self.events.push(GameEvent::ReloadStarted {
                        weapon: self.weapon.kind(),
                    });
                }
            }
            PlayerCommand::SwitchWeapon { kind } => {
                if self.is_in_session() {
                    self.weapon.switch_weapon(kind);
                }
            }
            PlayerCommand::StartNextWave => {
                if self.phase == GamePhase::Intermission {
                    self.begin_next_wave();
                }
            }
            PlayerCommand::ApplyShopResult { result } => {
                if self.is_in_session() {
                    self.pending_shop = Some(result);
                    self.apply_pending_shop();
                }
            }
        }
    }

    fn is_in_session(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::Playing | GamePhase::Paused | GamePhase::Intermission
        )
    }

    /// Drop every trace of the current session without starting a new one.
    fn clear_session(&mut self) {
        self.time = SimTime::default();
        self.player.reset();
        self.weapon.reset();
        self.projectiles.clear();
        self.enemies.clear();
        self.waves.reset();
        self.combat.reset();
        self.powerups.reset();
        self.pending_shop = None;
    }

    fn start_game(&mut self) {
        self.clear_session();
        self.phase = GamePhase::Playing;
        info!("game started (seed {})", self.config.seed);
        self.waves.start_next_wave(&mut self.rng, &mut self.events);
    }

    /// Leave Intermission into the next wave, applying any held shop result.
    fn begin_next_wave(&mut self) {
        self.apply_pending_shop();
        if self
            .waves
            .start_next_wave(&mut self.rng, &mut self.events)
            .is_some()
        {
            self.phase = GamePhase::Playing;
        }
    }

    /// Apply a held shop result if the wave director is at a boundary.
    fn apply_pending_shop(&mut self) {
        if !self.waves.is_idle() {
            return;
        }
        let Some(result) = self.pending_shop.take() else {
            return;
        };

        self.weapon.apply_upgrades(&result.levels);
        self.weapon.switch_weapon(result.selected_weapon);
        self.player.set_max_health(
            PLAYER_MAX_HEALTH + MAX_HEALTH_PER_LEVEL * result.levels.max_health as f32,
        );
        self.player.shield_regen_rate =
            SHIELD_REGEN_RATE + SHIELD_REGEN_PER_LEVEL * result.levels.shield_regen as f32;
        self.combat.set_score(result.points_remaining);

        info!(
            "shop applied: {:?}, {:?}, {} points left",
            result.selected_weapon, result.levels, result.points_remaining
        );
        self.events.push(GameEvent::ShopApplied {
            points_remaining: result.points_remaining,
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &FrameInput, dt: f32) {
        // 1. Wave director (announce timer, spawn pacing)
        self.waves
            .update(dt, &mut self.rng, &mut self.enemies, &mut self.events);
        // 2. Player movement and regen
        self.player.update(dt, input);
        // 3. Weapon timers and firing
        self.weapon.update(dt);
        if input.fire && self.weapon.can_fire() {
            self.fire_weapon();
        }
        // 4. Projectile flight
        self.projectiles.update(dt);
        // 5. Enemy FSMs
        self.enemies.update(dt, self.player.position);
        // 6. Projectile-vs-enemy
        let hits = self.combat.check_player_projectiles(
            &mut self.projectiles,
            &mut self.enemies,
            &mut self.events,
        );
        for hit in &hits {
            self.weapon.register_hit();
            if hit.killed {
                self.waves.on_enemy_killed();
                self.powerups
                    .on_enemy_killed(hit.position, &mut self.rng, &mut self.events);
            }
        }
        // 7. Enemy melee
        self.combat
            .check_enemy_melee(&mut self.enemies, &mut self.player, &mut self.events);
        if !self.player.alive {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::PlayerDied);
            info!(
                "game over: wave {}, score {}, kills {}",
                self.waves.wave(),
                self.combat.score(),
                self.combat.total_kills()
            );
            return;
        }
        // 8. Wave completion
        self.waves
            .check_completion(self.enemies.live_count(), &mut self.events);
        // 9. Pickups and buffs
        self.powerups.update(
            dt,
            &mut self.player,
            &mut self.weapon,
            &mut self.events,
        );
        // 10. Combo decay
        self.combat.update(dt);
        // 11. Wave boundary
        if self.waves.is_idle() {
            self.phase = GamePhase::Intermission;
            self.apply_pending_shop();
            if self.config.auto_advance_waves {
                self.begin_next_wave();
            }
        }
    }

    fn fire_weapon(&mut self) {
        let was_reloading = self.weapon.is_reloading();
        let shots = self.weapon.fire(
            self.player.position,
            self.player.forward(),
            &mut self.rng,
        );
        if shots.is_empty() {
            return;
        }
        let mut launched = 0;
        for shot in &shots {
            if self
                .projectiles
                .spawn(shot.origin, shot.direction, shot.speed, shot.damage, true)
                .is_some()
            {
                launched += 1;
            }
        }
        if launched < shots.len() {
            debug!("{} of {} pellets dropped", shots.len() - launched, shots.len());
        }
        self.events.push(GameEvent::ShotFired {
            weapon: self.weapon.kind(),
            pellets: shots.len() as u32,
        });
        if !was_reloading && self.weapon.is_reloading() {
            self.events.push(GameEvent::ReloadStarted {
                weapon: self.weapon.kind(),
            });
        }
    }
}
