//! Wave director: composes each wave, paces its spawns, and drives the
//! Idle → Announcing → Spawning → Active → Complete → Idle cycle.

use std::collections::VecDeque;

use glam::Vec3;
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::constants::*;
use holdout_core::enums::{EnemyKind, WavePhase};
use holdout_core::events::GameEvent;

use crate::systems::enemies::EnemyRoster;

// --- Composition ---

pub fn walker_count(wave: u32) -> u32 {
    (WALKER_BASE + WALKER_PER_WAVE * wave).min(WALKER_MAX)
}

pub fn runner_count(wave: u32) -> u32 {
    if wave < RUNNER_FIRST_WAVE {
        return 0;
    }
    let n = ((wave - 2) as f32 * RUNNER_PER_WAVE).floor() as u32;
    n.min(RUNNER_MAX)
}

pub fn tank_count(wave: u32) -> u32 {
    if wave < TANK_FIRST_WAVE {
        return 0;
    }
    let n = ((wave - 4) as f32 * TANK_PER_WAVE).floor() as u32;
    n.min(TANK_MAX)
}

pub fn wave_size(wave: u32) -> u32 {
    walker_count(wave) + runner_count(wave) + tank_count(wave)
}

/// Seconds between spawns for a wave.
pub fn spawn_interval(wave: u32) -> f32 {
    (SPAWN_INTERVAL_BASE - SPAWN_INTERVAL_PER_WAVE * wave as f32).max(SPAWN_INTERVAL_MIN)
}

/// The shuffled spawn order for a wave.
pub fn compose_wave(wave: u32, rng: &mut ChaCha8Rng) -> Vec<EnemyKind> {
    let mut queue = Vec::with_capacity(wave_size(wave) as usize);
    queue.extend(std::iter::repeat(EnemyKind::Walker).take(walker_count(wave) as usize));
    queue.extend(std::iter::repeat(EnemyKind::Runner).take(runner_count(wave) as usize));
    queue.extend(std::iter::repeat(EnemyKind::Tank).take(tank_count(wave) as usize));
    queue.shuffle(rng);
    queue
}

/// HUD line shown under the wave announcement.
pub fn subtext(wave: u32) -> &'static str {
    match wave {
        0..=2 => "Walkers approaching",
        3..=4 => "Runners spotted",
        5 => "TANK INCOMING",
        6..=10 => "The horde grows",
        _ => "Total outbreak",
    }
}

/// Random point on the spawn circle.
fn spawn_point(rng: &mut ChaCha8Rng) -> Vec3 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec3::new(
        angle.cos() * SPAWN_RADIUS,
        ENEMY_HEIGHT,
        angle.sin() * SPAWN_RADIUS,
    )
}

// --- Director ---

#[derive(Debug, Clone, Default)]
pub struct WaveDirector {
    wave: u32,
    phase: WavePhase,
    spawn_queue: VecDeque<EnemyKind>,
    spawn_timer: f32,
    /// Announcing and Complete countdown.
    state_timer: f32,
    total_this_wave: u32,
    killed_this_wave: u32,
}

impl WaveDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Begin the next wave. Only legal from Idle; otherwise returns `None`.
    pub fn start_next_wave(
        &mut self,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) -> Option<u32> {
        if self.phase != WavePhase::Idle {
            return None;
        }
        self.wave += 1;
        self.spawn_queue = compose_wave(self.wave, rng).into();
        self.total_this_wave = self.spawn_queue.len() as u32;
        self.killed_this_wave = 0;
        self.spawn_timer = 0.0;
        self.state_timer = WAVE_ANNOUNCE_DURATION;
        self.transition(WavePhase::Announcing, events);
        events.push(GameEvent::WaveAnnounced {
            wave: self.wave,
            subtext: subtext(self.wave).to_string(),
        });
        info!(
            "wave {} announced: {} enemies ({})",
            self.wave,
            self.total_this_wave,
            subtext(self.wave)
        );
        Some(self.wave)
    }

    /// Advance timers and drain the spawn queue. Active → Complete is
    /// handled by `check_completion` once combat has resolved.
    pub fn update(
        &mut self,
        dt: f32,
        rng: &mut ChaCha8Rng,
        enemies: &mut EnemyRoster,
        events: &mut Vec<GameEvent>,
    ) {
        match self.phase {
            WavePhase::Idle | WavePhase::Active => {}
            WavePhase::Announcing => {
                self.state_timer = (self.state_timer - dt).max(0.0);
                if self.state_timer <= 0.0 {
                    self.transition(WavePhase::Spawning, events);
                }
            }
            WavePhase::Spawning => {
                self.spawn_timer = (self.spawn_timer - dt).max(0.0);
                if self.spawn_timer <= 0.0 {
                    if let Some(kind) = self.spawn_queue.pop_front() {
                        enemies.spawn(kind, spawn_point(rng));
                        self.spawn_timer = spawn_interval(self.wave);
                    }
                }
                if self.spawn_queue.is_empty() {
                    self.transition(WavePhase::Active, events);
                }
            }
            WavePhase::Complete => {
                self.state_timer = (self.state_timer - dt).max(0.0);
                if self.state_timer <= 0.0 {
                    self.transition(WavePhase::Idle, events);
                }
            }
        }
    }

    /// Active → Complete once no live enemies remain.
    pub fn check_completion(&mut self, live_enemies: usize, events: &mut Vec<GameEvent>) {
        if self.phase == WavePhase::Active && live_enemies == 0 {
            self.state_timer = WAVE_COMPLETE_PAUSE;
            self.transition(WavePhase::Complete, events);
        }
    }

    pub fn on_enemy_killed(&mut self) {
        self.killed_this_wave += 1;
    }

    fn transition(&mut self, to: WavePhase, events: &mut Vec<GameEvent>) {
        let from = self.phase;
        self.phase = to;
        events.push(GameEvent::WavePhaseChanged {
            wave: self.wave,
            from,
            to,
        });
        info!("wave {}: {:?} -> {:?}", self.wave, from, to);
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == WavePhase::Idle
    }

    pub fn queued(&self) -> usize {
        self.spawn_queue.len()
    }

    pub fn total_this_wave(&self) -> u32 {
        self.total_this_wave
    }

    pub fn killed_this_wave(&self) -> u32 {
        self.killed_this_wave
    }

    pub fn subtext(&self) -> &'static str {
        subtext(self.wave)
    }
}
