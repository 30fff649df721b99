//! Combat resolver: projectile-vs-enemy hits, enemy melee, and the
//! score/combo ledger.

use glam::Vec3;

use holdout_ai::enemy::DamageOutcome;
use holdout_core::constants::*;
use holdout_core::enums::EnemyKind;
use holdout_core::events::GameEvent;
use holdout_core::state::ScoreView;

use crate::systems::enemies::EnemyRoster;
use crate::systems::player::PlayerController;
use crate::systems::projectiles::ProjectileSimulator;

/// Score multiplier for a combo count: 1 + (combo - 1) × step, capped.
pub fn combo_multiplier(combo: u32) -> f32 {
    if combo == 0 {
        return 1.0;
    }
    (1.0 + (combo - 1) as f32 * COMBO_STEP).min(COMBO_MAX_MULTIPLIER)
}

/// A confirmed projectile hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub slot: u32,
    pub kind: EnemyKind,
    pub position: Vec3,
    pub damage: f32,
    pub killed: bool,
    /// Zero unless `killed`.
    pub score_delta: u64,
}

#[derive(Debug, Clone)]
pub struct CombatResolver {
    score: u64,
    combo: u32,
    multiplier: f32,
    combo_timer: f32,
    total_kills: u32,
    highest_combo: u32,
}

impl CombatResolver {
    pub fn new() -> Self {
        Self {
            score: 0,
            combo: 0,
            multiplier: 1.0,
            combo_timer: 0.0,
            total_kills: 0,
            highest_combo: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Resolve every active player projectile against the enemies.
    ///
    /// Each projectile hits at most one enemy: the first non-dying enemy
    /// in slot order whose center is within its radius plus `HIT_EPSILON`.
    pub fn check_player_projectiles(
        &mut self,
        projectiles: &mut ProjectileSimulator,
        enemies: &mut EnemyRoster,
        events: &mut Vec<GameEvent>,
    ) -> Vec<Hit> {
        let shots: Vec<_> = projectiles
            .iter()
            .filter(|(_, p)| p.owner_is_player)
            .map(|(handle, p)| (handle, p.position, p.damage))
            .collect();

        let mut hits = Vec::new();
        for (projectile, position, damage) in shots {
            let target = enemies.iter_mut().find(|(_, enemy)| {
                !enemy.is_dying()
                    && enemy.position.distance(position) < enemy.profile().radius + HIT_EPSILON
            });
            let Some((handle, enemy)) = target else {
                continue;
            };

            projectiles.deactivate(projectile);
            let outcome = enemy.take_damage(damage);
            let (kind, enemy_position) = (enemy.kind, enemy.position);
            let base_score = enemy.profile().score_value;

            match outcome {
                DamageOutcome::Ignored => continue,
                DamageOutcome::Hit => {
                    events.push(GameEvent::EnemyHit {
                        slot: handle.index,
                        kind,
                        position: enemy_position,
                        damage,
                    });
                    hits.push(Hit {
                        slot: handle.index,
                        kind,
                        position: enemy_position,
                        damage,
                        killed: false,
                        score_delta: 0,
                    });
                }
                DamageOutcome::Killed => {
                    let score_delta = self.score_kill(base_score);
                    events.push(GameEvent::EnemyKilled {
                        slot: handle.index,
                        kind,
                        position: enemy_position,
                        score_delta,
                        combo: self.combo,
                        multiplier: self.multiplier,
                    });
                    hits.push(Hit {
                        slot: handle.index,
                        kind,
                        position: enemy_position,
                        damage,
                        killed: true,
                        score_delta,
                    });
                }
            }
        }
        hits
    }

    /// Every enemy able to strike deals its damage. No per-frame cap, but
    /// resolution stops at the killing blow. Returns how many hits landed.
    pub fn check_enemy_melee(
        &mut self,
        enemies: &mut EnemyRoster,
        player: &mut PlayerController,
        events: &mut Vec<GameEvent>,
    ) -> u32 {
        if !player.alive {
            return 0;
        }
        let mut landed = 0;
        for (_, enemy) in enemies.iter_mut() {
            if !enemy.can_melee(player.position) {
                continue;
            }
            let amount = enemy.profile().damage;
            let died = player.take_damage(amount);
            enemy.on_melee_hit();
            landed += 1;
            events.push(GameEvent::PlayerDamaged {
                amount,
                shield: player.shield,
                health: player.health,
            });
            if died {
                break;
            }
        }
        landed
    }

    /// Combo decay.
    pub fn update(&mut self, dt: f32) {
        if self.combo == 0 {
            return;
        }
        self.combo_timer = (self.combo_timer - dt).max(0.0);
        if self.combo_timer <= 0.0 {
            self.combo = 0;
            self.multiplier = 1.0;
        }
    }

    fn score_kill(&mut self, base: u64) -> u64 {
        self.combo += 1;
        self.combo_timer = COMBO_TIMEOUT;
        self.multiplier = combo_multiplier(self.combo);
        self.highest_combo = self.highest_combo.max(self.combo);
        self.total_kills += 1;
        let points = (base as f64 * self.multiplier as f64).round() as u64;
        self.score += points;
        points
    }

    /// Replace the score, e.g. after spending points in the shop.
    pub fn set_score(&mut self, score: u64) {
        self.score = score;
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn total_kills(&self) -> u32 {
        self.total_kills
    }

    pub fn highest_combo(&self) -> u32 {
        self.highest_combo
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            combo: self.combo,
            multiplier: self.multiplier,
            combo_timer: self.combo_timer,
            total_kills: self.total_kills,
            highest_combo: self.highest_combo,
        }
    }
}

impl Default for CombatResolver {
    fn default() -> Self {
        Self::new()
    }
}
