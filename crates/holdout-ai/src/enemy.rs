//! A single pooled enemy and its mutation entrypoints.

use glam::Vec3;

use holdout_core::constants::*;
use holdout_core::enums::{EnemyKind, EnemyPhase};

use crate::fsm::{evaluate, horizontal_distance, EnemyContext, EnemyState, EnemyUpdate};
use crate::profiles::{get_profile, EnemyProfile};

/// Result of applying damage to an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The enemy was already dying. Health is unchanged.
    Ignored,
    /// Damage applied, enemy still standing.
    Hit,
    /// Damage applied and the enemy entered Dying.
    Killed,
}

/// Live enemy state.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyInstance {
    pub kind: EnemyKind,
    pub state: EnemyState,
    /// Never negative, never above `max_health`.
    pub health: f32,
    pub max_health: f32,
    pub position: Vec3,
    /// Seconds until the next melee hit is allowed. Never negative.
    pub melee_cooldown: f32,
}

impl EnemyInstance {
    /// A freshly spawned enemy at `position`, pinned to enemy height.
    pub fn new(kind: EnemyKind, position: Vec3) -> Self {
        let profile = get_profile(kind);
        Self {
            kind,
            state: EnemyState::spawning(),
            health: profile.max_health,
            max_health: profile.max_health,
            position: Vec3::new(position.x, ENEMY_HEIGHT, position.z),
            melee_cooldown: 0.0,
        }
    }

    pub fn profile(&self) -> EnemyProfile {
        get_profile(self.kind)
    }

    pub fn phase(&self) -> EnemyPhase {
        self.state.phase()
    }

    pub fn is_dying(&self) -> bool {
        self.state.is_dying()
    }

    /// Apply damage. Dying enemies ignore it; health is floored at zero.
    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.is_dying() {
            return DamageOutcome::Ignored;
        }
        self.health = (self.health - amount.max(0.0)).max(0.0);
        if self.health <= 0.0 {
            self.state = EnemyState::dying();
            DamageOutcome::Killed
        } else {
            DamageOutcome::Hit
        }
    }

    /// True iff the enemy is neither spawning nor dying, its cooldown has
    /// elapsed, and the player is horizontally within melee range.
    pub fn can_melee(&self, player_position: Vec3) -> bool {
        if matches!(self.state, EnemyState::Spawning { .. } | EnemyState::Dying { .. }) {
            return false;
        }
        self.melee_cooldown <= 0.0
            && horizontal_distance(self.position, player_position) < self.profile().melee_range
    }

    /// Restart the attack cooldown after landing a hit.
    pub fn on_melee_hit(&mut self) {
        self.melee_cooldown = self.profile().attack_cooldown;
    }

    /// Advance timers and the behavior FSM by `dt`.
    pub fn update(&mut self, dt: f32, player_position: Vec3) -> EnemyUpdate {
        self.melee_cooldown = (self.melee_cooldown - dt).max(0.0);

        let update = evaluate(&EnemyContext {
            kind: self.kind,
            state: self.state,
            position: self.position,
            target: player_position,
            dt,
        });
        self.state = update.new_state;
        self.position = update.new_position;
        update
    }

    /// Render scale: grows in while spawning and shrinks while dying.
    pub fn scale(&self) -> f32 {
        match self.state {
            EnemyState::Spawning { remaining } => {
                (1.0 - remaining / ENEMY_SPAWN_DURATION).clamp(0.0, 1.0)
            }
            EnemyState::Dying { remaining } => (remaining / ENEMY_DEATH_DURATION).clamp(0.0, 1.0),
            EnemyState::Approaching | EnemyState::Attacking => 1.0,
        }
    }
}
