//! Archetype-specific enemy profiles.
//!
//! Consolidates per-archetype parameters for the enemy FSM and combat.

use holdout_core::enums::EnemyKind;

/// Combat and movement profile for an enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub max_health: f32,
    /// Ground speed while approaching (units/s).
    pub speed: f32,
    /// Damage dealt per melee hit.
    pub damage: f32,
    /// Horizontal distance at which the enemy can strike.
    pub melee_range: f32,
    /// Seconds between melee hits.
    pub attack_cooldown: f32,
    /// Base score awarded on kill, before the combo multiplier.
    pub score_value: u64,
    /// Body radius used for projectile hit tests.
    pub radius: f32,
}

/// Get the profile for a given archetype.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    use holdout_core::constants::*;

    match kind {
        EnemyKind::Walker => EnemyProfile {
            max_health: WALKER_HEALTH,
            speed: WALKER_SPEED,
            damage: WALKER_DAMAGE,
            melee_range: WALKER_MELEE_RANGE,
            attack_cooldown: WALKER_ATTACK_COOLDOWN,
            score_value: WALKER_SCORE,
            radius: WALKER_RADIUS,
        },
        EnemyKind::Runner => EnemyProfile {
            max_health: RUNNER_HEALTH,
            speed: RUNNER_SPEED,
            damage: RUNNER_DAMAGE,
            melee_range: RUNNER_MELEE_RANGE,
            attack_cooldown: RUNNER_ATTACK_COOLDOWN,
            score_value: RUNNER_SCORE,
            radius: RUNNER_RADIUS,
        },
        EnemyKind::Tank => EnemyProfile {
            max_health: TANK_HEALTH,
            speed: TANK_SPEED,
            damage: TANK_DAMAGE,
            melee_range: TANK_MELEE_RANGE,
            attack_cooldown: TANK_ATTACK_COOLDOWN,
            score_value: TANK_SCORE,
            radius: TANK_RADIUS,
        },
    }
}
