//! Enemy behavior finite state machine.
//!
//! A pure transition function over plain data: given an enemy's state,
//! position, and the player's position, compute the next state and
//! position for one frame. Timers live inside the state variants that
//! use them, so an Approaching enemy carries no stale spawn countdown.

use glam::{Vec2, Vec3};

use holdout_core::constants::*;
use holdout_core::enums::{EnemyKind, EnemyPhase};

use crate::profiles::{get_profile, EnemyProfile};

/// Behavior state with per-state data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyState {
    /// Scale-in countdown.
    Spawning { remaining: f32 },
    Approaching,
    Attacking,
    /// Collapse countdown. Released back to the pool when it reaches zero.
    Dying { remaining: f32 },
}

impl EnemyState {
    pub fn spawning() -> Self {
        EnemyState::Spawning {
            remaining: ENEMY_SPAWN_DURATION,
        }
    }

    pub fn dying() -> Self {
        EnemyState::Dying {
            remaining: ENEMY_DEATH_DURATION,
        }
    }

    /// Flat tag for snapshots and events.
    pub fn phase(&self) -> EnemyPhase {
        match self {
            EnemyState::Spawning { .. } => EnemyPhase::Spawning,
            EnemyState::Approaching => EnemyPhase::Approaching,
            EnemyState::Attacking => EnemyPhase::Attacking,
            EnemyState::Dying { .. } => EnemyPhase::Dying,
        }
    }

    pub fn is_dying(&self) -> bool {
        matches!(self, EnemyState::Dying { .. })
    }
}

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub kind: EnemyKind,
    pub state: EnemyState,
    pub position: Vec3,
    /// Player position. Only its ground projection is used.
    pub target: Vec3,
    pub dt: f32,
}

/// Output from the enemy FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyUpdate {
    pub new_state: EnemyState,
    pub new_position: Vec3,
    pub phase_changed: bool,
    /// Death animation complete; the slot should be released.
    pub finished: bool,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let profile = get_profile(ctx.kind);
    let dt = ctx.dt.max(0.0);

    match ctx.state {
        EnemyState::Spawning { remaining } => evaluate_spawning(ctx, remaining - dt),
        EnemyState::Approaching => evaluate_approaching(ctx, &profile, dt),
        EnemyState::Attacking => evaluate_attacking(ctx, &profile, dt),
        EnemyState::Dying { remaining } => evaluate_dying(ctx, remaining - dt),
    }
}

fn evaluate_spawning(ctx: &EnemyContext, remaining: f32) -> EnemyUpdate {
    if remaining <= 0.0 {
        return EnemyUpdate {
            new_state: EnemyState::Approaching,
            new_position: ctx.position,
            phase_changed: true,
            finished: false,
        };
    }
    EnemyUpdate {
        new_state: EnemyState::Spawning { remaining },
        new_position: ctx.position,
        phase_changed: false,
        finished: false,
    }
}

fn evaluate_approaching(ctx: &EnemyContext, profile: &EnemyProfile, dt: f32) -> EnemyUpdate {
    let new_position = step_toward(ctx.position, ctx.target, profile.speed * dt, 0.0);
    let dist = horizontal_distance(new_position, ctx.target);

    if dist <= profile.melee_range {
        return EnemyUpdate {
            new_state: EnemyState::Attacking,
            new_position,
            phase_changed: true,
            finished: false,
        };
    }

    EnemyUpdate {
        new_state: EnemyState::Approaching,
        new_position,
        phase_changed: false,
        finished: false,
    }
}

fn evaluate_attacking(ctx: &EnemyContext, profile: &EnemyProfile, dt: f32) -> EnemyUpdate {
    let dist = horizontal_distance(ctx.position, ctx.target);

    if dist > profile.melee_range * MELEE_LEASH_FACTOR {
        return EnemyUpdate {
            new_state: EnemyState::Approaching,
            new_position: ctx.position,
            phase_changed: true,
            finished: false,
        };
    }

    // Creep in until bodies touch.
    let new_position = step_toward(
        ctx.position,
        ctx.target,
        profile.speed * ATTACK_CREEP_FACTOR * dt,
        profile.radius,
    );

    EnemyUpdate {
        new_state: EnemyState::Attacking,
        new_position,
        phase_changed: false,
        finished: false,
    }
}

fn evaluate_dying(ctx: &EnemyContext, remaining: f32) -> EnemyUpdate {
    let remaining = remaining.max(0.0);
    EnemyUpdate {
        new_state: EnemyState::Dying { remaining },
        new_position: ctx.position,
        phase_changed: false,
        finished: remaining <= 0.0,
    }
}

/// Horizontal (x/z) distance between two points.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}

/// Move `from` toward the ground projection of `to` by at most `max_step`,
/// stopping `stop_distance` short. The result is clamped to the enemy
/// boundary and pinned to enemy height.
fn step_toward(from: Vec3, to: Vec3, max_step: f32, stop_distance: f32) -> Vec3 {
    let delta = Vec2::new(to.x - from.x, to.z - from.z);
    let dist = delta.length();
    let travel = max_step.min((dist - stop_distance).max(0.0));

    let mut ground = Vec2::new(from.x, from.z);
    if dist > f32::EPSILON && travel > 0.0 {
        ground += delta / dist * travel;
    }
    clamp_to_arena(ground)
}

/// Clamp a ground position to the enemy boundary circle.
pub fn clamp_to_arena(ground: Vec2) -> Vec3 {
    let ground = ground.clamp_length_max(ENEMY_BOUNDARY_RADIUS);
    Vec3::new(ground.x, ENEMY_HEIGHT, ground.y)
}
