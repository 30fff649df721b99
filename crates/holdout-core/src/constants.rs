//! Simulation constants and tuning parameters.

// --- Frame timing ---

/// Largest frame delta the simulation will integrate (seconds).
/// Longer frames (hitches, tab switches) are clamped to this.
pub const MAX_FRAME_DT: f32 = 0.05;

// --- Arena geometry ---

/// Radius of the arena floor.
pub const ARENA_RADIUS: f32 = 15.0;

/// Player containment radius (slightly inside the wall).
pub const PLAYER_BOUNDARY_RADIUS: f32 = 14.0;

/// Radius of the circle enemies spawn on.
pub const SPAWN_RADIUS: f32 = 20.0;

/// Enemies never leave the spawn circle.
pub const ENEMY_BOUNDARY_RADIUS: f32 = SPAWN_RADIUS;

/// Height at which enemy bodies sit above the floor.
pub const ENEMY_HEIGHT: f32 = 1.2;

/// Player camera height above the floor.
pub const PLAYER_EYE_HEIGHT: f32 = 1.7;

// --- Pools ---

/// Maximum concurrent enemies.
pub const ENEMY_POOL_SIZE: usize = 40;

/// Maximum concurrent projectiles (player and enemy combined).
pub const PROJECTILE_POOL_SIZE: usize = 80;

/// Maximum uncollected pickups lying in the arena.
pub const MAX_PICKUPS: usize = 20;

// --- Enemy behavior ---

/// Duration of the scale-in animation before an enemy starts moving.
pub const ENEMY_SPAWN_DURATION: f32 = 0.5;

/// Duration of the collapse animation before a dead enemy is released.
pub const ENEMY_DEATH_DURATION: f32 = 0.4;

/// An attacking enemy gives chase again once the target is beyond
/// `melee_range * MELEE_LEASH_FACTOR`.
pub const MELEE_LEASH_FACTOR: f32 = 1.5;

/// Fraction of base speed used while closing the residual gap in Attacking.
pub const ATTACK_CREEP_FACTOR: f32 = 0.3;

// --- Enemy archetypes ---

pub const WALKER_HEALTH: f32 = 20.0;
pub const WALKER_SPEED: f32 = 3.0;
pub const WALKER_DAMAGE: f32 = 5.0;
pub const WALKER_MELEE_RANGE: f32 = 1.5;
pub const WALKER_ATTACK_COOLDOWN: f32 = 1.0;
pub const WALKER_SCORE: u64 = 100;
pub const WALKER_RADIUS: f32 = 0.40;

pub const RUNNER_HEALTH: f32 = 40.0;
pub const RUNNER_SPEED: f32 = 4.0;
pub const RUNNER_DAMAGE: f32 = 8.0;
pub const RUNNER_MELEE_RANGE: f32 = 1.4;
pub const RUNNER_ATTACK_COOLDOWN: f32 = 0.8;
pub const RUNNER_SCORE: u64 = 250;
pub const RUNNER_RADIUS: f32 = 0.48;

pub const TANK_HEALTH: f32 = 120.0;
pub const TANK_SPEED: f32 = 1.8;
pub const TANK_DAMAGE: f32 = 20.0;
pub const TANK_MELEE_RANGE: f32 = 1.8;
pub const TANK_ATTACK_COOLDOWN: f32 = 1.6;
pub const TANK_SCORE: u64 = 500;
pub const TANK_RADIUS: f32 = 0.72;

// --- Projectiles ---

/// Distance after which a projectile expires.
pub const PROJECTILE_MAX_DISTANCE: f32 = 100.0;

/// Projectiles that fall below this height expire.
pub const PROJECTILE_MIN_HEIGHT: f32 = -5.0;

/// Added to the enemy radius for projectile hit tests.
pub const HIT_EPSILON: f32 = 0.15;

// --- Scoring ---

/// Seconds without a kill before the combo resets.
pub const COMBO_TIMEOUT: f32 = 2.0;

/// Multiplier gained per consecutive kill beyond the first.
pub const COMBO_STEP: f32 = 0.1;

/// Multiplier ceiling.
pub const COMBO_MAX_MULTIPLIER: f32 = 3.0;

// --- Waves ---

/// Duration of the "WAVE N" announcement before spawning begins.
pub const WAVE_ANNOUNCE_DURATION: f32 = 2.5;

/// Pause between the last enemy dying and the wave going idle.
pub const WAVE_COMPLETE_PAUSE: f32 = 2.0;

/// Walker count formula: min(WALKER_BASE + WALKER_PER_WAVE * w, WALKER_MAX).
pub const WALKER_BASE: u32 = 3;
pub const WALKER_PER_WAVE: u32 = 2;
pub const WALKER_MAX: u32 = 20;

/// Runners appear from this wave.
pub const RUNNER_FIRST_WAVE: u32 = 3;
pub const RUNNER_PER_WAVE: f32 = 1.5;
pub const RUNNER_MAX: u32 = 10;

/// Tanks appear from this wave.
pub const TANK_FIRST_WAVE: u32 = 5;
pub const TANK_PER_WAVE: f32 = 0.8;
pub const TANK_MAX: u32 = 5;

/// Spawn pacing: max(SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_BASE - SPAWN_INTERVAL_PER_WAVE * w).
pub const SPAWN_INTERVAL_BASE: f32 = 0.5;
pub const SPAWN_INTERVAL_PER_WAVE: f32 = 0.03;
pub const SPAWN_INTERVAL_MIN: f32 = 0.15;

// --- Powerups ---

/// Probability that a kill drops a pickup.
pub const DROP_CHANCE: f64 = 0.3;

/// Horizontal distance at which the player collects a pickup.
pub const PICKUP_RADIUS: f32 = 1.5;

/// Seconds an uncollected pickup stays in the arena.
pub const PICKUP_LIFETIME: f32 = 15.0;

/// Height pickups hover at.
pub const PICKUP_HEIGHT: f32 = 0.5;

/// Drop table weights.
pub const DROP_WEIGHT_HEALTH: u32 = 50;
pub const DROP_WEIGHT_SPEED: u32 = 25;
pub const DROP_WEIGHT_DAMAGE: u32 = 25;

/// Health restored by a health pickup.
pub const HEALTH_PICKUP_AMOUNT: f32 = 30.0;

/// Movement speed multiplier while the speed buff is active.
pub const SPEED_BOOST_MULTIPLIER: f32 = 1.6;
pub const SPEED_BOOST_DURATION: f32 = 5.0;

/// Weapon damage multiplier while the damage buff is active.
pub const DAMAGE_BOOST_MULTIPLIER: f32 = 2.0;
pub const DAMAGE_BOOST_DURATION: f32 = 8.0;

// --- Player ---

pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_MAX_SHIELD: f32 = 100.0;

/// Seconds without damage before the shield starts regenerating.
pub const SHIELD_REGEN_DELAY: f32 = 3.0;

/// Shield points regenerated per second.
pub const SHIELD_REGEN_RATE: f32 = 5.0;

pub const PLAYER_MOVE_SPEED: f32 = 6.0;
pub const PLAYER_SPRINT_FACTOR: f32 = 1.4;

/// Exponential-approach rate for velocity smoothing (1/s).
pub const PLAYER_ACCELERATION: f32 = 15.0;

/// Pitch is kept just short of straight up/down.
pub const PLAYER_PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

// --- Shop upgrades ---

/// Max health gained per MaxHealth upgrade level.
pub const MAX_HEALTH_PER_LEVEL: f32 = 25.0;

/// Shield regen gained per ShieldRegen upgrade level (points/s).
pub const SHIELD_REGEN_PER_LEVEL: f32 = 2.0;

/// Weapon damage gained per Damage level (fraction).
pub const DAMAGE_PER_LEVEL: f32 = 0.2;

/// Fire rate gained per FireRate level (fraction).
pub const FIRE_RATE_PER_LEVEL: f32 = 0.15;

/// Magazine capacity gained per MagSize level (fraction).
pub const MAG_SIZE_PER_LEVEL: f32 = 0.25;

/// Highest level any upgrade can reach.
pub const MAX_UPGRADE_LEVEL: u32 = 5;
