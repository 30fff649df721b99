//! Player controller: movement, arena containment, and survival stats.

use glam::{Vec2, Vec3};
use log::info;

use holdout_core::constants::*;
use holdout_core::input::FrameInput;

#[derive(Debug, Clone)]
pub struct PlayerController {
    /// Eye position.
    pub position: Vec3,
    pub velocity: Vec3,
    /// Radians, three.js convention: 0 faces -z, positive turns left.
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
    pub max_health: f32,
    pub shield: f32,
    pub max_shield: f32,
    pub shield_regen_delay: f32,
    pub shield_regen_rate: f32,
    pub time_since_damage: f32,
    /// Set by the speed buff.
    pub speed_multiplier: f32,
    pub alive: bool,
    pub damage_taken: f32,
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, PLAYER_EYE_HEIGHT, 0.0),
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            shield: PLAYER_MAX_SHIELD,
            max_shield: PLAYER_MAX_SHIELD,
            shield_regen_delay: SHIELD_REGEN_DELAY,
            shield_regen_rate: SHIELD_REGEN_RATE,
            time_since_damage: f32::MAX,
            speed_multiplier: 1.0,
            alive: true,
            damage_taken: 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Apply look and movement intent, contain to the arena, regen shield.
    /// A dead player is frozen.
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        if !self.alive {
            return;
        }

        self.yaw -= input.look_delta.x;
        self.pitch = (self.pitch + input.look_delta.y).clamp(-PLAYER_PITCH_LIMIT, PLAYER_PITCH_LIMIT);

        let target = self.move_direction(input.movement) * self.move_speed(input.sprint);
        let blend = (PLAYER_ACCELERATION * dt).min(1.0);
        self.velocity.x += (target.x - self.velocity.x) * blend;
        self.velocity.z += (target.y - self.velocity.z) * blend;

        self.position.x += self.velocity.x * dt;
        self.position.z += self.velocity.z * dt;
        self.contain();

        self.time_since_damage += dt;
        if self.time_since_damage > self.shield_regen_delay && self.shield < self.max_shield {
            self.shield = (self.shield + self.shield_regen_rate * dt).min(self.max_shield);
        }
    }

    /// World-space ground direction for a (strafe, forward) intent.
    fn move_direction(&self, movement: Vec2) -> Vec2 {
        let local = movement.clamp_length_max(1.0);
        if local == Vec2::ZERO {
            return Vec2::ZERO;
        }
        // Local frame: +x right, -z forward.
        let (x, z) = (local.x, -local.y);
        let (sin, cos) = self.yaw.sin_cos();
        Vec2::new(x * cos + z * sin, -x * sin + z * cos)
    }

    fn move_speed(&self, sprint: bool) -> f32 {
        let base = if sprint {
            PLAYER_MOVE_SPEED * PLAYER_SPRINT_FACTOR
        } else {
            PLAYER_MOVE_SPEED
        };
        base * self.speed_multiplier
    }

    /// Clamp to the boundary circle and drop the outward velocity component.
    fn contain(&mut self) {
        let ground = Vec2::new(self.position.x, self.position.z);
        let dist = ground.length();
        if dist <= PLAYER_BOUNDARY_RADIUS {
            return;
        }
        let normal = ground / dist;
        let clamped = normal * PLAYER_BOUNDARY_RADIUS;
        self.position.x = clamped.x;
        self.position.z = clamped.y;

        let outward = self.velocity.x * normal.x + self.velocity.z * normal.y;
        if outward > 0.0 {
            self.velocity.x -= normal.x * outward;
            self.velocity.z -= normal.y * outward;
        }
    }

    /// Shield absorbs first. Returns true if this hit killed the player.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.alive {
            return false;
        }
        let mut amount = amount.max(0.0);
        self.time_since_damage = 0.0;
        self.damage_taken += amount;

        let absorbed = self.shield.min(amount);
        self.shield -= absorbed;
        amount -= absorbed;

        self.health -= amount;
        if self.health <= 0.0 {
            self.health = 0.0;
            self.alive = false;
            info!("player died after taking {:.0} damage", self.damage_taken);
            return true;
        }
        false
    }

    pub fn heal(&mut self, amount: f32) {
        if self.alive {
            self.health = (self.health + amount).min(self.max_health);
        }
    }

    /// Raise or lower max health; current health is clamped.
    pub fn set_max_health(&mut self, max_health: f32) {
        self.max_health = max_health;
        self.health = self.health.min(max_health);
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    pub fn ground_position(&self) -> Vec3 {
        Vec3::new(self.position.x, 0.0, self.position.z)
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}
