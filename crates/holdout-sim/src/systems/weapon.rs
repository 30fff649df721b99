//! Player weapon: magazine, fire cadence, reloads, pellet spread, and the
//! two damage multipliers (shop upgrades and the timed damage buff).

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::constants::*;
use holdout_core::enums::WeaponKind;
use holdout_core::types::UpgradeLevels;

/// Static weapon definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponProfile {
    pub magazine_size: u32,
    /// Shots per second.
    pub fire_rate: f32,
    pub reload_time: f32,
    pub projectile_speed: f32,
    pub damage: f32,
    pub pellets: u32,
    /// Per-axis direction jitter before renormalizing.
    pub spread: f32,
}

pub fn weapon_profile(kind: WeaponKind) -> WeaponProfile {
    match kind {
        WeaponKind::Pistol => WeaponProfile {
            magazine_size: 20,
            fire_rate: 4.0,
            reload_time: 1.5,
            projectile_speed: 50.0,
            damage: 10.0,
            pellets: 1,
            spread: 0.0,
        },
        WeaponKind::Shotgun => WeaponProfile {
            magazine_size: 6,
            fire_rate: 1.2,
            reload_time: 2.0,
            projectile_speed: 40.0,
            damage: 8.0,
            pellets: 6,
            spread: 0.12,
        },
        WeaponKind::Smg => WeaponProfile {
            magazine_size: 40,
            fire_rate: 10.0,
            reload_time: 1.8,
            projectile_speed: 45.0,
            damage: 6.0,
            pellets: 1,
            spread: 0.04,
        },
        WeaponKind::Sniper => WeaponProfile {
            magazine_size: 5,
            fire_rate: 0.8,
            reload_time: 2.5,
            projectile_speed: 80.0,
            damage: 50.0,
            pellets: 1,
            spread: 0.0,
        },
    }
}

/// One projectile to launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub origin: Vec3,
    pub direction: Vec3,
    pub speed: f32,
    pub damage: f32,
}

#[derive(Debug, Clone)]
pub struct Weapon {
    kind: WeaponKind,
    profile: WeaponProfile,
    magazine_size: u32,
    ammo: u32,
    fire_cooldown: f32,
    reloading: bool,
    reload_timer: f32,
    shots_fired: u32,
    shots_hit: u32,
    upgrades: UpgradeLevels,
    upgrade_damage_multiplier: f32,
    fire_rate_multiplier: f32,
    mag_size_multiplier: f32,
    /// Timed damage buff. Kept apart from the upgrade multiplier.
    buff_multiplier: f32,
}

impl Weapon {
    pub fn new() -> Self {
        let profile = weapon_profile(WeaponKind::Pistol);
        Self {
            kind: WeaponKind::Pistol,
            profile,
            magazine_size: profile.magazine_size,
            ammo: profile.magazine_size,
            fire_cooldown: 0.0,
            reloading: false,
            reload_timer: 0.0,
            shots_fired: 0,
            shots_hit: 0,
            upgrades: UpgradeLevels::default(),
            upgrade_damage_multiplier: 1.0,
            fire_rate_multiplier: 1.0,
            mag_size_multiplier: 1.0,
            buff_multiplier: 1.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Equip another weapon with a full magazine. No-op for the current one.
    pub fn switch_weapon(&mut self, kind: WeaponKind) -> bool {
        if kind == self.kind {
            return false;
        }
        self.kind = kind;
        self.profile = weapon_profile(kind);
        self.magazine_size = self.scaled_magazine();
        self.ammo = self.magazine_size;
        self.fire_cooldown = 0.0;
        self.reloading = false;
        self.reload_timer = 0.0;
        true
    }

    pub fn can_fire(&self) -> bool {
        !self.reloading && self.ammo > 0 && self.fire_cooldown <= 0.0
    }

    /// Pull the trigger. Returns one shot per pellet, or nothing if the
    /// weapon cannot fire. Emptying the magazine starts a reload.
    pub fn fire(&mut self, origin: Vec3, forward: Vec3, rng: &mut ChaCha8Rng) -> Vec<Shot> {
        if !self.can_fire() {
            return Vec::new();
        }

        self.ammo -= 1;
        self.fire_cooldown = 1.0 / (self.profile.fire_rate * self.fire_rate_multiplier);
        self.shots_fired += 1;
        if self.ammo == 0 {
            self.start_reload();
        }

        let damage = self.damage_per_pellet();
        let base = forward.normalize_or_zero();
        (0..self.profile.pellets)
            .map(|_| {
                let mut direction = base;
                if self.profile.spread > 0.0 {
                    let spread = self.profile.spread;
                    direction += Vec3::new(
                        (rng.gen::<f32>() - 0.5) * spread,
                        (rng.gen::<f32>() - 0.5) * spread,
                        (rng.gen::<f32>() - 0.5) * spread,
                    );
                    direction = direction.normalize_or_zero();
                }
                Shot {
                    origin,
                    direction,
                    speed: self.profile.projectile_speed,
                    damage,
                }
            })
            .collect()
    }

    /// Begin reloading. False when already reloading or the magazine is full.
    pub fn start_reload(&mut self) -> bool {
        if self.reloading || self.ammo == self.magazine_size {
            return false;
        }
        self.reloading = true;
        self.reload_timer = self.profile.reload_time;
        true
    }

    pub fn update(&mut self, dt: f32) {
        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
        if self.reloading {
            self.reload_timer = (self.reload_timer - dt).max(0.0);
            if self.reload_timer <= 0.0 {
                self.ammo = self.magazine_size;
                self.reloading = false;
            }
        }
    }

    /// Recompute multipliers from shop levels.
    pub fn apply_upgrades(&mut self, levels: &UpgradeLevels) {
        self.upgrades = *levels;
        self.upgrade_damage_multiplier = 1.0 + levels.damage as f32 * DAMAGE_PER_LEVEL;
        self.fire_rate_multiplier = 1.0 + levels.fire_rate as f32 * FIRE_RATE_PER_LEVEL;
        self.mag_size_multiplier = 1.0 + levels.mag_size as f32 * MAG_SIZE_PER_LEVEL;
        self.magazine_size = self.scaled_magazine();
        self.ammo = self.ammo.min(self.magazine_size);
    }

    fn scaled_magazine(&self) -> u32 {
        (self.profile.magazine_size as f32 * self.mag_size_multiplier).round() as u32
    }

    pub fn register_hit(&mut self) {
        self.shots_hit += 1;
    }

    /// Hit percentage over trigger pulls.
    pub fn accuracy(&self) -> f32 {
        if self.shots_fired == 0 {
            return 0.0;
        }
        self.shots_hit as f32 / self.shots_fired as f32 * 100.0
    }

    /// round(base × upgrade × buff)
    pub fn damage_per_pellet(&self) -> f32 {
        (self.profile.damage * self.upgrade_damage_multiplier * self.buff_multiplier).round()
    }

    pub fn set_buff_multiplier(&mut self, multiplier: f32) {
        self.buff_multiplier = multiplier;
    }

    pub fn buff_multiplier(&self) -> f32 {
        self.buff_multiplier
    }

    /// Upgrade and buff multipliers combined.
    pub fn damage_multiplier(&self) -> f32 {
        self.upgrade_damage_multiplier * self.buff_multiplier
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    pub fn profile(&self) -> &WeaponProfile {
        &self.profile
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn magazine_size(&self) -> u32 {
        self.magazine_size
    }

    pub fn is_reloading(&self) -> bool {
        self.reloading
    }

    /// 0.0 when idle, approaching 1.0 as the reload finishes.
    pub fn reload_progress(&self) -> f32 {
        if !self.reloading || self.profile.reload_time <= 0.0 {
            return 0.0;
        }
        1.0 - self.reload_timer / self.profile.reload_time
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn shots_hit(&self) -> u32 {
        self.shots_hit
    }

    pub fn upgrades(&self) -> &UpgradeLevels {
        &self.upgrades
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new()
    }
}
