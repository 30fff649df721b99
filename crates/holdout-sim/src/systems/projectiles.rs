//! Projectile simulator: straight-line ballistic entities with a max range.

use glam::Vec3;
use log::debug;

use holdout_core::constants::*;
use holdout_core::types::Handle;

use crate::pool::Pool;

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub origin: Vec3,
    pub position: Vec3,
    /// Unit vector.
    pub direction: Vec3,
    pub speed: f32,
    pub damage: f32,
    pub owner_is_player: bool,
    pub distance_traveled: f32,
}

pub struct ProjectileSimulator {
    pool: Pool<Projectile>,
}

impl ProjectileSimulator {
    pub fn new() -> Self {
        Self::with_capacity(PROJECTILE_POOL_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: Pool::with_capacity(capacity),
        }
    }

    /// Launch a projectile. Returns `None` if the pool is exhausted or the
    /// direction is degenerate.
    pub fn spawn(
        &mut self,
        origin: Vec3,
        direction: Vec3,
        speed: f32,
        damage: f32,
        owner_is_player: bool,
    ) -> Option<Handle> {
        let direction = direction.try_normalize()?;
        let handle = self.pool.acquire(Projectile {
            origin,
            position: origin,
            direction,
            speed,
            damage,
            owner_is_player,
            distance_traveled: 0.0,
        });
        if handle.is_none() {
            debug!("projectile pool exhausted, shot dropped");
        }
        handle
    }

    /// Advance every projectile and expire the ones past max range or
    /// below the floor limit. Returns how many expired.
    pub fn update(&mut self, dt: f32) -> usize {
        let before = self.pool.len();
        self.pool.retain(|_, p| {
            let step = p.speed * dt;
            p.position += p.direction * step;
            p.distance_traveled += step;
            p.distance_traveled < PROJECTILE_MAX_DISTANCE && p.position.y >= PROJECTILE_MIN_HEIGHT
        });
        before - self.pool.len()
    }

    /// Remove a projectile after a confirmed hit.
    pub fn deactivate(&mut self, handle: Handle) -> bool {
        self.pool.release(handle).is_some()
    }

    pub fn get(&self, handle: Handle) -> Option<&Projectile> {
        self.pool.get(handle)
    }

    /// Active projectiles in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &Projectile)> {
        self.pool.iter()
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn clear(&mut self) {
        self.pool.clear();
    }
}

impl Default for ProjectileSimulator {
    fn default() -> Self {
        Self::new()
    }
}
