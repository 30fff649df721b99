//! Enemy roster: the pooled set of live enemies.

use glam::Vec3;
use log::debug;

use holdout_ai::enemy::EnemyInstance;
use holdout_core::constants::ENEMY_POOL_SIZE;
use holdout_core::enums::EnemyKind;
use holdout_core::types::Handle;

use crate::pool::Pool;

pub struct EnemyRoster {
    pool: Pool<EnemyInstance>,
}

impl EnemyRoster {
    pub fn new() -> Self {
        Self::with_capacity(ENEMY_POOL_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: Pool::with_capacity(capacity),
        }
    }

    /// Spawn an enemy. Returns `None` when the roster is full.
    pub fn spawn(&mut self, kind: EnemyKind, position: Vec3) -> Option<Handle> {
        let handle = self.pool.acquire(EnemyInstance::new(kind, position));
        if handle.is_none() {
            debug!("enemy pool exhausted, {kind:?} spawn dropped");
        }
        handle
    }

    /// Run every enemy's FSM and release the ones whose death animation
    /// finished. Returns how many were released.
    pub fn update(&mut self, dt: f32, player_position: Vec3) -> usize {
        let before = self.pool.len();
        self.pool
            .retain(|_, enemy| !enemy.update(dt, player_position).finished);
        before - self.pool.len()
    }

    /// Enemies on the field that are not dying.
    pub fn live_count(&self) -> usize {
        self.pool.iter().filter(|(_, e)| !e.is_dying()).count()
    }

    pub fn get(&self, handle: Handle) -> Option<&EnemyInstance> {
        self.pool.get(handle)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut EnemyInstance> {
        self.pool.get_mut(handle)
    }

    /// Active enemies in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &EnemyInstance)> {
        self.pool.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle, &mut EnemyInstance)> {
        self.pool.iter_mut()
    }

    /// Includes dying enemies.
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

impl Default for EnemyRoster {
    fn default() -> Self {
        Self::new()
    }
}
