//! Powerup director: loot drops, pickup lifetime, and timed buffs.
//!
//! At most one timed effect per kind is active. Collecting a kind that is
//! already active first restores the value the old effect replaced, then
//! applies the new one with a full duration, so buffs never compound.

use glam::{Vec2, Vec3};
use log::{debug, info};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::constants::*;
use holdout_core::enums::PowerupKind;
use holdout_core::events::GameEvent;
use holdout_core::state::{EffectView, PickupView};
use holdout_core::types::Handle;

use crate::pool::Pool;
use crate::systems::player::PlayerController;
use crate::systems::weapon::Weapon;

#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    pub kind: PowerupKind,
    pub position: Vec3,
    pub age: f32,
}

/// A running timed buff.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEffect {
    pub kind: PowerupKind,
    pub remaining: f32,
    /// Value the buff overwrote, written back on removal.
    restore: f32,
}

/// Weighted pick from the drop table.
pub fn roll_drop(rng: &mut ChaCha8Rng) -> PowerupKind {
    let total: u32 = PowerupKind::ALL.iter().map(|k| k.drop_weight()).sum();
    let mut roll = rng.gen_range(0..total);
    for kind in PowerupKind::ALL {
        let weight = kind.drop_weight();
        if roll < weight {
            return kind;
        }
        roll -= weight;
    }
    PowerupKind::Health
}

pub struct PowerupDirector {
    pickups: Pool<Pickup>,
    effects: Vec<ActiveEffect>,
}

impl PowerupDirector {
    pub fn new() -> Self {
        Self {
            pickups: Pool::with_capacity(MAX_PICKUPS),
            effects: Vec::new(),
        }
    }

    /// Drop pickups and forget effects without restoring anything. The
    /// player and weapon are reset alongside.
    pub fn reset(&mut self) {
        self.pickups.clear();
        self.effects.clear();
    }

    /// Roll for a drop where an enemy died.
    pub fn on_enemy_killed(
        &mut self,
        position: Vec3,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) -> Option<Handle> {
        if !rng.gen_bool(DROP_CHANCE) {
            return None;
        }
        let kind = roll_drop(rng);
        self.spawn_pickup(kind, position, events)
    }

    /// Place a pickup on the floor below `position`. `None` at the cap.
    pub fn spawn_pickup(
        &mut self,
        kind: PowerupKind,
        position: Vec3,
        events: &mut Vec<GameEvent>,
    ) -> Option<Handle> {
        let position = Vec3::new(position.x, PICKUP_HEIGHT, position.z);
        let Some(handle) = self.pickups.acquire(Pickup {
            kind,
            position,
            age: 0.0,
        }) else {
            debug!("pickup cap reached, {kind:?} drop discarded");
            return None;
        };
        events.push(GameEvent::PickupSpawned {
            slot: handle.index,
            kind,
            position,
        });
        Some(handle)
    }

    /// Tick effects, collect pickups in reach, expire old ones.
    pub fn update(
        &mut self,
        dt: f32,
        player: &mut PlayerController,
        weapon: &mut Weapon,
        events: &mut Vec<GameEvent>,
    ) {
        let mut expired = Vec::new();
        self.effects.retain_mut(|effect| {
            effect.remaining = (effect.remaining - dt).max(0.0);
            if effect.remaining <= 0.0 {
                expired.push(effect.clone());
                false
            } else {
                true
            }
        });
        for effect in expired {
            remove_effect(&effect, player, weapon);
            events.push(GameEvent::EffectExpired { kind: effect.kind });
        }

        let player_ground = Vec2::new(player.position.x, player.position.z);
        let mut collected = Vec::new();
        self.pickups.retain(|_, pickup| {
            pickup.age += dt;
            let ground = Vec2::new(pickup.position.x, pickup.position.z);
            if ground.distance(player_ground) < PICKUP_RADIUS {
                collected.push(pickup.kind);
                return false;
            }
            pickup.age <= PICKUP_LIFETIME
        });
        for kind in collected {
            self.collect(kind, player, weapon, events);
        }
    }

    /// Apply a pickup's effect.
    pub fn collect(
        &mut self,
        kind: PowerupKind,
        player: &mut PlayerController,
        weapon: &mut Weapon,
        events: &mut Vec<GameEvent>,
    ) {
        if let Some(index) = self.effects.iter().position(|e| e.kind == kind) {
            let prior = self.effects.remove(index);
            remove_effect(&prior, player, weapon);
        }

        match kind {
            PowerupKind::Health => player.heal(HEALTH_PICKUP_AMOUNT),
            PowerupKind::Speed => {
                let restore = player.speed_multiplier;
                player.speed_multiplier = SPEED_BOOST_MULTIPLIER;
                self.push_effect(kind, restore);
            }
            PowerupKind::Damage => {
                let restore = weapon.buff_multiplier();
                weapon.set_buff_multiplier(DAMAGE_BOOST_MULTIPLIER);
                self.push_effect(kind, restore);
            }
        }

        info!("collected {}", kind.label());
        events.push(GameEvent::PickupCollected {
            kind,
            label: kind.label().to_string(),
        });
    }

    fn push_effect(&mut self, kind: PowerupKind, restore: f32) {
        if let Some(remaining) = kind.duration() {
            self.effects.push(ActiveEffect {
                kind,
                remaining,
                restore,
            });
        }
    }

    pub fn pickups(&self) -> impl Iterator<Item = (Handle, &Pickup)> {
        self.pickups.iter()
    }

    pub fn effects(&self) -> &[ActiveEffect] {
        &self.effects
    }

    pub fn pickup_views(&self) -> Vec<PickupView> {
        self.pickups
            .iter()
            .map(|(handle, p)| PickupView {
                slot: handle.index,
                kind: p.kind,
                position: p.position,
                age: p.age,
            })
            .collect()
    }

    pub fn effect_views(&self) -> Vec<EffectView> {
        self.effects
            .iter()
            .map(|e| EffectView {
                kind: e.kind,
                remaining: e.remaining,
            })
            .collect()
    }
}

impl Default for PowerupDirector {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_effect(effect: &ActiveEffect, player: &mut PlayerController, weapon: &mut Weapon) {
    match effect.kind {
        PowerupKind::Health => {}
        PowerupKind::Speed => player.speed_multiplier = effect.restore,
        PowerupKind::Damage => weapon.set_buff_multiplier(effect.restore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn setup() -> (PowerupDirector, PlayerController, Weapon, Vec<GameEvent>) {
        (
            PowerupDirector::new(),
            PlayerController::new(),
            Weapon::new(),
            Vec::new(),
        )
    }

    #[test]
    fn speed_recollect_replaces_duration_without_compounding() {
        let (mut powerups, mut player, mut weapon, mut events) = setup();
        powerups.collect(PowerupKind::Speed, &mut player, &mut weapon, &mut events);
        powerups.update(SPEED_BOOST_DURATION - 2.0, &mut player, &mut weapon, &mut events);
        assert!((powerups.effects()[0].remaining - 2.0).abs() < 1e-4);

        powerups.collect(PowerupKind::Speed, &mut player, &mut weapon, &mut events);
        assert_eq!(powerups.effects().len(), 1);
        assert_eq!(powerups.effects()[0].remaining, SPEED_BOOST_DURATION);
        assert_eq!(player.speed_multiplier, SPEED_BOOST_MULTIPLIER);

        powerups.update(SPEED_BOOST_DURATION, &mut player, &mut weapon, &mut events);
        assert!(powerups.effects().is_empty());
        assert_eq!(player.speed_multiplier, 1.0);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::EffectExpired { kind: PowerupKind::Speed })));
    }

    #[test]
    fn damage_buff_restores_on_expiry() {
        let (mut powerups, mut player, mut weapon, mut events) = setup();
        powerups.collect(PowerupKind::Damage, &mut player, &mut weapon, &mut events);
        powerups.collect(PowerupKind::Damage, &mut player, &mut weapon, &mut events);
        assert_eq!(weapon.buff_multiplier(), DAMAGE_BOOST_MULTIPLIER);
        assert_eq!(weapon.damage_per_pellet(), 20.0);
        powerups.update(DAMAGE_BOOST_DURATION + 0.1, &mut player, &mut weapon, &mut events);
        assert_eq!(weapon.buff_multiplier(), 1.0);
    }

    #[test]
    fn health_pickup_heals_capped() {
        let (mut powerups, mut player, mut weapon, mut events) = setup();
        player.health = 50.0;
        powerups.collect(PowerupKind::Health, &mut player, &mut weapon, &mut events);
        assert_eq!(player.health, 80.0);
        powerups.collect(PowerupKind::Health, &mut player, &mut weapon, &mut events);
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
        assert!(powerups.effects().is_empty());
    }

    #[test]
    fn pickup_collected_on_proximity() {
        let (mut powerups, mut player, mut weapon, mut events) = setup();
        powerups.spawn_pickup(PowerupKind::Health, Vec3::new(1.0, 1.2, 0.0), &mut events);
        player.health = 10.0;
        powerups.update(0.01, &mut player, &mut weapon, &mut events);
        assert_eq!(player.health, 40.0);
        assert_eq!(powerups.pickups().count(), 0);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::PickupCollected { label, .. } if label == "+HEALTH"
        )));
    }

    #[test]
    fn pickup_expires_after_lifetime() {
        let (mut powerups, mut player, mut weapon, mut events) = setup();
        powerups.spawn_pickup(PowerupKind::Speed, Vec3::new(10.0, 0.0, 0.0), &mut events);
        powerups.update(PICKUP_LIFETIME - 1.0, &mut player, &mut weapon, &mut events);
        assert_eq!(powerups.pickups().count(), 1);
        powerups.update(2.0, &mut player, &mut weapon, &mut events);
        assert_eq!(powerups.pickups().count(), 0);
        assert_eq!(player.speed_multiplier, 1.0);
    }

    #[test]
    fn pickup_cap_drops_excess() {
        let (mut powerups, _, _, mut events) = setup();
        for _ in 0..MAX_PICKUPS {
            assert!(powerups
                .spawn_pickup(PowerupKind::Health, Vec3::new(10.0, 0.0, 0.0), &mut events)
                .is_some());
        }
        assert!(powerups
            .spawn_pickup(PowerupKind::Health, Vec3::new(10.0, 0.0, 0.0), &mut events)
            .is_none());
    }

    #[test]
    fn drop_rate_and_table_roughly_match_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut counts = [0u32; 3];
        for _ in 0..10_000 {
            match roll_drop(&mut rng) {
                PowerupKind::Health => counts[0] += 1,
                PowerupKind::Speed => counts[1] += 1,
                PowerupKind::Damage => counts[2] += 1,
            }
        }
        assert!((4500..5500).contains(&counts[0]), "{counts:?}");
        assert!((2000..3000).contains(&counts[1]), "{counts:?}");
        assert!((2000..3000).contains(&counts[2]), "{counts:?}");

        let mut powerups = PowerupDirector::new();
        let mut events = Vec::new();
        let mut drops = 0;
        for _ in 0..1000 {
            if powerups
                .on_enemy_killed(Vec3::new(10.0, 0.0, 0.0), &mut rng, &mut events)
                .is_some()
            {
                drops += 1;
            }
            powerups.reset();
        }
        assert!((220..380).contains(&drops), "{drops}");
    }
}
