//! Shop state across a session.

use log::info;
use serde::{Deserialize, Serialize};

use holdout_core::enums::{UpgradeKind, WeaponKind};
use holdout_core::types::{ShopResult, UpgradeLevels};

use crate::error::ShopError;
use crate::upgrades::{upgrade_cost, weapon_cost};

/// Upgrade levels and owned weapons persist across visits until `reset`.
/// Points are loaded on `open` and returned through `close`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    levels: UpgradeLevels,
    owned: Vec<WeaponKind>,
    selected: WeaponKind,
    points: u64,
    is_open: bool,
}

impl Default for Shop {
    fn default() -> Self {
        Self {
            levels: UpgradeLevels::default(),
            owned: vec![WeaponKind::Pistol],
            selected: WeaponKind::Pistol,
            points: 0,
            is_open: false,
        }
    }
}

impl Shop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every purchase. Used when a new game starts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn open(&mut self, points: u64) {
        self.points = points;
        self.is_open = true;
    }

    /// Buy the next level of an upgrade. Returns the price paid.
    pub fn purchase_upgrade(&mut self, kind: UpgradeKind) -> Result<u64, ShopError> {
        self.ensure_open()?;
        let level = self.levels.get(kind);
        let cost = upgrade_cost(kind, level).ok_or(ShopError::MaxLevel(kind))?;
        self.spend(cost)?;
        self.levels.set(kind, level + 1);
        info!("bought {kind:?} level {} for {cost}", level + 1);
        Ok(cost)
    }

    /// Buy a weapon and equip it on close. Returns the price paid.
    pub fn purchase_weapon(&mut self, kind: WeaponKind) -> Result<u64, ShopError> {
        self.ensure_open()?;
        if self.owns(kind) {
            return Err(ShopError::WeaponAlreadyOwned(kind));
        }
        let cost = weapon_cost(kind).ok_or(ShopError::WeaponAlreadyOwned(kind))?;
        self.spend(cost)?;
        self.owned.push(kind);
        self.selected = kind;
        info!("bought {kind:?} for {cost}");
        Ok(cost)
    }

    /// Choose which owned weapon to carry into the next wave.
    pub fn select_weapon(&mut self, kind: WeaponKind) -> Result<(), ShopError> {
        self.ensure_open()?;
        if !self.owns(kind) {
            return Err(ShopError::WeaponNotOwned(kind));
        }
        self.selected = kind;
        Ok(())
    }

    /// End the visit.
    pub fn close(&mut self) -> ShopResult {
        self.is_open = false;
        ShopResult {
            levels: self.levels,
            selected_weapon: self.selected,
            points_remaining: self.points,
        }
    }

    fn ensure_open(&self) -> Result<(), ShopError> {
        if self.is_open {
            Ok(())
        } else {
            Err(ShopError::Closed)
        }
    }

    fn spend(&mut self, cost: u64) -> Result<(), ShopError> {
        if self.points < cost {
            return Err(ShopError::InsufficientPoints {
                have: self.points,
                need: cost,
            });
        }
        self.points -= cost;
        Ok(())
    }

    pub fn owns(&self, kind: WeaponKind) -> bool {
        self.owned.contains(&kind)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn levels(&self) -> &UpgradeLevels {
        &self.levels
    }

    /// Price of the next level, or None when maxed.
    pub fn next_cost(&self, kind: UpgradeKind) -> Option<u64> {
        upgrade_cost(kind, self.levels.get(kind))
    }
}
