//! Upgrade and weapon price tables.

use holdout_core::constants::MAX_UPGRADE_LEVEL;
use holdout_core::enums::{UpgradeKind, WeaponKind};

/// (base cost, per-level cost scale)
pub fn upgrade_pricing(kind: UpgradeKind) -> (f64, f64) {
    match kind {
        UpgradeKind::Damage => (500.0, 1.5),
        UpgradeKind::FireRate => (400.0, 1.5),
        UpgradeKind::MagSize => (300.0, 1.4),
        UpgradeKind::MaxHealth => (400.0, 1.5),
        UpgradeKind::ShieldRegen => (350.0, 1.4),
    }
}

/// Cost of the next level given the current one: round(base × scale^level).
/// Returns None if already at max level.
pub fn upgrade_cost(kind: UpgradeKind, current_level: u32) -> Option<u64> {
    if current_level >= MAX_UPGRADE_LEVEL {
        return None;
    }
    let (base, scale) = upgrade_pricing(kind);
    Some((base * scale.powi(current_level as i32)).round() as u64)
}

/// Purchase price. The pistol is never sold.
pub fn weapon_cost(kind: WeaponKind) -> Option<u64> {
    match kind {
        WeaponKind::Pistol => None,
        WeaponKind::Shotgun => Some(800),
        WeaponKind::Smg => Some(600),
        WeaponKind::Sniper => Some(1000),
    }
}
