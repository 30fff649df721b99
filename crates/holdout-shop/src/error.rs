use thiserror::Error;

use holdout_core::enums::{UpgradeKind, WeaponKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("{0:?} is already at max level")]
    MaxLevel(UpgradeKind),
    #[error("insufficient points: have {have}, need {need}")]
    InsufficientPoints { have: u64, need: u64 },
    #[error("{0:?} already owned")]
    WeaponAlreadyOwned(WeaponKind),
    #[error("{0:?} not owned")]
    WeaponNotOwned(WeaponKind),
    #[error("shop is closed")]
    Closed,
}
