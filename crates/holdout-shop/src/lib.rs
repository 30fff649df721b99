//! Between-wave shop for HOLDOUT.
//!
//! Prices stat upgrades and weapons, tracks what the player owns across a
//! session, and hands the engine a `ShopResult` when the visit closes.

pub mod error;
pub mod shop;
pub mod upgrades;

pub use error::ShopError;
pub use shop::Shop;
