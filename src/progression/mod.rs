//! Progression: experience-to-level curve and level rewards.
//!
//! ## Key Types
//!
//! - curve functions: `level_for_exp`, `progress_percent`, `leveled_up`
//! - `LevelReward` / `RewardTable`: authored rewards for early levels with
//!   a closed-form fallback beyond the table

pub mod curve;
pub mod rewards;

pub use curve::{exp_ceiling, exp_floor, level_for_exp, leveled_up, progress_percent};
pub use rewards::{CardPackGrant, FeatureUnlock, LevelReward, RewardTable, UnlockKind};
