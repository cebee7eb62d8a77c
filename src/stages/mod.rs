//! Stages: opponent encounters, unlock prerequisites, enemy deck generation.
//!
//! ## Key Types
//!
//! - `StageConfig` / `EnemyConfig`: authored encounter configuration
//! - `StageCatalog`: stage lookup with load-time validation
//! - `ConfigError`: configuration mistakes surfaced before play
//!
//! Stage prerequisites form a directed graph by stage ID. A stage is
//! playable only when its prerequisite has been cleared and the player's
//! level meets the minimum.

pub mod catalog;
pub mod config;
pub mod deck;
pub mod error;

pub use catalog::StageCatalog;
pub use config::{
    AiStrategy, BattleMode, DeckPolicy, EnemyConfig, StageConfig, StageId, StageReward,
    UnlockCondition,
};
pub use deck::generate_enemy_deck;
pub use error::ConfigError;
