//! # duel-core
//!
//! Deterministic rules engine for a turn-based card-matchup game.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions Over Plain Data**: every operation is a synchronous
//!    function of immutable inputs. Callers own the authoritative state
//!    (round logs, mission lists, ratings) and pass snapshots in.
//!
//! 2. **No Ambient Inputs**: randomness is an injected [`core::GameRng`];
//!    the current calendar day is a passed value. Re-running any
//!    computation with the same inputs is bit-identical.
//!
//! 3. **Configuration Over Literals**: hidden-round positions, target
//!    scores, stage prerequisites, and the reward table are data, validated
//!    at load time.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG
//! - `cards`: card data model and catalog
//! - `battle`: round resolution and the victory tally
//! - `stages`: opponent encounters, unlock graph, enemy deck generation
//! - `progression`: experience curve and level rewards
//! - `missions`: date-scoped daily objectives
//! - `pvp`: rated players, rating-policy seam, leaderboard composition

pub mod battle;
pub mod cards;
pub mod core;
pub mod missions;
pub mod progression;
pub mod pvp;
pub mod stages;

// Re-export commonly used types
pub use crate::core::GameRng;

pub use crate::cards::{Card, CardCatalog, CardId, Faction, Rarity};

pub use crate::battle::{
    battle_value, resolve_round, tally, tally_through, RoundResult, Side, TallyConfig,
    VictoryState, Winner,
};

pub use crate::stages::{
    generate_enemy_deck, AiStrategy, BattleMode, ConfigError, DeckPolicy, EnemyConfig,
    StageCatalog, StageConfig, StageId, StageReward, UnlockCondition,
};

pub use crate::progression::{
    exp_ceiling, exp_floor, level_for_exp, leveled_up, progress_percent, CardPackGrant,
    FeatureUnlock, LevelReward, RewardTable, UnlockKind,
};

pub use crate::missions::{CalendarDay, DailyMissions, Mission, MissionReward, MissionType};

pub use crate::pvp::{
    compose, Leaderboard, MatchOutcome, Medal, PvPPlayer, PvPStats, RankedEntry, RatedEntry,
    RatingPolicy,
};
