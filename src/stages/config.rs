//! Stage and enemy configuration.
//!
//! Stages are authored, read-only data: the engine validates them at load
//! time and answers playability queries, but never mutates them.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Faction};

/// Unique identifier for a stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StageId(pub u16);

impl StageId {
    /// Create a new stage ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stage({})", self.0)
    }
}

/// How a stage's battle is presented and paced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BattleMode {
    Tactics,
    SuddenDeath,
    Ambush,
}

/// AI strategy tag consumed by battle presentation.
///
/// The engine carries the tag but does not implement the strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AiStrategy {
    Random,
    Smart,
    Pattern,
}

/// Enemy deck composition policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckPolicy {
    /// Exactly these cards, in this order. The list length must equal the
    /// enemy's declared count; a mismatch is a configuration error, never
    /// silently truncated or padded.
    Fixed(Vec<CardId>),

    /// Draw from the catalog, optionally restricted to a faction allow-list.
    Random { factions: Option<Vec<Faction>> },
}

/// Enemy descriptor: deck policy, deck size, and AI tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyConfig {
    /// Deck composition policy.
    pub deck: DeckPolicy,

    /// Number of cards in the enemy deck.
    pub count: usize,

    /// AI strategy tag.
    pub strategy: AiStrategy,
}

impl EnemyConfig {
    /// A fixed deck of exactly these cards.
    #[must_use]
    pub fn fixed(cards: Vec<CardId>, strategy: AiStrategy) -> Self {
        let count = cards.len();
        Self {
            deck: DeckPolicy::Fixed(cards),
            count,
            strategy,
        }
    }

    /// A random deck of `count` cards drawn from the whole catalog.
    #[must_use]
    pub fn random(count: usize, strategy: AiStrategy) -> Self {
        Self {
            deck: DeckPolicy::Random { factions: None },
            count,
            strategy,
        }
    }

    /// Restrict a random deck to the given factions (builder pattern).
    #[must_use]
    pub fn with_factions(mut self, factions: Vec<Faction>) -> Self {
        if let DeckPolicy::Random { factions: slot } = &mut self.deck {
            *slot = Some(factions);
        }
        self
    }
}

/// What a stage requires before it becomes playable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockCondition {
    /// Stage that must be cleared first, if any.
    pub stage: Option<StageId>,

    /// Minimum player level, if any.
    pub min_level: Option<u32>,
}

impl UnlockCondition {
    /// Require a cleared prerequisite stage.
    #[must_use]
    pub fn after_stage(stage: StageId) -> Self {
        Self {
            stage: Some(stage),
            min_level: None,
        }
    }

    /// Require a minimum player level.
    #[must_use]
    pub fn at_level(min_level: u32) -> Self {
        Self {
            stage: None,
            min_level: Some(min_level),
        }
    }

    /// Add a minimum-level requirement (builder pattern).
    #[must_use]
    pub fn with_min_level(mut self, min_level: u32) -> Self {
        self.min_level = Some(min_level);
        self
    }
}

/// Reward for clearing a stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageReward {
    pub coins: i64,
    pub experience: i64,
}

/// One playable opponent encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Unique identifier for this stage.
    pub id: StageId,

    /// Human-readable name (for display/debugging).
    pub name: String,

    /// Battle mode.
    pub mode: BattleMode,

    /// Difficulty rating.
    pub difficulty: u8,

    /// Reward for clearing the stage.
    pub reward: StageReward,

    /// Unlock requirements. `None` means always available.
    pub unlock: Option<UnlockCondition>,

    /// Enemy descriptor.
    pub enemy: EnemyConfig,
}

impl StageConfig {
    /// Create a stage with no unlock requirements and an empty reward.
    #[must_use]
    pub fn new(id: StageId, name: impl Into<String>, mode: BattleMode, enemy: EnemyConfig) -> Self {
        Self {
            id,
            name: name.into(),
            mode,
            difficulty: 1,
            reward: StageReward::default(),
            unlock: None,
            enemy,
        }
    }

    /// Set the difficulty rating (builder pattern).
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the clear reward (builder pattern).
    #[must_use]
    pub fn with_reward(mut self, coins: i64, experience: i64) -> Self {
        self.reward = StageReward { coins, experience };
        self
    }

    /// Set the unlock condition (builder pattern).
    #[must_use]
    pub fn with_unlock(mut self, unlock: UnlockCondition) -> Self {
        self.unlock = Some(unlock);
        self
    }

    /// Whether this stage is playable for a player at `player_level` who has
    /// cleared the stages in `cleared`.
    ///
    /// True iff the prerequisite stage (if any) has been cleared and the
    /// minimum level (if any) is met. Being locked is a valid state, not an
    /// error.
    #[must_use]
    pub fn is_playable(&self, player_level: u32, cleared: &FxHashSet<StageId>) -> bool {
        let Some(unlock) = &self.unlock else {
            return true;
        };

        let stage_ok = unlock.stage.map_or(true, |id| cleared.contains(&id));
        let level_ok = unlock.min_level.map_or(true, |min| player_level >= min);

        stage_ok && level_ok
    }
}
