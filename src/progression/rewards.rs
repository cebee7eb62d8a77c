//! Level rewards: an authored table with a scaling fallback.
//!
//! Levels 1-25 carry hand-authored rewards (static configuration, never
//! mutated at runtime). Levels beyond the table are synthesized by a
//! closed-form rule. The boundary is "is the level in the table" - the
//! authored range is not written down a second time anywhere.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Rarity;

use super::curve::level_for_exp;

/// What kind of thing a level unlock opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnlockKind {
    Feature,
    Mode,
    Chapter,
}

/// A one-time unlock granted at a level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureUnlock {
    /// Feature/mode/chapter identifier.
    pub id: String,

    /// What the identifier names.
    pub kind: UnlockKind,
}

/// A card pack granted at a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPackGrant {
    /// Number of cards in the pack.
    pub count: u32,

    /// Rarity of every card in the pack.
    pub rarity: Rarity,
}

/// Rewards granted on reaching a level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelReward {
    /// The level this entry rewards.
    pub level: u32,

    /// Coin grant.
    pub coins: i64,

    /// Token grant.
    pub tokens: u32,

    /// Human description for display.
    pub description: String,

    /// One-time unlock, if any.
    pub unlock: Option<FeatureUnlock>,

    /// Card pack grant, if any.
    pub card_pack: Option<CardPackGrant>,

    /// Milestone levels grant amplified rewards.
    pub milestone: bool,
}

impl LevelReward {
    /// Create a reward entry.
    #[must_use]
    pub fn new(level: u32, coins: i64, tokens: u32, description: impl Into<String>) -> Self {
        Self {
            level,
            coins,
            tokens,
            description: description.into(),
            unlock: None,
            card_pack: None,
            milestone: false,
        }
    }

    /// Attach a one-time unlock (builder pattern).
    #[must_use]
    pub fn with_unlock(mut self, kind: UnlockKind, id: impl Into<String>) -> Self {
        self.unlock = Some(FeatureUnlock { id: id.into(), kind });
        self
    }

    /// Attach a card pack grant (builder pattern).
    #[must_use]
    pub fn with_pack(mut self, count: u32, rarity: Rarity) -> Self {
        self.card_pack = Some(CardPackGrant { count, rarity });
        self
    }

    /// Mark this level as a milestone (builder pattern).
    #[must_use]
    pub fn milestone(mut self) -> Self {
        self.milestone = true;
        self
    }
}

/// The level reward lookup: authored table first, formula beyond it.
#[derive(Clone, Debug)]
pub struct RewardTable {
    authored: FxHashMap<u32, LevelReward>,
}

impl RewardTable {
    /// Build a table from authored entries.
    #[must_use]
    pub fn from_entries(entries: Vec<LevelReward>) -> Self {
        let authored = entries.into_iter().map(|e| (e.level, e)).collect();
        Self { authored }
    }

    /// The standard authored table: levels 1-25, milestones every 5 levels.
    #[must_use]
    pub fn standard() -> Self {
        use Rarity::Epic;
        use UnlockKind::{Chapter, Feature, Mode};

        Self::from_entries(vec![
            LevelReward::new(1, 50, 0, "Welcome to the arena"),
            LevelReward::new(2, 100, 1, "Finding your footing")
                .with_unlock(Feature, "stage-select"),
            LevelReward::new(3, 150, 1, "Daily missions open")
                .with_unlock(Feature, "daily-missions"),
            LevelReward::new(4, 200, 1, "Steady climb"),
            LevelReward::new(5, 500, 2, "First milestone")
                .with_unlock(Mode, "pvp-arena")
                .milestone(),
            LevelReward::new(6, 250, 1, "Keep it up"),
            LevelReward::new(7, 300, 1, "Deck editor open")
                .with_unlock(Feature, "deck-editor"),
            LevelReward::new(8, 350, 1, "Sharpened instincts"),
            LevelReward::new(9, 400, 1, "Almost there"),
            LevelReward::new(10, 1000, 2, "Chapter 2 begins")
                .with_unlock(Chapter, "chapter-2")
                .with_pack(1, Epic)
                .milestone(),
            LevelReward::new(11, 500, 1, "Seasoned duelist"),
            LevelReward::new(12, 550, 1, "Rising reputation"),
            LevelReward::new(13, 600, 1, "Unshaken"),
            LevelReward::new(14, 650, 1, "Tempered"),
            LevelReward::new(15, 1400, 3, "Chapter 3 begins")
                .with_unlock(Chapter, "chapter-3")
                .with_pack(1, Epic)
                .milestone(),
            LevelReward::new(16, 750, 1, "Veteran"),
            LevelReward::new(17, 800, 1, "Feared opponent"),
            LevelReward::new(18, 850, 1, "Tactician"),
            LevelReward::new(19, 900, 1, "Master tactician"),
            LevelReward::new(20, 1800, 3, "Ranked season opens")
                .with_unlock(Mode, "ranked-season")
                .with_pack(2, Epic)
                .milestone(),
            LevelReward::new(21, 1000, 1, "Elite"),
            LevelReward::new(22, 1100, 1, "Renowned"),
            LevelReward::new(23, 1200, 1, "Celebrated"),
            LevelReward::new(24, 1300, 1, "Legend in the making"),
            LevelReward::new(25, 2800, 3, "Chapter 4 begins")
                .with_unlock(Chapter, "chapter-4")
                .with_pack(2, Epic)
                .milestone(),
        ])
    }

    /// The reward for reaching `level`.
    ///
    /// Authored levels are returned verbatim; levels beyond the table are
    /// synthesized: `coins = 1500 + (level - 21) * 100`, doubled on
    /// milestones (every 5th level), 3 tokens on milestones and 1
    /// otherwise, and a pack of `level / 10` Epic cards on milestones only.
    #[must_use]
    pub fn get(&self, level: u32) -> LevelReward {
        self.authored
            .get(&level)
            .cloned()
            .unwrap_or_else(|| Self::synthesized(level))
    }

    /// Whether `feature_id` is unlocked at `level`.
    ///
    /// Unlocks are monotonic and cumulative: true iff some authored entry
    /// at or below `level` unlocks that ID. Further leveling never revokes.
    #[must_use]
    pub fn feature_unlocked(&self, feature_id: &str, level: u32) -> bool {
        self.authored.values().any(|entry| {
            entry.level <= level
                && entry
                    .unlock
                    .as_ref()
                    .is_some_and(|unlock| unlock.id == feature_id)
        })
    }

    /// Rewards for every level crossed by an experience gain, in level order.
    ///
    /// A grant from `old_exp` to `new_exp` that jumps several thresholds
    /// yields one entry per crossed level; callers granting only the final
    /// level use [`RewardTable::get`] with the new level instead.
    #[must_use]
    pub fn rewards_between(&self, old_exp: i64, new_exp: i64) -> Vec<LevelReward> {
        let old_level = level_for_exp(old_exp);
        let new_level = level_for_exp(new_exp);

        (old_level + 1..=new_level).map(|l| self.get(l)).collect()
    }

    fn synthesized(level: u32) -> LevelReward {
        let milestone = level % 5 == 0;
        let base_coins = 1500 + (i64::from(level) - 21) * 100;
        let coins = if milestone { base_coins * 2 } else { base_coins };
        let tokens = if milestone { 3 } else { 1 };

        let mut reward = LevelReward::new(level, coins, tokens, format!("Level {level} veteran bounty"));
        if milestone {
            reward = reward.with_pack(level / 10, Rarity::Epic).milestone();
        }
        reward
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::standard()
    }
}
