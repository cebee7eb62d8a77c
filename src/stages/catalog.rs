//! Stage catalog with load-time validation.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::cards::CardCatalog;

use super::config::{DeckPolicy, StageConfig, StageId};
use super::error::ConfigError;

/// Catalog of stage configurations.
///
/// Authored stage data is registered once at startup and validated against
/// the card catalog before any stage is offered for play.
#[derive(Clone, Debug, Default)]
pub struct StageCatalog {
    stages: FxHashMap<StageId, StageConfig>,
}

impl StageCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stage configuration.
    ///
    /// Panics if a stage with the same ID already exists.
    pub fn register(&mut self, stage: StageConfig) {
        if self.stages.contains_key(&stage.id) {
            panic!("Stage with ID {:?} already registered", stage.id);
        }
        self.stages.insert(stage.id, stage);
    }

    /// Get a stage configuration by ID.
    #[must_use]
    pub fn get(&self, id: StageId) -> Option<&StageConfig> {
        self.stages.get(&id)
    }

    /// Check if a stage ID is registered.
    #[must_use]
    pub fn contains(&self, id: StageId) -> bool {
        self.stages.contains_key(&id)
    }

    /// Get the number of registered stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Iterate over all stage configurations.
    pub fn iter(&self) -> impl Iterator<Item = &StageConfig> {
        self.stages.values()
    }

    /// Stages currently playable for a player.
    pub fn playable<'a>(
        &'a self,
        player_level: u32,
        cleared: &'a FxHashSet<StageId>,
    ) -> impl Iterator<Item = &'a StageConfig> {
        self.stages
            .values()
            .filter(move |s| s.is_playable(player_level, cleared))
    }

    /// Validate every registered stage against the card catalog.
    ///
    /// Returns the first error found: a fixed deck whose list disagrees with
    /// its declared count, a deck card missing from the catalog, or an
    /// unlock condition referencing an unregistered stage. Errors here are
    /// fatal to the offending stage's availability and must be surfaced
    /// before play, not mid-match.
    pub fn validate(&self, cards: &CardCatalog) -> Result<(), ConfigError> {
        for stage in self.stages.values() {
            self.validate_stage(stage, cards)?;
        }
        Ok(())
    }

    fn validate_stage(&self, stage: &StageConfig, cards: &CardCatalog) -> Result<(), ConfigError> {
        if let DeckPolicy::Fixed(ids) = &stage.enemy.deck {
            if ids.len() != stage.enemy.count {
                return Err(ConfigError::FixedDeckCount {
                    declared: stage.enemy.count,
                    listed: ids.len(),
                });
            }
            for &id in ids {
                if !cards.contains(id) {
                    return Err(ConfigError::UnknownCard { card: id });
                }
            }
        }

        if let Some(prereq) = stage.unlock.as_ref().and_then(|u| u.stage) {
            if !self.stages.contains_key(&prereq) {
                return Err(ConfigError::UnknownPrerequisite {
                    stage: stage.id,
                    missing: prereq,
                });
            }
        }

        Ok(())
    }
}
