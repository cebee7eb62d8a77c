//! Configuration errors.
//!
//! These surface at load/validation time and make the offending stage
//! unavailable; they are never raised mid-match.

use thiserror::Error;

use crate::cards::CardId;

use super::config::StageId;

/// A mistake in authored stage or enemy configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A fixed enemy deck lists a different number of cards than it declares.
    #[error("fixed deck declares {declared} cards but lists {listed}")]
    FixedDeckCount { declared: usize, listed: usize },

    /// An enemy deck references a card absent from the catalog.
    #[error("enemy deck references unknown card {card}")]
    UnknownCard { card: CardId },

    /// A stage's unlock condition references a stage absent from the catalog.
    #[error("stage {stage} requires unknown prerequisite stage {missing}")]
    UnknownPrerequisite { stage: StageId, missing: StageId },

    /// A random deck asks for more cards than the filtered pool holds.
    #[error("random deck needs {needed} cards but the filtered pool has {available}")]
    InsufficientPool { needed: usize, available: usize },
}
