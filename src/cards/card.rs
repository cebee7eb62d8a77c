//! Card data model.
//!
//! A `Card` is plain, immutable data: the engine compares cards and moves
//! them between won-card lists but never mutates one. Instance bookkeeping
//! (who currently holds a card) belongs to the caller.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Identifies the card "type" (e.g. "Cinder Drake"), not a physical copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card rarity tier.
///
/// Ordered: `Common < Rare < Epic < Legendary`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Card faction tag.
///
/// The engine does not interpret factions beyond equality; deck generation
/// uses them as an allow-list filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Ember,
    Tide,
    Thorn,
    Umbra,
}

/// Immutable card data.
///
/// ## Example
///
/// ```
/// use duel_core::cards::{Card, CardId, Faction, Rarity};
///
/// let drake = Card::new(CardId::new(1), "Cinder Drake", 47)
///     .with_level(3)
///     .with_rarity(Rarity::Rare)
///     .with_faction(Faction::Ember);
///
/// assert_eq!(drake.power, 47);
/// assert_eq!(drake.rarity, Rarity::Rare);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Combat power. Round resolution compares a value derived from this.
    pub power: i64,

    /// Card level.
    pub level: u32,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Faction tag.
    pub faction: Faction,
}

impl Card {
    /// Create a new card with default level 1, `Common` rarity, `Ember` faction.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, power: i64) -> Self {
        Self {
            id,
            name: name.into(),
            power,
            level: 1,
            rarity: Rarity::Common,
            faction: Faction::Ember,
        }
    }

    /// Set the card level (builder pattern).
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set the faction (builder pattern).
    #[must_use]
    pub fn with_faction(mut self, faction: Faction) -> Self {
        self.faction = faction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new(CardId::new(1), "Test Card", 30)
            .with_level(5)
            .with_rarity(Rarity::Epic)
            .with_faction(Faction::Umbra);

        assert_eq!(card.name, "Test Card");
        assert_eq!(card.power, 30);
        assert_eq!(card.level, 5);
        assert_eq!(card.rarity, Rarity::Epic);
        assert_eq!(card.faction, Faction::Umbra);
    }

    #[test]
    fn test_card_defaults() {
        let card = Card::new(CardId::new(2), "Plain", 10);

        assert_eq!(card.level, 1);
        assert_eq!(card.rarity, Rarity::Common);
        assert_eq!(card.faction, Faction::Ember);
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(7), "Round Trip", 55)
            .with_rarity(Rarity::Legendary)
            .with_faction(Faction::Tide);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
