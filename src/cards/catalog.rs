//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores all card definitions known to the game.
//! It provides lookup by `CardId` and is the draw pool random enemy
//! decks are generated from.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId, Faction};

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use duel_core::cards::{Card, CardCatalog, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::new(CardId::new(1), "Cinder Drake", 47));
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Cinder Drake");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    ///
    /// Iteration order is unspecified; callers needing a stable order must
    /// sort (deck generation sorts by ID before drawing).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards by faction.
    pub fn find_by_faction(&self, faction: Faction) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.faction == faction)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rarity;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardId::new(1), "Test Card", 20));

        let found = catalog.get(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Card");

        assert!(catalog.get(CardId::new(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardId::new(1), "Card A", 10));
        catalog.register(Card::new(CardId::new(1), "Card B", 20));
    }

    #[test]
    fn test_find_by_faction() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardId::new(1), "Drake", 40).with_faction(Faction::Ember));
        catalog.register(Card::new(CardId::new(2), "Kelpie", 35).with_faction(Faction::Tide));
        catalog.register(Card::new(CardId::new(3), "Imp", 25).with_faction(Faction::Ember));

        let ember: Vec<_> = catalog.find_by_faction(Faction::Ember).collect();
        assert_eq!(ember.len(), 2);

        let tide: Vec<_> = catalog.find_by_faction(Faction::Tide).collect();
        assert_eq!(tide.len(), 1);
    }

    #[test]
    fn test_find_with_predicate() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardId::new(1), "Weak", 5));
        catalog.register(Card::new(CardId::new(2), "Strong", 90).with_rarity(Rarity::Epic));

        let epics: Vec<_> = catalog.find(|c| c.rarity == Rarity::Epic).collect();
        assert_eq!(epics.len(), 1);
        assert_eq!(epics[0].name, "Strong");
    }

    #[test]
    fn test_contains_and_len() {
        let mut catalog = CardCatalog::new();
        assert!(catalog.is_empty());

        catalog.register(Card::new(CardId::new(1), "Test", 10));

        assert!(catalog.contains(CardId::new(1)));
        assert!(!catalog.contains(CardId::new(99)));
        assert_eq!(catalog.len(), 1);
    }
}
