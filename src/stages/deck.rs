//! Enemy deck generation.

use crate::cards::{Card, CardCatalog};
use crate::core::GameRng;

use super::config::{DeckPolicy, EnemyConfig};
use super::error::ConfigError;

/// Generate an enemy's deck from its configuration.
///
/// `Fixed` decks resolve their card IDs verbatim; an unknown ID or a count
/// mismatch is a [`ConfigError`]. `Random` decks draw `count` distinct cards
/// from the catalog, optionally restricted to a faction allow-list, using
/// the injected RNG; a pool smaller than `count` is a [`ConfigError`] rather
/// than a silently short deck.
///
/// ```
/// use duel_core::cards::{Card, CardCatalog, CardId};
/// use duel_core::core::GameRng;
/// use duel_core::stages::{generate_enemy_deck, AiStrategy, EnemyConfig};
///
/// let mut catalog = CardCatalog::new();
/// for id in 1..=8 {
///     catalog.register(Card::new(CardId::new(id), format!("Card {id}"), id as i64));
/// }
///
/// let enemy = EnemyConfig::random(5, AiStrategy::Random);
/// let mut rng = GameRng::new(42);
/// let deck = generate_enemy_deck(&enemy, &catalog, &mut rng).unwrap();
/// assert_eq!(deck.len(), 5);
/// ```
pub fn generate_enemy_deck(
    enemy: &EnemyConfig,
    catalog: &CardCatalog,
    rng: &mut GameRng,
) -> Result<Vec<Card>, ConfigError> {
    match &enemy.deck {
        DeckPolicy::Fixed(ids) => {
            if ids.len() != enemy.count {
                return Err(ConfigError::FixedDeckCount {
                    declared: enemy.count,
                    listed: ids.len(),
                });
            }
            ids.iter()
                .map(|&id| {
                    catalog
                        .get(id)
                        .cloned()
                        .ok_or(ConfigError::UnknownCard { card: id })
                })
                .collect()
        }
        DeckPolicy::Random { factions } => {
            let mut pool: Vec<&Card> = catalog
                .iter()
                .filter(|c| match factions {
                    Some(allowed) => allowed.contains(&c.faction),
                    None => true,
                })
                .collect();

            if pool.len() < enemy.count {
                return Err(ConfigError::InsufficientPool {
                    needed: enemy.count,
                    available: pool.len(),
                });
            }

            // Catalog iteration order is unspecified; sort by ID so the
            // draw depends only on the seed.
            pool.sort_by_key(|c| c.id.raw());
            rng.shuffle(&mut pool);

            Ok(pool.into_iter().take(enemy.count).cloned().collect())
        }
    }
}
