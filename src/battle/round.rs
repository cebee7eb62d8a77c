//! Round resolution: one player card against one enemy card.
//!
//! The comparison is pure and total: every pair of cards yields exactly one
//! of player win, enemy win, or draw. Cards are never mutated.
//!
//! ## Battle Value
//!
//! Rounds compare the **last digit** of each card's power rather than the
//! raw power. A 47-power card fights with value 7 and loses to a 9-power
//! card fighting with value 9. This keeps every card in the pool live in
//! every matchup.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

use super::tally::TallyConfig;

/// A side of the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

/// Outcome of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Enemy,
    Draw,
}

impl Winner {
    /// The winning side, or `None` for a draw.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Winner::Player => Some(Side::Player),
            Winner::Enemy => Some(Side::Enemy),
            Winner::Draw => None,
        }
    }

    /// Whether this outcome is a draw.
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, Winner::Draw)
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Winner::Player,
            Side::Enemy => Winner::Enemy,
        }
    }
}

/// The value a card fights with: the last digit of its power.
#[must_use]
pub fn battle_value(power: i64) -> i64 {
    power.rem_euclid(10)
}

/// Resolve one round between a player card and an enemy card.
///
/// Higher battle value wins; equal values draw.
///
/// ```
/// use duel_core::battle::{resolve_round, Winner};
/// use duel_core::cards::{Card, CardId};
///
/// let player = Card::new(CardId::new(1), "Drake", 47);
/// let enemy = Card::new(CardId::new(2), "Imp", 9);
///
/// // Value 7 vs value 9.
/// assert_eq!(resolve_round(&player, &enemy), Winner::Enemy);
/// ```
#[must_use]
pub fn resolve_round(player_card: &Card, enemy_card: &Card) -> Winner {
    use std::cmp::Ordering;

    match battle_value(player_card.power).cmp(&battle_value(enemy_card.power)) {
        Ordering::Greater => Winner::Player,
        Ordering::Less => Winner::Enemy,
        Ordering::Equal => Winner::Draw,
    }
}

/// One resolved round of a match.
///
/// Created once per round and appended to the match's ordered round log;
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based round number within the match.
    pub round_number: u32,

    /// Round outcome.
    pub winner: Winner,

    /// The card the player committed this round.
    pub player_card: Card,

    /// The card the enemy committed this round.
    pub enemy_card: Card,
}

impl RoundResult {
    /// Resolve a round and record the result.
    #[must_use]
    pub fn resolve(round_number: u32, player_card: Card, enemy_card: Card) -> Self {
        let winner = resolve_round(&player_card, &enemy_card);
        Self {
            round_number,
            winner,
            player_card,
            enemy_card,
        }
    }

    /// Construct a result with a known outcome.
    ///
    /// Useful when replaying a persisted round log.
    #[must_use]
    pub fn with_winner(round_number: u32, winner: Winner, player_card: Card, enemy_card: Card) -> Self {
        Self {
            round_number,
            winner,
            player_card,
            enemy_card,
        }
    }

    /// Whether this round occupies one of the configured hidden positions.
    #[must_use]
    pub fn is_hidden_round(&self, config: &TallyConfig) -> bool {
        config.hidden_rounds.contains(&self.round_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn card(id: u32, power: i64) -> Card {
        Card::new(CardId::new(id), format!("Card {id}"), power)
    }

    #[test]
    fn test_battle_value_is_last_digit() {
        assert_eq!(battle_value(47), 7);
        assert_eq!(battle_value(9), 9);
        assert_eq!(battle_value(120), 0);
        assert_eq!(battle_value(5), 5);
    }

    #[test]
    fn test_higher_value_wins() {
        assert_eq!(resolve_round(&card(1, 8), &card(2, 3)), Winner::Player);
        assert_eq!(resolve_round(&card(1, 3), &card(2, 8)), Winner::Enemy);
    }

    #[test]
    fn test_raw_power_does_not_decide() {
        // 47 fights with 7, 9 fights with 9.
        assert_eq!(resolve_round(&card(1, 47), &card(2, 9)), Winner::Enemy);
    }

    #[test]
    fn test_equal_values_draw() {
        assert_eq!(resolve_round(&card(1, 13), &card(2, 23)), Winner::Draw);
        assert_eq!(resolve_round(&card(1, 0), &card(2, 10)), Winner::Draw);
    }

    #[test]
    fn test_resolution_does_not_mutate_cards() {
        let player = card(1, 47);
        let enemy = card(2, 9);
        let (p_before, e_before) = (player.clone(), enemy.clone());

        let _ = resolve_round(&player, &enemy);

        assert_eq!(player, p_before);
        assert_eq!(enemy, e_before);
    }

    #[test]
    fn test_winner_side() {
        assert_eq!(Winner::Player.side(), Some(Side::Player));
        assert_eq!(Winner::Enemy.side(), Some(Side::Enemy));
        assert_eq!(Winner::Draw.side(), None);
        assert!(Winner::Draw.is_draw());
    }

    #[test]
    fn test_hidden_round_positions() {
        let config = TallyConfig::default();

        for (round, hidden) in [(1, false), (2, true), (3, false), (4, true), (5, false)] {
            let result = RoundResult::resolve(round, card(1, 8), card(2, 3));
            assert_eq!(result.is_hidden_round(&config), hidden, "round {round}");
        }
    }

    #[test]
    fn test_round_result_serialization() {
        let result = RoundResult::resolve(1, card(1, 8), card(2, 3));

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: RoundResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
    }
}
