//! Rated players and their match-history aggregates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Cards in a PvP selection.
pub const SELECTION_SIZE: usize = 5;

/// Outcome of one PvP match from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

/// A rated PvP competitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvPPlayer {
    /// Stable identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Current rating.
    pub rating: i32,

    /// Player level.
    pub level: u32,

    /// The fixed 5-card selection fielded in matches.
    pub selection: SmallVec<[CardId; SELECTION_SIZE]>,
}

impl PvPPlayer {
    /// Create a player with an empty selection.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, rating: i32, level: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
            level,
            selection: SmallVec::new(),
        }
    }

    /// Set the card selection (builder pattern).
    #[must_use]
    pub fn with_selection(mut self, cards: &[CardId]) -> Self {
        self.selection = SmallVec::from_slice(cards);
        self
    }
}

/// Match-history aggregates for one player.
///
/// Pure fold over match outcomes: [`PvPStats::record`] returns the next
/// aggregate instead of mutating. The rating values folded in come from
/// whatever [`RatingPolicy`] the caller plugged in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvPStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,

    /// Consecutive wins as of the latest match.
    pub win_streak: u32,

    /// Longest win streak ever.
    pub best_streak: u32,

    /// Highest rating ever held.
    pub highest_rating: i32,

    /// Lowest rating ever held.
    pub lowest_rating: i32,
}

impl PvPStats {
    /// Fresh stats for a player entering at `initial_rating`.
    #[must_use]
    pub fn new(initial_rating: i32) -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
            win_streak: 0,
            best_streak: 0,
            highest_rating: initial_rating,
            lowest_rating: initial_rating,
        }
    }

    /// Fold one match outcome and the post-match rating into the aggregates.
    #[must_use]
    pub fn record(&self, outcome: MatchOutcome, new_rating: i32) -> Self {
        let mut next = *self;

        match outcome {
            MatchOutcome::Win => {
                next.wins += 1;
                next.win_streak += 1;
                next.best_streak = next.best_streak.max(next.win_streak);
            }
            MatchOutcome::Loss => {
                next.losses += 1;
                next.win_streak = 0;
            }
            MatchOutcome::Draw => {
                next.draws += 1;
                next.win_streak = 0;
            }
        }

        next.highest_rating = next.highest_rating.max(new_rating);
        next.lowest_rating = next.lowest_rating.min(new_rating);

        next
    }

    /// Total matches folded in.
    #[must_use]
    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// The rating-update seam.
///
/// The engine carries ratings and aggregates but does not define how a
/// rating moves after a match; callers supply the formula.
pub trait RatingPolicy {
    /// The player's next rating given both current ratings and the outcome.
    fn update(&self, rating: i32, opponent_rating: i32, outcome: MatchOutcome) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-step policy: enough to exercise the seam without committing
    /// the engine to a formula.
    struct FixedStep(i32);

    impl RatingPolicy for FixedStep {
        fn update(&self, rating: i32, _opponent_rating: i32, outcome: MatchOutcome) -> i32 {
            match outcome {
                MatchOutcome::Win => rating + self.0,
                MatchOutcome::Loss => rating - self.0,
                MatchOutcome::Draw => rating,
            }
        }
    }

    #[test]
    fn test_record_counts_outcomes() {
        let stats = PvPStats::new(1000)
            .record(MatchOutcome::Win, 1010)
            .record(MatchOutcome::Loss, 1000)
            .record(MatchOutcome::Draw, 1000);

        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.matches_played(), 3);
    }

    #[test]
    fn test_streak_tracking() {
        let stats = PvPStats::new(1000)
            .record(MatchOutcome::Win, 1010)
            .record(MatchOutcome::Win, 1020)
            .record(MatchOutcome::Loss, 1010)
            .record(MatchOutcome::Win, 1020);

        assert_eq!(stats.win_streak, 1);
        assert_eq!(stats.best_streak, 2);
    }

    #[test]
    fn test_rating_extremes() {
        let stats = PvPStats::new(1000)
            .record(MatchOutcome::Win, 1050)
            .record(MatchOutcome::Loss, 980)
            .record(MatchOutcome::Win, 1020);

        assert_eq!(stats.highest_rating, 1050);
        assert_eq!(stats.lowest_rating, 980);
    }

    #[test]
    fn test_rating_policy_seam() {
        let policy = FixedStep(16);

        assert_eq!(policy.update(1000, 1200, MatchOutcome::Win), 1016);
        assert_eq!(policy.update(1000, 1200, MatchOutcome::Loss), 984);
        assert_eq!(policy.update(1000, 1200, MatchOutcome::Draw), 1000);
    }

    #[test]
    fn test_player_selection() {
        let player = PvPPlayer::new("p1", "Aster", 1150, 12)
            .with_selection(&[1, 2, 3, 4, 5].map(CardId::new));

        assert_eq!(player.selection.len(), SELECTION_SIZE);
        assert_eq!(player.selection[0], CardId::new(1));
    }

    #[test]
    fn test_stats_serialization() {
        let stats = PvPStats::new(1000).record(MatchOutcome::Win, 1016);

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: PvPStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
