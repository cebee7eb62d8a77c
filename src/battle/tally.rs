//! Victory tally: folding a round log into a match score.
//!
//! The tally is a pure fold over an ordered `RoundResult` sequence. It is
//! never stored on its own; it is always recomputable from the round log
//! and the `TallyConfig`, and recomputing with the same inputs is
//! bit-identical.
//!
//! ## Hidden-Round Bonus
//!
//! Designated rounds (2 and 4 by default) are "hidden" rounds. If the same
//! side wins every hidden round, that side receives one bonus point. The
//! bonus is evaluated once, after the whole input is folded, so a best-of-5
//! match can end after four decisive rounds: a side at 2 wins holding both
//! hidden rounds reaches 3 before round 5 is ever played.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

use super::round::{RoundResult, Side};

/// Points needed to win a match unless configured otherwise.
pub const DEFAULT_TARGET_SCORE: u32 = 3;

/// Hidden-round positions for the standard 5-round match.
pub const DEFAULT_HIDDEN_ROUNDS: [u32; 2] = [2, 4];

/// Match scoring configuration.
///
/// Hidden-round positions are configuration, not literals, so alternate
/// match lengths can redefine them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Score at which the match ends.
    pub target_score: u32,

    /// 1-based round numbers whose consecutive-win bonus applies.
    pub hidden_rounds: SmallVec<[u32; 2]>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            hidden_rounds: SmallVec::from_slice(&DEFAULT_HIDDEN_ROUNDS),
        }
    }
}

impl TallyConfig {
    /// Create a configuration with the given target score and the default
    /// hidden rounds.
    #[must_use]
    pub fn new(target_score: u32) -> Self {
        Self {
            target_score,
            ..Self::default()
        }
    }

    /// Replace the hidden-round positions (builder pattern).
    #[must_use]
    pub fn with_hidden_rounds(mut self, rounds: &[u32]) -> Self {
        self.hidden_rounds = SmallVec::from_slice(rounds);
        self
    }
}

/// Match score derived from a round log.
///
/// Both scores start at 0 and are monotonically non-decreasing over
/// prefixes of the same log. `is_game_over` and `final_winner` are derived
/// from the scores and the target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryState {
    /// Player points, bonus included.
    pub player_score: u32,

    /// Enemy points, bonus included.
    pub enemy_score: u32,

    /// Cards the player won, in round order. Draws record nothing.
    pub player_cards: Vector<Card>,

    /// Cards the enemy won, in round order. Draws record nothing.
    pub enemy_cards: Vector<Card>,

    /// True iff either score has reached the target.
    pub is_game_over: bool,

    /// The winning side once the game is over, `None` until then.
    ///
    /// If the hidden-round bonus pushes both sides past the target in the
    /// same fold, the player's threshold is checked first; that ordering is
    /// the deciding convention.
    pub final_winner: Option<Side>,
}

impl VictoryState {
    fn empty() -> Self {
        Self {
            player_score: 0,
            enemy_score: 0,
            player_cards: Vector::new(),
            enemy_cards: Vector::new(),
            is_game_over: false,
            final_winner: None,
        }
    }
}

/// Fold a round log into a `VictoryState`.
///
/// Draws contribute nothing. Each decisive round adds one point to the
/// winning side and appends that side's own card to its won-card list.
/// After the fold, the hidden-round bonus is applied once.
///
/// Total over well-formed input: duplicate or out-of-range round numbers
/// are a caller contract violation, not a recoverable condition.
///
/// ```
/// use duel_core::battle::{tally, RoundResult, Side, TallyConfig, Winner};
/// use duel_core::cards::{Card, CardId};
///
/// let card = |id, power| Card::new(CardId::new(id), "c", power);
/// let results = vec![
///     RoundResult::with_winner(1, Winner::Player, card(1, 9), card(2, 1)),
///     RoundResult::with_winner(2, Winner::Player, card(3, 8), card(4, 2)),
///     RoundResult::with_winner(3, Winner::Enemy, card(5, 1), card(6, 9)),
///     RoundResult::with_winner(4, Winner::Player, card(7, 8), card(8, 2)),
/// ];
///
/// // 3 round wins plus the hidden-round bonus (rounds 2 and 4).
/// let state = tally(&results, &TallyConfig::default());
/// assert_eq!(state.player_score, 4);
/// assert_eq!(state.final_winner, Some(Side::Player));
/// ```
#[must_use]
pub fn tally(results: &[RoundResult], config: &TallyConfig) -> VictoryState {
    let mut state = VictoryState::empty();
    let mut hidden: SmallVec<[Option<Side>; 2]> =
        SmallVec::from_elem(None, config.hidden_rounds.len());

    for result in results {
        let Some(side) = result.winner.side() else {
            continue;
        };

        match side {
            Side::Player => {
                state.player_score += 1;
                state.player_cards.push_back(result.player_card.clone());
            }
            Side::Enemy => {
                state.enemy_score += 1;
                state.enemy_cards.push_back(result.enemy_card.clone());
            }
        }

        if let Some(slot) = config
            .hidden_rounds
            .iter()
            .position(|&r| r == result.round_number)
        {
            hidden[slot] = Some(side);
        }
    }

    // Bonus: every hidden slot filled, all by the same side.
    if let Some(side) = hidden_bonus(&hidden) {
        match side {
            Side::Player => state.player_score += 1,
            Side::Enemy => state.enemy_score += 1,
        }
    }

    state.is_game_over =
        state.player_score >= config.target_score || state.enemy_score >= config.target_score;
    state.final_winner = if state.player_score >= config.target_score {
        Some(Side::Player)
    } else if state.enemy_score >= config.target_score {
        Some(Side::Enemy)
    } else {
        None
    };

    state
}

/// The match state as of the end of `through_round`.
///
/// A prefix fold: only rounds numbered `<= through_round` participate.
/// When `through_round` covers the whole log this agrees exactly with
/// [`tally`].
#[must_use]
pub fn tally_through(
    results: &[RoundResult],
    through_round: u32,
    config: &TallyConfig,
) -> VictoryState {
    let prefix_len = results
        .iter()
        .take_while(|r| r.round_number <= through_round)
        .count();
    tally(&results[..prefix_len], config)
}

fn hidden_bonus(hidden: &[Option<Side>]) -> Option<Side> {
    let first = (*hidden.first()?)?;
    hidden
        .iter()
        .all(|slot| *slot == Some(first))
        .then_some(first)
}
