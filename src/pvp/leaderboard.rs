//! Leaderboard composition.
//!
//! Merges the live player into a fixed pool of rated opponents and derives
//! display standings: the full ordering, the player's rank, a top-K slice,
//! and a supplementary player row when the player falls outside the top K.

use serde::{Deserialize, Serialize};

/// One rated competitor as fed to the composer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedEntry {
    /// Display name.
    pub name: String,

    /// Rating the ordering is derived from.
    pub rating: i32,

    /// Competitor level (display only).
    pub level: u32,

    /// Marks the live player's own entry.
    pub is_player: bool,
}

impl RatedEntry {
    /// Create a non-player (pool) entry.
    #[must_use]
    pub fn bot(name: impl Into<String>, rating: i32, level: u32) -> Self {
        Self {
            name: name.into(),
            rating,
            level,
            is_player: false,
        }
    }

    /// Create the live player's entry.
    #[must_use]
    pub fn player(name: impl Into<String>, rating: i32, level: u32) -> Self {
        Self {
            name: name.into(),
            rating,
            level,
            is_player: true,
        }
    }
}

/// Medal marker for the podium ranks. Presentation only; no effect on
/// ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// The medal for a 1-based rank, if it is a podium rank.
    #[must_use]
    pub const fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    /// The conventional emoji marker.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Medal::Gold => "\u{1F947}",
            Medal::Silver => "\u{1F948}",
            Medal::Bronze => "\u{1F949}",
        }
    }
}

/// A competitor with its derived standing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based rank.
    pub rank: usize,

    /// Podium medal, ranks 1-3 only.
    pub medal: Option<Medal>,

    /// The underlying entry.
    pub entry: RatedEntry,
}

/// Composed standings for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Every competitor, ordered by rating descending.
    pub ordered: Vec<RankedEntry>,

    /// The player's 1-based rank in `ordered`.
    pub rank: usize,

    /// The top-K slice for display.
    pub top: Vec<RankedEntry>,

    /// The player's own row, present only when their rank exceeds K.
    pub player_row: Option<RankedEntry>,
}

/// Merge `player` into `pool` and compose standings.
///
/// The ordering is by rating descending; the sort is stable, so entries
/// with equal ratings keep their insertion order (pool first, player
/// appended last) - that is the documented tiebreak.
///
/// ```
/// use duel_core::pvp::{compose, RatedEntry};
///
/// let pool = vec![
///     RatedEntry::bot("Vex", 1200, 20),
///     RatedEntry::bot("Moth", 1100, 18),
///     RatedEntry::bot("Pyre", 1000, 15),
/// ];
/// let board = compose(&pool, RatedEntry::player("You", 1150, 12), 10);
///
/// assert_eq!(board.rank, 2);
/// ```
#[must_use]
pub fn compose(pool: &[RatedEntry], player: RatedEntry, top_k: usize) -> Leaderboard {
    let mut player = player;
    player.is_player = true;

    let mut merged: Vec<RatedEntry> = pool.to_vec();
    merged.push(player);
    merged.sort_by_key(|e| std::cmp::Reverse(e.rating));

    let ordered: Vec<RankedEntry> = merged
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry {
            rank: index + 1,
            medal: Medal::for_rank(index + 1),
            entry,
        })
        .collect();

    // Exactly one entry is the player's: the one appended above.
    let rank = ordered
        .iter()
        .find(|r| r.entry.is_player)
        .map(|r| r.rank)
        .unwrap_or(ordered.len());

    let top: Vec<RankedEntry> = ordered.iter().take(top_k).cloned().collect();

    let player_row = (rank > top_k)
        .then(|| ordered[rank - 1].clone());

    Leaderboard {
        ordered,
        rank,
        top,
        player_row,
    }
}
