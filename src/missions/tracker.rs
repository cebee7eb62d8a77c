//! The daily mission list and its reset/progress rules.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::mission::{Mission, MissionReward, MissionType};

/// A local calendar day, `YYYY-MM-DD`.
///
/// The engine only ever compares days for equality; it does no calendar
/// arithmetic and never reads a clock. Callers sample the date once per
/// logical operation and pass it in, so a day cannot roll over between the
/// reset check and the progress write.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDay(pub String);

impl CalendarDay {
    /// Create a day stamp.
    #[must_use]
    pub fn new(day: impl Into<String>) -> Self {
        Self(day.into())
    }

    /// Get the raw stamp.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many missions a rolled day carries.
pub const MISSIONS_PER_DAY: usize = 3;

/// One day's mission list.
///
/// The wrapper is the unit of reset: a list stamped with a different day
/// than "today" is stale, and progress writes against it are no-ops. The
/// engine never fabricates a fresh list during a write; callers regenerate
/// via [`DailyMissions::roll`] when they observe staleness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMissions {
    /// The day this list belongs to.
    pub day: CalendarDay,

    /// The day's missions.
    pub missions: Vector<Mission>,
}

impl DailyMissions {
    /// Create a mission list for a day.
    #[must_use]
    pub fn new(day: CalendarDay, missions: impl IntoIterator<Item = Mission>) -> Self {
        Self {
            day,
            missions: missions.into_iter().collect(),
        }
    }

    /// Roll a fresh mission list for `day` from the standard pool.
    ///
    /// Picks [`MISSIONS_PER_DAY`] distinct missions. Generation is an
    /// explicit caller decision with an injected RNG; the tracker itself
    /// never rolls a list as a side effect.
    #[must_use]
    pub fn roll(day: CalendarDay, rng: &mut GameRng) -> Self {
        let mut pool = mission_pool();
        rng.shuffle(&mut pool);
        pool.truncate(MISSIONS_PER_DAY);

        Self::new(day, pool)
    }

    /// Whether this list is stale relative to `today`.
    #[must_use]
    pub fn is_stale(&self, today: &CalendarDay) -> bool {
        self.day != *today
    }

    /// Advance every open mission of `kind` by `amount`.
    ///
    /// Returns the updated list. If the stored day is not `today`, the
    /// update is a no-op and the input is returned unchanged - a stale list
    /// is a valid state, not an error. Progress is clamped per mission and
    /// already-completed missions are untouched, so re-applying an event is
    /// idempotent once targets are reached.
    #[must_use]
    pub fn apply_progress(&self, today: &CalendarDay, kind: MissionType, amount: u32) -> Self {
        if self.is_stale(today) {
            return self.clone();
        }

        let missions = self
            .missions
            .iter()
            .map(|m| if m.kind == kind { m.advanced(amount) } else { m.clone() })
            .collect();

        Self {
            day: self.day.clone(),
            missions,
        }
    }

    /// Claim a completed mission's reward.
    ///
    /// Returns the updated list and the reward, or the input unchanged and
    /// `None` if the mission is unknown, incomplete, or already claimed.
    #[must_use]
    pub fn claim(&self, mission_id: &str) -> (Self, Option<MissionReward>) {
        let Some(index) = self.missions.iter().position(|m| m.id == mission_id) else {
            return (self.clone(), None);
        };

        let mission = &self.missions[index];
        if !mission.is_claimable() {
            return (self.clone(), None);
        }

        let mut claimed = mission.clone();
        claimed.claimed = true;
        let reward = claimed.reward;

        let mut missions = self.missions.clone();
        missions.set(index, claimed);

        (Self { day: self.day.clone(), missions }, Some(reward))
    }

    /// Count of completed-but-unclaimed missions.
    #[must_use]
    pub fn completed_unclaimed(&self) -> usize {
        self.missions.iter().filter(|m| m.is_claimable()).count()
    }
}

/// The standard mission pool a day's list is rolled from.
fn mission_pool() -> Vec<Mission> {
    vec![
        Mission::new(
            "m_play_3",
            MissionType::PlayMatches,
            3,
            MissionReward { coins: 100, tokens: 0 },
        ),
        Mission::new(
            "m_win_2",
            MissionType::WinMatches,
            2,
            MissionReward { coins: 150, tokens: 1 },
        ),
        Mission::new(
            "m_rounds_10",
            MissionType::WinRounds,
            10,
            MissionReward { coins: 120, tokens: 0 },
        ),
        Mission::new(
            "m_cards_15",
            MissionType::PlayCards,
            15,
            MissionReward { coins: 80, tokens: 0 },
        ),
        Mission::new(
            "m_clear_2",
            MissionType::ClearStages,
            2,
            MissionReward { coins: 200, tokens: 1 },
        ),
    ]
}
