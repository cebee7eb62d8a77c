//! Mission data model.

use serde::{Deserialize, Serialize};

/// What a mission counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissionType {
    /// Matches played, win or lose.
    PlayMatches,
    /// Matches won.
    WinMatches,
    /// Individual rounds won.
    WinRounds,
    /// Cards committed to rounds.
    PlayCards,
    /// Stages cleared.
    ClearStages,
}

/// Reward for completing a mission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionReward {
    pub coins: i64,
    pub tokens: u32,
}

/// One daily objective.
///
/// Progress is monotone: `current` only grows, is clamped to `target`, and
/// `completed` never flips back to false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Stable identifier (for claims and display).
    pub id: String,

    /// What this mission counts.
    pub kind: MissionType,

    /// Progress needed to complete.
    pub target: u32,

    /// Progress so far, clamped to `target`.
    pub current: u32,

    /// Set the instant `current` reaches `target`; sticky thereafter.
    pub completed: bool,

    /// Whether the reward has been claimed.
    pub claimed: bool,

    /// Reward granted on claim.
    pub reward: MissionReward,
}

impl Mission {
    /// Create a fresh mission with zero progress.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: MissionType, target: u32, reward: MissionReward) -> Self {
        Self {
            id: id.into(),
            kind,
            target,
            current: 0,
            completed: false,
            claimed: false,
            reward,
        }
    }

    /// Advance progress by `amount`, clamped to the target.
    ///
    /// A no-op once completed; applying the same increment twice past
    /// completion changes nothing.
    #[must_use]
    pub fn advanced(&self, amount: u32) -> Self {
        if self.completed {
            return self.clone();
        }

        let current = self.current.saturating_add(amount).min(self.target);
        Self {
            current,
            completed: current >= self.target,
            ..self.clone()
        }
    }

    /// Completed but not yet claimed.
    #[must_use]
    pub fn is_claimable(&self) -> bool {
        self.completed && !self.claimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission(target: u32) -> Mission {
        Mission::new(
            "m_win_3",
            MissionType::WinMatches,
            target,
            MissionReward { coins: 100, tokens: 1 },
        )
    }

    #[test]
    fn test_advance_clamps_to_target() {
        let m = mission(3).advanced(5);

        assert_eq!(m.current, 3);
        assert!(m.completed);
    }

    #[test]
    fn test_completion_flips_at_target() {
        let m = mission(3).advanced(2);
        assert!(!m.completed);

        let m = m.advanced(1);
        assert!(m.completed);
    }

    #[test]
    fn test_advance_after_completion_is_noop() {
        let done = mission(3).advanced(3);
        let again = done.advanced(2);

        assert_eq!(again.current, 3);
        assert!(again.completed);
        assert_eq!(done, again);
    }

    #[test]
    fn test_claimable() {
        let mut m = mission(2).advanced(2);
        assert!(m.is_claimable());

        m.claimed = true;
        assert!(!m.is_claimable());

        assert!(!mission(2).advanced(1).is_claimable());
    }

    #[test]
    fn test_mission_serialization() {
        let m = mission(3).advanced(1);

        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Mission = serde_json::from_str(&json).unwrap();

        assert_eq!(m, deserialized);
    }
}
