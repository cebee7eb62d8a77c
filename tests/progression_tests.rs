//! Progression integration tests: curve and reward table together.

use duel_core::{
    level_for_exp, leveled_up, progress_percent, RewardTable,
};

/// The curve checkpoints every caller depends on.
#[test]
fn test_curve_checkpoints() {
    assert_eq!(level_for_exp(0), 1);
    assert_eq!(level_for_exp(100), 2);
    assert_eq!(level_for_exp(250), 3);
    assert_eq!(progress_percent(150), 50);
}

/// A single grant crossing several thresholds levels up once, and the
/// reward lookup uses the new level.
#[test]
fn test_multi_level_jump_rewards_new_level() {
    let table = RewardTable::standard();

    assert!(leveled_up(90, 310));
    let new_level = level_for_exp(310);
    assert_eq!(new_level, 4);

    let reward = table.get(new_level);
    assert_eq!(reward.level, 4);
    assert_eq!(reward.coins, 200);
}

/// Callers that grant every crossed level get all of them, in order.
#[test]
fn test_cumulative_rewards_across_jump() {
    let table = RewardTable::standard();

    let rewards = table.rewards_between(90, 310);
    let levels: Vec<_> = rewards.iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![2, 3, 4]);

    // The crossed milestone-free levels carry their authored coins.
    let total_coins: i64 = rewards.iter().map(|r| r.coins).sum();
    assert_eq!(total_coins, 100 + 150 + 200);
}

/// The authored table and the fallback formula meet without a seam: the
/// lookup never consults a hardcoded boundary twice.
#[test]
fn test_table_to_formula_transition() {
    let table = RewardTable::standard();

    // Last authored level.
    let level25 = table.get(25);
    assert!(level25.milestone);
    assert_eq!(level25.coins, 2800);

    // First synthesized level: 1500 + (26 - 21) * 100.
    let level26 = table.get(26);
    assert_eq!(level26.coins, 2000);
    assert!(!level26.milestone);

    // Synthesized milestone: doubled coins, 3 tokens, epic pack.
    let level35 = table.get(35);
    assert_eq!(level35.coins, (1500 + 14 * 100) * 2);
    assert_eq!(level35.tokens, 3);
    assert_eq!(level35.card_pack.unwrap().count, 3);
}

/// Unlocks accumulate with level and are never revoked.
#[test]
fn test_feature_unlocks_are_monotone() {
    let table = RewardTable::standard();

    let features = ["stage-select", "daily-missions", "pvp-arena", "deck-editor"];

    // Below every unlock level nothing is open.
    for feature in features {
        assert!(!table.feature_unlocked(feature, 1), "{feature} open at level 1");
    }

    // At level 7 all four have been granted.
    for feature in features {
        assert!(table.feature_unlocked(feature, 7), "{feature} closed at level 7");
    }

    // Still open far beyond.
    for feature in features {
        assert!(table.feature_unlocked(feature, 200), "{feature} revoked at level 200");
    }
}

/// Milestones in the authored range land every five levels.
#[test]
fn test_authored_milestones() {
    let table = RewardTable::standard();

    for level in 1..=25 {
        let reward = table.get(level);
        assert_eq!(reward.milestone, level % 5 == 0, "level {level}");
    }
}
