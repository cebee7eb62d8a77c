//! Daily missions: date-scoped objectives with idempotent progress.
//!
//! ## Key Types
//!
//! - `Mission` / `MissionType`: one objective and its fixed type enumeration
//! - `CalendarDay`: the local `YYYY-MM-DD` stamp scoping a mission list
//! - `DailyMissions`: the day's list; the unit of daily reset
//!
//! The tracker is a pure function of its inputs: the current day is always
//! passed in, never read from a clock, and every update returns a new value
//! instead of mutating.

pub mod mission;
pub mod tracker;

pub use mission::{Mission, MissionReward, MissionType};
pub use tracker::{CalendarDay, DailyMissions};
