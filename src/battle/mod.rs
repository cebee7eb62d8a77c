//! Battle resolution: round-by-round card comparison and the match tally.
//!
//! ## Key Types
//!
//! - `Winner` / `Side`: round and match outcome classification
//! - `RoundResult`: one resolved card-vs-card comparison
//! - `TallyConfig`: target score and hidden-round positions
//! - `VictoryState`: the match score, a pure fold over the round log

pub mod round;
pub mod tally;

pub use round::{battle_value, resolve_round, RoundResult, Side, Winner};
pub use tally::{tally, tally_through, TallyConfig, VictoryState};
