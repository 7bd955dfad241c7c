//! Player identity and aggregated stats.
//!
//! - `Player` - validated display name
//! - `ScoreRecord` - per-player totals across every recorded round

mod player;
mod record;

pub use player::Player;
pub(crate) use player::unstorable_reason;
pub use record::*;
