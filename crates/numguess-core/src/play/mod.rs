//! Round engine.
//!
//! - `RoundConfig` - validated range and attempt cap
//! - `Round` - one secret and the guess loop that ends in an `Outcome`
//! - `Feedback` - what a single input did to the round
//! - `GameResult` - attempts and outcome handed to the leaderboard

mod enums;
mod round;

pub use enums::*;
pub use round::*;
