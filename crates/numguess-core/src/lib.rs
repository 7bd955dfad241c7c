pub mod config;
pub mod console;
pub mod error;
pub mod play;
pub mod score;
pub mod session;
pub mod storage;

pub use error::{Error, Result};
pub use play::{Feedback, GameResult, Outcome, Round, RoundConfig, RoundState};
pub use score::{Player, ScoreRecord};
pub use session::{Session, SessionPaths, SessionReport};
pub use storage::{Leaderboard, format_summary, read_player_name, write_summary};
