mod leaderboard;
mod name_source;
mod summary;

pub use leaderboard::Leaderboard;
pub use name_source::read_player_name;
pub use summary::{format_summary, write_summary};
