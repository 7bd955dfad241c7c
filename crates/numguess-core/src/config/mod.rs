//! Game and file configuration constants.
//!
//! The round range and attempt cap are fixed at build time; only the file
//! locations can be overridden by the command line.

/// Round parameters.
pub mod game {
    /// Lowest number the secret can be.
    pub const LOWER_BOUND: i32 = 1;

    /// Highest number the secret can be.
    pub const UPPER_BOUND: i32 = 100;

    /// Attempts allowed per round. 0 means unlimited.
    pub const MAX_ATTEMPTS: i32 = 10;

    /// Inputs that end a round early (compared case-insensitively).
    pub const QUIT_TOKENS: [&str; 2] = ["q", "quit"];
}

/// Default file locations, relative to the working directory.
pub mod files {
    /// Optional file whose first non-blank line is the player name.
    pub const NAME_FILE: &str = "input.txt";

    /// Human-readable summary of the last round, overwritten each run.
    pub const RESULT_FILE: &str = "output.txt";

    /// Persisted leaderboard.
    pub const SCORES_FILE: &str = "scores.csv";

    /// First line written to the leaderboard file.
    pub const LEADERBOARD_HEADER: &str = "# name,totalAttempts,gamesPlayed,wins,bestAttempts";
}
