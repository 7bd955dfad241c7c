//! CLI argument definitions for numguess.

use std::path::PathBuf;

use clap::Parser;
use numguess_core::SessionPaths;
use numguess_core::config::files;

#[derive(Parser)]
#[command(name = "numguess")]
#[command(about = "Number guessing game with a persistent leaderboard", version)]
pub struct Args {
    /// File whose first non-blank line is the player name
    #[arg(long, value_name = "FILE", default_value = files::NAME_FILE)]
    pub name_file: PathBuf,

    /// Leaderboard file
    #[arg(long, value_name = "FILE", default_value = files::SCORES_FILE)]
    pub scores: PathBuf,

    /// Round summary file (overwritten each run)
    #[arg(short, long, value_name = "FILE", default_value = files::RESULT_FILE)]
    pub output: PathBuf,

    /// Print the session report as JSON when done
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn session_paths(&self) -> SessionPaths {
        SessionPaths {
            name_file: self.name_file.clone(),
            result_file: self.output.clone(),
            scores_file: self.scores.clone(),
        }
    }
}
