use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{files, game};
use crate::console::{format_leaderboard, read_line};
use crate::error::{Error, Result};
use crate::play::{GameResult, Round, RoundConfig};
use crate::score::{Player, ScoreRecord};
use crate::storage::{Leaderboard, format_summary, read_player_name, write_summary};

/// Files a session reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPaths {
    pub name_file: PathBuf,
    pub result_file: PathBuf,
    pub scores_file: PathBuf,
}

impl SessionPaths {
    /// Default file names placed under `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            name_file: dir.join(files::NAME_FILE),
            result_file: dir.join(files::RESULT_FILE),
            scores_file: dir.join(files::SCORES_FILE),
        }
    }
}

impl Default for SessionPaths {
    fn default() -> Self {
        Self {
            name_file: PathBuf::from(files::NAME_FILE),
            result_file: PathBuf::from(files::RESULT_FILE),
            scores_file: PathBuf::from(files::SCORES_FILE),
        }
    }
}

/// What a finished session produced.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub player: Player,
    pub result: GameResult,
    pub record: ScoreRecord,
    pub leaderboard: Leaderboard,
    pub leaderboard_saved: bool,
    pub summary_written: bool,
}

/// One play session: name, leaderboard, a single round, persistence.
///
/// Only validation and console failures end a session early. File failures
/// are logged and the session carries on with a safe default.
pub struct Session {
    paths: SessionPaths,
    config: RoundConfig,
}

impl Session {
    pub fn new(paths: SessionPaths, config: RoundConfig) -> Self {
        Self { paths, config }
    }

    /// Session with the built-in range and attempt cap.
    pub fn with_paths(paths: SessionPaths) -> Result<Self> {
        let config = RoundConfig::new(game::LOWER_BOUND, game::UPPER_BOUND, game::MAX_ATTEMPTS)?;
        Ok(Self::new(paths, config))
    }

    pub fn paths(&self) -> &SessionPaths {
        &self.paths
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Play a session with a randomly drawn secret.
    pub fn run<G: Rng, R: BufRead, W: Write>(
        &self,
        rng: &mut G,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionReport> {
        self.run_with_round(|config| Ok(Round::start(config, rng)), input, output)
    }

    /// Play a session with a round built by `start_round`.
    pub fn run_with_round<F, R, W>(
        &self,
        start_round: F,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionReport>
    where
        F: FnOnce(RoundConfig) -> Result<Round>,
        R: BufRead,
        W: Write,
    {
        let player = self.resolve_player(input, output)?;
        let mut leaderboard = self.load_leaderboard();
        write!(output, "{}", format_leaderboard(&leaderboard, "Leaderboard snapshot:"))?;

        let round = start_round(self.config)?;
        let result = round.play(&player, input, output)?;
        info!(
            "Round finished for {}: {} after {} attempt(s)",
            player, result.outcome, result.attempts
        );

        let record = leaderboard.record(player.name(), &result);

        let leaderboard_saved = match leaderboard.save(&self.paths.scores_file) {
            Ok(()) => {
                info!("Saved {} leaderboard entries", leaderboard.len());
                true
            }
            Err(e) => {
                warn!("Couldn't save leaderboard: {}", e);
                false
            }
        };

        let summary = format_summary(&player, &self.config, &result, &record);
        let summary_written = match write_summary(&self.paths.result_file, &summary) {
            Ok(()) => {
                info!("Wrote round summary to {}", self.paths.result_file.display());
                writeln!(
                    output,
                    "Game result saved to {}",
                    self.paths.result_file.display()
                )?;
                true
            }
            Err(e) => {
                warn!("Couldn't write output file: {}", e);
                false
            }
        };

        writeln!(output)?;
        write!(output, "{}", format_leaderboard(&leaderboard, "Updated Leaderboard:"))?;

        Ok(SessionReport {
            player,
            result,
            record,
            leaderboard,
            leaderboard_saved,
            summary_written,
        })
    }

    /// Take the name from the name file, or prompt until one is given.
    pub fn resolve_player<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Player> {
        let from_file = match read_player_name(&self.paths.name_file) {
            Ok(name) => name,
            Err(e) => {
                warn!("Couldn't read input file: {}", e);
                None
            }
        };

        if let Some(name) = from_file {
            match Player::new(&name) {
                Ok(player) => {
                    writeln!(output, "Using player name from input file: {}", player)?;
                    return Ok(player);
                }
                Err(e) => warn!("Ignoring name from input file: {}", e),
            }
        }

        write!(output, "Enter your name: ")?;
        loop {
            output.flush()?;
            match Player::new(&read_line(input)?) {
                Ok(player) => return Ok(player),
                Err(Error::EmptyPlayerName) => {
                    write!(output, "Name cannot be empty. Enter your name: ")?
                }
                Err(Error::InvalidPlayerName { reason, .. }) => {
                    write!(output, "Invalid name ({}). Enter your name: ", reason)?
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Load the leaderboard, falling back to an empty one on failure.
    pub fn load_leaderboard(&self) -> Leaderboard {
        match Leaderboard::load(&self.paths.scores_file) {
            Ok(leaderboard) => leaderboard,
            Err(e) => {
                warn!("Couldn't load leaderboard: {}", e);
                Leaderboard::new()
            }
        }
    }
}
