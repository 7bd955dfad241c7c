use std::fmt;

use serde::Serialize;

/// Aggregated stats for one player.
///
/// `best` is `None` until the first win. The file format and the
/// `best_attempts()` accessor both collapse `None` to 0, so a stored 0 always
/// means "no win yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    total_attempts: u32,
    games_played: u32,
    wins: u32,
    best: Option<u32>,
}

impl ScoreRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a record from its persisted fields. A `best_attempts` of 0 is
    /// read back as "no win yet".
    pub fn from_parts(total_attempts: u32, games_played: u32, wins: u32, best_attempts: u32) -> Self {
        Self {
            total_attempts,
            games_played,
            wins,
            best: (best_attempts != 0).then_some(best_attempts),
        }
    }

    /// Fold one finished round into the totals. Counters saturate at
    /// `u32::MAX` rather than wrapping.
    pub fn record_game(&mut self, attempts: u32, won: bool) {
        self.total_attempts = self.total_attempts.saturating_add(attempts);
        self.games_played = self.games_played.saturating_add(1);
        if won {
            self.wins = self.wins.saturating_add(1);
            self.best = Some(self.best.map_or(attempts, |best| best.min(attempts)));
        }
    }

    pub fn average_attempts(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_attempts as f64 / self.games_played as f64
        }
    }

    pub fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Lowest winning attempt count, or 0 when the player has never won.
    pub fn best_attempts(&self) -> u32 {
        self.best.unwrap_or(0)
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "games: {}, wins: {}, attempts: {}, best: {}, avg: {:.2}",
            self.games_played,
            self.wins,
            self.total_attempts,
            self.best_attempts(),
            self.average_attempts()
        )
    }
}
