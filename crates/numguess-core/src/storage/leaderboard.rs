use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::config::files::LEADERBOARD_HEADER;
use crate::error::{Error, Result};
use crate::play::GameResult;
use crate::score::{ScoreRecord, unstorable_reason};

const FIELD_COUNT: usize = 5;

/// Player name to aggregated stats.
///
/// Persisted as `name,totalAttempts,gamesPlayed,wins,bestAttempts` rows under
/// a `#` header. Row order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Leaderboard {
    records: HashMap<String, ScoreRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from file. A missing file is an empty leaderboard, any other
    /// read failure is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No leaderboard at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(Error::resource(load_context(path), e)),
        };

        Self::parse_from(&content, &load_context(path))
    }

    /// Parse leaderboard text.
    ///
    /// Blank and `#` lines are skipped, as are rows with fewer than five
    /// fields. A five-field row whose numbers don't parse is an error.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_from(content, "Error parsing leaderboard")
    }

    fn parse_from(content: &str, context: &str) -> Result<Self> {
        let mut leaderboard = Self::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split(',').map(str::trim).collect();
            if parts.len() < FIELD_COUNT {
                debug!("Skipping malformed leaderboard line {}: {}", index + 1, line);
                continue;
            }

            let number = |field: usize, label: &str| -> Result<u32> {
                parts[field].parse().map_err(|e| {
                    Error::resource(
                        context,
                        format!("line {}: invalid {} '{}' ({})", index + 1, label, parts[field], e),
                    )
                })
            };

            let record = ScoreRecord::from_parts(
                number(1, "totalAttempts")?,
                number(2, "gamesPlayed")?,
                number(3, "wins")?,
                number(4, "bestAttempts")?,
            );
            leaderboard.records.insert(parts[0].to_string(), record);
        }

        debug!("Parsed {} leaderboard entries", leaderboard.len());
        Ok(leaderboard)
    }

    /// Overwrite the file with the header and one row per player.
    ///
    /// Fails without touching the file if a name would not read back as the
    /// same row.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let context = || format!("Error saving leaderboard to {}", path.display());

        if let Some((name, reason)) = self
            .records
            .keys()
            .find_map(|name| unstorable_reason(name.trim()).map(|reason| (name, reason)))
        {
            return Err(Error::resource(context(), format!("'{}': {}", name, reason)));
        }

        fs::write(path, self.to_csv()).map_err(|e| Error::resource(context(), e))
    }

    /// Render the persisted form. Rows are sorted by name so equal
    /// leaderboards render identically.
    pub fn to_csv(&self) -> String {
        let mut lines = vec![LEADERBOARD_HEADER.to_string()];

        for (name, record) in self.sorted() {
            lines.push(format!(
                "{},{},{},{},{}",
                name,
                record.total_attempts(),
                record.games_played(),
                record.wins(),
                record.best_attempts()
            ));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Merge a finished round into the player's record and return the
    /// updated record.
    ///
    /// Rounds with zero attempts are not counted, but the player still gets
    /// an entry.
    pub fn record(&mut self, name: &str, result: &GameResult) -> ScoreRecord {
        let record = self.records.entry(name.to_string()).or_default();
        if result.attempts > 0 {
            record.record_game(result.attempts, result.won);
        }
        *record
    }

    pub fn get(&self, name: &str) -> Option<&ScoreRecord> {
        self.records.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, record: ScoreRecord) {
        self.records.insert(name.into(), record);
    }

    /// Entries ordered by player name.
    pub fn sorted(&self) -> Vec<(&String, &ScoreRecord)> {
        let mut entries: Vec<_> = self.records.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn load_context(path: &Path) -> String {
    format!("Error loading leaderboard from {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::Outcome;
    use tempfile::TempDir;

    fn result(attempts: u32, won: bool) -> GameResult {
        let outcome = if won { Outcome::Won } else { Outcome::GaveUp };
        GameResult {
            attempts,
            won,
            outcome,
            secret: 50,
        }
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content = "# name,totalAttempts,gamesPlayed,wins,bestAttempts\n\n  alice,12,3,2,4  \n# note\nbob, 7, 1, 1, 7\n";
        let board = Leaderboard::parse(content).unwrap();

        assert_eq!(board.len(), 2);
        assert_eq!(board.get("alice"), Some(&ScoreRecord::from_parts(12, 3, 2, 4)));
        assert_eq!(board.get("bob").unwrap().best_attempts(), 7);
    }

    #[test]
    fn test_parse_drops_short_rows() {
        let content = "alice,12,3,2\nbob,7,1,1,7\n";
        let board = Leaderboard::parse(content).unwrap();

        assert_eq!(board.len(), 1);
        assert!(board.get("alice").is_none());
        assert!(board.get("bob").is_some());
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        let err = Leaderboard::parse("alice,twelve,3,2,4\n").unwrap_err();
        assert!(matches!(err, Error::Resource { .. }));
        assert!(err.to_string().contains("totalAttempts"));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let board = Leaderboard::parse("alice,12,3,2,4,extra\n").unwrap();
        assert_eq!(board.get("alice").unwrap().games_played(), 3);
    }

    #[test]
    fn test_parse_zero_best_is_no_win() {
        let board = Leaderboard::parse("carol,10,1,0,0\n").unwrap();
        assert_eq!(board.get("carol").unwrap().best(), None);
    }

    #[test]
    fn test_to_csv_layout() {
        let mut board = Leaderboard::new();
        board.insert("zed", ScoreRecord::from_parts(10, 1, 0, 0));
        board.insert("amy", ScoreRecord::from_parts(5, 2, 2, 2));

        assert_eq!(
            board.to_csv(),
            "# name,totalAttempts,gamesPlayed,wins,bestAttempts\namy,5,2,2,2\nzed,10,1,0,0\n"
        );
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scores.csv");

        let mut board = Leaderboard::new();
        board.insert("alice", ScoreRecord::from_parts(12, 3, 2, 1));
        board.insert("bob", ScoreRecord::from_parts(10, 1, 0, 0));
        board.save(&path).unwrap();

        let loaded = Leaderboard::load(&path).unwrap();
        assert_eq!(loaded, board);
        assert_eq!(loaded.get("alice").unwrap().best_attempts(), 1);
        assert_eq!(loaded.get("bob").unwrap().best_attempts(), 0);
    }

    #[test]
    fn test_save_refuses_names_that_break_rows() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scores.csv");
        fs::write(&path, "alice,12,3,2,4\n").unwrap();

        for bad in ["Smith, John", "#1 fan"] {
            let mut board = Leaderboard::load(&path).unwrap();
            board.insert(bad, ScoreRecord::from_parts(3, 1, 1, 3));

            let err = board.save(&path).unwrap_err();
            assert!(matches!(err, Error::Resource { .. }));
            assert!(err.to_string().contains(bad));
        }

        let board = Leaderboard::load(&path).unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.get("alice"), Some(&ScoreRecord::from_parts(12, 3, 2, 4)));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let board = Leaderboard::load(temp.path().join("nope.csv")).unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn test_load_unreadable_path_fails() {
        let temp = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file
        let err = Leaderboard::load(temp.path()).unwrap_err();
        assert!(matches!(err, Error::Resource { .. }));
    }

    #[test]
    fn test_record_creates_and_updates() {
        let mut board = Leaderboard::new();
        let record = board.record("alice", &result(5, true));
        assert_eq!(record.games_played(), 1);
        assert_eq!(record.best_attempts(), 5);

        let record = board.record("alice", &result(10, false));
        assert_eq!(record.games_played(), 2);
        assert_eq!(record.total_attempts(), 15);
        assert_eq!(board.get("alice"), Some(&record));
    }

    #[test]
    fn test_record_skips_zero_attempt_rounds() {
        let mut board = Leaderboard::new();
        let record = board.record("dave", &result(0, false));

        assert_eq!(record, ScoreRecord::new());
        assert_eq!(board.get("dave"), Some(&ScoreRecord::new()));
    }
}
