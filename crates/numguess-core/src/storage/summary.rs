use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::play::{GameResult, RoundConfig};
use crate::score::{Player, ScoreRecord};

/// Build the plain-text summary of a finished round and the player's totals.
pub fn format_summary(
    player: &Player,
    config: &RoundConfig,
    result: &GameResult,
    record: &ScoreRecord,
) -> String {
    let mut output = String::new();
    let outcome = if result.won {
        "Guessed Correctly"
    } else {
        "Did not guess"
    };

    let _ = writeln!(output, "Player: {}", player);
    let _ = writeln!(output, "Secret Range: {} - {}", config.lower(), config.upper());
    let _ = writeln!(output, "Attempts this round: {}", result.attempts);
    let _ = writeln!(output, "Result: {}", outcome);
    let _ = writeln!(output);
    let _ = writeln!(output, "Aggregated stats for {}", player);
    let _ = writeln!(output, "  Total attempts: {}", record.total_attempts());
    let _ = writeln!(output, "  Games played: {}", record.games_played());
    let _ = writeln!(output, "  Wins: {}", record.wins());
    let _ = writeln!(
        output,
        "  Best attempts (lowest successful attempts): {}",
        record.best_attempts()
    );
    let _ = writeln!(
        output,
        "  Average attempts per game: {:.2}",
        record.average_attempts()
    );

    output
}

/// Overwrite the result file with `content`.
pub fn write_summary<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content)
        .map_err(|e| Error::resource(format!("Error writing {}", path.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::Outcome;
    use tempfile::TempDir;

    #[test]
    fn test_format_summary() {
        let player = Player::new("alice").unwrap();
        let config = RoundConfig::new(1, 100, 10).unwrap();
        let result = GameResult {
            attempts: 3,
            won: true,
            outcome: Outcome::Won,
            secret: 42,
        };
        let record = ScoreRecord::from_parts(10, 3, 2, 3);

        let expected = "Player: alice\n\
                        Secret Range: 1 - 100\n\
                        Attempts this round: 3\n\
                        Result: Guessed Correctly\n\
                        \n\
                        Aggregated stats for alice\n  \
                        Total attempts: 10\n  \
                        Games played: 3\n  \
                        Wins: 2\n  \
                        Best attempts (lowest successful attempts): 3\n  \
                        Average attempts per game: 3.33\n";
        assert_eq!(format_summary(&player, &config, &result, &record), expected);
    }

    #[test]
    fn test_format_summary_loss_without_games() {
        let player = Player::new("bob").unwrap();
        let config = RoundConfig::new(1, 100, 10).unwrap();
        let result = GameResult {
            attempts: 0,
            won: false,
            outcome: Outcome::Quit,
            secret: 7,
        };

        let summary = format_summary(&player, &config, &result, &ScoreRecord::new());
        assert!(summary.contains("Result: Did not guess\n"));
        assert!(summary.contains("  Best attempts (lowest successful attempts): 0\n"));
        assert!(summary.contains("  Average attempts per game: 0.00\n"));
    }

    #[test]
    fn test_write_summary_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.txt");
        fs::write(&path, "old content that is longer").unwrap();

        write_summary(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_summary_bad_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("output.txt");
        assert!(matches!(
            write_summary(&path, "x"),
            Err(Error::Resource { .. })
        ));
    }
}
