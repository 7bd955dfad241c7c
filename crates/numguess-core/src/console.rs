//! Console input and colored output formatting.

use std::fmt::Write as _;
use std::io::BufRead;

use owo_colors::OwoColorize;

use crate::error::{Error, Result};
use crate::play::{Feedback, RoundConfig};
use crate::storage::Leaderboard;

/// Read one line, trimmed. End of input is an error.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }
    Ok(line.trim().to_string())
}

/// Message shown to the player after an input.
pub fn format_feedback(feedback: &Feedback, config: &RoundConfig) -> String {
    match feedback {
        Feedback::Invalid => format!(
            "Invalid input. Please enter an integer between {} and {}.",
            config.lower(),
            config.upper()
        ),
        Feedback::OutOfRange => "Guess out of range. Try again.".to_string(),
        Feedback::TooLow => "Too low. Try again.".yellow().to_string(),
        Feedback::TooHigh => "Too high. Try again.".yellow().to_string(),
        Feedback::Correct { attempts } => format!(
            "{} You guessed the number in {} attempt{}.",
            "Correct!".green().bold(),
            attempts,
            if *attempts == 1 { "" } else { "s" }
        ),
        Feedback::Quit { secret } => {
            format!("You chose to quit. The secret number was: {}", secret)
        }
        Feedback::CapReached => "Maximum attempts reached. Giving up.".red().to_string(),
        Feedback::RoundOver => "The round is already over.".dimmed().to_string(),
    }
}

/// Leaderboard listing, one player per line sorted by name.
///
/// An empty leaderboard renders as a single notice line.
pub fn format_leaderboard(leaderboard: &Leaderboard, title: &str) -> String {
    let mut output = String::new();

    if leaderboard.is_empty() {
        let _ = writeln!(output, "{}", "No leaderboard data yet.".dimmed());
        return output;
    }

    let _ = writeln!(output, "{}", title.bold());
    for (name, record) in leaderboard.sorted() {
        let _ = writeln!(output, "  {} -> {}", name.cyan(), record);
    }
    output
}
