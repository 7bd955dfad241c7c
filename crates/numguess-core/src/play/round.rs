use std::io::{BufRead, Write};

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::game::QUIT_TOKENS;
use crate::console::{format_feedback, read_line};
use crate::error::{Error, Result};
use crate::play::{Feedback, Outcome};
use crate::score::Player;

/// Secret range and attempt cap for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundConfig {
    lower: i32,
    upper: i32,
    max_attempts: u32,
}

impl RoundConfig {
    /// `lower` must be below `upper`. A cap of 0 or less means unlimited.
    pub fn new(lower: i32, upper: i32, max_attempts: i32) -> Result<Self> {
        if lower >= upper {
            return Err(Error::InvalidRange { lower, upper });
        }
        Ok(Self {
            lower,
            upper,
            max_attempts: max_attempts.max(0) as u32,
        })
    }

    pub fn lower(&self) -> i32 {
        self.lower
    }

    pub fn upper(&self) -> i32 {
        self.upper
    }

    /// Attempt cap, 0 when unlimited.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub attempts: u32,
    pub won: bool,
    pub outcome: Outcome,
    pub secret: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Terminated(Outcome),
}

/// One round of guessing against a fixed secret.
#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    secret: i32,
    attempts: u32,
    state: RoundState,
}

impl Round {
    /// Start a round with a secret drawn uniformly from the configured range.
    pub fn start<R: Rng>(config: RoundConfig, rng: &mut R) -> Self {
        let secret = rng.random_range(config.lower..=config.upper);
        Self::fresh(config, secret)
    }

    /// Start a round with a known secret.
    pub fn with_secret(config: RoundConfig, secret: i32) -> Result<Self> {
        if !config.contains(secret) {
            return Err(Error::SecretOutOfRange {
                secret,
                lower: config.lower,
                upper: config.upper,
            });
        }
        Ok(Self::fresh(config, secret))
    }

    fn fresh(config: RoundConfig, secret: i32) -> Self {
        Self {
            config,
            secret,
            attempts: 0,
            state: RoundState::AwaitingGuess,
        }
    }

    /// End the round if the attempt cap has been reached.
    ///
    /// Returns true when the round is over, whatever the reason.
    pub fn check_cap(&mut self) -> bool {
        if self.state == RoundState::AwaitingGuess && self.cap_reached() {
            self.state = RoundState::Terminated(Outcome::GaveUp);
        }
        self.is_finished()
    }

    fn cap_reached(&self) -> bool {
        self.config.max_attempts > 0 && self.attempts >= self.config.max_attempts
    }

    /// Apply one line of input.
    pub fn submit(&mut self, input: &str) -> Feedback {
        if self.is_finished() {
            return Feedback::RoundOver;
        }
        if self.check_cap() {
            return Feedback::CapReached;
        }

        let input = input.trim();
        if QUIT_TOKENS.iter().any(|token| input.eq_ignore_ascii_case(token)) {
            self.state = RoundState::Terminated(Outcome::Quit);
            return Feedback::Quit {
                secret: self.secret,
            };
        }

        let Ok(guess) = input.parse::<i32>() else {
            return Feedback::Invalid;
        };
        if !self.config.contains(guess) {
            return Feedback::OutOfRange;
        }

        self.attempts += 1;
        match guess.cmp(&self.secret) {
            std::cmp::Ordering::Equal => {
                self.state = RoundState::Terminated(Outcome::Won);
                Feedback::Correct {
                    attempts: self.attempts,
                }
            }
            std::cmp::Ordering::Less => Feedback::TooLow,
            std::cmp::Ordering::Greater => Feedback::TooHigh,
        }
    }

    /// Run the guess loop on the console until the round ends.
    pub fn play<R: BufRead, W: Write>(
        mut self,
        player: &Player,
        input: &mut R,
        output: &mut W,
    ) -> Result<GameResult> {
        writeln!(
            output,
            "Hello {}! I have chosen a number between {} and {}.",
            player, self.config.lower, self.config.upper
        )?;
        writeln!(output, "Try to guess it. Type 'q' or 'quit' to give up.")?;

        loop {
            if self.check_cap() {
                if self.state == RoundState::Terminated(Outcome::GaveUp) {
                    writeln!(output, "{}", format_feedback(&Feedback::CapReached, &self.config))?;
                }
                break;
            }

            write!(output, "Enter your guess: ")?;
            output.flush()?;
            let line = read_line(input)?;

            let feedback = self.submit(&line);
            debug!("Guess {:?} -> {:?}", line, feedback);
            writeln!(output, "{}", format_feedback(&feedback, &self.config))?;
        }

        self.result().ok_or(Error::InputClosed)
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            RoundState::AwaitingGuess => None,
            RoundState::Terminated(outcome) => Some(GameResult {
                attempts: self.attempts,
                won: outcome.is_win(),
                outcome,
                secret: self.secret,
            }),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, RoundState::Terminated(_))
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn secret(&self) -> i32 {
        self.secret
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }
}
