use serde::Serialize;
use strum::IntoStaticStr;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr)]
pub enum Outcome {
    #[strum(serialize = "WON")]
    Won,
    #[strum(serialize = "QUIT")]
    Quit,
    #[strum(serialize = "GAVE UP")]
    GaveUp,
}

impl Outcome {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Self::Won)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Result of submitting one line of input to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Not an integer. No attempt used.
    Invalid,
    /// Integer outside the range. No attempt used.
    OutOfRange,
    TooLow,
    TooHigh,
    Correct { attempts: u32 },
    Quit { secret: i32 },
    /// The attempt cap was already reached; the input was ignored.
    CapReached,
    /// The round had already ended; the input was ignored.
    RoundOver,
}
