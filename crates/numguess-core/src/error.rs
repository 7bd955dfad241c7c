use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{context}: {message}")]
    Resource { context: String, message: String },

    #[error("Player name cannot be empty")]
    EmptyPlayerName,

    #[error("Invalid player name '{name}': {reason}")]
    InvalidPlayerName { name: String, reason: &'static str },

    #[error("Invalid range: lower bound {lower} must be less than upper bound {upper}")]
    InvalidRange { lower: i32, upper: i32 },

    #[error("Secret {secret} is outside the range {lower} - {upper}")]
    SecretOutOfRange { secret: i32, lower: i32, upper: i32 },

    #[error("Console input closed")]
    InputClosed,

    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a resource error from any displayable cause.
    pub fn resource(context: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Error::Resource {
            context: context.into(),
            message: cause.to_string(),
        }
    }

    /// Whether this error came from argument validation rather than I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyPlayerName
                | Error::InvalidPlayerName { .. }
                | Error::InvalidRange { .. }
                | Error::SecretOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_message() {
        let err = Error::resource("Error loading leaderboard from scores.csv", "bad digit");
        assert_eq!(
            err.to_string(),
            "Error loading leaderboard from scores.csv: bad digit"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_kinds() {
        assert!(Error::EmptyPlayerName.is_validation());
        assert!(
            Error::InvalidPlayerName {
                name: "a,b".to_string(),
                reason: "x"
            }
            .is_validation()
        );
        assert!(Error::InvalidRange { lower: 5, upper: 5 }.is_validation());
        assert!(!Error::InputClosed.is_validation());
    }
}
