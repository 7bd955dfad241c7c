use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// A player's display name, trimmed and guaranteed non-empty.
///
/// Names are stored as the first field of a leaderboard row, so they may not
/// contain `,` or start with the `#` comment marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Player {
    name: String,
}

impl Player {
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyPlayerName);
        }
        if let Some(reason) = unstorable_reason(name) {
            return Err(Error::InvalidPlayerName {
                name: name.to_string(),
                reason,
            });
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Why `name` can't be written as a leaderboard key, if it can't.
pub(crate) fn unstorable_reason(name: &str) -> Option<&'static str> {
    if name.contains(['\n', '\r']) {
        Some("name cannot span lines")
    } else if name.contains(',') {
        Some("name cannot contain ','")
    } else if name.starts_with('#') {
        Some("name cannot start with '#'")
    } else {
        None
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let player = Player::new("  alice \t").unwrap();
        assert_eq!(player.name(), "alice");
        assert_eq!(player.to_string(), "alice");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(Player::new(""), Err(Error::EmptyPlayerName)));
        assert!(matches!(Player::new("   "), Err(Error::EmptyPlayerName)));
    }

    #[test]
    fn test_name_must_fit_leaderboard_row() {
        assert!(matches!(
            Player::new("Smith, John"),
            Err(Error::InvalidPlayerName { .. })
        ));
        assert!(matches!(
            Player::new("  #1 fan"),
            Err(Error::InvalidPlayerName { .. })
        ));
        assert_eq!(Player::new("fan #1").unwrap().name(), "fan #1");
    }
}
