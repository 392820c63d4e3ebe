//! Player name type with its length bound.

use crate::error::{PlayerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of characters in a player name.
pub const MAX_NAME_LEN: usize = 200;

/// A player's display name.
///
/// Holds between 1 and [`MAX_NAME_LEN`] characters, counted as Unicode scalar
/// values rather than bytes. Whitespace-only names count as empty. The value is
/// kept exactly as given.
///
/// # Examples
///
/// ```rust
/// use football_players::PlayerName;
///
/// let name = PlayerName::new("Lionel Messi").unwrap();
/// assert_eq!(name.as_str(), "Lionel Messi");
/// assert!(PlayerName::new("x".repeat(201)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(PlayerError::EmptyName);
        }

        // SQLite's length() stops at the first NUL
        if name.contains('\0') {
            return Err(PlayerError::InvalidName {
                reason: "contains null bytes".to_string(),
            });
        }

        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(PlayerError::NameTooLong {
                len,
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PlayerName {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = PlayerError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}
