use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayerNameError {
    #[error("Please enter your name.")]
    Empty,
}

/// Trimmed, non-empty name of the person playing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// # Errors
    ///
    /// Returns `PlayerNameError::Empty` if the input is blank.
    pub fn parse(raw: &str) -> Result<Self, PlayerNameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PlayerNameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let name = PlayerName::parse("  Mochi \n").unwrap();
        assert_eq!(name.as_str(), "Mochi");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(PlayerName::parse("   ").unwrap_err(), PlayerNameError::Empty);
        assert_eq!(PlayerName::parse("").unwrap_err(), PlayerNameError::Empty);
    }
}
