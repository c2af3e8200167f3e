//! Difficulty levels

use std::fmt;
use std::str::FromStr;

/// Word Scramble difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Error returned when parsing an unknown level name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelParseError(pub String);

impl fmt::Display for LevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown level '{}' (expected easy, medium or hard)", self.0)
    }
}

impl std::error::Error for LevelParseError {}

impl Level {
    /// All levels in selector order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Next level in selector order, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// Previous level in selector order, wrapping around
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Self::Easy),
            "medium" | "m" | "2" => Ok(Self::Medium),
            "hard" | "h" | "3" => Ok(Self::Hard),
            other => Err(LevelParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_shortcuts() {
        assert_eq!("easy".parse::<Level>(), Ok(Level::Easy));
        assert_eq!("Medium".parse::<Level>(), Ok(Level::Medium));
        assert_eq!(" HARD ".parse::<Level>(), Ok(Level::Hard));
        assert_eq!("2".parse::<Level>(), Ok(Level::Medium));
        assert_eq!("h".parse::<Level>(), Ok(Level::Hard));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "expert".parse::<Level>(),
            Err(LevelParseError("expert".to_string()))
        );
    }

    #[test]
    fn selector_cycles() {
        for level in Level::ALL {
            assert_eq!(level.next().previous(), level);
        }
        assert_eq!(Level::Hard.next(), Level::Easy);
        assert_eq!(Level::Easy.previous(), Level::Hard);
    }

    #[test]
    fn default_is_easy() {
        assert_eq!(Level::default(), Level::Easy);
    }
}
