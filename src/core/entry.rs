//! Word Scramble corpus entry
//!
//! A `WordEntry` is one guessable word together with its three hints, ordered
//! from most general to most specific.

use std::fmt;

/// Number of hints carried by every entry
pub const HINT_COUNT: usize = 3;

/// A guessable word with its three hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    hints: [String; HINT_COUNT],
}

/// Error type for invalid entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    TooShort(usize),
    NonAlphabetic(String),
    EmptyHint(usize),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Word must have at least 2 letters, got {len}")
            }
            Self::NonAlphabetic(word) => {
                write!(f, "Word '{word}' must contain only letters")
            }
            Self::EmptyHint(index) => write!(f, "Hint {} is empty", index + 1),
        }
    }
}

impl std::error::Error for EntryError {}

impl WordEntry {
    /// Create a new entry from a word and its hints
    ///
    /// The word is lowercased; hints are trimmed.
    ///
    /// # Errors
    /// Returns `EntryError` if:
    /// - The word has fewer than 2 letters
    /// - The word contains anything other than alphabetic characters
    /// - Any hint is empty
    ///
    /// # Examples
    /// ```
    /// use mind_games::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Hope", ["Feeling of expectation", "Keeps us going", "Opposite of despair"]).unwrap();
    /// assert_eq!(entry.word(), "hope");
    /// assert_eq!(entry.hint(0), Some("Feeling of expectation"));
    ///
    /// assert!(WordEntry::new("a", ["x", "y", "z"]).is_err());
    /// ```
    pub fn new(word: impl Into<String>, hints: [&str; HINT_COUNT]) -> Result<Self, EntryError> {
        let word: String = word.into().trim().to_lowercase();

        let len = word.chars().count();
        if len < 2 {
            return Err(EntryError::TooShort(len));
        }

        if !word.chars().all(char::is_alphabetic) {
            return Err(EntryError::NonAlphabetic(word));
        }

        if let Some(index) = hints.iter().position(|h| h.trim().is_empty()) {
            return Err(EntryError::EmptyHint(index));
        }

        Ok(Self {
            word,
            hints: hints.map(|h| h.trim().to_string()),
        })
    }

    /// Get the answer word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Get a hint by index (0 = most general)
    #[inline]
    #[must_use]
    pub fn hint(&self, index: usize) -> Option<&str> {
        self.hints.get(index).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &[String; HINT_COUNT] {
        &self.hints
    }

    /// Check a guess against the answer, ignoring case and surrounding whitespace
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.word
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
