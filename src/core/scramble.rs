//! Word scrambling
//!
//! Produces a random permutation of a word's characters that never equals the
//! original word (case-insensitive).

use super::random::{RandomSource, shuffle};
use rustc_hash::FxHashSet;
use std::fmt;

/// Random permutations tried before falling back to a rotation
const MAX_SHUFFLE_ATTEMPTS: usize = 32;

/// Error type for words that cannot be scrambled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// Every arrangement of the word equals the word itself (e.g. "aaa")
    Unscramblable(String),
}

impl fmt::Display for ScrambleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unscramblable(word) => {
                write!(f, "Word '{word}' has no arrangement distinct from itself")
            }
        }
    }
}

impl std::error::Error for ScrambleError {}

/// Check whether a word has at least one arrangement distinct from itself
#[must_use]
pub fn is_scramblable(word: &str) -> bool {
    let distinct: FxHashSet<char> = word.chars().flat_map(char::to_lowercase).collect();
    distinct.len() >= 2
}

/// Scramble a word
///
/// Draws uniform random permutations until one differs from the input. If the
/// source keeps producing the original arrangement, rotates the characters by
/// one instead, which always differs when the word has two distinct letters.
///
/// # Errors
///
/// Returns `ScrambleError::Unscramblable` if the word has fewer than two
/// distinct (case-folded) characters.
///
/// # Examples
/// ```
/// use mind_games::core::{SeededRandom, scramble};
///
/// let mut rng = SeededRandom::from_seed(1);
/// let scrambled = scramble("courage", &mut rng).unwrap();
/// assert_ne!(scrambled, "courage");
/// assert_eq!(scrambled.len(), "courage".len());
///
/// assert!(scramble("aaa", &mut rng).is_err());
/// ```
pub fn scramble<R: RandomSource + ?Sized>(word: &str, rng: &mut R) -> Result<String, ScrambleError> {
    if !is_scramblable(word) {
        return Err(ScrambleError::Unscramblable(word.to_string()));
    }

    let mut chars: Vec<char> = word.chars().collect();

    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        shuffle(&mut chars, rng);
        let candidate: String = chars.iter().collect();
        if !same_ignoring_case(&candidate, word) {
            return Ok(candidate);
        }
    }

    // chars currently spells the word (case-insensitively)
    chars.rotate_left(1);
    Ok(chars.into_iter().collect())
}

fn same_ignoring_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
