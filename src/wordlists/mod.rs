//! Word corpus for Word Scramble
//!
//! Per-level entry lists, loaded once at startup. Sessions never touch the
//! master lists: they work on shuffled snapshots.

mod embedded;
pub mod loader;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};
pub use loader::CorpusError;

use crate::core::random::shuffle;
use crate::core::{Level, RandomSource, WordEntry};

/// Immutable per-level word lists
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    easy: Vec<WordEntry>,
    medium: Vec<WordEntry>,
    hard: Vec<WordEntry>,
}

impl Corpus {
    /// Build a corpus from explicit per-level lists
    #[must_use]
    pub fn from_levels(
        easy: Vec<WordEntry>,
        medium: Vec<WordEntry>,
        hard: Vec<WordEntry>,
    ) -> Self {
        Self { easy, medium, hard }
    }

    /// The corpus compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_levels(
            loader::entries_from_table(EASY),
            loader::entries_from_table(MEDIUM),
            loader::entries_from_table(HARD),
        )
    }

    /// Master list for a level, in load order
    #[must_use]
    pub fn entries(&self, level: Level) -> &[WordEntry] {
        match level {
            Level::Easy => &self.easy,
            Level::Medium => &self.medium,
            Level::Hard => &self.hard,
        }
    }

    #[must_use]
    pub fn len(&self, level: Level) -> usize {
        self.entries(level).len()
    }

    #[must_use]
    pub fn is_empty(&self, level: Level) -> bool {
        self.entries(level).is_empty()
    }

    /// Independent, freshly shuffled copy of a level's entries
    ///
    /// Duplicates are kept and count as distinct draws.
    pub fn snapshot<R: RandomSource + ?Sized>(&self, level: Level, rng: &mut R) -> Vec<WordEntry> {
        let mut entries = self.entries(level).to_vec();
        shuffle(&mut entries, rng);
        entries
    }
}
