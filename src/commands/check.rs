//! Corpus verification command
//!
//! Scrambles every entry of every level many times and checks that each
//! result is a permutation of the word that differs from it.

use crate::core::{Level, SeededRandom, WordEntry, scramble};
use crate::wordlists::Corpus;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a corpus check
pub struct CheckConfig {
    pub trials: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(trials: usize, seed: u64) -> Self {
        Self {
            trials,
            seed,
            show_progress: true,
        }
    }
}

/// What went wrong with a single entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Unscramblable,
    NotAPermutation(String),
    SameAsWord(String),
}

/// A failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub level: Level,
    pub word: String,
    pub kind: ViolationKind,
}

/// Per-level summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelSummary {
    pub entries: usize,
    pub distinct_words: usize,
    pub shortest: usize,
    pub longest: usize,
}

/// Result of checking a corpus
#[derive(Debug)]
pub struct CheckReport {
    pub trials_per_entry: usize,
    pub levels: Vec<(Level, LevelSummary)>,
    pub violations: Vec<Violation>,
    pub duration: Duration,
}

impl CheckReport {
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.levels.iter().map(|(_, s)| s.entries).sum()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check every entry of the corpus
///
/// Entries are checked in parallel, each with its own generator derived from
/// the configured seed, so reports are reproducible.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_check(corpus: &Corpus, config: &CheckConfig) -> CheckReport {
    let start = Instant::now();

    let entries: Vec<(Level, &WordEntry)> = Level::ALL
        .iter()
        .flat_map(|&level| corpus.entries(level).iter().map(move |e| (level, e)))
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(entries.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let violations: Vec<Violation> = entries
        .par_iter()
        .enumerate()
        .flat_map_iter(|(index, &(level, entry))| {
            let found = check_entry(level, entry, config.trials, config.seed.wrapping_add(index as u64));
            pb.inc(1);
            found
        })
        .collect();

    pb.finish_with_message("Complete!");

    CheckReport {
        trials_per_entry: config.trials,
        levels: Level::ALL
            .iter()
            .map(|&level| (level, summarize(corpus.entries(level))))
            .collect(),
        violations,
        duration: start.elapsed(),
    }
}

/// Scramble one entry `trials` times, reporting the first failure
fn check_entry(level: Level, entry: &WordEntry, trials: usize, seed: u64) -> Option<Violation> {
    let mut rng = SeededRandom::from_seed(seed);
    let word = entry.word();
    let expected = letter_counts(word);

    let violation = |kind| Violation {
        level,
        word: word.to_string(),
        kind,
    };

    for _ in 0..trials {
        let Ok(scrambled) = scramble(word, &mut rng) else {
            return Some(violation(ViolationKind::Unscramblable));
        };
        if letter_counts(&scrambled) != expected {
            return Some(violation(ViolationKind::NotAPermutation(scrambled)));
        }
        if scrambled.to_lowercase() == word.to_lowercase() {
            return Some(violation(ViolationKind::SameAsWord(scrambled)));
        }
    }

    None
}

fn letter_counts(word: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

fn summarize(entries: &[WordEntry]) -> LevelSummary {
    let mut words: Vec<&str> = entries.iter().map(WordEntry::word).collect();
    let lengths = words.iter().map(|w| w.chars().count());
    let shortest = lengths.clone().min().unwrap_or(0);
    let longest = lengths.max().unwrap_or(0);

    words.sort_unstable();
    words.dedup();

    LevelSummary {
        entries: entries.len(),
        distinct_words: words.len(),
        shortest,
        longest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(trials: usize) -> CheckConfig {
        CheckConfig {
            show_progress: false,
            ..CheckConfig::new(trials, 7)
        }
    }

    #[test]
    fn embedded_corpus_is_clean() {
        let corpus = Corpus::embedded();
        let report = run_check(&corpus, &quiet(50));

        assert!(report.is_clean(), "violations: {:?}", report.violations);
        assert_eq!(report.total_entries(), corpus.len(Level::Easy) + corpus.len(Level::Medium) + corpus.len(Level::Hard));
        assert_eq!(report.trials_per_entry, 50);
    }

    #[test]
    fn unscramblable_entry_is_reported() {
        let corpus = Corpus::from_levels(
            vec![WordEntry::new("zzz", ["a", "b", "c"]).unwrap()],
            vec![WordEntry::new("hope", ["a", "b", "c"]).unwrap()],
            Vec::new(),
        );
        let report = run_check(&corpus, &quiet(10));

        assert_eq!(
            report.violations,
            vec![Violation {
                level: Level::Easy,
                word: "zzz".into(),
                kind: ViolationKind::Unscramblable,
            }]
        );
    }

    #[test]
    fn summary_counts_duplicates() {
        let corpus = Corpus::embedded();
        let report = run_check(&corpus, &quiet(1));

        let (level, easy) = &report.levels[0];
        assert_eq!(*level, Level::Easy);
        assert_eq!(easy.entries, 67);
        assert_eq!(easy.distinct_words, 58);
        assert_eq!(easy.shortest, 4);
    }

    #[test]
    fn letter_counts_compare_multisets() {
        assert_eq!(letter_counts("listen"), letter_counts("silent"));
        assert_ne!(letter_counts("aab"), letter_counts("abb"));
    }
}
