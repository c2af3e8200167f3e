//! Corpus loading utilities
//!
//! Builds entries from the embedded tables or from an external word table.
//!
//! External tables hold one entry per line, tab separated:
//!
//! ```text
//! # level   word      hint 1            hint 2           hint 3
//! easy      hope      Feeling of hope   Keeps us going   Opposite of despair
//! ```

use super::Corpus;
use crate::core::{EntryError, HINT_COUNT, Level, WordEntry};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for external corpus files
#[derive(Debug)]
pub enum CorpusError {
    Io(io::Error),
    MalformedLine { line: usize, fields: usize },
    UnknownLevel { line: usize, level: String },
    InvalidEntry { line: usize, source: EntryError },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read corpus: {err}"),
            Self::MalformedLine { line, fields } => write!(
                f,
                "Line {line}: expected level, word and {HINT_COUNT} hints, got {fields} fields"
            ),
            Self::UnknownLevel { line, level } => {
                write!(f, "Line {line}: unknown level '{level}'")
            }
            Self::InvalidEntry { line, source } => write!(f, "Line {line}: {source}"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidEntry { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for CorpusError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Load a corpus from a tab-separated file
///
/// # Errors
///
/// Returns `CorpusError` if the file cannot be read or any line is invalid.
///
/// # Examples
/// ```no_run
/// use mind_games::wordlists::loader::load_from_file;
/// use mind_games::core::Level;
///
/// let corpus = load_from_file("words.tsv").unwrap();
/// println!("{} easy words", corpus.len(Level::Easy));
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let content = fs::read_to_string(path)?;
    parse_corpus(&content)
}

/// Parse tab-separated corpus text
///
/// Blank lines and lines starting with `#` are ignored.
///
/// # Errors
///
/// Returns `CorpusError` describing the first invalid line.
pub fn parse_corpus(content: &str) -> Result<Corpus, CorpusError> {
    let mut easy = Vec::new();
    let mut medium = Vec::new();
    let mut hard = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
        if fields.len() != HINT_COUNT + 2 {
            return Err(CorpusError::MalformedLine {
                line,
                fields: fields.len(),
            });
        }

        let level: Level = fields[0]
            .parse()
            .map_err(|_| CorpusError::UnknownLevel {
                line,
                level: fields[0].to_string(),
            })?;

        let entry = WordEntry::new(fields[1], [fields[2], fields[3], fields[4]])
            .map_err(|source| CorpusError::InvalidEntry { line, source })?;

        match level {
            Level::Easy => easy.push(entry),
            Level::Medium => medium.push(entry),
            Level::Hard => hard.push(entry),
        }
    }

    Ok(Corpus::from_levels(easy, medium, hard))
}

/// Convert an embedded table to entries
///
/// # Examples
/// ```
/// use mind_games::wordlists::loader::entries_from_table;
/// use mind_games::wordlists::EASY;
///
/// let entries = entries_from_table(EASY);
/// assert_eq!(entries.len(), EASY.len());
/// ```
#[must_use]
pub fn entries_from_table(table: &[(&str, [&str; HINT_COUNT])]) -> Vec<WordEntry> {
    table
        .iter()
        .filter_map(|&(word, hints)| match WordEntry::new(word, hints) {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Skipping embedded entry '{word}': {err}");
                None
            }
        })
        .collect()
}
