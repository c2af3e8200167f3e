//! Core domain types for Word Scramble
//!
//! Entries, levels, the scrambler and the injectable random source. Nothing
//! here holds session state.

mod entry;
mod level;
pub mod random;
mod scramble;

pub use entry::{EntryError, HINT_COUNT, WordEntry};
pub use level::{Level, LevelParseError};
pub use random::{RandomSource, SeededRandom};
pub use scramble::{ScrambleError, is_scramblable, scramble};
