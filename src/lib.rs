//! Mind Game Royale
//!
//! A small game hub: a Word Scramble session engine over a tiered word
//! corpus, a navigation shell, and terminal front ends.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mind_games::core::{Level, SeededRandom};
//! use mind_games::session::{Session, SessionConfig, SessionEvent};
//! use mind_games::wordlists::Corpus;
//!
//! let corpus = Corpus::embedded();
//! let mut session = Session::new(&corpus, SeededRandom::from_seed(42), SessionConfig::default());
//!
//! let mut events: Vec<SessionEvent> = Vec::new();
//! session.start(Level::Easy, &mut events);
//! session.submit("courage", &mut events);
//! println!("{events:?}");
//! ```

// Core domain types
pub mod core;

// Word Scramble session engine
pub mod session;

// Word lists
pub mod wordlists;

// Navigation between the hub's views
pub mod shell;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
