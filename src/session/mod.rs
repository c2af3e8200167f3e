//! Word Scramble session engine
//!
//! The engine owns in-session state and reports progress as typed events;
//! presenters decide how to show them.

mod engine;
pub mod events;

pub use engine::{DEFAULT_MAX_ROUNDS, MAX_ATTEMPTS, Round, Session, SessionConfig};
pub use events::{SessionEvent, SessionObserver, Statistics};
