//! Session outcome events and observers

use crate::core::Level;

/// Everything a presenter needs to hear from the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new word is on screen
    RoundStarted { round: usize, scrambled: String },
    /// A non-empty guess missed; `attempts_left` is after the decrement
    WrongGuess { attempts_left: u8 },
    /// Hint `index` (0 = most general) is now shown
    HintDisclosed { index: usize, hint: String },
    RoundWon { word: String },
    RoundLost { word: String },
    /// The player skipped; the answer stays hidden
    RoundSkipped,
    /// An entry was drawn but has no distinct arrangement
    EntrySkipped { word: String },
    SessionEnded { rounds_completed: usize },
    NoWordsForLevel { level: Level },
}

impl SessionEvent {
    /// Whether this event ends a round
    #[must_use]
    pub const fn is_round_end(&self) -> bool {
        matches!(
            self,
            Self::RoundWon { .. } | Self::RoundLost { .. } | Self::RoundSkipped
        )
    }
}

/// Receiver of engine events
pub trait SessionObserver {
    fn notify(&mut self, event: SessionEvent);
}

/// Records events in order
impl SessionObserver for Vec<SessionEvent> {
    fn notify(&mut self, event: SessionEvent) {
        self.push(event);
    }
}

/// Round and session tallies for the running process
///
/// Never persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_won: usize,
    pub rounds_lost: usize,
    pub rounds_skipped: usize,
    pub sessions_finished: usize,
}

impl Statistics {
    pub fn record(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::RoundWon { .. } => self.rounds_won += 1,
            SessionEvent::RoundLost { .. } => self.rounds_lost += 1,
            SessionEvent::RoundSkipped => self.rounds_skipped += 1,
            SessionEvent::SessionEnded { .. } => self.sessions_finished += 1,
            _ => {}
        }
    }

    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_won + self.rounds_lost + self.rounds_skipped
    }

    /// Percentage of played rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let played = self.rounds_played();
        if played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / played as f64 * 100.0
        }
    }
}
