//! Formatting utilities shared by the terminal front ends

use crate::session::SessionEvent;

/// Player-facing text for an engine event
#[must_use]
pub fn event_message(event: &SessionEvent) -> String {
    match event {
        SessionEvent::RoundStarted { round, scrambled } => {
            format!("Word {round}: {scrambled}")
        }
        SessionEvent::WrongGuess { attempts_left } => {
            format!("Wrong guess! {}", attempts_label(*attempts_left))
        }
        SessionEvent::HintDisclosed { hint, .. } => hint_label(hint),
        SessionEvent::RoundWon { word } => format!("Correct! The word was: {word}"),
        SessionEvent::RoundLost { word } => {
            format!("Out of tries! The correct word was: {word}")
        }
        SessionEvent::RoundSkipped => "Word skipped.".to_string(),
        SessionEvent::EntrySkipped { word } => {
            format!("Skipped '{word}': it cannot be scrambled.")
        }
        SessionEvent::SessionEnded { .. } => {
            "Session finished! Returning to level selection.".to_string()
        }
        SessionEvent::NoWordsForLevel { .. } => "No words available for this level.".to_string(),
    }
}

/// Title of the modal an event raises, if any
#[must_use]
pub const fn modal_title(event: &SessionEvent) -> Option<&'static str> {
    match event {
        SessionEvent::RoundWon { .. } => Some("Correct"),
        SessionEvent::RoundLost { .. } => Some("Moving On"),
        SessionEvent::SessionEnded { .. } => Some("Session Over"),
        _ => None,
    }
}

#[must_use]
pub fn attempts_label(attempts_left: u8) -> String {
    format!("Attempts left: {attempts_left}")
}

#[must_use]
pub fn hint_label(hint: &str) -> String {
    format!("Hint: {hint}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;

    #[test]
    fn outcome_messages_reveal_word() {
        assert_eq!(
            event_message(&SessionEvent::RoundWon { word: "hope".into() }),
            "Correct! The word was: hope"
        );
        assert_eq!(
            event_message(&SessionEvent::RoundLost { word: "wisdom".into() }),
            "Out of tries! The correct word was: wisdom"
        );
    }

    #[test]
    fn skip_message_hides_word() {
        assert_eq!(event_message(&SessionEvent::RoundSkipped), "Word skipped.");
    }

    #[test]
    fn hint_and_attempts_labels() {
        assert_eq!(
            event_message(&SessionEvent::HintDisclosed {
                index: 0,
                hint: "Inner strength".into()
            }),
            "Hint: Inner strength"
        );
        assert_eq!(
            event_message(&SessionEvent::WrongGuess { attempts_left: 2 }),
            "Wrong guess! Attempts left: 2"
        );
    }

    #[test]
    fn modal_titles() {
        assert_eq!(modal_title(&SessionEvent::RoundWon { word: "x".into() }), Some("Correct"));
        assert_eq!(modal_title(&SessionEvent::SessionEnded { rounds_completed: 3 }), Some("Session Over"));
        assert_eq!(modal_title(&SessionEvent::RoundSkipped), None);
        assert_eq!(modal_title(&SessionEvent::NoWordsForLevel { level: Level::Easy }), None);
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn progress_bar_partial() {
        assert_eq!(create_progress_bar(3, 10, 10), "███░░░░░░░");
        assert_eq!(create_progress_bar(5, 0, 4), "░░░░");
    }
}
