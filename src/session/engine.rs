//! Word Scramble session engine
//!
//! A session draws words from a shuffled snapshot of one level, scrambles
//! them, and runs a four-attempt guess loop per round. Each wrong guess after
//! the first costs an attempt and discloses the next hint:
//!
//! ```text
//! A4 --wrong--> A3 (hint 0) --wrong--> A2 (hint 1) --wrong--> A1 (hint 2) --wrong--> LOST
//!  \______________\___________________\___________________\--correct--> WON
//! ```
//!
//! The session ends after `max_rounds` finished rounds or when the pool runs dry.

use super::events::{SessionEvent, SessionObserver};
use crate::core::{HINT_COUNT, Level, RandomSource, WordEntry, scramble};
use crate::wordlists::Corpus;
use log::{debug, info, warn};

/// Attempts per round
pub const MAX_ATTEMPTS: u8 = 4;

/// Default number of rounds per session
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Session tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_rounds: usize,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(max_rounds: usize) -> Self {
        Self { max_rounds }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS)
    }
}

/// The word currently on screen
#[derive(Debug, Clone)]
pub struct Round {
    entry: WordEntry,
    scrambled: String,
    attempts_left: u8,
    hints_disclosed: usize,
}

impl Round {
    fn new(entry: WordEntry, scrambled: String) -> Self {
        Self {
            entry,
            scrambled,
            attempts_left: MAX_ATTEMPTS,
            hints_disclosed: 0,
        }
    }

    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    #[must_use]
    pub const fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    /// Number of hints shown so far (0..=3)
    #[must_use]
    pub const fn hints_disclosed(&self) -> usize {
        self.hints_disclosed
    }

    /// Most recently disclosed hint
    #[must_use]
    pub fn current_hint(&self) -> Option<&str> {
        self.hints_disclosed
            .checked_sub(1)
            .and_then(|index| self.entry.hint(index))
    }
}

enum RoundEnd {
    Won,
    Lost,
    Skipped,
}

/// Word Scramble session state machine
///
/// Owns all in-session state. Every operation runs to completion and reports
/// what happened through a `SessionObserver`.
pub struct Session<'a, R: RandomSource> {
    corpus: &'a Corpus,
    rng: R,
    config: SessionConfig,
    level: Option<Level>,
    pool: Vec<WordEntry>,
    round: Option<Round>,
    rounds_completed: usize,
    active: bool,
}

impl<'a, R: RandomSource> Session<'a, R> {
    /// Create an inactive session over a corpus
    pub const fn new(corpus: &'a Corpus, rng: R, config: SessionConfig) -> Self {
        Self {
            corpus,
            rng,
            config,
            level: None,
            pool: Vec::new(),
            round: None,
            rounds_completed: 0,
            active: false,
        }
    }

    /// Start a fresh session at `level` and present its first word
    ///
    /// An empty level reports `NoWordsForLevel` and leaves the session inactive.
    pub fn start<O: SessionObserver + ?Sized>(&mut self, level: Level, observer: &mut O) {
        self.abort();
        self.level = Some(level);
        self.pool = self.corpus.snapshot(level, &mut self.rng);

        if self.pool.is_empty() {
            warn!("No words available for level {level}");
            observer.notify(SessionEvent::NoWordsForLevel { level });
            return;
        }

        info!(
            "Starting {level} session: {} words, {} rounds",
            self.pool.len(),
            self.config.max_rounds
        );
        self.active = true;
        self.advance(observer);
    }

    /// Submit a guess for the current word
    ///
    /// Input is trimmed and compared case-insensitively. Blank input and
    /// guesses outside an active round are ignored.
    pub fn submit<O: SessionObserver + ?Sized>(&mut self, guess: &str, observer: &mut O) {
        if !self.active {
            return;
        }
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let guess = guess.trim();
        if guess.is_empty() {
            debug!("Ignoring empty guess");
            return;
        }

        if round.entry.matches(guess) {
            self.finish_round(RoundEnd::Won, observer);
            return;
        }

        round.attempts_left -= 1;
        let attempts_left = round.attempts_left;
        debug!("Wrong guess '{guess}', {attempts_left} attempts left");
        observer.notify(SessionEvent::WrongGuess { attempts_left });

        if attempts_left == 0 {
            self.finish_round(RoundEnd::Lost, observer);
            return;
        }

        let index = HINT_COUNT - usize::from(attempts_left);
        round.hints_disclosed = index + 1;
        if let Some(hint) = round.entry.hint(index) {
            observer.notify(SessionEvent::HintDisclosed {
                index,
                hint: hint.to_string(),
            });
        }
    }

    /// Give up on the current word without revealing it
    ///
    /// The skipped round counts toward the round limit.
    pub fn skip<O: SessionObserver + ?Sized>(&mut self, observer: &mut O) {
        if self.active && self.round.is_some() {
            self.finish_round(RoundEnd::Skipped, observer);
        }
    }

    /// Discard all session state
    pub fn abort(&mut self) {
        if self.active {
            debug!(
                "Aborting session after {} rounds",
                self.rounds_completed
            );
        }
        self.active = false;
        self.level = None;
        self.pool.clear();
        self.round = None;
        self.rounds_completed = 0;
    }

    fn finish_round<O: SessionObserver + ?Sized>(&mut self, end: RoundEnd, observer: &mut O) {
        let Some(round) = self.round.take() else {
            return;
        };
        self.rounds_completed += 1;

        let word = round.entry.word().to_string();
        let event = match end {
            RoundEnd::Won => SessionEvent::RoundWon { word },
            RoundEnd::Lost => SessionEvent::RoundLost { word },
            RoundEnd::Skipped => SessionEvent::RoundSkipped,
        };
        debug!("Round {} finished: {event:?}", self.rounds_completed);
        observer.notify(event);

        self.advance(observer);
    }

    /// Present the next word, or end the session
    fn advance<O: SessionObserver + ?Sized>(&mut self, observer: &mut O) {
        self.round = None;

        while self.rounds_completed < self.config.max_rounds && !self.pool.is_empty() {
            let index = self.rng.next_index(self.pool.len());
            let entry = self.pool.remove(index);

            match scramble(entry.word(), &mut self.rng) {
                Ok(scrambled) => {
                    let round = self.rounds_completed + 1;
                    debug!("Round {round}: '{scrambled}'");
                    observer.notify(SessionEvent::RoundStarted {
                        round,
                        scrambled: scrambled.clone(),
                    });
                    self.round = Some(Round::new(entry, scrambled));
                    return;
                }
                Err(err) => {
                    warn!("Skipping entry: {err}");
                    observer.notify(SessionEvent::EntrySkipped {
                        word: entry.word().to_string(),
                    });
                }
            }
        }

        self.end_session(observer);
    }

    fn end_session<O: SessionObserver + ?Sized>(&mut self, observer: &mut O) {
        info!("Session finished after {} rounds", self.rounds_completed);
        self.active = false;
        self.pool.clear();
        observer.notify(SessionEvent::SessionEnded {
            rounds_completed: self.rounds_completed,
        });
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn level(&self) -> Option<Level> {
        self.level
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn rounds_completed(&self) -> usize {
        self.rounds_completed
    }

    /// Words not yet drawn this session
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeededRandom;
    use crate::core::random::testing::ScriptedRandom;

    fn entry(word: &str) -> WordEntry {
        match word {
            "hope" => WordEntry::new(
                "hope",
                ["Feeling of expectation", "Keeps us going", "Opposite of despair"],
            ),
            "courage" => WordEntry::new(
                "courage",
                ["Inner strength", "Needed to face fear", "Heroic quality"],
            ),
            "wisdom" => WordEntry::new(
                "wisdom",
                ["Deep knowledge", "Comes with age", "Guides decisions"],
            ),
            other => WordEntry::new(other, ["general", "closer", "specific"]),
        }
        .unwrap()
    }

    /// Easy-only corpus; with an unscripted source the last word is drawn first
    fn easy_corpus(words: &[&str]) -> Corpus {
        Corpus::from_levels(words.iter().map(|w| entry(w)).collect(), Vec::new(), Vec::new())
    }

    fn scripted(corpus: &Corpus) -> Session<'_, ScriptedRandom> {
        Session::new(corpus, ScriptedRandom::default(), SessionConfig::default())
    }

    fn current_word<R: RandomSource>(session: &Session<'_, R>) -> String {
        session.round().unwrap().entry.word().to_string()
    }

    #[test]
    fn win_on_first_try() {
        let corpus = easy_corpus(&["courage", "wisdom", "hope"]);
        let mut session = scripted(&corpus);
        let mut events = Vec::new();

        session.start(Level::Easy, &mut events);
        assert_eq!(
            events,
            vec![SessionEvent::RoundStarted {
                round: 1,
                scrambled: "opeh".to_string()
            }]
        );
        assert_eq!(current_word(&session), "hope");

        events.clear();
        session.submit("hope", &mut events);

        assert_eq!(events[0], SessionEvent::RoundWon { word: "hope".into() });
        assert!(!events.iter().any(|e| matches!(
            e,
            SessionEvent::WrongGuess { .. } | SessionEvent::HintDisclosed { .. }
        )));
        assert_eq!(session.rounds_completed(), 1);
        assert!(session.is_active());
        assert_eq!(current_word(&session), "wisdom");
        assert_eq!(session.round().unwrap().attempts_left(), MAX_ATTEMPTS);
        assert_eq!(session.round().unwrap().current_hint(), None);
    }

    #[test]
    fn win_after_two_wrong() {
        let corpus = easy_corpus(&["wisdom", "courage"]);
        let mut session = scripted(&corpus);
        let mut events = Vec::new();
        session.start(Level::Easy, &mut events);
        assert_eq!(current_word(&session), "courage");

        events.clear();
        session.submit("xxxxxxx", &mut events);
        assert_eq!(
            events,
            vec![
                SessionEvent::WrongGuess { attempts_left: 3 },
                SessionEvent::HintDisclosed {
                    index: 0,
                    hint: "Inner strength".into()
                },
            ]
        );
        let round = session.round().unwrap();
        assert_eq!(round.attempts_left(), 3);
        assert_eq!(round.current_hint(), Some("Inner strength"));

        events.clear();
        session.submit("yyyyyyy", &mut events);
        assert_eq!(
            events,
            vec![
                SessionEvent::WrongGuess { attempts_left: 2 },
                SessionEvent::HintDisclosed {
                    index: 1,
                    hint: "Needed to face fear".into()
                },
            ]
        );
        assert_eq!(session.round().unwrap().attempts_left(), 2);

        events.clear();
        session.submit("courage", &mut events);
        assert_eq!(events[0], SessionEvent::RoundWon { word: "courage".into() });
        assert!(!events.iter().any(|e| matches!(e, SessionEvent::HintDisclosed { .. })));
        assert_eq!(session.rounds_completed(), 1);
    }

    #[test]
    fn loss_after_four_wrong() {
        let corpus = easy_corpus(&["hope", "wisdom"]);
        let mut session = scripted(&corpus);
        let mut events = Vec::new();
        session.start(Level::Easy, &mut events);
        assert_eq!(current_word(&session), "wisdom");

        let expected_hints = ["Deep knowledge", "Comes with age", "Guides decisions"];
        for (i, hint) in expected_hints.iter().enumerate() {
            events.clear();
            session.submit("nope", &mut events);
            let round = session.round().unwrap();
            assert_eq!(usize::from(round.attempts_left()), 3 - i);
            assert_eq!(round.hints_disclosed(), i + 1);
            assert_eq!(round.current_hint(), Some(*hint));
        }

        events.clear();
        session.submit("nope", &mut events);
        assert_eq!(events[0], SessionEvent::WrongGuess { attempts_left: 0 });
        assert_eq!(events[1], SessionEvent::RoundLost { word: "wisdom".into() });
        assert!(!events.iter().any(|e| matches!(e, SessionEvent::HintDisclosed { .. })));
        assert_eq!(session.rounds_completed(), 1);
        assert_eq!(current_word(&session), "hope");
    }

    #[test]
    fn session_ends_after_max_rounds() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, SeededRandom::from_seed(4), SessionConfig::default());
        let mut events = Vec::new();
        session.start(Level::Easy, &mut events);

        for round in 1..=DEFAULT_MAX_ROUNDS {
            assert!(session.is_active(), "inactive before round {round}");
            if round % 2 == 0 {
                session.skip(&mut events);
            } else {
                for _ in 0..MAX_ATTEMPTS {
                    session.submit("zzzz", &mut events);
                }
            }
        }

        let ends: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, SessionEvent::SessionEnded { .. }))
            .collect();
        assert_eq!(ends, vec![&SessionEvent::SessionEnded { rounds_completed: 10 }]);
        assert_eq!(events.last(), Some(&SessionEvent::SessionEnded { rounds_completed: 10 }));
        assert!(!session.is_active());
        assert!(session.round().is_none());
        assert_eq!(events.iter().filter(|e| e.is_round_end()).count(), 10);
    }

    #[test]
    fn empty_input_is_ignored() {
        let corpus = easy_corpus(&["hope"]);
        let mut session = scripted(&corpus);
        let mut events = Vec::new();
        session.start(Level::Easy, &mut events);

        events.clear();
        session.submit("", &mut events);
        session.submit("   \t", &mut events);

        assert!(events.is_empty());
        let round = session.round().unwrap();
        assert_eq!(round.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(round.current_hint(), None);
    }

    #[test]
    fn guess_is_trimmed_and_case_folded() {
        let corpus = easy_corpus(&["hope"]);
        let mut session = scripted(&corpus);
        let mut events = Vec::new();
        session.start(Level::Easy, &mut events);

        events.clear();
        session.submit("  HoPE \n", &mut events);
        assert_eq!(events[0], SessionEvent::RoundWon { word: "hope".into() });
    }

    #[test]
    fn skip_hides_answer_and_counts_round() {
        let corpus = easy_corpus(&["hope", "wisdom"]);
        let mut session = scripted(&corpus);
        let mut events = Vec::new();
        session.start(Level::Easy, &mut events);

        session.submit("nope", &mut events);
        events.clear();
        session.skip(&mut events);

        assert_eq!(events[0], SessionEvent::RoundSkipped);
        assert!(!events.iter().any(|e| matches!(
            e,
            SessionEvent::RoundLost { .. } | SessionEvent::RoundWon { .. }
        )));
        assert_eq!(session.rounds_completed(), 1);
        let round = session.round().unwrap();
        assert_eq!(round.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(round.hints_disclosed(), 0);
    }

    #[test]
    fn small_pool_ends_when_exhausted() {
        let words = ["hope", "wisdom", "courage", "peace"];
        let corpus = easy_corpus(&words);
        let mut session = Session::new(&corpus, SeededRandom::from_seed(8), SessionConfig::default());
        let mut events = Vec::new();
        session.start(Level::Easy, &mut events);

        while session.is_active() {
            session.skip(&mut events);
        }

        assert_eq!(session.rounds_completed(), words.len());
        assert_eq!(
            events.last(),
            Some(&SessionEvent::SessionEnded { rounds_completed: 4 })
        );
    }

    #[test]
    fn empty_level_stays_inactive() {
        let corpus = easy_corpus(&["hope"]);
        let mut session = scripted(&corpus);
        let mut events = Vec::new();
        session.start(Level::Hard, &mut events);

        assert_eq!(events, vec![SessionEvent::NoWordsForLevel { level: Level::Hard }]);
        assert!(!session.is_active());
        assert!(session.round().is_none());
    }

    #[test]
    fn unscramblable_entries_are_skipped() {
        let corpus = easy_corpus(&["hope", "zzz"]);
        let mut session = scripted(&corpus);
        let mut events = Vec::new();
        session.start(Level::Easy, &mut events);

        assert_eq!(
            events,
            vec![
                SessionEvent::EntrySkipped { word: "zzz".into() },
                SessionEvent::RoundStarted {
                    round: 1,
                    scrambled: "opeh".into()
                },
            ]
        );
        assert_eq!(current_word(&session), "hope");
    }

    #[test]
    fn only_unscramblable_entries_end_session() {
        let corpus = easy_corpus(&["aaa", "zz"]);
        let mut session = scripted(&corpus);
        let mut events = Vec::new();
        session.start(Level::Easy, &mut events);

        assert_eq!(
            events.last(),
            Some(&SessionEvent::SessionEnded { rounds_completed: 0 })
        );
        assert!(!session.is_active());
    }

    #[test]
    fn abort_then_start_matches_fresh_start() {
        let corpus = easy_corpus(&["courage", "wisdom", "hope"]);

        let mut fresh = scripted(&corpus);
        let mut fresh_events = Vec::new();
        fresh.start(Level::Easy, &mut fresh_events);

        let mut reused = scripted(&corpus);
        let mut events = Vec::new();
        reused.start(Level::Easy, &mut events);
        reused.submit("nope", &mut events);
        reused.abort();
        assert!(!reused.is_active());
        assert!(reused.round().is_none());

        events.clear();
        reused.start(Level::Easy, &mut events);

        assert_eq!(events, fresh_events);
        assert_eq!(reused.is_active(), fresh.is_active());
        assert_eq!(reused.rounds_completed(), fresh.rounds_completed());
        assert_eq!(reused.remaining(), fresh.remaining());
        let (a, b) = (reused.round().unwrap(), fresh.round().unwrap());
        assert_eq!(a.scrambled(), b.scrambled());
        assert_eq!(a.attempts_left(), b.attempts_left());
        assert_eq!(a.hints_disclosed(), b.hints_disclosed());
    }

    #[test]
    fn operations_on_inactive_session_are_ignored() {
        let corpus = easy_corpus(&["hope"]);
        let mut session = scripted(&corpus);
        let mut events = Vec::new();

        session.submit("hope", &mut events);
        session.skip(&mut events);
        session.abort();

        assert!(events.is_empty());
        assert_eq!(session.rounds_completed(), 0);
    }

    #[test]
    fn configured_round_limit() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, SeededRandom::from_seed(2), SessionConfig::new(3));
        let mut events = Vec::new();
        session.start(Level::Hard, &mut events);

        while session.is_active() {
            session.skip(&mut events);
        }
        assert_eq!(session.rounds_completed(), 3);
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn no_entry_is_drawn_twice() {
        let corpus = Corpus::embedded();
        for seed in 0..40 {
            for level in Level::ALL {
                let mut session = Session::new(
                    &corpus,
                    SeededRandom::from_seed(seed),
                    SessionConfig::new(usize::MAX),
                );
                let mut events = Vec::new();
                session.start(level, &mut events);

                let mut drawn: Vec<String> = Vec::new();
                while session.is_active() {
                    drawn.push(current_word(&session));
                    session.skip(&mut events);
                }

                // Duplicated entries may be drawn once per copy
                assert_eq!(drawn.len(), corpus.len(level));
                for word in &drawn {
                    let in_list = corpus.entries(level).iter().filter(|e| e.word() == word).count();
                    let in_draws = drawn.iter().filter(|w| *w == word).count();
                    assert_eq!(in_draws, in_list, "'{word}' drawn {in_draws} times (seed {seed})");
                }
            }
        }
    }

    #[test]
    fn attempts_and_hints_stay_in_lockstep() {
        let corpus = Corpus::embedded();
        for seed in 0..30 {
            let mut rng = SeededRandom::from_seed(seed + 1000);
            let mut session = Session::new(&corpus, SeededRandom::from_seed(seed), SessionConfig::default());
            let mut events = Vec::new();
            session.start(Level::Medium, &mut events);

            while session.is_active() {
                let before = session.round().unwrap().attempts_left();
                let word = current_word(&session);
                let correct = rng.next_index(5) == 0;
                let rounds_before = session.rounds_completed();

                events.clear();
                session.submit(if correct { word.as_str() } else { "qqqq" }, &mut events);

                if session.rounds_completed() > rounds_before {
                    continue;
                }
                let round = session.round().unwrap();
                assert_eq!(round.attempts_left(), before - 1);
                assert_eq!(
                    round.hints_disclosed(),
                    usize::from(MAX_ATTEMPTS - round.attempts_left())
                );
                assert_eq!(
                    round.current_hint(),
                    round.entry.hint(HINT_COUNT - usize::from(round.attempts_left()))
                );
            }
            assert!(session.rounds_completed() <= DEFAULT_MAX_ROUNDS);
        }
    }

    #[test]
    fn scrambled_words_differ_from_answers() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, SeededRandom::from_seed(99), SessionConfig::new(usize::MAX));
        let mut events = Vec::new();
        session.start(Level::Hard, &mut events);

        while session.is_active() {
            let round = session.round().unwrap();
            assert_ne!(round.scrambled(), round.entry.word());
            session.skip(&mut events);
        }
    }
}
