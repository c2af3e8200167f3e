//! Navigation shell
//!
//! Holds the single active view and the Word Scramble session behind it.
//! Renderers observe `Shell::view`; nothing else switches views.

use crate::core::{Level, RandomSource};
use crate::session::{Session, SessionObserver};
use log::debug;

/// Top-level views of the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    MainMenu,
    WordScramble,
    TicTacToeMenu,
}

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    WordScramble,
    TicTacToe,
    Exit,
}

impl MenuItem {
    pub const ALL: [Self; 3] = [Self::WordScramble, Self::TicTacToe, Self::Exit];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WordScramble => "Word Scramble",
            Self::TicTacToe => "Tic Tac Toe",
            Self::Exit => "Exit",
        }
    }
}

/// View switcher owning the Word Scramble session
pub struct Shell<'a, R: RandomSource> {
    view: View,
    selected_level: Level,
    session: Session<'a, R>,
    exit_requested: bool,
}

impl<'a, R: RandomSource> Shell<'a, R> {
    /// Start on the main menu
    pub const fn new(session: Session<'a, R>) -> Self {
        Self {
            view: View::MainMenu,
            selected_level: Level::Easy,
            session,
            exit_requested: false,
        }
    }

    /// Switch the active view
    ///
    /// Leaving Word Scramble aborts any running session. Entering it shows
    /// the level selector with Easy selected and no word on screen.
    pub fn show(&mut self, view: View) {
        if self.view == View::WordScramble && view != View::WordScramble {
            self.session.abort();
        }
        if view == View::WordScramble {
            self.session.abort();
            self.selected_level = Level::Easy;
        }
        debug!("Showing {view:?}");
        self.view = view;
    }

    /// Activate a main menu entry
    pub fn choose(&mut self, item: MenuItem) {
        match item {
            MenuItem::WordScramble => self.show(View::WordScramble),
            MenuItem::TicTacToe => self.show(View::TicTacToeMenu),
            MenuItem::Exit => self.request_exit(),
        }
    }

    /// Start a session at the selected level
    pub fn start<O: SessionObserver + ?Sized>(&mut self, observer: &mut O) {
        if self.view == View::WordScramble {
            self.session.start(self.selected_level, observer);
        }
    }

    pub fn select_level(&mut self, level: Level) {
        self.selected_level = level;
    }

    pub fn request_exit(&mut self) {
        self.session.abort();
        self.exit_requested = true;
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub const fn selected_level(&self) -> Level {
        self.selected_level
    }

    #[must_use]
    pub const fn session(&self) -> &Session<'a, R> {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut Session<'a, R> {
        &mut self.session
    }

    #[must_use]
    pub const fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
