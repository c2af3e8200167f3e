//! TUI application state and logic

use crate::core::RandomSource;
use crate::output::formatters::{event_message, modal_title};
use crate::session::{SessionEvent, Statistics};
use crate::shell::{MenuItem, Shell, View};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::VecDeque;
use std::io;

/// Application state
pub struct App<'a, R: RandomSource> {
    pub shell: Shell<'a, R>,
    pub menu_cursor: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub modals: VecDeque<Modal>,
    /// Replaces the scrambled word when a session cannot start
    pub notice: Option<String>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Hint,
    Success,
    Error,
}

/// A notification that blocks input until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: &'static str,
    pub text: String,
}

impl<'a, R: RandomSource> App<'a, R> {
    #[must_use]
    pub fn new(shell: Shell<'a, R>) -> Self {
        Self {
            shell,
            menu_cursor: 0,
            input_buffer: String::new(),
            messages: Vec::new(),
            modals: VecDeque::new(),
            notice: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Turn engine events into on-screen messages and modals
    pub fn present(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            self.stats.record(&event);
            let text = event_message(&event);

            if let Some(title) = modal_title(&event) {
                self.modals.push_back(Modal {
                    title,
                    text: text.clone(),
                });
            }

            match event {
                SessionEvent::RoundStarted { .. } => {
                    self.input_buffer.clear();
                    self.notice = None;
                    self.add_message(&text, MessageStyle::Info);
                }
                SessionEvent::WrongGuess { .. } | SessionEvent::RoundLost { .. } => {
                    self.add_message(&text, MessageStyle::Error);
                }
                SessionEvent::HintDisclosed { .. } => self.add_message(&text, MessageStyle::Hint),
                SessionEvent::RoundWon { .. } => self.add_message(&text, MessageStyle::Success),
                SessionEvent::NoWordsForLevel { .. } => {
                    self.add_message(&text, MessageStyle::Error);
                    self.notice = Some(text);
                }
                SessionEvent::RoundSkipped
                | SessionEvent::EntrySkipped { .. }
                | SessionEvent::SessionEnded { .. } => {
                    self.add_message(&text, MessageStyle::Info);
                }
            }
        }
    }

    fn navigate(&mut self, view: View) {
        self.shell.show(view);
        self.input_buffer.clear();
        self.notice = None;
        if view == View::WordScramble {
            self.messages.clear();
        }
    }

    fn choose(&mut self, item: MenuItem) {
        match item {
            MenuItem::WordScramble => self.navigate(View::WordScramble),
            MenuItem::TicTacToe => self.navigate(View::TicTacToeMenu),
            MenuItem::Exit => {
                self.shell.choose(MenuItem::Exit);
                self.should_quit = true;
            }
        }
    }

    fn start_session(&mut self) {
        let mut events = Vec::new();
        self.shell.start(&mut events);
        self.present(events);
    }

    fn submit_guess(&mut self) {
        if self.input_buffer.trim().is_empty() {
            return;
        }
        let guess = std::mem::take(&mut self.input_buffer);
        let mut events = Vec::new();
        self.shell.session_mut().submit(&guess, &mut events);
        self.present(events);
    }

    fn skip_word(&mut self) {
        let mut events = Vec::new();
        self.shell.session_mut().skip(&mut events);
        self.present(events);
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Modals swallow input until dismissed
        if !self.modals.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.modals.pop_front();
            }
            return;
        }

        match self.shell.view() {
            View::MainMenu => self.handle_menu_key(key.code),
            View::TicTacToeMenu => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b')) {
                    self.navigate(View::MainMenu);
                }
            }
            View::WordScramble if self.shell.session().is_active() => {
                self.handle_guess_key(key.code);
            }
            View::WordScramble => self.handle_level_key(key.code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let count = MenuItem::ALL.len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_cursor = (self.menu_cursor + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_cursor = (self.menu_cursor + 1) % count;
            }
            KeyCode::Enter => self.choose(MenuItem::ALL[self.menu_cursor]),
            KeyCode::Char('1') => self.choose(MenuItem::WordScramble),
            KeyCode::Char('2') => self.choose(MenuItem::TicTacToe),
            KeyCode::Char('3' | 'q') => self.choose(MenuItem::Exit),
            _ => {}
        }
    }

    fn handle_level_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                let level = self.shell.selected_level().previous();
                self.shell.select_level(level);
            }
            KeyCode::Right => {
                let level = self.shell.selected_level().next();
                self.shell.select_level(level);
            }
            KeyCode::Enter | KeyCode::Char('s') => self.start_session(),
            KeyCode::Esc | KeyCode::Char('b') => self.navigate(View::MainMenu),
            _ => {}
        }
    }

    fn handle_guess_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Tab => self.skip_word(),
            KeyCode::Esc => self.navigate(View::MainMenu),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: RandomSource>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: RandomSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            log::info!("Exiting hub");
            break;
        }
    }

    Ok(())
}
