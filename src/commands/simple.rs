//! Simple interactive CLI mode
//!
//! Text-based game hub without TUI. Reads one line per action.

use crate::core::{Level, RandomSource};
use crate::output::formatters::{attempts_label, event_message, hint_label};
use crate::session::{MAX_ATTEMPTS, SessionEvent, Statistics};
use crate::shell::{MenuItem, Shell, View};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: RandomSource>(shell: &mut Shell<'_, R>) -> Result<Statistics, String> {
    let stdin = io::stdin();
    run_simple_with(shell, stdin.lock(), io::stdout())
}

/// Run the text hub over arbitrary input and output streams
///
/// Returns the tallies for the rounds played. End of input behaves like Exit.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_simple_with<R: RandomSource, I: BufRead, W: Write>(
    shell: &mut Shell<'_, R>,
    input: I,
    output: W,
) -> Result<Statistics, String> {
    let mut hub = TextHub {
        input,
        output,
        stats: Statistics::default(),
    };
    hub.run(shell)?;
    Ok(hub.stats)
}

struct TextHub<I, W> {
    input: I,
    output: W,
    stats: Statistics,
}

impl<I: BufRead, W: Write> TextHub<I, W> {
    fn run<R: RandomSource>(&mut self, shell: &mut Shell<'_, R>) -> Result<(), String> {
        self.say(&format!(
            "\n{}",
            "╔══════════════════════════════════════╗\n\
             ║          Mind Game Royale            ║\n\
             ╚══════════════════════════════════════╝"
                .bright_yellow()
        ))?;

        while !shell.exit_requested() {
            let keep_going = match shell.view() {
                View::MainMenu => self.main_menu(shell)?,
                View::TicTacToeMenu => self.tic_tac_toe(shell)?,
                View::WordScramble if shell.session().is_active() => self.guess(shell)?,
                View::WordScramble => self.level_selection(shell)?,
            };
            if !keep_going {
                shell.request_exit();
            }
        }

        self.say("\n👋 Thanks for playing!\n")
    }

    /// Returns `Ok(false)` at end of input
    fn main_menu<R: RandomSource>(&mut self, shell: &mut Shell<'_, R>) -> Result<bool, String> {
        self.say("\nChoose a Game")?;
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            self.say(&format!("  {}. {}", i + 1, item.label()))?;
        }

        let Some(choice) = self.prompt("Enter number")? else {
            return Ok(false);
        };
        match choice.to_lowercase().as_str() {
            "1" | "word" | "w" => shell.choose(MenuItem::WordScramble),
            "2" | "tic" | "t" => shell.choose(MenuItem::TicTacToe),
            "3" | "exit" | "quit" | "q" => shell.choose(MenuItem::Exit),
            _ => self.say(&"Invalid selection.".red().to_string())?,
        }
        Ok(true)
    }

    fn tic_tac_toe<R: RandomSource>(&mut self, shell: &mut Shell<'_, R>) -> Result<bool, String> {
        self.say("\nTic Tac Toe")?;
        self.say("  Coming soon! This game is not available yet.")?;
        let more = self.prompt("Press Enter to return to the main menu")?.is_some();
        shell.show(View::MainMenu);
        Ok(more)
    }

    fn level_selection<R: RandomSource>(
        &mut self,
        shell: &mut Shell<'_, R>,
    ) -> Result<bool, String> {
        self.say(&format!("\n{}", "Word Scramble".bright_cyan().bold()))?;
        self.say(
            "Rules: Guess the scrambled word. You have 4 attempts. Hint appears only \
             after the first wrong attempt. Type :skip for the next word or :back for the menu.",
        )?;

        let prompt = format!(
            "Level (easy/medium/hard, Enter for {}) or 'back'",
            shell.selected_level()
        );
        let Some(choice) = self.prompt(&prompt)? else {
            return Ok(false);
        };

        match choice.to_lowercase().as_str() {
            "back" | ":back" | "b" => {
                shell.show(View::MainMenu);
                return Ok(true);
            }
            "" => {}
            other => match other.parse::<Level>() {
                Ok(level) => shell.select_level(level),
                Err(err) => {
                    self.say(&err.to_string().red().to_string())?;
                    return Ok(true);
                }
            },
        }

        let mut events = Vec::new();
        shell.start(&mut events);
        self.present(&events)?;
        Ok(true)
    }

    fn guess<R: RandomSource>(&mut self, shell: &mut Shell<'_, R>) -> Result<bool, String> {
        let Some(line) = self.prompt("Your guess")? else {
            return Ok(false);
        };

        let mut events = Vec::new();
        match line.as_str() {
            ":skip" => shell.session_mut().skip(&mut events),
            ":back" => shell.show(View::MainMenu),
            ":quit" => shell.request_exit(),
            guess => shell.session_mut().submit(guess, &mut events),
        }
        self.present(&events)?;
        Ok(true)
    }

    fn present(&mut self, events: &[SessionEvent]) -> Result<(), String> {
        for event in events {
            self.stats.record(event);
            let text = event_message(event);
            let line = match event {
                SessionEvent::RoundStarted { round, scrambled } => format!(
                    "\nWord {round}: {}\n{}",
                    scrambled.to_uppercase().bright_yellow().bold(),
                    attempts_label(MAX_ATTEMPTS)
                ),
                SessionEvent::HintDisclosed { hint, .. } => hint_label(hint).cyan().to_string(),
                SessionEvent::WrongGuess { .. } | SessionEvent::RoundSkipped => {
                    text.yellow().to_string()
                }
                SessionEvent::RoundWon { .. } => format!("🎉 {}", text.green().bold()),
                SessionEvent::RoundLost { .. } | SessionEvent::NoWordsForLevel { .. } => {
                    text.red().to_string()
                }
                SessionEvent::EntrySkipped { .. } => text.bright_black().to_string(),
                SessionEvent::SessionEnded { rounds_completed } => format!(
                    "\n{}\n{}",
                    text.bright_cyan().bold(),
                    format!(
                        "Rounds: {rounds_completed} | Won: {} | Lost: {} | Skipped: {}",
                        self.stats.rounds_won, self.stats.rounds_lost, self.stats.rounds_skipped
                    )
                    .bright_white()
                ),
            };
            self.say(&line)?;
        }
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{text}").map_err(|e| e.to_string())
    }

    /// Read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, String> {
        write!(self.output, "{prompt}: ").map_err(|e| e.to_string())?;
        self.output.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
