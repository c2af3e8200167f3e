//! TUI rendering with ratatui
//!
//! One body per hub view, a shared header and status bar, and a modal
//! overlay drawn last.

use super::app::{App, MessageStyle};
use crate::core::{Level, RandomSource};
use crate::output::formatters::{attempts_label, create_progress_bar, hint_label};
use crate::session::MAX_ATTEMPTS;
use crate::shell::{MenuItem, View};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const RULES: &str = "Guess the scrambled word. You have 4 attempts. \
                     A hint appears only after the first wrong attempt. \
                     Skip moves on without revealing the word.";

/// Main UI rendering function
pub fn ui<R: RandomSource>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // View body
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.shell.view() {
        View::MainMenu => render_main_menu(f, app, chunks[1]),
        View::WordScramble => render_word_scramble(f, app, chunks[1]),
        View::TicTacToeMenu => render_tic_tac_toe(f, chunks[1]),
    }

    render_status(f, app, chunks[2]);

    if let Some(modal) = app.modals.front() {
        render_modal(f, modal.title, &modal.text);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("👑 Mind Game Royale")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn render_main_menu<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Choose a Game",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, item) in MenuItem::ALL.iter().enumerate() {
        let text = format!("{}. {}", i + 1, item.label());
        let line = if i == app.menu_cursor {
            Line::from(Span::styled(
                format!("▶ {text} ◀"),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(text, Style::default().fg(Color::White)))
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Designed with a royal theme • Enjoy learning & playing",
        Style::default().fg(Color::DarkGray),
    )));

    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_word_scramble<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Level selector
            Constraint::Min(7),    // Word panel
            Constraint::Length(3), // Input
        ])
        .split(chunks[0]);

    render_level_selector(f, app, left[0]);
    render_word_panel(f, app, left[1]);
    render_guess_input(f, app, left[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(chunks[1]);

    let rules = Paragraph::new(RULES)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .title(" Rules ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(rules, right[0]);

    render_messages(f, app, right[1]);
}

fn render_level_selector<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let session = app.shell.session();
    let current = app.shell.selected_level();

    let mut spans = vec![Span::raw("Level: ")];
    for level in Level::ALL {
        let style = if level == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", level.name()), style));
        spans.push(Span::raw(" "));
    }

    let title = if session.is_active() {
        " Word Scramble "
    } else {
        " Word Scramble | ←/→ Level | Enter: Start "
    };
    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(selector, area);
}

fn render_word_panel<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let session = app.shell.session();
    let max_rounds = session.config().max_rounds;

    let mut lines = vec![Line::from("")];
    match session.round() {
        Some(round) => {
            lines.push(Line::from(Span::styled(
                round.scrambled().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            let hint = round.current_hint().map_or_else(String::new, hint_label);
            lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::Cyan))));
            let attempts_color = match round.attempts_left() {
                1 => Color::Red,
                a if a < MAX_ATTEMPTS => Color::Yellow,
                _ => Color::Green,
            };
            lines.push(Line::from(Span::styled(
                attempts_label(round.attempts_left()),
                Style::default().fg(attempts_color),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(format!(
                "Round {}/{max_rounds} {}",
                session.rounds_completed() + 1,
                create_progress_bar(session.rounds_completed(), max_rounds, 20)
            )));
        }
        None => {
            let text = app
                .notice
                .clone()
                .unwrap_or_else(|| "Press Enter to start".to_string());
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Scrambled Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_guess_input<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (title, color) = if app.shell.session().is_active() {
        (" Your Guess | Enter: Submit | Tab: Skip | Esc: Main Menu ", Color::Yellow)
    } else {
        (" Your Guess | Esc: Main Menu ", Color::DarkGray)
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_messages<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Hint => Style::default().fg(Color::Cyan),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_tic_tac_toe(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Coming soon! This game is not available yet."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to return to the main menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let stub = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(stub, area);
}

fn render_status<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(50),
            Constraint::Percentage(30),
        ])
        .split(area);

    let view = match app.shell.view() {
        View::MainMenu => "Main Menu",
        View::WordScramble => "Word Scramble",
        View::TicTacToeMenu => "Tic Tac Toe",
    };
    let mode = Paragraph::new(format!("View: {view}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Won: {} | Lost: {} | Skipped: {} | Win Rate: {:.0}%",
        app.stats.rounds_won,
        app.stats.rounds_lost,
        app.stats.rounds_skipped,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.shell.view() {
        View::MainMenu => "↑/↓: Select | Enter: Open | q: Quit",
        View::WordScramble => "Esc: Back | Ctrl-C: Quit",
        View::TicTacToeMenu => "Esc: Back",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_modal(f: &mut Frame, title: &str, text: &str) {
    let area = centered_rect(50, 7, f.area());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            text.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

/// Rectangle of `percent_x` width and `height` rows centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
