//! Full-screen terminal interface built on Ratatui.
//!
//! # Architecture
//! - `TuiScreen`: owns the terminal and draws each [`GameFrame`]
//! - `KeyReader`: turns single key presses into guesses
//!
//! The two halves do not share state; the engine hands frames to one and
//! asks the other for guesses.

use crate::error::HangmanError;
use crate::gallows::draw_hangman;
use crate::game_state::{Frame as GameFrame, FrameSink, MAX_TRIES, Outcome};
use crate::guesser::{GuessInput, GuessSource, TurnView};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::thread;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// Terminal frame sink. Restores the terminal when dropped.
pub struct TuiScreen {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    delay: Duration,
}

impl TuiScreen {
    pub fn new(delay: Duration) -> Result<Self, io::Error> {
        info_log!("TuiScreen::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");
        Ok(Self { terminal, delay })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Block until any key is pressed; used to keep the final frame visible.
    pub fn wait_for_key(&mut self) -> Result<(), io::Error> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl FrameSink for TuiScreen {
    fn present(&mut self, frame: &GameFrame) {
        if let Err(e) = self.terminal.draw(|f| render_static(f, frame)) {
            debug_log!("Draw error: {}", e);
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl Drop for TuiScreen {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Render the complete UI layout for one game frame.
fn render_static(f: &mut Frame, frame: &GameFrame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(10), // Gallows and word
            Constraint::Min(4),     // Messages
            Constraint::Length(3),  // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_board(f, chunks[1], frame);
    render_messages(f, chunks[2], frame);
    render_instructions(f, chunks[3], frame);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("HANGMAN")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_board(f: &mut Frame, area: Rect, frame: &GameFrame) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(20)])
        .split(area);

    let gallows = Paragraph::new(draw_hangman(frame.stage))
        .block(Block::default().title("Gallows").borders(Borders::ALL));
    f.render_widget(gallows, columns[0]);

    let lines = vec![
        Line::from(vec![
            Span::raw("Word: "),
            Span::styled(frame.pattern_text(), HEADER_STYLE),
        ]),
        Line::from(""),
        Line::from(format!("Tried letters: {}", frame.tried_text())),
        Line::from(vec![
            Span::raw("Wrong guesses: "),
            Span::styled(format!("{} / {MAX_TRIES}", frame.stage), INFO_STYLE),
        ]),
    ];
    let info = Paragraph::new(lines)
        .block(Block::default().title("Word").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(info, columns[1]);
}

fn render_messages(f: &mut Frame, area: Rect, frame: &GameFrame) {
    let mut lines = Vec::new();

    if !frame.message.is_empty() {
        lines.push(Line::from(vec![Span::styled(
            frame.message.as_str(),
            MESSAGE_STYLE,
        )]));
    }

    if let Some(summary) = frame.summary() {
        let style = match frame.outcome {
            Some(Outcome::Won) => SUCCESS_STYLE,
            Some(Outcome::Lost) => ERROR_STYLE,
            _ => INFO_STYLE,
        };
        lines.push(Line::from(vec![Span::styled(summary, style)]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, frame: &GameFrame) {
    let text = if frame.outcome.is_some() {
        "Press any key to exit"
    } else {
        "Type a letter to guess | ESC: Quit"
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Interactive guess source reading one key press per guess.
#[derive(Debug, Default)]
pub struct KeyReader;

impl KeyReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Map a key event to a guess. `None` means the key is ignored.
fn key_to_input(key: KeyEvent) -> Option<GuessInput> {
    // Only process Press events, ignore Release and Repeat to avoid double input
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(GuessInput::Exit),
        // raw mode swallows SIGINT
        KeyCode::Char('c' | 'C') if has_ctrl => Some(GuessInput::Exit),
        KeyCode::Char(_) if has_ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(GuessInput::Letter(c.to_uppercase().collect())),
        _ => None,
    }
}

impl GuessSource for KeyReader {
    fn next_guess(&mut self, _view: &TurnView<'_>) -> Result<GuessInput, HangmanError> {
        loop {
            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))
                .map_err(HangmanError::ReadInput)?
            {
                continue;
            }
            let event = event::read().map_err(HangmanError::ReadInput)?;
            if let Event::Key(key) = event {
                if let Some(input) = key_to_input(key) {
                    info_log!("KeyReader::next_guess() - Input: {:?}", input);
                    return Ok(input);
                }
                debug_log!("KeyReader::next_guess() - Ignoring key: {:?}", key.code);
            }
        }
    }
}
