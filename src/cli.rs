use crate::debug_log;
use crate::error::HangmanError;
use crate::gallows::render_frame;
use crate::game_state::{DEFAULT_FRAME_DELAY, Frame, FrameSink, GameConfig};
use crate::guesser::{GuessInput, GuessSource, TurnView};
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a word-count file, one `<word> <count>` pair per line
    #[arg(short = 'w', long = "words")]
    pub word_file_path: Option<PathBuf>,

    /// Seed for reproducible word selection
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Pause after each redraw, in milliseconds
    #[arg(long = "delay-ms", default_value_t = DEFAULT_FRAME_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Full-screen terminal interface
    #[arg(long, conflicts_with = "quiet")]
    pub tui: bool,

    /// Let the built-in frequency guesser play
    #[arg(long)]
    pub auto: bool,

    /// Print nothing but the result (requires --auto)
    #[arg(short = 'q', long, requires = "auto")]
    pub quiet: bool,

    /// Log file (default: hangman.log in the user's local data directory)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            word_file_path: self.word_file_path.clone(),
            interactive: !self.quiet,
            seed: self.seed,
            frame_delay: Duration::from_millis(self.delay_ms),
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const PROMPT: &str = "Choose a letter (type 'exit' to exit): ";

/// Interactive guess source reading one line per turn.
///
/// Input is trimmed and uppercased; `EXIT` in any case, or the end of
/// input, quits the game. The prompt goes to `W`, discarded by default.
pub struct LineReader<R: BufRead, W: Write = io::Sink> {
    reader: R,
    prompt: W,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_prompt(reader, io::sink())
    }
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub fn with_prompt(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }

    pub fn into_prompt(self) -> W {
        self.prompt
    }

    fn show_prompt(&mut self) -> io::Result<()> {
        self.prompt.write_all(PROMPT.as_bytes())?;
        self.prompt.flush()
    }
}

impl<R: BufRead, W: Write> GuessSource for LineReader<R, W> {
    fn next_guess(&mut self, _view: &TurnView<'_>) -> Result<GuessInput, HangmanError> {
        if let Err(e) = self.show_prompt() {
            debug_log!("Prompt error: {}", e);
        }

        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .map_err(HangmanError::ReadInput)?;
        if read == 0 {
            debug_log!("LineReader::next_guess() - end of input");
            return Ok(GuessInput::Exit);
        }

        let input = input.trim().to_uppercase();
        if input == "EXIT" {
            return Ok(GuessInput::Exit);
        }
        Ok(GuessInput::Letter(input))
    }
}

/// Clears the terminal and redraws the text frame each turn.
pub struct TerminalScreen<W: Write> {
    out: W,
    delay: Duration,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W, delay: Duration) -> Self {
        Self { out, delay }
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.write_all(render_frame(frame).as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalScreen<io::Stdout> {
    #[must_use]
    pub fn stdout(delay: Duration) -> Self {
        Self::new(io::stdout(), delay)
    }
}

impl<W: Write> FrameSink for TerminalScreen<W> {
    fn present(&mut self, frame: &Frame) {
        if let Err(e) = self.draw(frame) {
            debug_log!("Draw error: {}", e);
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}
