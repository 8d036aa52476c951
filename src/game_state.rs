use crate::error::HangmanError;
use crate::guesser::{GuessInput, GuessSource, TurnView};
use crate::selector::{rng_from_seed, select_word};
use crate::wordbank::{WordCounts, embedded_word_counts, load_word_counts};
use crate::{debug_log, info_log};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

pub const MAX_TRIES: usize = 6;
pub const PLACEHOLDER: char = '_';
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(500);

const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter a single letter.";
const REPEATED_INPUT_MESSAGE: &str = "You've already tried that letter. Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    /// The player typed EXIT; only reachable from an interactive source.
    Quit,
}

/// Mutable state of a single game.
#[derive(Debug, Clone)]
pub struct GameState {
    target: String,
    pattern: Vec<char>,
    tried: BTreeSet<char>,
    wrong_guesses: usize,
}

impl GameState {
    pub fn new(target: &str) -> Self {
        let target = target.to_uppercase();
        let pattern = vec![PLACEHOLDER; target.chars().count()];
        Self {
            target,
            pattern,
            tried: BTreeSet::new(),
            wrong_guesses: 0,
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    #[must_use]
    pub fn tried(&self) -> &BTreeSet<char> {
        &self.tried
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.pattern.contains(&PLACEHOLDER)
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.wrong_guesses >= MAX_TRIES
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Validate a raw guess: exactly one alphabetic character, not yet tried.
    fn check_guess(&self, raw: &str) -> Result<char, HangmanError> {
        let mut chars = raw.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(HangmanError::InvalidGuess(raw.to_string()));
        };
        if !letter.is_alphabetic() {
            return Err(HangmanError::InvalidGuess(raw.to_string()));
        }
        if self.tried.contains(&letter) {
            return Err(HangmanError::RepeatedGuess(letter));
        }
        Ok(letter)
    }

    /// Record a validated letter. Returns how many positions it revealed;
    /// zero means the guess was wrong.
    pub fn apply_guess(&mut self, letter: char) -> usize {
        self.tried.insert(letter);
        let mut revealed = 0;
        for (slot, ch) in self.pattern.iter_mut().zip(self.target.chars()) {
            if ch == letter {
                *slot = letter;
                revealed += 1;
            }
        }
        if revealed == 0 {
            self.wrong_guesses += 1;
        }
        revealed
    }
}

/// One snapshot of the game for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Gallows stage, equal to the wrong-guess count.
    pub stage: usize,
    pub pattern: Vec<char>,
    /// Sorted.
    pub tried: Vec<char>,
    pub message: String,
    /// Set on the final frame only.
    pub outcome: Option<Outcome>,
    /// Target word, revealed on the final frame only.
    pub word: Option<String>,
}

impl Frame {
    #[must_use]
    pub fn pattern_text(&self) -> String {
        join_chars(&self.pattern, " ")
    }

    #[must_use]
    pub fn tried_text(&self) -> String {
        join_chars(&self.tried, ", ")
    }

    /// Closing line of a finished game.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        let word = self.word.as_deref()?;
        Some(match self.outcome? {
            Outcome::Won => format!("Congratulations! You guessed the word: {word}"),
            Outcome::Lost => format!("Game over! The word was: {word}"),
            Outcome::Quit => format!("You quit. The word was: {word}"),
        })
    }
}

fn join_chars(chars: &[char], separator: &str) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Receives frames to show. Each frame replaces the previous one.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame);
}

/// Discards every frame.
#[derive(Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn present(&mut self, _frame: &Frame) {}
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub outcome: Outcome,
    pub word: String,
    pub pattern: String,
    pub tried: Vec<char>,
    pub wrong_guesses: usize,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// `None` uses the embedded word list.
    pub word_file_path: Option<PathBuf>,
    /// When false no frame is ever presented; requires an automated guesser.
    pub interactive: bool,
    pub seed: Option<u64>,
    /// Pause after each redraw on a terminal screen.
    pub frame_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_file_path: None,
            interactive: true,
            seed: None,
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }
}

/// A game with a fixed target word.
pub struct Game<'w> {
    word_counts: &'w WordCounts,
    state: GameState,
    message: String,
}

impl<'w> Game<'w> {
    pub fn new(word_counts: &'w WordCounts, target: &str) -> Self {
        Self {
            word_counts,
            state: GameState::new(target),
            message: String::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            stage: self.state.wrong_guesses,
            pattern: self.state.pattern.clone(),
            tried: self.state.tried.iter().copied().collect(),
            message: self.message.clone(),
            outcome: None,
            word: None,
        }
    }

    /// Play until the word is revealed, the tries run out, or the player
    /// quits.
    ///
    /// # Errors
    ///
    /// Fails when the source cannot be read or an automated source breaks
    /// the guess contract.
    pub fn run(
        &mut self,
        source: &mut dyn GuessSource,
        sink: &mut dyn FrameSink,
        interactive: bool,
    ) -> Result<GameReport, HangmanError> {
        info_log!(
            "Game started: {} letters, automated guesser: {}",
            self.state.pattern.len(),
            source.is_automated()
        );
        let mut quit = false;

        while !self.state.is_over() {
            if interactive {
                sink.present(&self.frame());
            }
            self.message.clear();

            let view = TurnView {
                tried: &self.state.tried,
                pattern: &self.state.pattern,
                word_counts: self.word_counts,
            };
            let raw = match source.next_guess(&view)? {
                GuessInput::Exit => {
                    info_log!("Player exited");
                    quit = true;
                    break;
                }
                GuessInput::Letter(raw) => raw,
            };

            let letter = match self.state.check_guess(&raw) {
                Ok(letter) => letter,
                Err(e) if source.is_automated() => return Err(e),
                Err(e) => {
                    debug_log!("run() - rejected interactive guess: {}", e);
                    self.message = match e {
                        HangmanError::RepeatedGuess(_) => REPEATED_INPUT_MESSAGE,
                        _ => INVALID_INPUT_MESSAGE,
                    }
                    .to_string();
                    continue;
                }
            };

            let revealed = self.state.apply_guess(letter);
            debug_log!(
                "run() - guess '{}' revealed {} position(s), wrong guesses: {}",
                letter,
                revealed,
                self.state.wrong_guesses
            );
        }

        let outcome = if quit {
            Outcome::Quit
        } else if self.state.is_won() {
            Outcome::Won
        } else {
            Outcome::Lost
        };
        info_log!(
            "Game finished: {:?} after {} wrong guess(es)",
            outcome,
            self.state.wrong_guesses
        );

        if interactive {
            let mut frame = self.frame();
            frame.outcome = Some(outcome);
            frame.word = Some(self.state.target.clone());
            sink.present(&frame);
        }

        Ok(GameReport {
            outcome,
            word: self.state.target.clone(),
            pattern: self.state.pattern.iter().collect(),
            tried: self.state.tried.iter().copied().collect(),
            wrong_guesses: self.state.wrong_guesses,
        })
    }
}

/// Load the word list, pick a target and play one game.
///
/// # Errors
///
/// Configuration, load and selection errors are reported before any game
/// state exists; afterwards see [`Game::run`].
pub fn hangman_game(
    config: &GameConfig,
    source: &mut dyn GuessSource,
    sink: &mut dyn FrameSink,
) -> Result<GameReport, HangmanError> {
    if !config.interactive && !source.is_automated() {
        return Err(HangmanError::Config(
            "non-interactive mode requires a guessing function".to_string(),
        ));
    }

    let word_counts = match &config.word_file_path {
        Some(path) => load_word_counts(path)?,
        None => embedded_word_counts()?,
    };
    info_log!("Loaded {} words", word_counts.len());

    let mut rng = rng_from_seed(config.seed);
    let target = select_word(&word_counts, &mut rng)?;
    debug_log!("hangman_game() - target selected: {}", target);

    Game::new(&word_counts, &target).run(source, sink, config.interactive)
}
