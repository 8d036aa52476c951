// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod gallows;
pub mod game_state;
pub mod guesser;
pub mod logging;
pub mod selector;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::HangmanError;
pub use gallows::{draw_hangman, render_frame};
pub use game_state::{
    Frame, FrameSink, Game, GameConfig, GameReport, GameState, MAX_TRIES, NullSink, Outcome,
    PLACEHOLDER, hangman_game,
};
pub use guesser::{FnGuesser, GuessInput, GuessSource, TurnView, frequency_guesser, scripted};
pub use selector::{rng_from_seed, select_word};
pub use wordbank::{WordCounts, load_word_counts, parse_word_counts};
