//! Where guesses come from.
//!
//! The turn loop only ever talks to a [`GuessSource`]. Interactive sources
//! (`cli::LineReader`, `tui::KeyReader`) hand back whatever the player typed
//! and let the engine reject it politely; automated sources wrap a guessing
//! function whose mistakes are fatal.

use crate::error::HangmanError;
use crate::wordbank::WordCounts;
use std::collections::BTreeSet;

/// What a guessing function sees on each turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub tried: &'a BTreeSet<char>,
    pub pattern: &'a [char],
    pub word_counts: &'a WordCounts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    /// Raw candidate guess, not yet validated.
    Letter(String),
    /// Voluntary quit.
    Exit,
}

pub trait GuessSource {
    /// Produce the next guess for the current state.
    fn next_guess(&mut self, view: &TurnView<'_>) -> Result<GuessInput, HangmanError>;

    /// Automated sources must honour the guess contract; a violation aborts
    /// the game. Interactive sources get a message and a re-prompt instead.
    fn is_automated(&self) -> bool {
        false
    }
}

/// A guessing function called with `(tried letters, revealed pattern, word counts)`.
pub struct FnGuesser<F> {
    inference: F,
}

impl<F> FnGuesser<F>
where
    F: FnMut(&BTreeSet<char>, &[char], &WordCounts) -> String,
{
    pub fn new(inference: F) -> Self {
        Self { inference }
    }
}

impl<F> GuessSource for FnGuesser<F>
where
    F: FnMut(&BTreeSet<char>, &[char], &WordCounts) -> String,
{
    fn next_guess(&mut self, view: &TurnView<'_>) -> Result<GuessInput, HangmanError> {
        let guess = (self.inference)(view.tried, view.pattern, view.word_counts);
        Ok(GuessInput::Letter(guess.to_uppercase()))
    }

    fn is_automated(&self) -> bool {
        true
    }
}

/// Guesser that replays a fixed list of guesses, then falls back to the
/// next untried letter of the alphabet.
#[must_use]
pub fn scripted<I, S>(guesses: I) -> FnGuesser<impl FnMut(&BTreeSet<char>, &[char], &WordCounts) -> String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut script: std::collections::VecDeque<String> =
        guesses.into_iter().map(Into::into).collect();
    FnGuesser::new(move |tried: &BTreeSet<char>, _: &[char], _: &WordCounts| {
        script.pop_front().unwrap_or_else(|| {
            ('A'..='Z')
                .find(|c| !tried.contains(c))
                .map(String::from)
                .unwrap_or_default()
        })
    })
}

/// Guesser that picks the most common untried letter among the words still
/// consistent with the revealed pattern, weighted by word count.
#[must_use]
pub fn frequency_guesser() -> FnGuesser<fn(&BTreeSet<char>, &[char], &WordCounts) -> String> {
    FnGuesser::new(most_likely_letter as fn(&BTreeSet<char>, &[char], &WordCounts) -> String)
}

fn most_likely_letter(tried: &BTreeSet<char>, pattern: &[char], counts: &WordCounts) -> String {
    let mut scores = [0u64; 26];
    for (word, &count) in counts {
        if !matches_pattern(word, pattern, tried) {
            continue;
        }
        let mut seen = [false; 26];
        for c in word.chars().filter(char::is_ascii_uppercase) {
            let idx = (c as u8 - b'A') as usize;
            if !seen[idx] && !tried.contains(&c) {
                seen[idx] = true;
                scores[idx] = scores[idx].saturating_add(count);
            }
        }
    }
    let best = ('A'..='Z')
        .filter(|c| !tried.contains(c))
        .max_by_key(|&c| (scores[(c as u8 - b'A') as usize], std::cmp::Reverse(c)));
    best.map(String::from).unwrap_or_default()
}

fn matches_pattern(word: &str, pattern: &[char], tried: &BTreeSet<char>) -> bool {
    word.chars().count() == pattern.len()
        && word.chars().zip(pattern).all(|(w, &p)| {
            if p == crate::game_state::PLACEHOLDER {
                // an unrevealed slot cannot hold a letter already tried
                !tried.contains(&w)
            } else {
                w == p
            }
        })
}
