//! Gallows art and the plain-text rendering of a [`Frame`].

use crate::game_state::{Frame, MAX_TRIES};

const STAGES: [&str; MAX_TRIES + 1] = [
    "
  +---+
      |
      |
      |
     ===
",
    "
  +---+
  O   |
      |
      |
     ===
",
    "
  +---+
  O   |
  |   |
      |
     ===
",
    "
  +---+
  O   |
 /|   |
      |
     ===
",
    r"
  +---+
  O   |
 /|\  |
      |
     ===
",
    r"
  +---+
  O   |
 /|\  |
 /    |
     ===
",
    r"
  +---+
  O   |
 /|\  |
 / \  |
     ===
",
];

/// Gallows frame for the given number of failed tries.
///
/// # Panics
///
/// Panics if `tries` exceeds [`MAX_TRIES`]; the engine never asks for more.
#[must_use]
pub fn draw_hangman(tries: usize) -> &'static str {
    assert!(tries <= MAX_TRIES, "Invalid try number: {tries}");
    STAGES[tries]
}

/// Full text frame: message, gallows, word pattern and tried letters, plus
/// the outcome line once the game has ended.
#[must_use]
pub fn render_frame(frame: &Frame) -> String {
    let mut out = String::new();
    out.push_str(&frame.message);
    out.push('\n');
    out.push_str(draw_hangman(frame.stage));
    out.push_str(&format!("Word: {}\n", frame.pattern_text()));
    out.push_str(&format!("Tried letters: {}\n", frame.tried_text()));
    if let Some(summary) = frame.summary() {
        out.push_str(&summary);
        out.push('\n');
    }
    out
}
