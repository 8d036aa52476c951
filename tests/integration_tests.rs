// Integration tests for the hangman library
// These tests drive whole games through the public API

use hangman::cli::LineReader;
use hangman::*;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{Cursor, Write};
use std::path::PathBuf;

fn write_word_file(name: &str, lines: &[&str]) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    let mut file = File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    path
}

/// Records every frame it is shown.
#[derive(Default)]
struct Recorder {
    frames: Vec<Frame>,
}

impl FrameSink for Recorder {
    fn present(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}

#[test]
fn test_single_word_file_automated_win() {
    let path = write_word_file("hangman_it_apple.txt", &["APPLE 1"]);
    let config = GameConfig {
        word_file_path: Some(path.clone()),
        interactive: false,
        seed: None,
        ..GameConfig::default()
    };

    let mut guesser = scripted(["A", "P", "L", "E"]);
    let report = hangman_game(&config, &mut guesser, &mut NullSink).unwrap();

    assert_eq!(report.outcome, Outcome::Won);
    assert_eq!(report.wrong_guesses, 0);
    assert_eq!(report.pattern, "APPLE");
    assert_eq!(report.word, "APPLE");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_all_wrong_guesses_lose() {
    let path = write_word_file("hangman_it_cat.txt", &["cat 5"]);
    let config = GameConfig {
        word_file_path: Some(path.clone()),
        interactive: false,
        ..GameConfig::default()
    };

    let mut guesser = scripted(["X", "Y", "Z", "Q", "W", "R"]);
    let report = hangman_game(&config, &mut guesser, &mut NullSink).unwrap();

    assert_eq!(report.outcome, Outcome::Lost);
    assert_eq!(report.wrong_guesses, MAX_TRIES);
    assert_eq!(report.tried.len(), 6);
    assert!(report.pattern.chars().all(|c| c == PLACEHOLDER));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_guesser_returning_two_letters_aborts() {
    let path = write_word_file("hangman_it_two_letters.txt", &["APPLE 1", "PEACH 2"]);
    let config = GameConfig {
        word_file_path: Some(path.clone()),
        interactive: false,
        ..GameConfig::default()
    };

    let mut guesser =
        FnGuesser::new(|_: &BTreeSet<char>, _: &[char], _: &WordCounts| "ab".to_string());
    let err = hangman_game(&config, &mut guesser, &mut NullSink).unwrap_err();
    assert!(err.is_contract_violation());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_interactive_repeated_letter_is_rejected() {
    let words = WordCounts::from([("APPLE".to_string(), 1)]);
    let mut game = Game::new(&words, "APPLE");
    let mut reader = LineReader::new(Cursor::new("a\na\n"));
    let mut recorder = Recorder::default();

    let report = game.run(&mut reader, &mut recorder, true).unwrap();

    assert_eq!(report.wrong_guesses, 0);
    assert_eq!(report.tried, vec!['A']);
    assert_eq!(report.outcome, Outcome::Quit);
    let rejected = recorder
        .frames
        .iter()
        .find(|f| !f.message.is_empty())
        .expect("a frame carrying the rejection message");
    assert!(rejected.message.contains("already tried"));
    assert_eq!(rejected.stage, 0);
}

#[test]
fn test_interactive_full_game_through_file() {
    let path = write_word_file("hangman_it_interactive.txt", &["LEVEL 3"]);
    let config = GameConfig {
        word_file_path: Some(path.clone()),
        seed: Some(1),
        ..GameConfig::default()
    };

    let mut reader = LineReader::new(Cursor::new("l\nz\nE\nv\n"));
    let mut recorder = Recorder::default();
    let report = hangman_game(&config, &mut reader, &mut recorder).unwrap();

    assert_eq!(report.outcome, Outcome::Won);
    assert_eq!(report.wrong_guesses, 1);
    assert_eq!(report.tried, vec!['E', 'L', 'V', 'Z']);

    let last = recorder.frames.last().unwrap();
    assert_eq!(last.word.as_deref(), Some("LEVEL"));
    assert!(render_frame(last).contains("Congratulations! You guessed the word: LEVEL"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_seeded_games_pick_the_same_word() {
    let path = write_word_file(
        "hangman_it_seeded.txt",
        &["CAT 3", "DOG 1", "EMU 2", "OWL 5", "YAK 1"],
    );
    let config = GameConfig {
        word_file_path: Some(path.clone()),
        interactive: false,
        seed: Some(2024),
        ..GameConfig::default()
    };

    let first = hangman_game(&config, &mut frequency_guesser(), &mut NullSink).unwrap();
    for _ in 0..5 {
        let again = hangman_game(&config, &mut frequency_guesser(), &mut NullSink).unwrap();
        assert_eq!(again.word, first.word);
    }

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_weighted_selection_from_loaded_counts() {
    let counts = parse_word_counts("cat 3\ndog 1\n").unwrap();
    let mut rng = rng_from_seed(Some(9));
    let cats = (0..20_000)
        .filter(|_| select_word(&counts, &mut rng).unwrap() == "CAT")
        .count();
    // expected 15,000
    assert!((14_200..15_800).contains(&cats), "CAT chosen {cats} times");
}

#[test]
fn test_malformed_word_file_fails_before_game() {
    let path = write_word_file("hangman_it_malformed.txt", &["APPLE 1", "PEACH"]);
    let config = GameConfig {
        word_file_path: Some(path.clone()),
        interactive: false,
        ..GameConfig::default()
    };

    let mut calls = 0;
    let mut guesser = FnGuesser::new(|_: &BTreeSet<char>, _: &[char], _: &WordCounts| {
        calls += 1;
        "A".to_string()
    });
    let err = hangman_game(&config, &mut guesser, &mut NullSink).unwrap_err();
    assert!(matches!(err, HangmanError::Parse { line: 2, .. }));
    drop(guesser);
    assert_eq!(calls, 0);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_empty_word_file_is_empty_pool() {
    let path = write_word_file("hangman_it_empty.txt", &[""]);
    let config = GameConfig {
        word_file_path: Some(path.clone()),
        interactive: false,
        ..GameConfig::default()
    };

    let err = hangman_game(&config, &mut frequency_guesser(), &mut NullSink).unwrap_err();
    assert!(matches!(err, HangmanError::EmptyWordPool));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_non_interactive_requires_guessing_function() {
    let config = GameConfig {
        interactive: false,
        ..GameConfig::default()
    };
    let mut reader = LineReader::new(Cursor::new("a\n"));
    let err = hangman_game(&config, &mut reader, &mut NullSink).unwrap_err();
    assert!(matches!(err, HangmanError::Config(_)));
}

#[test]
fn test_frequency_guesser_state_invariants_over_embedded_list() {
    // Play many seeded games and check the report invariants every time
    for seed in 0..25 {
        let config = GameConfig {
            interactive: false,
            seed: Some(seed),
            ..GameConfig::default()
        };
        let report = hangman_game(&config, &mut frequency_guesser(), &mut NullSink).unwrap();

        assert_eq!(report.pattern.chars().count(), report.word.chars().count());
        assert!(report.wrong_guesses <= MAX_TRIES);
        let unique: BTreeSet<char> = report.tried.iter().copied().collect();
        assert_eq!(unique.len(), report.tried.len());
        for (p, w) in report.pattern.chars().zip(report.word.chars()) {
            assert!(p == PLACEHOLDER || p == w);
        }
        match report.outcome {
            Outcome::Won => assert!(!report.pattern.contains(PLACEHOLDER)),
            Outcome::Lost => {
                assert_eq!(report.wrong_guesses, MAX_TRIES);
                assert!(report.pattern.contains(PLACEHOLDER));
            }
            Outcome::Quit => panic!("automated games never quit"),
        }
    }
}
