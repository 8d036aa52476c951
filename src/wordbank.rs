use crate::error::HangmanError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Word -> frequency weight. Ordered so that seeded selection does not
/// depend on hashing.
pub type WordCounts = BTreeMap<String, u64>;

pub const EMBEDDED_WORD_COUNTS: &str = include_str!("resources/word_counts.txt");

/// Parse `<word> <count>` lines. Blank lines are skipped; any other
/// malformed line fails the whole load.
pub fn parse_word_counts(data: &str) -> Result<WordCounts, HangmanError> {
    let mut counts = WordCounts::new();
    for (index, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (word, count) = parse_line(line).map_err(|reason| HangmanError::Parse {
            line: index + 1,
            reason,
        })?;
        counts.insert(word, count);
    }
    Ok(counts)
}

fn parse_line(line: &str) -> Result<(String, u64), String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [word, count] = tokens.as_slice() else {
        return Err(format!("expected 2 tokens, found {}", tokens.len()));
    };
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("word '{word}' contains non-letter characters"));
    }
    let count: u64 = count
        .parse()
        .map_err(|e| format!("count '{count}' is not an integer: {e}"))?;
    if count == 0 {
        return Err(format!("count for '{word}' must be positive"));
    }
    Ok((word.to_uppercase(), count))
}

pub fn load_word_counts<P: AsRef<Path>>(path: P) -> Result<WordCounts, HangmanError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| HangmanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_word_counts(&data)
}

pub fn embedded_word_counts() -> Result<WordCounts, HangmanError> {
    parse_word_counts(EMBEDDED_WORD_COUNTS)
}
