//! Frequency-weighted target selection.
//!
//! The random source is always passed in explicitly; seeding it is the
//! caller's business (see [`rng_from_seed`]).

use crate::debug_log;
use crate::error::HangmanError;
use crate::wordbank::WordCounts;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;

/// A seeded generator when `seed` is given, an OS-seeded one otherwise.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Pick one word; a word with count `k` is `k` times as likely as a word
/// with count 1.
pub fn select_word<R: Rng>(counts: &WordCounts, rng: &mut R) -> Result<String, HangmanError> {
    if counts.is_empty() {
        return Err(HangmanError::EmptyWordPool);
    }
    let dist = WeightedIndex::new(counts.values().copied())
        .map_err(|e| HangmanError::Selection(e.to_string()))?;
    let index = dist.sample(rng);
    debug_log!("select_word() - drew index {} of {}", index, counts.len());
    counts
        .keys()
        .nth(index)
        .cloned()
        .ok_or(HangmanError::EmptyWordPool)
}
