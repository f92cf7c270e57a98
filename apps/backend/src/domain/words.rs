//! Candidate words and letter scrambling.
//!
//! A `WordList` is never empty: construction fails with
//! `DomainError::EmptyWordList` instead, so drawing a word cannot fail.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use unicode_normalization::UnicodeNormalization;

use crate::errors::domain::DomainError;

const BUILTIN_WORDS: &[&str] = &[
    "anagram", "balance", "cabinet", "dolphin", "element", "fortune", "gravity", "harvest",
    "island", "journey", "kitchen", "lantern", "mystery", "network", "orchard", "pattern",
    "python", "quarter", "rainbow", "shelter", "thunder", "uniform", "voyage", "whisper",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Normalize (trim, NFKC, lowercase) and deduplicate, keeping the first
    /// occurrence of each word. Blank entries and `#` comments are dropped.
    pub fn new<I, S>(words: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|w| normalize_word(w.as_ref()))
            .filter(|w| seen.insert(w.clone()))
            .collect();

        if words.is_empty() {
            return Err(DomainError::EmptyWordList);
        }
        Ok(Self { words })
    }

    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Parse line-delimited word list contents.
    pub fn parse(contents: &str) -> Result<Self, DomainError> {
        Self::new(contents.lines())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Pick a word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let idx = rng.random_range(0..self.words.len());
        &self.words[idx]
    }
}

fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed.nfkc().collect::<String>().to_lowercase())
}

/// Random permutation of the letters of `word`.
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.shuffle(rng);
    letters.into_iter().collect()
}
