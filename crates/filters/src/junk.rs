//! Junk heuristics for normalized comment text
//!
//! Four cheap classifiers that catch the bulk of low-information
//! feedback entries: canned generic phrases, symbol-only noise,
//! repeated-character strings, and comments without enough real words.
//! All of them expect text that has already been through
//! [`crate::normalize::normalize`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Minimum repetitions for the single-character junk rule ("aaaaa").
const MIN_CHAR_RUN: usize = 5;

/// Canned low-information phrases matched exactly against normalized text.
const DEFAULT_GENERIC_PHRASES: &[&str] = &[
    "na",
    "n/a",
    "no aplica",
    "ninguno",
    "sin comentario",
    ".",
    "..",
    "...",
    "-",
    "--",
    "x",
    "xx",
    "ok",
    "none",
];

// Target alphabet: ASCII letters plus the accented Spanish vowels and ñ.
// Normalized text only ever contains a-z and ñ from this class, but the
// classifiers stay total over arbitrary input.
static LETTER_REGEX: OnceLock<Regex> = OnceLock::new();
static WORD_REGEX: OnceLock<Regex> = OnceLock::new();

fn letter_regex() -> &'static Regex {
    LETTER_REGEX.get_or_init(|| {
        Regex::new(r"[a-záéíóúñ]").expect("Failed to compile letter regex")
    })
}

fn word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| {
        Regex::new(r"[a-záéíóúñ]{3,}").expect("Failed to compile word regex")
    })
}

/// Configuration for the junk classifiers
///
/// The generic-phrase set and word threshold are data, not behavior, so
/// they can be swapped out per deployment (other locales, stricter
/// screening) from a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JunkFilterConfig {
    /// Phrases rejected by exact match against normalized text
    pub generic_phrases: HashSet<String>,
    /// Minimum count of 3+ letter words a comment must contain
    pub min_valid_words: usize,
}

impl Default for JunkFilterConfig {
    fn default() -> Self {
        Self {
            generic_phrases: DEFAULT_GENERIC_PHRASES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_valid_words: 3,
        }
    }
}

impl JunkFilterConfig {
    /// Strict screening: demand more substance per comment
    pub fn strict() -> Self {
        Self {
            min_valid_words: 5,
            ..Default::default()
        }
    }

    /// Lenient screening: keep anything with at least one real word
    pub fn lenient() -> Self {
        Self {
            min_valid_words: 1,
            ..Default::default()
        }
    }
}

/// Configurable junk classifiers over normalized comment text
#[derive(Debug, Clone)]
pub struct JunkFilter {
    config: JunkFilterConfig,
}

impl JunkFilter {
    /// Create a junk filter with the given configuration
    pub fn new(config: JunkFilterConfig) -> Self {
        Self { config }
    }

    /// Access the active configuration
    pub fn config(&self) -> &JunkFilterConfig {
        &self.config
    }

    /// True iff the text exactly matches a configured generic phrase.
    ///
    /// An empty configured set means nothing is generic.
    pub fn is_generic(&self, text: &str) -> bool {
        self.config.generic_phrases.contains(text)
    }

    /// True iff the text contains at least `min_valid_words` words of
    /// 3+ consecutive letters from the target alphabet.
    ///
    /// A threshold of 0 accepts everything. Note the polarity: this is
    /// the one check where `true` means "keep".
    pub fn has_enough_valid_words(&self, text: &str) -> bool {
        word_regex().find_iter(text).count() >= self.config.min_valid_words
    }
}

impl Default for JunkFilter {
    fn default() -> Self {
        Self::new(JunkFilterConfig::default())
    }
}

/// True iff the text contains no letter of the target alphabet.
///
/// Digits, punctuation, and whitespace alone all count as junk.
pub fn is_symbols_only(text: &str) -> bool {
    !letter_regex().is_match(text)
}

/// True iff the text is a single character repeated 5+ times, or uses
/// at most 2 distinct characters overall (whitespace and punctuation
/// count as characters).
pub fn is_repetitive(text: &str) -> bool {
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        let mut run = 1usize;
        let mut uniform = true;
        for c in chars {
            if c != first {
                uniform = false;
                break;
            }
            run += 1;
        }
        if uniform && run >= MIN_CHAR_RUN {
            return true;
        }
    }

    let distinct: HashSet<char> = text.chars().collect();
    distinct.len() <= 2
}
