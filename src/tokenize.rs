//! Term tokenization.
//!
//! A term is a maximal run of ASCII letters in the lowercased text, at
//! least `min_len` letters long, that is not a stopword:
//!
//! ```text
//! "The off-season Q3 report, re-issued in 2024"
//!   lowercase → "the off-season q3 report, re-issued in 2024"
//!   runs      → the off season q report re issued in
//!   len >= 4  → season report issued
//!   stopwords → season report issued
//! ```
//!
//! Digits and punctuation split runs, so "re-issued" yields "issued" and
//! "Q3" yields nothing. Accented letters also split runs; the extractor
//! targets English text.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::StopWords;

/// Default minimum term length.
pub const DEFAULT_MIN_TERM_LENGTH: usize = 4;

static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]+").expect("letter run regex"));

/// Splits document text into vocabulary terms.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_len: usize,
    stopwords: StopWords,
}

impl Tokenizer {
    /// Create a tokenizer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMinTermLength`](crate::Error::InvalidMinTermLength)
    /// if `min_len == 0`.
    pub fn new(min_len: usize, stopwords: StopWords) -> crate::Result<Self> {
        if min_len == 0 {
            return Err(crate::Error::InvalidMinTermLength(min_len));
        }
        Ok(Self { min_len, stopwords })
    }

    /// Minimum term length in letters.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// The stopword set in use.
    #[must_use]
    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Terms of `text` in order of appearance, duplicates included.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        LETTER_RUN
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|run| run.len() >= self.min_len && !self.stopwords.contains(run))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_TERM_LENGTH,
            stopwords: StopWords::default(),
        }
    }
}
