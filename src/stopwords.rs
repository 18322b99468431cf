//! Stopword sets.
//!
//! The default set covers English function and determiner words plus a
//! handful of generic temporal and numeral words ("said", "year", "three")
//! that dominate news text without saying anything about its topic. Many
//! entries are shorter than the minimum term length and could never match;
//! they stay in the list so a lower `min_term_length` still filters them.
//!
//! The default set is built once per process and shared read-only.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Words excluded from the vocabulary by default.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "of", "and", "to", "in", "a", "is", "for", "that", "on", "with", "as", "by", "be",
    "are", "was", "were", "this", "it", "from", "at", "an", "or", "has", "have", "had", "not",
    "but", "they", "you", "we", "their", "our", "his", "her", "its", "who", "which", "will",
    "would", "can", "could", "should", "may", "might", "into", "about", "over", "under",
    "between", "more", "most", "other", "some", "any", "each", "per", "than", "also", "been",
    "being", "because", "during", "new", "said", "one", "two", "three", "four", "five", "six",
    "seven", "eight", "nine", "ten", "after", "before", "month", "year", "years",
];

static DEFAULT_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(DEFAULT_STOPWORDS.iter().map(|w| (*w).to_string()).collect())
});

/// An immutable set of lowercase stopwords.
///
/// Cloning is cheap: the set is reference-counted.
///
/// ```rust
/// use keyweight::StopWords;
///
/// let stop = StopWords::default();
/// assert!(stop.contains("because"));
/// assert!(!stop.contains("database"));
///
/// let stop = stop.extend(["article", "reuters"]);
/// assert!(stop.contains("reuters"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWords {
    words: Arc<HashSet<String>>,
}

impl StopWords {
    /// A set with no words. Every qualifying token becomes a term.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_words(std::iter::empty::<&str>())
    }

    /// Build a set from arbitrary words. Words are lowercased.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: Arc::new(words.into_iter().map(|w| w.as_ref().to_lowercase()).collect()),
        }
    }

    /// The default set merged with the `stop-words` crate's English list.
    #[cfg(feature = "stopwords-extended")]
    #[must_use]
    pub fn english() -> Self {
        let extra: Vec<String> = stop_words::get(stop_words::LANGUAGE::English);
        Self::default().extend(extra)
    }

    /// Add words to this set. Words are lowercased.
    #[must_use]
    pub fn extend<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Arc::make_mut(&mut self.words).extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Whether `word` (already lowercase) is a stopword.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self {
            words: Arc::clone(&DEFAULT_SET),
        }
    }
}
