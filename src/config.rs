//! Extraction configuration.
//!
//! ## The Knobs
//!
//! | Setting | Default | Effect |
//! |---------|---------|--------|
//! | `top_k` | 60 | Keywords returned |
//! | `min_paragraph_words` | 5 | Shorter paragraphs are not documents |
//! | `min_term_length` | 4 | Shorter letter runs are not terms |
//! | `min_input_words` | off | Reject thin input before scoring |
//! | `tfidf` | raw / smoothed / L2 | Statistic variant |
//! | `stopwords` | built-in list | Excluded terms |
//!
//! Sixty keywords fill a word cloud without crowding it. The input guard is
//! off by default because the core accepts any non-empty text; article
//! pipelines usually set it to [`MIN_ARTICLE_WORDS`] so that a failed
//! extraction upstream (a cookie wall, a paywall stub) is reported instead
//! of turned into a cloud of "cookies" and "subscribe".

use crate::paragraph::DEFAULT_MIN_WORDS;
use crate::rank::DEFAULT_TOP_K;
use crate::tfidf::TfIdfParams;
use crate::tokenize::DEFAULT_MIN_TERM_LENGTH;
use crate::{Error, Result, StopWords};

/// Minimum words for extracted article text to be worth scoring.
pub const MIN_ARTICLE_WORDS: usize = 50;

/// Configuration for [`KeywordExtractor`](crate::KeywordExtractor).
///
/// # Examples
///
/// ```rust
/// use keyweight::{ExtractorConfig, MIN_ARTICLE_WORDS};
///
/// let config = ExtractorConfig::default();
/// assert_eq!(config.top_k(), 60);
/// assert_eq!(config.min_input_words(), None);
///
/// let config = ExtractorConfig::default()
///     .with_top_k(25)
///     .unwrap()
///     .with_min_input_words(MIN_ARTICLE_WORDS);
/// assert_eq!(config.top_k(), 25);
/// assert_eq!(config.min_input_words(), Some(50));
///
/// assert!(ExtractorConfig::default().with_top_k(0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    top_k: usize,
    min_paragraph_words: usize,
    min_term_length: usize,
    min_input_words: Option<usize>,
    tfidf: TfIdfParams,
    stopwords: StopWords,
}

impl ExtractorConfig {
    /// Maximum keywords returned.
    #[must_use]
    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// Minimum words for a paragraph to count as a document.
    #[must_use]
    pub const fn min_paragraph_words(&self) -> usize {
        self.min_paragraph_words
    }

    /// Minimum letters in a term.
    #[must_use]
    pub const fn min_term_length(&self) -> usize {
        self.min_term_length
    }

    /// Minimum words in the whole input, if the guard is on.
    #[must_use]
    pub const fn min_input_words(&self) -> Option<usize> {
        self.min_input_words
    }

    /// TF-IDF variant.
    #[must_use]
    pub const fn tfidf(&self) -> TfIdfParams {
        self.tfidf
    }

    /// Stopwords excluded from the vocabulary.
    #[must_use]
    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Set the number of keywords returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTopK`] if `top_k == 0`.
    pub fn with_top_k(self, top_k: usize) -> Result<Self> {
        if top_k == 0 {
            return Err(Error::InvalidTopK(top_k));
        }
        Ok(Self { top_k, ..self })
    }

    /// Set the paragraph word threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMinWords`] if `words == 0`.
    pub fn with_min_paragraph_words(self, words: usize) -> Result<Self> {
        if words == 0 {
            return Err(Error::InvalidMinWords(words));
        }
        Ok(Self {
            min_paragraph_words: words,
            ..self
        })
    }

    /// Set the minimum term length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMinTermLength`] if `len == 0`.
    pub fn with_min_term_length(self, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::InvalidMinTermLength(len));
        }
        Ok(Self {
            min_term_length: len,
            ..self
        })
    }

    /// Reject input with fewer than `words` whitespace-delimited words.
    #[must_use]
    pub fn with_min_input_words(self, words: usize) -> Self {
        Self {
            min_input_words: Some(words),
            ..self
        }
    }

    /// Use a different TF-IDF variant.
    #[must_use]
    pub fn with_tfidf(self, tfidf: TfIdfParams) -> Self {
        Self { tfidf, ..self }
    }

    /// Use a different stopword set.
    #[must_use]
    pub fn with_stopwords(self, stopwords: StopWords) -> Self {
        Self { stopwords, ..self }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            min_paragraph_words: DEFAULT_MIN_WORDS,
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
            min_input_words: None,
            tfidf: TfIdfParams::default(),
            stopwords: StopWords::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfidf::TfVariant;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.top_k(), 60);
        assert_eq!(config.min_paragraph_words(), 5);
        assert_eq!(config.min_term_length(), 4);
        assert_eq!(config.min_input_words(), None);
        assert_eq!(config.tfidf(), TfIdfParams::default());
        assert!(config.stopwords().contains("the"));
    }

    #[test]
    fn test_builders() {
        let config = ExtractorConfig::default()
            .with_top_k(10)
            .unwrap()
            .with_min_paragraph_words(3)
            .unwrap()
            .with_min_term_length(5)
            .unwrap()
            .with_min_input_words(MIN_ARTICLE_WORDS)
            .with_tfidf(TfIdfParams::sublinear())
            .with_stopwords(StopWords::empty());

        assert_eq!(config.top_k(), 10);
        assert_eq!(config.min_paragraph_words(), 3);
        assert_eq!(config.min_term_length(), 5);
        assert_eq!(config.min_input_words(), Some(50));
        assert_eq!(config.tfidf().tf, TfVariant::Sublinear);
        assert!(config.stopwords().is_empty());
    }

    #[test]
    fn test_zero_values_rejected() {
        assert_eq!(
            ExtractorConfig::default().with_top_k(0).unwrap_err(),
            Error::InvalidTopK(0)
        );
        assert_eq!(
            ExtractorConfig::default()
                .with_min_paragraph_words(0)
                .unwrap_err(),
            Error::InvalidMinWords(0)
        );
        assert_eq!(
            ExtractorConfig::default().with_min_term_length(0).unwrap_err(),
            Error::InvalidMinTermLength(0)
        );
    }
}
