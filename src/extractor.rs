//! The extraction pipeline: text in, ranked keywords out.
//!
//! Wires a [`Segmenter`] and a [`KeywordScorer`] together and applies the
//! caller-facing policy for degenerate input:
//!
//! - empty or whitespace-only text is an error ([`Error::EmptyText`])
//! - text below the configured word guard is an error
//!   ([`Error::InsufficientText`])
//! - text with no extractable terms is an *empty result*, not an error

use tracing::{debug, info};

use crate::document::count_words;
use crate::tokenize::Tokenizer;
use crate::{
    Error, ExtractorConfig, Keyword, KeywordScorer, ParagraphSegmenter, Result, Segmenter,
};

/// Keyword extractor.
///
/// Generic over the segmentation strategy; paragraphs by default.
///
/// ## Example
///
/// ```rust
/// use keyweight::KeywordExtractor;
///
/// let extractor = KeywordExtractor::default();
/// let keywords = extractor
///     .extract("database database database transaction transaction commit")
///     .unwrap();
///
/// assert_eq!(keywords[0].term, "database");
/// assert_eq!(keywords[0].weight, 1.0);
///
/// // Nothing to extract is not an error.
/// assert!(extractor.extract("the of and to in").unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct KeywordExtractor<S = ParagraphSegmenter> {
    segmenter: S,
    scorer: KeywordScorer,
    min_input_words: Option<usize>,
}

impl KeywordExtractor<ParagraphSegmenter> {
    /// Build an extractor from a validated configuration.
    ///
    /// # Errors
    ///
    /// Propagates threshold validation errors from the segmenter and
    /// tokenizer.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let segmenter = ParagraphSegmenter::new(config.min_paragraph_words())?;
        Self::with_segmenter(config, segmenter)
    }
}

impl<S: Segmenter> KeywordExtractor<S> {
    /// Build an extractor with a custom segmentation strategy.
    ///
    /// The configuration's paragraph threshold is ignored; `segmenter`
    /// decides what a document is.
    ///
    /// # Errors
    ///
    /// Propagates validation errors for `top_k` and the term length.
    pub fn with_segmenter(config: ExtractorConfig, segmenter: S) -> Result<Self> {
        let tokenizer = Tokenizer::new(config.min_term_length(), config.stopwords().clone())?;
        let scorer = KeywordScorer::new(config.top_k())?
            .with_tokenizer(tokenizer)
            .with_params(config.tfidf());

        Ok(Self {
            segmenter,
            scorer,
            min_input_words: config.min_input_words(),
        })
    }

    /// The segmenter in use.
    #[must_use]
    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// The scorer in use.
    #[must_use]
    pub fn scorer(&self) -> &KeywordScorer {
        &self.scorer
    }

    /// Extract the ranked keywords of `text`.
    ///
    /// Returns an empty list when no term survives tokenization.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyText`] if `text` is empty or whitespace only
    /// - [`Error::InsufficientText`] if the word guard is on and not met
    pub fn extract(&self, text: &str) -> Result<Vec<Keyword>> {
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }

        if let Some(required) = self.min_input_words {
            let words = count_words(text);
            if words < required {
                return Err(Error::InsufficientText { words, required });
            }
        }

        let documents = self.segmenter.segment(text);
        debug!(
            documents = documents.len(),
            bytes = text.len(),
            "Segmented input"
        );

        let matrix = match self.scorer.fit(&documents) {
            Ok(matrix) => matrix,
            Err(Error::EmptyVocabulary) => {
                debug!(
                    documents = documents.len(),
                    "No extractable terms, returning empty result"
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let keywords = self.scorer.rank(&matrix);
        if let Some(top) = keywords.first() {
            info!(
                documents = documents.len(),
                vocabulary = matrix.vocabulary().len(),
                keywords = keywords.len(),
                top_keyword = %top.term,
                top_score = top.score,
                "Extracted keywords"
            );
        }

        Ok(keywords)
    }
}

impl Default for KeywordExtractor<ParagraphSegmenter> {
    fn default() -> Self {
        Self {
            segmenter: ParagraphSegmenter::default(),
            scorer: KeywordScorer::default(),
            min_input_words: None,
        }
    }
}
