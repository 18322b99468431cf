//! Keyword scoring: documents in, ranked weighted keywords out.
//!
//! ```text
//! documents ─► tokenize ─► TF-IDF matrix ─► column means ─► top-k ─► min-max
//! ```
//!
//! The scorer holds only configuration. Every call builds its own
//! vocabulary and matrix and drops them on return, so one scorer can be
//! shared across threads.

use tracing::debug;

use crate::rank::{self, DEFAULT_TOP_K};
use crate::tfidf::{TermMatrix, TfIdfParams};
use crate::tokenize::Tokenizer;
use crate::{Document, Error, Keyword, Result};

/// TF-IDF keyword scorer.
///
/// ## Example
///
/// ```rust
/// use keyweight::{Document, KeywordScorer};
///
/// let scorer = KeywordScorer::new(3).unwrap();
/// let docs = vec![
///     Document::new("rocket rocket rocket launch window", 0, 34, 0),
///     Document::new("ocean ocean ocean tide window", 35, 64, 1),
/// ];
/// let keywords = scorer.score(&docs).unwrap();
///
/// assert_eq!(keywords.len(), 3);
/// assert_eq!(keywords[0].weight, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordScorer {
    top_k: usize,
    tokenizer: Tokenizer,
    params: TfIdfParams,
}

impl KeywordScorer {
    /// Create a scorer returning at most `top_k` keywords, with the default
    /// tokenizer and TF-IDF parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTopK`] if `top_k == 0`.
    pub fn new(top_k: usize) -> Result<Self> {
        if top_k == 0 {
            return Err(Error::InvalidTopK(top_k));
        }
        Ok(Self {
            top_k,
            tokenizer: Tokenizer::default(),
            params: TfIdfParams::default(),
        })
    }

    /// Use a different tokenizer.
    #[must_use]
    pub fn with_tokenizer(self, tokenizer: Tokenizer) -> Self {
        Self { tokenizer, ..self }
    }

    /// Use different TF-IDF parameters.
    #[must_use]
    pub fn with_params(self, params: TfIdfParams) -> Self {
        Self { params, ..self }
    }

    /// Maximum number of keywords returned.
    #[must_use]
    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// The tokenizer in use.
    #[must_use]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// The TF-IDF parameters in use.
    #[must_use]
    pub const fn params(&self) -> TfIdfParams {
        self.params
    }

    /// Tokenize `documents` and compute their TF-IDF matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDocuments`] for an empty slice and
    /// [`Error::EmptyVocabulary`] when no term survives tokenization.
    pub fn fit(&self, documents: &[Document]) -> Result<TermMatrix> {
        if documents.is_empty() {
            return Err(Error::NoDocuments);
        }

        let tokens: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.tokenizer.tokenize(&doc.text))
            .collect();

        let matrix = TermMatrix::fit(&tokens, self.params);
        if matrix.vocabulary().is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        debug!(
            documents = matrix.num_docs(),
            vocabulary = matrix.vocabulary().len(),
            tokens = tokens.iter().map(Vec::len).sum::<usize>(),
            "Computed TF-IDF matrix"
        );

        Ok(matrix)
    }

    /// Rank the terms of `documents` by mean TF-IDF and return the top
    /// `top_k` with normalized weights.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDocuments`] for an empty slice and
    /// [`Error::EmptyVocabulary`] when no term survives tokenization.
    pub fn score(&self, documents: &[Document]) -> Result<Vec<Keyword>> {
        let matrix = self.fit(documents)?;
        Ok(self.rank(&matrix))
    }

    /// Rank the columns of a fitted matrix by mean weight and return the
    /// top `top_k` with normalized weights.
    #[must_use]
    pub fn rank(&self, matrix: &TermMatrix) -> Vec<Keyword> {
        let means = matrix.mean_scores();

        let scored: Vec<(&str, f64)> = matrix
            .vocabulary()
            .terms()
            .iter()
            .map(String::as_str)
            .zip(means)
            .collect();

        let keywords = rank::rank(&scored, self.top_k);

        debug!(
            selected = keywords.len(),
            max_score = keywords.first().map_or(0.0, |k| k.score),
            min_score = keywords.last().map_or(0.0, |k| k.score),
            "Ranked keywords"
        );

        keywords
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            tokenizer: Tokenizer::default(),
            params: TfIdfParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfidf::RowNorm;
    use crate::{ParagraphSegmenter, Segmenter};

    fn single(text: &str) -> Vec<Document> {
        vec![Document::new(text, 0, text.len(), 0)]
    }

    #[test]
    fn test_single_document_ranks_by_frequency() {
        let docs = single("database database database transaction transaction commit");
        let keywords = KeywordScorer::default().score(&docs).unwrap();

        let terms: Vec<&str> = keywords.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["database", "transaction", "commit"]);
        assert_eq!(keywords[0].weight, 1.0);
        assert_eq!(keywords[2].weight, 0.0);
    }

    #[test]
    fn test_empty_vocabulary() {
        let docs = single("the of and to in");
        let result = KeywordScorer::default().score(&docs);
        assert_eq!(result, Err(Error::EmptyVocabulary));
    }

    #[test]
    fn test_no_documents() {
        assert_eq!(KeywordScorer::default().score(&[]), Err(Error::NoDocuments));
    }

    #[test]
    fn test_zero_top_k_rejected() {
        assert_eq!(KeywordScorer::new(0).unwrap_err(), Error::InvalidTopK(0));
    }

    #[test]
    fn test_top_k_limits_output() {
        let docs = single("alpha bravo charlie delta echos foxtrot golf hotel india juliet");
        let keywords = KeywordScorer::new(3).unwrap().score(&docs).unwrap();
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_equal_scores_tie_break_alphabetically() {
        let docs = single("zulu yankee xray whiskey");
        let keywords = KeywordScorer::default().score(&docs).unwrap();
        let terms: Vec<&str> = keywords.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["whiskey", "xray", "yankee", "zulu"]);
        assert!(keywords.iter().all(|k| k.weight == 0.0));
    }

    #[test]
    fn test_distinctive_terms_outrank_shared_terms() {
        let text = "rocket rocket rocket rocket rocket engine thrust story\n\n\
                    ocean ocean ocean ocean ocean waves tides story";
        let docs = ParagraphSegmenter::default().segment(text);
        let keywords = KeywordScorer::default().score(&docs).unwrap();

        let mut top: Vec<&str> = keywords[..2].iter().map(|k| k.term.as_str()).collect();
        top.sort_unstable();
        assert_eq!(top, vec!["ocean", "rocket"]);
        assert!((keywords[0].score - keywords[1].score).abs() < 1e-12);
        let story = keywords.iter().find(|k| k.term == "story").unwrap();
        assert!(story.score < keywords[1].score);
    }

    #[test]
    fn test_fit_exposes_matrix() {
        let docs = single("alpha alpha beta");
        let scorer = KeywordScorer::default().with_params(TfIdfParams {
            norm: RowNorm::None,
            ..TfIdfParams::default()
        });
        let matrix = scorer.fit(&docs).unwrap();
        assert_eq!(matrix.get(0, "alpha"), 2.0);
        assert_eq!(matrix.get(0, "beta"), 1.0);
    }
}
