//! # keyweight
//!
//! Ranked, weighted keyword extraction for article text.
//!
//! ## The Problem
//!
//! A word cloud needs two things from an article: which words matter, and
//! how much. Raw frequency answers neither well. The most frequent words
//! are "the" and "said"; the next tier are words the whole article leans on
//! ("company", "people") without any one of them being *about* anything.
//!
//! The words worth showing are the ones that dominate *part* of the text:
//! the paragraph about the rocket launch says "rocket" five times, the
//! paragraph about the ocean survey says "ocean" five times, and neither
//! says the other's word at all.
//!
//! ## The Pipeline
//!
//! ```text
//! text
//!   │  segment: split on newlines, keep paragraphs with >= 5 words
//!   ▼
//! [doc 0, doc 1, ..., doc n-1]
//!   │  tokenize: lowercase, runs of >= 4 letters, drop stopwords
//!   ▼
//! TF-IDF matrix (n docs × vocabulary)
//!   │  aggregate: mean of each column over all n documents
//!   ▼
//! term → score
//!   │  select: top-k by score, ties by term
//!   │  normalize: min-max into [0, 1], round to 4 decimals
//!   ▼
//! [Keyword { term, weight }, ...]
//! ```
//!
//! Paragraphs are the documents because an article is one document to the
//! outside world: IDF over a single document is constant, and scoring
//! degenerates to frequency. Splitting gives the statistic several
//! observations of the same text. When an input has no paragraph structure
//! the pipeline still works, it just ranks by frequency.
//!
//! ## Quick Start
//!
//! ```rust
//! let text = "The launch window opened at dawn. The rocket cleared the tower \
//!             and the rocket engines burned for eight minutes.\n\n\
//!             Meanwhile the ocean survey ship mapped the ocean floor, \
//!             logging ocean temperature every hour.";
//!
//! let keywords = keyweight::extract_keywords(text, 10).unwrap();
//!
//! assert!(keywords.len() <= 10);
//! assert_eq!(keywords[0].weight, 1.0);
//! assert!(keywords.iter().any(|k| k.term == "ocean"));
//! ```
//!
//! ## Configuring
//!
//! ```rust
//! use keyweight::{ExtractorConfig, KeywordExtractor, StopWords, TfIdfParams};
//!
//! let config = ExtractorConfig::default()
//!     .with_top_k(25)?
//!     .with_tfidf(TfIdfParams::sublinear())
//!     .with_stopwords(StopWords::default().extend(["reuters", "photo"]));
//!
//! let extractor = KeywordExtractor::new(config)?;
//! let keywords = extractor.extract("photo credit reuters reuters reuters")?;
//! assert_eq!(keywords[0].term, "credit");
//! # Ok::<(), keyweight::Error>(())
//! ```
//!
//! ## Degenerate Input
//!
//! | Input | Result |
//! |-------|--------|
//! | `""`, whitespace | `Err(Error::EmptyText)` |
//! | only stopwords / short words | `Ok(vec![])` |
//! | one distinct term | one keyword, weight 0.0 |
//! | all terms tied | every weight 0.0 |
//!
//! Weights are relative to the selected set: the bottom keyword is always
//! 0.0, so a single keyword or a fully tied selection has no spread to show.

mod config;
mod document;
mod error;
mod extractor;
mod keyword;
mod paragraph;
mod scorer;
mod stopwords;

pub mod rank;
pub mod tfidf;
pub mod tokenize;

pub use config::{ExtractorConfig, MIN_ARTICLE_WORDS};
pub use document::Document;
pub use error::{Error, Result};
pub use extractor::KeywordExtractor;
pub use keyword::Keyword;
pub use paragraph::ParagraphSegmenter;
pub use rank::DEFAULT_TOP_K;
pub use scorer::KeywordScorer;
pub use stopwords::{StopWords, DEFAULT_STOPWORDS};
pub use tfidf::TfIdfParams;
pub use tokenize::Tokenizer;

/// A document segmentation strategy.
///
/// The extractor computes its statistic over whatever documents the
/// segmenter produces:
///
/// ```rust
/// use keyweight::{ParagraphSegmenter, Segmenter};
///
/// fn count_documents(segmenter: &dyn Segmenter, text: &str) -> usize {
///     segmenter.segment(text).len()
/// }
///
/// let text = "first paragraph with enough words\n\nsecond paragraph with enough words";
/// assert_eq!(count_documents(&ParagraphSegmenter::default(), text), 2);
/// ```
pub trait Segmenter: Send + Sync {
    /// Split text into documents.
    ///
    /// Must return at least one document for non-empty text.
    fn segment(&self, text: &str) -> Vec<Document>;
}

/// Extract up to `top_k` keywords from `text` with the default settings.
///
/// # Errors
///
/// - [`Error::InvalidTopK`] if `top_k == 0`
/// - [`Error::EmptyText`] if `text` is empty or whitespace only
pub fn extract_keywords(text: &str, top_k: usize) -> Result<Vec<Keyword>> {
    let config = ExtractorConfig::default().with_top_k(top_k)?;
    KeywordExtractor::new(config)?.extract(text)
}
