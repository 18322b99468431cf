//! Paragraph segmentation.
//!
//! Splits article text into paragraph-sized documents so the TF-IDF
//! statistic gets several observations instead of one.
//!
//! ## The Algorithm
//!
//! ```text
//! 1. Split on runs of "\n" (one or more newlines)
//! 2. Trim surrounding whitespace from each piece
//! 3. Keep pieces with >= min_words whitespace-delimited words
//! 4. Nothing kept? Use the whole input as one document
//! ```
//!
//! ## Why a Word Threshold?
//!
//! Extracted article text is full of short lines: headings, bylines, image
//! captions, "Share this" buttons. Treating each of those as a document
//! inflates the document count and makes every term look rare. Five words
//! is enough to drop most of that debris while keeping real paragraphs.
//!
//! ## The Fallback
//!
//! Some sources flatten an article into one long line. With no newline
//! structure there is nothing to split, and short inputs may have no piece
//! that passes the threshold. Either way the whole input becomes a single
//! document and IDF is uniform:
//!
//! ```text
//! "database database database transaction transaction commit"
//!         ↓
//! [Document 0: the entire input]
//! ```

use crate::{Document, Segmenter};

/// Default minimum words for a paragraph to count as a document.
pub const DEFAULT_MIN_WORDS: usize = 5;

/// Newline-delimited paragraph segmenter.
///
/// ## Example
///
/// ```rust
/// use keyweight::{ParagraphSegmenter, Segmenter};
///
/// let segmenter = ParagraphSegmenter::default();
/// let text = "Title\n\nThe first paragraph has enough words.\n\n\
///             The second paragraph also has enough words.";
/// let docs = segmenter.segment(text);
///
/// assert_eq!(docs.len(), 2);
/// assert!(docs[0].text.starts_with("The first"));
/// ```
#[derive(Debug, Clone)]
pub struct ParagraphSegmenter {
    min_words: usize,
}

impl ParagraphSegmenter {
    /// Create a segmenter that keeps paragraphs with at least `min_words`
    /// words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMinWords`](crate::Error::InvalidMinWords)
    /// if `min_words == 0`.
    pub fn new(min_words: usize) -> crate::Result<Self> {
        if min_words == 0 {
            return Err(crate::Error::InvalidMinWords(min_words));
        }
        Ok(Self { min_words })
    }

    /// The paragraph word threshold.
    #[must_use]
    pub const fn min_words(&self) -> usize {
        self.min_words
    }

    /// Paragraphs that pass the word threshold, with trimmed offsets.
    fn paragraphs(&self, text: &str) -> Vec<Document> {
        let mut docs = Vec::new();
        let mut offset = 0;

        for piece in text.split('\n') {
            let start = offset;
            offset += piece.len() + 1;

            let trimmed = piece.trim();
            if trimmed.is_empty() {
                continue;
            }

            let leading_ws = piece.len() - piece.trim_start().len();
            let doc_start = start + leading_ws;
            let doc = Document::new(trimmed, doc_start, doc_start + trimmed.len(), docs.len());

            if doc.word_count() >= self.min_words {
                docs.push(doc);
            }
        }

        docs
    }
}

impl Default for ParagraphSegmenter {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
        }
    }
}

impl Segmenter for ParagraphSegmenter {
    fn segment(&self, text: &str) -> Vec<Document> {
        if text.is_empty() {
            return vec![];
        }

        let docs = self.paragraphs(text);
        if docs.is_empty() {
            return vec![Document::new(text, 0, text.len(), 0)];
        }

        docs
    }
}
