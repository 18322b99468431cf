//! The Document type: one segmentation unit with position metadata.

/// A paragraph-level span of the input text.
///
/// Documents are the observations the TF-IDF statistic is computed over.
/// More documents give the inverse document frequency something to work
/// with; a single document makes IDF uniform and reduces scoring to raw
/// term frequency.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the original text, matching
/// Rust's string slicing semantics:
///
/// ```rust
/// use keyweight::Document;
///
/// let text = "intro\n\nthe body of the article";
/// let doc = Document::new("the body of the article", 7, 30, 0);
///
/// assert_eq!(&text[doc.start..doc.end], doc.text);
/// assert_eq!(doc.word_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The document text.
    pub text: String,
    /// Byte offset where this document starts in the original text.
    pub start: usize,
    /// Byte offset where this document ends (exclusive) in the original text.
    pub end: usize,
    /// Zero-based index of this document in the sequence.
    pub index: usize,
    word_count: usize,
}

impl Document {
    /// Create a new document. The word count is computed from `text`.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        let text = text.into();
        let word_count = count_words(&text);
        Self {
            text,
            start,
            end,
            index,
            word_count,
        }
    }

    /// Number of whitespace-delimited words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The length of this document in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this document is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this document in the original text.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Document {{ index: {}, span: {}..{}, words: {} }}",
            self.index, self.start, self.end, self.word_count
        )
    }
}

/// Count whitespace-delimited words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
