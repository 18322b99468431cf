//! Error types for keyweight.

/// Errors that can occur during keyword extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No term survived tokenization and stopword filtering.
    #[error("no extractable terms: every token was too short or a stopword")]
    EmptyVocabulary,

    /// Invalid `top_k` (must be > 0).
    #[error("invalid top_k: {0} (must be > 0)")]
    InvalidTopK(usize),

    /// Invalid paragraph word threshold (must be > 0).
    #[error("invalid minimum paragraph words: {0} (must be > 0)")]
    InvalidMinWords(usize),

    /// Invalid minimum term length (must be > 0).
    #[error("invalid minimum term length: {0} (must be > 0)")]
    InvalidMinTermLength(usize),

    /// Input text is empty or whitespace only.
    #[error("input text is empty")]
    EmptyText,

    /// Input text is shorter than the configured content guard.
    #[error("not enough text: {words} words, need at least {required}")]
    InsufficientText {
        /// Whitespace-delimited words in the input.
        words: usize,
        /// The configured minimum.
        required: usize,
    },

    /// The scorer was given no documents.
    #[error("no documents to score")]
    NoDocuments,
}

/// Result type for keyweight operations.
pub type Result<T> = std::result::Result<T, Error>;
