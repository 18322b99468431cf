//! The Keyword type: one ranked, weighted term.

/// A ranked keyword with its normalized weight.
///
/// `weight` is the aggregate score rescaled to `[0, 1]` relative to the
/// other selected keywords and rounded to four decimal places. It is meant
/// for rendering (font size in a word cloud, bar length in a chart).
/// `score` is the raw aggregate TF-IDF it was derived from.
///
/// With the `serde` feature the record serializes as
/// `{"word": ..., "weight": ...}`; `score` stays in-process.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyword {
    /// The lowercase term.
    #[cfg_attr(feature = "serde", serde(rename = "word"))]
    pub term: String,
    /// Normalized weight in `[0, 1]`.
    pub weight: f64,
    /// Mean TF-IDF across all documents.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub score: f64,
}

impl Keyword {
    /// Create a new keyword.
    #[must_use]
    pub fn new(term: impl Into<String>, weight: f64, score: f64) -> Self {
        Self {
            term: term.into(),
            weight,
            score,
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.4})", self.term, self.weight)
    }
}
