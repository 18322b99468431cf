//! TF-IDF term statistics over a set of documents.
//!
//! ## The Statistic
//!
//! For a term `t` in document `d` out of `n` documents:
//!
//! ```text
//! tf(t, d)  = count of t in d                 (Raw)
//!           = 1 + ln(count)                   (Sublinear)
//!
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1   (Smoothed)
//!           = ln(n / df(t)) + 1               (Unsmoothed)
//!
//! w(t, d)   = tf(t, d) * idf(t), then each document row is normalized
//! ```
//!
//! `df(t)` is the number of documents containing `t` at least once. The `+ 1`
//! outside the log keeps terms that appear in every document from scoring
//! zero; the smoothing inside pretends one extra document contains every
//! term, so `df == n` never divides to `ln(1)` exactly.
//!
//! ## Row Normalization
//!
//! Long paragraphs have more tokens and would dominate the mean. Normalizing
//! each row (L2 by default) makes every document contribute a unit vector,
//! so a term's aggregate reflects how distinctive it is *within* each
//! paragraph rather than how long the paragraph was.
//!
//! ```text
//!          alpha  beta  gamma
//! doc 0:   0.80   0.60  0.00
//! doc 1:   0.00   0.47  0.88
//! mean:    0.40   0.53  0.44
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Term-frequency transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TfVariant {
    /// `tf = count`.
    #[default]
    Raw,
    /// `tf = 1 + ln(count)`.
    Sublinear,
}

/// Inverse-document-frequency transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdfVariant {
    /// `idf = ln((1 + n) / (1 + df)) + 1`.
    #[default]
    Smoothed,
    /// `idf = ln(n / df) + 1`.
    Unsmoothed,
}

/// Per-document row normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowNorm {
    /// Divide by the Euclidean norm of the row.
    #[default]
    L2,
    /// Divide by the sum of the row.
    L1,
    /// Leave rows as raw `tf * idf`.
    None,
}

/// TF-IDF parameters.
///
/// The default (raw TF, smoothed IDF, L2 rows) matches the common
/// vectorizer convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TfIdfParams {
    /// Term-frequency transform.
    pub tf: TfVariant,
    /// IDF transform.
    pub idf: IdfVariant,
    /// Row normalization.
    pub norm: RowNorm,
}

impl TfIdfParams {
    /// Log-scaled TF with the default IDF and normalization.
    #[must_use]
    pub fn sublinear() -> Self {
        Self {
            tf: TfVariant::Sublinear,
            ..Self::default()
        }
    }

    /// Unsmoothed IDF with the default TF and normalization.
    #[must_use]
    pub fn unsmoothed() -> Self {
        Self {
            idf: IdfVariant::Unsmoothed,
            ..Self::default()
        }
    }
}

/// Term frequency for a raw in-document count.
#[must_use]
pub fn term_frequency(count: u32, variant: TfVariant) -> f64 {
    if count == 0 {
        return 0.0;
    }
    match variant {
        TfVariant::Raw => f64::from(count),
        TfVariant::Sublinear => 1.0 + f64::from(count).ln(),
    }
}

/// Inverse document frequency of a term found in `doc_frequency` of
/// `num_docs` documents.
#[must_use]
pub fn inverse_document_frequency(num_docs: usize, doc_frequency: usize, variant: IdfVariant) -> f64 {
    let n = num_docs as f64;
    let df = doc_frequency as f64;
    match variant {
        IdfVariant::Smoothed => ((1.0 + n) / (1.0 + df)).ln() + 1.0,
        IdfVariant::Unsmoothed => {
            if doc_frequency == 0 {
                0.0
            } else {
                (n / df).ln() + 1.0
            }
        }
    }
}

/// The distinct terms of a document set, in lexicographic order.
///
/// A term's column index is its position in that order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Collect the distinct terms of tokenized documents.
    #[must_use]
    pub fn build(docs: &[Vec<String>]) -> Self {
        let terms: Vec<String> = docs
            .iter()
            .flatten()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { terms, index }
    }

    /// Column index of `term`.
    #[must_use]
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at column `index`.
    #[must_use]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// All terms in column order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no term survived tokenization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Sparse document-by-term TF-IDF matrix.
///
/// Each row holds `(column, weight)` pairs in column order for the terms
/// present in that document. Absent terms weigh zero.
#[derive(Debug, Clone)]
pub struct TermMatrix {
    vocabulary: Vocabulary,
    rows: Vec<Vec<(usize, f64)>>,
    doc_frequency: Vec<usize>,
    params: TfIdfParams,
}

impl TermMatrix {
    /// Compute the matrix for tokenized documents.
    #[must_use]
    pub fn fit(docs: &[Vec<String>], params: TfIdfParams) -> Self {
        let vocabulary = Vocabulary::build(docs);

        let counts: Vec<BTreeMap<usize, u32>> = docs
            .iter()
            .map(|tokens| {
                let mut row = BTreeMap::new();
                for token in tokens {
                    if let Some(col) = vocabulary.get(token) {
                        *row.entry(col).or_insert(0) += 1;
                    }
                }
                row
            })
            .collect();

        let mut doc_frequency = vec![0usize; vocabulary.len()];
        for row in &counts {
            for &col in row.keys() {
                doc_frequency[col] += 1;
            }
        }

        let idf: Vec<f64> = doc_frequency
            .iter()
            .map(|&df| inverse_document_frequency(docs.len(), df, params.idf))
            .collect();

        let rows = counts
            .into_iter()
            .map(|row| {
                let mut weighted: Vec<(usize, f64)> = row
                    .into_iter()
                    .map(|(col, count)| (col, term_frequency(count, params.tf) * idf[col]))
                    .collect();
                normalize_row(&mut weighted, params.norm);
                weighted
            })
            .collect();

        Self {
            vocabulary,
            rows,
            doc_frequency,
            params,
        }
    }

    /// The vocabulary the columns refer to.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of documents (rows).
    #[must_use]
    pub fn num_docs(&self) -> usize {
        self.rows.len()
    }

    /// The parameters the matrix was computed with.
    #[must_use]
    pub fn params(&self) -> TfIdfParams {
        self.params
    }

    /// Non-zero `(column, weight)` entries of document `doc`.
    #[must_use]
    pub fn row(&self, doc: usize) -> &[(usize, f64)] {
        self.rows.get(doc).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of `term` in document `doc`; zero when absent.
    #[must_use]
    pub fn get(&self, doc: usize, term: &str) -> f64 {
        let Some(col) = self.vocabulary.get(term) else {
            return 0.0;
        };
        self.row(doc)
            .binary_search_by_key(&col, |&(c, _)| c)
            .map_or(0.0, |i| self.row(doc)[i].1)
    }

    /// Number of documents containing `term`.
    #[must_use]
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.vocabulary
            .get(term)
            .map_or(0, |col| self.doc_frequency[col])
    }

    /// Mean weight of every column across all documents.
    ///
    /// Documents without a term contribute zero; the divisor is always
    /// [`num_docs`](Self::num_docs).
    #[must_use]
    pub fn mean_scores(&self) -> Vec<f64> {
        let mut sums = vec![0.0f64; self.vocabulary.len()];
        if self.rows.is_empty() {
            return sums;
        }
        for row in &self.rows {
            for &(col, weight) in row {
                sums[col] += weight;
            }
        }
        let n = self.rows.len() as f64;
        for sum in &mut sums {
            *sum /= n;
        }
        sums
    }
}

fn normalize_row(row: &mut [(usize, f64)], norm: RowNorm) {
    let denom = match norm {
        RowNorm::L2 => row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
        RowNorm::L1 => row.iter().map(|(_, w)| w.abs()).sum::<f64>(),
        RowNorm::None => return,
    };
    if denom > 0.0 {
        for (_, w) in row.iter_mut() {
            *w /= denom;
        }
    }
}
