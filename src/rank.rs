//! Top-k selection and min-max weight normalization.
//!
//! ## Ordering
//!
//! Terms are ordered by aggregate score descending. Equal scores are
//! ordered by term ascending (byte order), so the same input produces the
//! same ranking on every platform.
//!
//! ## Normalization
//!
//! ```text
//! scores:  [0.91, 0.67, 0.43, 0.25]
//! min/max: 0.25 / 0.91, range 0.66
//! weights: (s - 0.25) / (0.66 + 1e-9)
//!        = [1.0, 0.6364, 0.2727, 0.0]
//! ```
//!
//! Weights are relative to the selected set: the last selected keyword
//! always gets 0.0, whatever its raw score. The epsilon keeps an all-equal
//! selection from dividing by zero (every weight becomes 0.0).

use std::cmp::Ordering;

use crate::Keyword;

/// Default number of keywords to return.
pub const DEFAULT_TOP_K: usize = 60;

/// Added to the score range before dividing.
pub const NORMALIZATION_EPSILON: f64 = 1e-9;

/// Ranking order: score descending, then term ascending.
#[must_use]
pub fn rank_order(a: (&str, f64), b: (&str, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// The `top_k` highest-scoring `(term, score)` pairs in ranking order.
#[must_use]
pub fn select_top_k<'a>(scored: &[(&'a str, f64)], top_k: usize) -> Vec<(&'a str, f64)> {
    let mut ranked = scored.to_vec();
    ranked.sort_unstable_by(|a, b| rank_order(*a, *b));
    ranked.truncate(top_k);
    ranked
}

/// Min-max rescale `scores` into `[0, 1]`, rounded to four decimals.
///
/// If the largest score is not positive, every weight is 0.0.
#[must_use]
pub fn normalize_weights(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);

    if max <= 0.0 {
        return vec![0.0; scores.len()];
    }

    let range = max - min + NORMALIZATION_EPSILON;
    scores
        .iter()
        .map(|s| round4(((s - min) / range).clamp(0.0, 1.0)))
        .collect()
}

/// Round to four decimal places.
///
/// Scales by 10^4 and rounds half away from zero on the scaled float.
/// This is not correctly-rounded decimal rounding of the exact binary
/// value: an exact half tie such as `0.03125` goes up to `0.0313`, where
/// round-half-even on the exact value would give `0.0312`, and a scaled
/// product that lands just off a tie can move the last digit either way.
#[must_use]
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Select and normalize: the ranked keyword list for scored terms.
#[must_use]
pub fn rank(scored: &[(&str, f64)], top_k: usize) -> Vec<Keyword> {
    let top = select_top_k(scored, top_k);
    let scores: Vec<f64> = top.iter().map(|(_, s)| *s).collect();
    let weights = normalize_weights(&scores);

    top.into_iter()
        .zip(weights)
        .map(|((term, score), weight)| Keyword::new(term, weight, score))
        .collect()
}
