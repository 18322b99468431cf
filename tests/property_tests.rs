//! Property-based tests for keyword extraction.
//!
//! These tests verify that extraction maintains key invariants:
//! - Determinism: same input, same output
//! - Bounds: every weight is in [0, 1]
//! - Ordering: scores and weights never ascend
//! - Cardinality: min(top_k, distinct qualifying terms)
//! - Exclusion: no stopword or short token is ever a keyword

use std::collections::BTreeSet;

use proptest::prelude::*;
use keyweight::{
    extract_keywords, Document, KeywordScorer, ParagraphSegmenter, Segmenter, StopWords,
};

// =============================================================================
// Test Generators
// =============================================================================

/// Content words, stopwords, and short words mixed together.
const WORDS: &[&str] = &[
    "rocket", "ocean", "database", "commit", "launch", "survey", "orbit", "tide", "index",
    "query", "engine", "planet", "the", "and", "because", "years", "said", "off", "big", "cat",
    "a", "of", "during", "three",
];

/// A paragraph of at least five words from the pool.
fn paragraph() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(WORDS), 5..30)
}

/// Several paragraphs, as word lists.
fn article() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    prop::collection::vec(paragraph(), 1..8)
}

fn render(paragraphs: &[Vec<&str>]) -> String {
    paragraphs
        .iter()
        .map(|p| p.join(" "))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Distinct words that should survive tokenization, computed directly.
fn qualifying_terms(paragraphs: &[Vec<&str>]) -> BTreeSet<String> {
    let stop = StopWords::default();
    paragraphs
        .iter()
        .flatten()
        .filter(|w| w.len() >= 4 && !stop.contains(w))
        .map(|w| (*w).to_string())
        .collect()
}

/// Arbitrary text: letters, digits, punctuation, whitespace, newlines.
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 ,.!?'\\-\n]{1,400}").unwrap()
}

// =============================================================================
// Extraction Invariants
// =============================================================================

proptest! {
    #[test]
    fn extraction_is_deterministic(paragraphs in article(), top_k in 1usize..80) {
        let text = render(&paragraphs);
        let first = extract_keywords(&text, top_k).unwrap();
        let second = extract_keywords(&text, top_k).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn weights_in_unit_interval(paragraphs in article(), top_k in 1usize..80) {
        let keywords = extract_keywords(&render(&paragraphs), top_k).unwrap();
        for k in &keywords {
            prop_assert!((0.0..=1.0).contains(&k.weight), "{} has weight {}", k.term, k.weight);
        }
    }

    #[test]
    fn ranking_never_ascends(paragraphs in article(), top_k in 1usize..80) {
        let keywords = extract_keywords(&render(&paragraphs), top_k).unwrap();
        for pair in keywords.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            prop_assert!(pair[0].weight >= pair[1].weight);
        }
    }

    #[test]
    fn cardinality_matches_vocabulary(paragraphs in article(), top_k in 1usize..20) {
        let keywords = extract_keywords(&render(&paragraphs), top_k).unwrap();
        let expected = qualifying_terms(&paragraphs).len().min(top_k);
        prop_assert_eq!(keywords.len(), expected);
    }

    #[test]
    fn no_stopwords_or_short_terms(paragraphs in article()) {
        let stop = StopWords::default();
        let keywords = extract_keywords(&render(&paragraphs), 60).unwrap();
        for k in &keywords {
            prop_assert!(k.term.len() >= 4, "short term {}", k.term);
            prop_assert!(!stop.contains(&k.term), "stopword {}", k.term);
        }
    }

    #[test]
    fn top_weight_is_one_when_scores_spread(paragraphs in article(), top_k in 2usize..80) {
        let keywords = extract_keywords(&render(&paragraphs), top_k).unwrap();
        if let (Some(first), Some(last)) = (keywords.first(), keywords.last()) {
            if first.score - last.score > 1e-4 {
                prop_assert_eq!(first.weight, 1.0);
                prop_assert_eq!(last.weight, 0.0);
            }
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in arbitrary_text()) {
        match extract_keywords(&text, 60) {
            Ok(keywords) => prop_assert!(keywords.len() <= 60),
            Err(e) => prop_assert_eq!(e, keyweight::Error::EmptyText),
        }
    }
}

// =============================================================================
// Segmentation Invariants
// =============================================================================

proptest! {
    #[test]
    fn segments_match_source(text in arbitrary_text()) {
        let docs = ParagraphSegmenter::default().segment(&text);
        prop_assert!(!docs.is_empty());
        for (i, doc) in docs.iter().enumerate() {
            prop_assert_eq!(doc.index, i);
            prop_assert_eq!(&text[doc.start..doc.end], doc.text.as_str());
        }
    }

    #[test]
    fn segments_are_ordered(paragraphs in article()) {
        let text = render(&paragraphs);
        let docs = ParagraphSegmenter::default().segment(&text);
        prop_assert_eq!(docs.len(), paragraphs.len());
        for pair in docs.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }
}

// =============================================================================
// Statistic Monotonicity
// =============================================================================

proptest! {
    #[test]
    fn more_occurrences_score_higher(low in 1usize..10, extra in 1usize..10) {
        let high = low + extra;
        let text = format!(
            "{} {} filler words here",
            "alpha ".repeat(high),
            "bravo ".repeat(low)
        );
        let docs = vec![Document::new(text.as_str(), 0, text.len(), 0)];
        let matrix = KeywordScorer::default().fit(&docs).unwrap();
        prop_assert!(matrix.get(0, "alpha") > matrix.get(0, "bravo"));
    }

    #[test]
    fn wider_spread_scores_lower(spread in 2usize..8) {
        // "shared" appears once in `spread` documents, "unique" once in one.
        let mut docs = vec![Document::new("shared unique padding words", 0, 0, 0)];
        for i in 1..spread {
            docs.push(Document::new("shared other padding words", 0, 0, i));
        }
        let matrix = KeywordScorer::default().fit(&docs).unwrap();
        prop_assert!(matrix.get(0, "unique") > matrix.get(0, "shared"));
    }
}
