//! Domain-specific assertion macros for tagsift harnesses.
//!
//! These add context-rich failure messages that make it clear *which* ranking
//! or term-set invariant was violated.

// ---------------------------------------------------------------------------
// Term set assertions
// ---------------------------------------------------------------------------

/// Assert that a `TermSet` contains every listed term.
///
/// ```rust
/// assert_terms_contain!(terms, ["city", "cities"]);
/// ```
#[macro_export]
macro_rules! assert_terms_contain {
    ($terms:expr, [$($term:expr),* $(,)?]) => {{
        let terms: &tagsift_core::TermSet = &$terms;
        let missing: Vec<&str> = [$($term),*]
            .into_iter()
            .filter(|t: &&str| !terms.contains(t))
            .collect();
        if !missing.is_empty() {
            panic!(
                "assert_terms_contain! failed:\n  missing: {:?}\n  terms:   [{}]",
                missing, terms
            );
        }
    }};
}

/// Assert that a `TermSet` contains none of the listed terms.
#[macro_export]
macro_rules! assert_terms_lack {
    ($terms:expr, [$($term:expr),* $(,)?]) => {{
        let terms: &tagsift_core::TermSet = &$terms;
        let present: Vec<&str> = [$($term),*]
            .into_iter()
            .filter(|t: &&str| terms.contains(t))
            .collect();
        if !present.is_empty() {
            panic!(
                "assert_terms_lack! failed:\n  unexpected: {:?}\n  terms:      [{}]",
                present, terms
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Ranking assertions
// ---------------------------------------------------------------------------

/// Assert the exact `(item, score)` rows of a ranked result list.
///
/// ```rust
/// assert_ranked!(results, [("x", 1), ("y", 1)]);
/// ```
#[macro_export]
macro_rules! assert_ranked {
    ($results:expr, [$(($item:expr, $score:expr)),* $(,)?]) => {{
        let results: &[tagsift_core::Ranked<String>] = &$results;
        let actual: Vec<(&str, u32)> =
            results.iter().map(|r| (r.item.as_str(), r.score)).collect();
        let expected: Vec<(&str, u32)> = vec![$(($item, $score)),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_ranked! failed");
    }};
}

/// Assert that scores never increase down the list.
pub fn assert_descending<K: std::fmt::Debug>(results: &[tagsift_core::Ranked<K>]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results not sorted by descending score: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}
