//! Drop filter — removes stop words and other noise terms.

use indexmap::IndexSet;

use crate::types::TermSet;

/// Built-in English stop words, merged into the drop list when
/// `pipeline.default_stopwords` is enabled.
pub static DEFAULT_STOPWORDS: phf::Set<&'static str> = phf::phf_set! {
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "if",
    "in", "into", "is", "it", "its", "of", "on", "or", "such", "that", "the",
    "their", "then", "there", "these", "they", "this", "to", "was", "were",
    "will", "with",
};

/// Set difference by exact term value.
pub fn drop_terms(terms: &TermSet, drop_list: &IndexSet<String>) -> TermSet {
    let mut out = terms.clone();
    out.retain(|term| !drop_list.contains(term));

    tracing::debug!(
        stage = "drop",
        before = terms.len(),
        after = out.len(),
        "dropped noise terms"
    );
    out
}
