//! Spelling correction from a misspelling → correction map.

use indexmap::{IndexMap, IndexSet};

use crate::types::TermSet;

/// Replace known misspellings with their corrections.
///
/// Corrections are appended first; afterwards every corrected original is
/// removed from the whole set. That removal is unconditional, so a term that
/// is both a misspelling in the input and the correction of another
/// misspelling does not survive.
pub fn correct_spelling(terms: &TermSet, corrections: &IndexMap<String, String>) -> TermSet {
    let mut out = terms.clone();
    let mut corrected: IndexSet<&str> = IndexSet::new();

    for term in terms.iter() {
        if let Some(fix) = corrections.get(term) {
            out.insert(fix.as_str());
            corrected.insert(term);
        }
    }
    out.retain(|term| !corrected.contains(term));

    tracing::debug!(
        stage = "spelling",
        corrected = corrected.len(),
        before = terms.len(),
        after = out.len(),
        "corrected spellings"
    );
    out
}
