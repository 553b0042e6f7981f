//! Supplement expansion: trigger term → related terms.

use indexmap::{IndexMap, IndexSet};

use crate::types::TermSet;

/// Union in the related terms of every input term that is an exact key of
/// `supplements`.
pub fn expand_supplements(
    terms: &TermSet,
    supplements: &IndexMap<String, IndexSet<String>>,
) -> TermSet {
    let mut out = terms.clone();
    for term in terms.iter() {
        if let Some(related) = supplements.get(term) {
            out.extend(related.iter().cloned());
        }
    }

    tracing::debug!(
        stage = "supplements",
        before = terms.len(),
        after = out.len(),
        "added supplements"
    );
    out
}
