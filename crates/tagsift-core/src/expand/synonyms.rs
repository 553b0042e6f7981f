//! Synonym expansion over an ordered thesaurus.

use indexmap::IndexSet;

use crate::types::TermSet;

/// For each input term, union in the first thesaurus group that contains it.
///
/// Groups are scanned in slice order and only the first match counts, so a
/// term listed in several groups expands through one of them. Terms found in
/// no group are left alone. Only terms of the input are looked up; members
/// pulled in from a group are not expanded again.
pub fn expand_synonyms(terms: &TermSet, groups: &[IndexSet<String>]) -> TermSet {
    let mut out = terms.clone();
    for term in terms.iter() {
        if let Some(group) = groups.iter().find(|group| group.contains(term)) {
            out.extend(group.iter().cloned());
        }
    }

    tracing::debug!(
        stage = "synonyms",
        groups = groups.len(),
        before = terms.len(),
        after = out.len(),
        "expanded synonyms"
    );
    out
}
