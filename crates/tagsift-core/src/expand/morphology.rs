//! Morphological expansion — adds likely singular and base forms.
//!
//! The rules are plain suffix heuristics, not a stemmer. Only the first rule
//! whose suffix matches fires, and derived forms are added next to the
//! original word rather than replacing it.

use crate::types::{Term, TermSet};

/// A suffix rule: when a word ends with `suffix`, each `(drop, append)` pair
/// yields one derived form by removing `drop` trailing characters and
/// appending `append`.
struct SuffixRule {
    suffix: &'static str,
    forms: &'static [(usize, &'static str)],
}

// Precedence order matters: "sses" must lose to "ies"/"ves"/"oes" and win
// over "es", and every "s" rule must be tried before "ing"/"ed".
const RULES: &[SuffixRule] = &[
    // cities -> city
    SuffixRule { suffix: "ies", forms: &[(3, "y")] },
    // wolves -> wolf, wives -> wife
    SuffixRule { suffix: "ves", forms: &[(3, "f"), (3, "fe")] },
    // drops the whole suffix: potatoes -> potat
    SuffixRule { suffix: "oes", forms: &[(3, "")] },
    // gasses -> gas
    SuffixRule { suffix: "sses", forms: &[(3, "")] },
    // braces -> brace, matches -> match
    SuffixRule { suffix: "es", forms: &[(1, ""), (2, "")] },
    // cars -> car
    SuffixRule { suffix: "s", forms: &[(1, "")] },
    // playing -> play
    SuffixRule { suffix: "ing", forms: &[(3, "")] },
    // played -> play, hated -> hate
    SuffixRule { suffix: "ed", forms: &[(2, ""), (1, "")] },
];

/// Derived forms for a single word, in rule order. Forms that would be empty
/// are skipped. Returns an empty vector when no rule applies.
pub fn surface_forms(word: &str) -> Vec<Term> {
    let Some(rule) = RULES.iter().find(|rule| word.ends_with(rule.suffix)) else {
        return Vec::new();
    };

    rule.forms
        .iter()
        .filter_map(|&(drop, append)| {
            // `drop` never exceeds the ASCII suffix, so this is a char boundary.
            debug_assert!(drop <= rule.suffix.len());
            let stem = &word[..word.len() - drop];
            let form = format!("{stem}{append}");
            (!form.is_empty()).then_some(form)
        })
        .collect()
}

/// Union of `terms` with every derived form of every term.
pub fn expand_morphology(terms: &TermSet) -> TermSet {
    let mut out = terms.clone();
    for word in terms.iter() {
        out.extend(surface_forms(word));
    }

    tracing::debug!(
        stage = "morphology",
        before = terms.len(),
        after = out.len(),
        "expanded surface forms"
    );
    out
}
