//! Test builders — ergonomic constructors for indexes, lexicons and term sets.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use indexmap::{IndexMap, IndexSet};
use tagsift_core::{Lexicon, TagIndex, TermSet};

// ---------------------------------------------------------------------------
// IndexBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a [`TagIndex`] keyed by item name.
///
/// # Example
///
/// ```rust
/// let index = IndexBuilder::new()
///     .item("x", &["cat", "dog"])
///     .item("y", &["cat"])
///     .build();
/// ```
#[derive(Default)]
pub struct IndexBuilder {
    items: TagIndex,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, name: &str, tags: &[&str]) -> Self {
        self.items
            .insert(name.to_string(), tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn build(self) -> TagIndex {
        self.items
    }
}

// ---------------------------------------------------------------------------
// LexiconBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Lexicon`] fixtures.
#[derive(Default)]
pub struct LexiconBuilder {
    lexicon: Lexicon,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, words: &[&str]) -> Self {
        self.lexicon.thesaurus.push(set(words));
        self
    }

    pub fn supplement(mut self, trigger: &str, related: &[&str]) -> Self {
        self.lexicon.supplements.insert(trigger.to_string(), set(related));
        self
    }

    pub fn correction(mut self, wrong: &str, right: &str) -> Self {
        self.lexicon
            .corrections
            .insert(wrong.to_string(), right.to_string());
        self
    }

    pub fn drop(mut self, words: &[&str]) -> Self {
        self.lexicon.drop_list.extend(words.iter().map(|w| w.to_string()));
        self
    }

    pub fn build(self) -> Lexicon {
        self.lexicon
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

pub fn set(words: &[&str]) -> IndexSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

pub fn terms(words: &[&str]) -> TermSet {
    words.iter().copied().collect()
}

pub fn corrections(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Build an index of `n` items whose tags cycle through `vocabulary`.
pub fn build_catalog(n: usize, vocabulary: &[&str]) -> TagIndex {
    (0..n)
        .map(|i| {
            let tags = (0..3)
                .map(|k| vocabulary[(i + k * 7) % vocabulary.len()].to_string())
                .collect();
            (format!("item-{i}"), tags)
        })
        .collect()
}
