//! Core types for tagsift-core.
//!
//! This module defines the values that flow through the pipeline: the
//! deduplicated [`TermSet`], the externally owned [`TagIndex`], and the
//! [`Ranked`] rows the ranker produces.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// A single normalised query word.
pub type Term = String;

/// Tags attached to one indexed item.
pub type TagSet = IndexSet<String>;

/// Item identifier → tag set. Iteration follows insertion order, which is the
/// order used to break ties between equal scores.
pub type TagIndex<K = String> = IndexMap<K, TagSet>;

/// A deduplicated, insertion-ordered collection of terms.
///
/// Empty strings are never stored: [`TermSet::insert`] ignores them, so every
/// constructor upholds the invariant.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TermSet {
    terms: IndexSet<Term>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term. Returns `true` if it was not already present. Empty
    /// strings are rejected and return `false`.
    pub fn insert(&mut self, term: impl Into<Term>) -> bool {
        let term = term.into();
        if term.is_empty() {
            return false;
        }
        self.terms.insert(term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Remove a term, keeping the relative order of the rest.
    pub fn remove(&mut self, term: &str) -> bool {
        self.terms.shift_remove(term)
    }

    /// Keep only the terms for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.terms.retain(|t| keep(t));
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `true` if every term of `other` is also in `self`.
    pub fn is_superset(&self, other: &TermSet) -> bool {
        self.terms.is_superset(&other.terms)
    }

    /// Terms in insertion order, as an owned sequence.
    pub fn to_vec(&self) -> Vec<Term> {
        self.terms.iter().cloned().collect()
    }
}

/// Set equality: two term sets are equal when they hold the same terms,
/// regardless of insertion order.
impl PartialEq for TermSet {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len() && self.terms.is_subset(&other.terms)
    }
}

impl Eq for TermSet {}

impl<S: Into<Term>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TermSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<Term>> Extend<S> for TermSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for term in iter {
            self.insert(term);
        }
    }
}

impl IntoIterator for TermSet {
    type Item = Term;
    type IntoIter = indexmap::set::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a Term;
    type IntoIter = indexmap::set::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl std::fmt::Display for TermSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for term in &self.terms {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(term)?;
            first = false;
        }
        Ok(())
    }
}

/// One row of a ranked result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked<K> {
    pub item: K,
    pub score: u32,
}

impl<K> Ranked<K> {
    pub fn new(item: K, score: u32) -> Self {
        Self { item, score }
    }
}
