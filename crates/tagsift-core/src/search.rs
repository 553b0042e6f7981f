//! Ranker — scores every indexed item against a term set.
//!
//! Two modes, picked by the [`Confidence`] threshold:
//!
//! - **exact** (`confidence == 100`): an item scores one point per query term
//!   that appears verbatim among its tags.
//! - **fuzzy** (`confidence < 100`): an item scores one point per
//!   `(term, tag)` pair whose [`similarity`](crate::similarity) reaches the
//!   threshold. Cost is `items × terms × tags`.
//!
//! Results are sorted by descending score with a stable sort, so equal scores
//! keep the index's insertion order. Items that score zero are kept.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::similarity::SimilarityEngine;
use crate::types::{Ranked, TagIndex, TermSet};

/// Minimum similarity percentage for a fuzzy match.
///
/// Values below 0 clamp to 0 and values above 100 clamp to 100; 100 (the
/// default) selects exact matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Confidence(u8);

impl Confidence {
    pub const EXACT: Confidence = Confidence(100);

    pub fn new(value: i64) -> Self {
        Confidence(value.clamp(0, 100) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_exact(self) -> bool {
        self.0 >= 100
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::EXACT
    }
}

impl From<i64> for Confidence {
    fn from(value: i64) -> Self {
        Confidence::new(value)
    }
}

impl From<Confidence> for i64 {
    fn from(c: Confidence) -> Self {
        i64::from(c.0)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Scores items with a fixed confidence and similarity limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    confidence: Confidence,
    engine: SimilarityEngine,
}

impl Ranker {
    pub fn new(confidence: Confidence) -> Self {
        Self {
            confidence,
            engine: SimilarityEngine::default(),
        }
    }

    pub fn with_engine(mut self, engine: SimilarityEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Score every item of `index` and sort by descending score.
    ///
    /// Fails only in fuzzy mode, when a term or tag is longer than the
    /// engine's limit.
    pub fn rank<K>(&self, terms: &TermSet, index: &TagIndex<K>) -> Result<Vec<Ranked<K>>>
    where
        K: Clone + Eq + Hash,
    {
        let mut results = if self.confidence.is_exact() {
            tracing::debug!(items = index.len(), terms = terms.len(), "ranking: exact mode");
            index
                .iter()
                .map(|(item, tags)| {
                    let score = terms.iter().filter(|t| tags.contains(*t)).count() as u32;
                    Ranked::new(item.clone(), score)
                })
                .collect::<Vec<_>>()
        } else {
            tracing::debug!(
                items = index.len(),
                terms = terms.len(),
                confidence = %self.confidence,
                "ranking: fuzzy mode"
            );
            let threshold = self.confidence.get();
            let mut results = Vec::with_capacity(index.len());
            for (item, tags) in index {
                let mut score = 0u32;
                for term in terms.iter() {
                    for tag in tags {
                        let sim = self.engine.score(tag, term)?;
                        if sim >= threshold {
                            tracing::trace!(term, tag = %tag, sim, "fuzzy match");
                            score += 1;
                        }
                    }
                }
                results.push(Ranked::new(item.clone(), score));
            }
            results
        };

        // `sort_by` is stable: ties keep index order.
        results.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(results)
    }
}

/// Score `index` against `terms` at the given confidence.
pub fn search<K>(
    terms: &TermSet,
    index: &TagIndex<K>,
    confidence: Confidence,
) -> Result<Vec<Ranked<K>>>
where
    K: Clone + Eq + Hash,
{
    Ranker::new(confidence).rank(terms, index)
}
