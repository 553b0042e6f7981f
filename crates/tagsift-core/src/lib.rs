//! tagsift-core — fuzzy tag matching for small in-memory catalogs.
//!
//! A free-form query is normalised into a set of terms, widened by a chain of
//! expansion stages, and then used to score every item of a tag index.
//!
//! # Architecture
//!
//! ```text
//! Normalizer ──► Expansion stages ──► Ranker
//!                 │                      │
//!              Lexicon           Similarity engine
//! ```
//!
//! Everything here is synchronous and free of shared state: each function
//! takes its inputs by reference and returns new values, so callers can run
//! searches from as many threads as they like.

pub mod config;
pub mod error;
pub mod expand;
pub mod lexicon;
pub mod normalizer;
pub mod pipeline;
pub mod search;
pub mod similarity;
pub mod types;

pub use error::{Error, Result};
pub use expand::{
    correct_spelling, drop_terms, expand_morphology, expand_supplements, expand_synonyms,
};
pub use lexicon::{load_index, parse_index, Lexicon};
pub use normalizer::{fold_case, normalize, tokenize, Query};
pub use pipeline::Pipeline;
pub use search::{search, Confidence, Ranker};
pub use similarity::{similar_chars, similarity, SimilarityEngine};
pub use types::{Ranked, TagIndex, TagSet, Term, TermSet};
