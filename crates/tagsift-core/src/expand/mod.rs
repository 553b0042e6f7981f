//! Query-expansion stages.
//!
//! Each stage consumes a [`TermSet`](crate::TermSet) by reference and returns
//! a new one; inputs are never mutated. Stages only ever append to the end of
//! the set (or remove from it), so the original terms keep their positions.
//!
//! ```text
//! morphology ──► synonyms ──► supplements ──► spelling ──► drop
//! ```

pub mod drop;
pub mod morphology;
pub mod spelling;
pub mod supplements;
pub mod synonyms;

pub use drop::{drop_terms, DEFAULT_STOPWORDS};
pub use morphology::{expand_morphology, surface_forms};
pub use spelling::correct_spelling;
pub use supplements::expand_supplements;
pub use synonyms::expand_synonyms;
