//! Lexicon and index loading.
//!
//! A [`Lexicon`] bundles the four word lists the expansion stages read. It is
//! loaded from JSON shaped like:
//!
//! ```json
//! {
//!   "thesaurus":   [["car", "auto", "vehicle"], ["red", "crimson"]],
//!   "supplements": { "laptop": ["computer", "notebook"] },
//!   "corrections": { "teh": "the" },
//!   "drop_list":   ["the", "a"]
//! }
//! ```
//!
//! Every key is optional. Entries are case-folded on load so they line up
//! with normalised terms. Document order is kept, which fixes the order synonym
//! groups are scanned in.

use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::normalizer::fold_case;
use crate::types::TagIndex;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub thesaurus: Vec<IndexSet<String>>,
    pub supplements: IndexMap<String, IndexSet<String>>,
    pub corrections: IndexMap<String, String>,
    pub drop_list: IndexSet<String>,
}

impl Lexicon {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Lexicon = serde_json::from_str(json)?;
        Ok(raw.folded())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = read(path)?;
        let lexicon = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            groups = lexicon.thesaurus.len(),
            supplements = lexicon.supplements.len(),
            corrections = lexicon.corrections.len(),
            drop_list = lexicon.drop_list.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    pub fn is_empty(&self) -> bool {
        self.thesaurus.is_empty()
            && self.supplements.is_empty()
            && self.corrections.is_empty()
            && self.drop_list.is_empty()
    }

    fn folded(self) -> Self {
        fn set(words: IndexSet<String>) -> IndexSet<String> {
            words.into_iter().map(|w| fold_case(&w)).collect()
        }

        Lexicon {
            thesaurus: self.thesaurus.into_iter().map(set).collect(),
            supplements: self
                .supplements
                .into_iter()
                .map(|(k, v)| (fold_case(&k), set(v)))
                .collect(),
            corrections: self
                .corrections
                .into_iter()
                .map(|(k, v)| (fold_case(&k), fold_case(&v)))
                .collect(),
            drop_list: set(self.drop_list),
        }
    }
}

/// Parse a tag index from a JSON object of `item → [tag, …]`, keeping the
/// document order of items. Tags are case-folded.
pub fn parse_index(json: &str) -> Result<TagIndex> {
    let raw: IndexMap<String, Vec<String>> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .map(|(item, tags)| (item, tags.into_iter().map(|t| fold_case(&t)).collect()))
        .collect())
}

pub fn load_index(path: impl AsRef<Path>) -> Result<TagIndex> {
    let path = path.as_ref();
    let index = parse_index(&read(path)?)?;
    tracing::debug!(path = %path.display(), items = index.len(), "index loaded");
    Ok(index)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Lexicon {
        path: path.to_path_buf(),
        source,
    })
}
