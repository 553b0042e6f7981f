//! Pipeline — runs the expansion stages in order and hands the result to the
//! ranker.
//!
//! ```text
//! query ─► normalize ─► morphology ─► synonyms ─► supplements ─► spelling ─► drop ─► rank
//! ```
//!
//! Every stage after `normalize` can be switched off through
//! [`PipelineConfig`]. A `Pipeline` owns its [`Lexicon`] and is read-only
//! once built, so one instance can serve any number of searches.

use std::hash::Hash;

use indexmap::IndexSet;

use crate::config::{Config, PipelineConfig, SearchConfig};
use crate::error::Result;
use crate::expand::{
    correct_spelling, drop_terms, expand_morphology, expand_supplements, expand_synonyms,
    DEFAULT_STOPWORDS,
};
use crate::lexicon::Lexicon;
use crate::normalizer::{normalize, Query};
use crate::search::Ranker;
use crate::similarity::SimilarityEngine;
use crate::types::{Ranked, TagIndex, TermSet};

#[derive(Debug, Clone)]
pub struct Pipeline {
    lexicon: Lexicon,
    stages: PipelineConfig,
    search: SearchConfig,
    drop_list: IndexSet<String>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

impl Pipeline {
    /// A pipeline with every stage enabled and exact-match ranking.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, &Config::default())
    }

    pub fn with_config(lexicon: Lexicon, config: &Config) -> Self {
        let mut drop_list = lexicon.drop_list.clone();
        if config.pipeline.default_stopwords {
            drop_list.extend(DEFAULT_STOPWORDS.iter().map(|w| w.to_string()));
        }

        Self {
            lexicon,
            stages: config.pipeline.clone(),
            search: config.search.clone(),
            drop_list,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Override the search settings (confidence, limit, ...) of this pipeline.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Normalise `query` and run every enabled expansion stage.
    pub fn expand(&self, query: impl Into<Query>) -> TermSet {
        let terms = normalize(query);
        tracing::debug!(stage = "normalize", terms = terms.len(), query = %terms, "normalized query");
        self.expand_terms(&terms)
    }

    /// Run the expansion stages on an already normalised term set.
    pub fn expand_terms(&self, terms: &TermSet) -> TermSet {
        let mut terms = terms.clone();
        if self.stages.morphology {
            terms = expand_morphology(&terms);
        }
        if self.stages.synonyms {
            terms = expand_synonyms(&terms, &self.lexicon.thesaurus);
        }
        if self.stages.supplements {
            terms = expand_supplements(&terms, &self.lexicon.supplements);
        }
        if self.stages.corrections {
            terms = correct_spelling(&terms, &self.lexicon.corrections);
        }
        if self.stages.drop {
            terms = drop_terms(&terms, &self.drop_list);
        }
        terms
    }

    /// Expand `query` and rank `index` against it.
    ///
    /// Zero scores are removed when `include_zero_scores` is off, then the
    /// list is cut to `limit` if one is set.
    pub fn run<K>(&self, query: impl Into<Query>, index: &TagIndex<K>) -> Result<Vec<Ranked<K>>>
    where
        K: Clone + Eq + Hash,
    {
        let terms = self.expand(query);
        self.rank(&terms, index)
    }

    /// Rank `index` against an expanded term set using this pipeline's search
    /// settings.
    pub fn rank<K>(&self, terms: &TermSet, index: &TagIndex<K>) -> Result<Vec<Ranked<K>>>
    where
        K: Clone + Eq + Hash,
    {
        let ranker = Ranker::new(self.search.confidence)
            .with_engine(SimilarityEngine::with_limit(self.search.max_term_chars));
        let mut results = ranker.rank(terms, index)?;

        if !self.search.include_zero_scores {
            results.retain(|r| r.score > 0);
        }
        if let Some(limit) = self.search.limit {
            results.truncate(limit);
        }
        tracing::debug!(results = results.len(), "search finished");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Confidence;

    fn lexicon() -> Lexicon {
        Lexicon::from_json_str(
            r#"{
                "thesaurus": [["cat", "kitten", "feline"]],
                "supplements": {"kitten": ["pet"]},
                "corrections": {"kiten": "kitten"},
                "drop_list": ["the"]
            }"#,
        )
        .unwrap()
    }

    fn index() -> TagIndex {
        crate::lexicon::parse_index(
            r#"{"rug": ["floor", "mat"], "toy": ["pet", "ball"], "lion": ["feline", "cat"]}"#,
        )
        .unwrap()
    }

    #[test]
    fn stages_run_in_order() {
        let terms = Pipeline::new(lexicon()).expand("The cats");
        assert_eq!(terms.to_vec(), vec!["cats", "cat", "kitten", "feline", "pet"]);
    }

    #[test]
    fn disabled_stages_are_skipped() {
        let mut config = Config::default();
        config.pipeline.morphology = false;
        config.pipeline.drop = false;
        let terms = Pipeline::with_config(lexicon(), &config).expand("The cats");
        assert_eq!(terms.to_vec(), vec!["the", "cats"]);
    }

    #[test]
    fn spelling_runs_after_synonyms() {
        // "kiten" is only corrected after the synonym stage ran, so its
        // group is not pulled in.
        let terms = Pipeline::new(lexicon()).expand("kiten");
        assert_eq!(terms.to_vec(), vec!["kitten"]);
    }

    #[test]
    fn default_stopwords_extend_drop_list() {
        let mut config = Config::default();
        config.pipeline.default_stopwords = true;
        let terms = Pipeline::with_config(Lexicon::default(), &config).expand("a map of it");
        assert_eq!(terms.to_vec(), vec!["map"]);
    }

    #[test]
    fn run_ranks_with_expanded_terms() {
        let results = Pipeline::new(lexicon()).run("cats", &index()).unwrap();
        let rows: Vec<_> = results.iter().map(|r| (r.item.as_str(), r.score)).collect();
        assert_eq!(rows, vec![("lion", 2), ("toy", 1), ("rug", 0)]);
    }

    #[test]
    fn zero_scores_and_limit() {
        let mut config = Config::default();
        config.search.include_zero_scores = false;
        config.search.limit = Some(1);
        let results = Pipeline::with_config(lexicon(), &config)
            .run("cats", &index())
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item, "lion");
    }

    #[test]
    fn fuzzy_search_through_pipeline() {
        let search = SearchConfig {
            confidence: Confidence::new(60),
            ..SearchConfig::default()
        };
        let pipeline = Pipeline::new(Lexicon::default()).with_search(search);
        let results = pipeline.run("balls", &index()).unwrap();
        assert_eq!(results[0].item, "toy");
        assert!(results[0].score >= 1);
    }
}
