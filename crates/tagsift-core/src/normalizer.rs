//! Normalizer — turns a raw query into a [`TermSet`].
//!
//! Text queries are case-folded with the full Unicode mapping (so `Straße`
//! becomes `strasse`), whitespace runs are collapsed, punctuation is
//! stripped, and the result is split into tokens. Queries that arrive already
//! tokenized pass through untouched apart from deduplication.

use std::sync::LazyLock;

use regex::Regex;
use unicode_casefold::UnicodeCaseFold;

use crate::error::{Error, Result};
use crate::types::{Term, TermSet};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// Unicode punctuation plus the ASCII `[:punct:]` class, which also covers
// symbols such as `$`, `+` and `|`.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}[:punct:]]").expect("punctuation pattern is valid"));

/// A search query as handed over by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Free-form text, normalised before use.
    Text(String),
    /// Pre-tokenized terms, used verbatim.
    Terms(Vec<String>),
}

impl Query {
    /// Accept a JSON string or array of strings. Anything else is rejected
    /// rather than coerced.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(s) => Ok(Query::Text(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => Ok(s.clone()),
                    other => Err(Error::InvalidQuery(format!(
                        "expected a string element, found {other}"
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Query::Terms),
            other => Err(Error::InvalidQuery(format!(
                "expected a string or an array of strings, found {other}"
            ))),
        }
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::Text(s.to_string())
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::Text(s)
    }
}

impl From<Vec<String>> for Query {
    fn from(terms: Vec<String>) -> Self {
        Query::Terms(terms)
    }
}

impl From<&[&str]> for Query {
    fn from(terms: &[&str]) -> Self {
        Query::Terms(terms.iter().map(|t| t.to_string()).collect())
    }
}

/// Full Unicode case folding. Lexicon and index entries go through the same
/// mapping so they compare equal to normalised query terms.
pub fn fold_case(text: &str) -> String {
    text.chars().case_fold().collect()
}

/// Split raw text into ordered tokens. Duplicates are kept; empty tokens are
/// not.
pub fn tokenize(text: &str) -> Vec<Term> {
    let folded = fold_case(text);
    let collapsed = WHITESPACE.replace_all(&folded, " ");
    let stripped = PUNCTUATION.replace_all(&collapsed, "");

    stripped
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalise a query into a term set, preserving first-seen order.
pub fn normalize(query: impl Into<Query>) -> TermSet {
    match query.into() {
        Query::Text(text) => tokenize(&text).into_iter().collect(),
        Query::Terms(terms) => terms.into_iter().collect(),
    }
}
