//! Error type shared by every tagsift-core layer.

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The query was neither a string nor a sequence of strings.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A similarity input exceeded the configured size limit.
    #[error("term of {len} characters exceeds the similarity limit of {limit}")]
    TermTooLong { len: usize, limit: usize },

    #[error("failed to read lexicon {path}: {source}")]
    Lexicon {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon or index JSON: {0}")]
    LexiconParse(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
