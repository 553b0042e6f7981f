//! Configuration types for tagsift.
//!
//! [`Config::load`] layers, in order: the embedded defaults, the user file at
//! `~/.config/tagsift/config.toml` (created with the defaults if missing), and
//! `TAGSIFT_*` environment variables such as `TAGSIFT_SEARCH__CONFIDENCE=70`.
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem or environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::search::Confidence;
use crate::similarity::DEFAULT_MAX_TERM_CHARS;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
confidence          = 100
max_term_chars      = 256
include_zero_scores = true

[pipeline]
morphology        = true
synonyms          = true
supplements       = true
corrections       = true
drop              = true
default_stopwords = false

[lexicon]
"#;

const ENV_PREFIX: &str = "TAGSIFT";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

/// `[search]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchConfig {
    /// Minimum similarity percentage; 100 means exact matching.
    #[serde(default)]
    pub confidence: Confidence,
    /// Longest term, in characters, the similarity engine accepts.
    #[serde(default = "default_max_term_chars")]
    pub max_term_chars: usize,
    #[serde(default = "default_true")]
    pub include_zero_scores: bool,
    /// Keep only the first `limit` results.
    #[serde(default)]
    pub limit: Option<usize>,
}

fn default_max_term_chars() -> usize { DEFAULT_MAX_TERM_CHARS }
fn default_true() -> bool { true }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            confidence: Confidence::default(),
            max_term_chars: default_max_term_chars(),
            include_zero_scores: true,
            limit: None,
        }
    }
}

/// `[pipeline]` section: which expansion stages run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_true")]
    pub morphology: bool,
    #[serde(default = "default_true")]
    pub synonyms: bool,
    #[serde(default = "default_true")]
    pub supplements: bool,
    #[serde(default = "default_true")]
    pub corrections: bool,
    #[serde(default = "default_true")]
    pub drop: bool,
    /// Add the built-in English stop words to the drop list.
    #[serde(default)]
    pub default_stopwords: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            morphology: true,
            synonyms: true,
            supplements: true,
            corrections: true,
            drop: true,
            default_stopwords: false,
        }
    }
}

/// `[lexicon]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LexiconConfig {
    /// JSON lexicon file; see [`Lexicon`](crate::Lexicon).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load from `~/.config/tagsift/config.toml` and the environment, layered
    /// on top of the built-in defaults. Creates the file with defaults if it
    /// does not exist; if it cannot be created, only the defaults and the
    /// environment are used. A file that exists but does not parse is an
    /// error.
    pub fn load() -> Result<Self> {
        Self::load_user(&config_path())
    }

    /// Load an explicit file (which must exist) and the environment on top of
    /// the built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::build(config::File::from(path))
    }

    fn load_user(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Err(err) = write_default(path) {
                tracing::warn!(path = %path.display(), error = %err, "could not create default config");
            }
        }
        Self::build(config::File::from(path).required(false))
    }

    fn build(file: config::File<config::FileSourceFile, config::FileFormat>) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        tracing::debug!("config loaded");
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn write_default(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG.trim_start())
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("tagsift")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
