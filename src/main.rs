use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tagsift_core::config::Config;
use tagsift_core::{load_index, Confidence, Lexicon, Pipeline};

#[derive(Parser)]
#[command(name = "tagsift", about = "tagsift — fuzzy tag search over a JSON catalog")]
struct Cli {
    /// Tag index: a JSON object mapping each item to its list of tags.
    #[arg(long, short)]
    index: PathBuf,

    /// Lexicon JSON with thesaurus, supplements, corrections and drop list.
    /// Overrides `lexicon.path` from the config file.
    #[arg(long, short)]
    lexicon: Option<PathBuf>,

    /// Config file to use instead of ~/.config/tagsift/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum similarity percentage for a fuzzy match; 100 means exact.
    #[arg(long, short, allow_negative_numbers = true)]
    confidence: Option<i64>,

    /// Print at most this many results.
    #[arg(long)]
    limit: Option<usize>,

    /// Leave out items that scored zero.
    #[arg(long)]
    nonzero: bool,

    /// Print results as a JSON array.
    #[arg(long)]
    json: bool,

    /// Print the expanded term set to stderr before the results.
    #[arg(long)]
    explain: bool,

    /// Log pipeline stages at debug level to stderr.
    #[arg(long)]
    debug: bool,

    /// Query words.
    #[arg(required = true)]
    query: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = load_config(&cli)?;
    let lexicon = match lexicon_path(&cli, &config) {
        Some(path) => Lexicon::from_path(path)
            .with_context(|| format!("loading lexicon {}", path.display()))?,
        None => Lexicon::default(),
    };
    let index = load_index(&cli.index)
        .with_context(|| format!("loading index {}", cli.index.display()))?;

    let pipeline = Pipeline::with_config(lexicon, &config);
    let terms = pipeline.expand(cli.query.join(" "));
    if cli.explain {
        eprintln!("terms: {terms}");
    }
    let results = pipeline.rank(&terms, &index)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for row in &results {
            println!("{}\t{}", row.score, row.item);
        }
    }
    Ok(())
}

/// Load the config file named by `--config`, or the user config, then apply
/// command-line overrides. A config file that exists but does not parse is
/// an error.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading user config")?,
    };
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(confidence) = cli.confidence {
        config.search.confidence = Confidence::new(confidence);
    }
    if cli.limit.is_some() {
        config.search.limit = cli.limit;
    }
    if cli.nonzero {
        config.search.include_zero_scores = false;
    }
}

/// `--lexicon` wins over `lexicon.path` from the config.
fn lexicon_path<'a>(cli: &'a Cli, config: &'a Config) -> Option<&'a Path> {
    cli.lexicon.as_deref().or(config.lexicon.path.as_deref())
}
