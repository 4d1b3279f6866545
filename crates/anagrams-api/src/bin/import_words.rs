//! import-words: seeds the word store from a newline-delimited word list
//!
//! ```bash
//! import-words dictionary.txt --batch-size 500
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use anagrams::importer::{DEFAULT_BATCH_SIZE, import_words};
use anagrams::{AnagramsConfig, WordService};

use anagrams_api::config::Config;
use anagrams_api::init_tracing;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "import-words", version, about = "Import a word list into the anagrams index")]
struct Cli {
  /// Word list, one word per line
  file: PathBuf,

  /// Lines per batch
  #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
  batch_size: usize,

  /// TOML configuration file (falls back to the ANAGRAMS_* variables)
  #[arg(long, env = "ANAGRAMS_CONFIG")]
  config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let config = match &cli.config {
    Some(path) => AnagramsConfig::load(path)
      .with_context(|| format!("failed to load configuration: {}", path.display()))?,
    None => Config::from_env().context("failed to load configuration")?.engine,
  };

  init_tracing(config.log_level().as_str());

  let service = WordService::init(&config).context("failed to initialize word service")?;

  let report = import_words(&service, &cli.file, cli.batch_size)
    .with_context(|| format!("failed to import {}", cli.file.display()))?;

  tracing::info!(
    lines = report.lines,
    batches = report.batches,
    created = report.created,
    "Import finished"
  );

  Ok(())
}
