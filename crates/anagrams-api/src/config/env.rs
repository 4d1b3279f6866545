//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use anagrams::AnagramsConfig;
use anagrams::config::{
  DEFAULT_WORDS_PATH, DEFAULT_WRITER_MEMORY_BYTES, IndexConfig, LexiconConfig, LogLevel,
  LoggingConfig, default_data_dir,
};

use super::constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_CONFIG, ENV_DATA_DIR, ENV_LOG_LEVEL, ENV_TAGS_PATH,
  ENV_WORDS_PATH, ENV_WRITER_MEMORY_BYTES,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8000")
  pub bind_addr: String,
  /// Word store configuration
  pub engine: AnagramsConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through `lookup` (variable name -> value)
  ///
  /// `from_env` with an injectable environment; `set_var` is unsafe in Rust 2024.
  ///
  /// # Errors
  /// - the file named by `ANAGRAMS_CONFIG` cannot be loaded
  /// - `ANAGRAMS_WRITER_MEMORY_BYTES` or `ANAGRAMS_LOG_LEVEL` cannot be parsed
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let engine = match lookup(ENV_CONFIG) {
      Some(path) => AnagramsConfig::load(path).map_err(|e| ApiError::config(e.to_string()))?,
      None => engine_config_from_lookup(&lookup)?,
    };

    Ok(Self { bind_addr, engine })
  }
}

fn engine_config_from_lookup<F>(lookup: &F) -> crate::errors::Result<AnagramsConfig>
where
  F: Fn(&str) -> Option<String>,
{
  let words_path = lookup(ENV_WORDS_PATH).unwrap_or_else(|| DEFAULT_WORDS_PATH.to_string());
  let tags_path = lookup(ENV_TAGS_PATH).map(PathBuf::from);
  let data_dir = lookup(ENV_DATA_DIR).map_or_else(default_data_dir, PathBuf::from);

  let writer_memory_bytes = match lookup(ENV_WRITER_MEMORY_BYTES) {
    Some(value) => value.parse::<usize>().map_err(|e| {
      ApiError::config(format!("{ENV_WRITER_MEMORY_BYTES}={value}: {e}"))
    })?,
    None => DEFAULT_WRITER_MEMORY_BYTES,
  };

  let level = match lookup(ENV_LOG_LEVEL) {
    Some(value) => LogLevel::from_str(&value).map_err(ApiError::config)?,
    None => LogLevel::default(),
  };

  Ok(AnagramsConfig {
    lexicon: LexiconConfig {
      words_path: PathBuf::from(words_path),
      tags_path,
    },
    index: IndexConfig {
      data_dir,
      writer_memory_bytes,
    },
    logging: LoggingConfig { level },
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;
  use std::path::Path;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
      pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| vars.get(key).cloned()
  }

  #[test]
  fn defaults_when_nothing_is_set() {
    let config = Config::from_lookup(|_| None).unwrap();

    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.engine.words_path(), Path::new(DEFAULT_WORDS_PATH));
    assert!(config.engine.tags_path().is_none());
    assert_eq!(config.engine.index_dir(), default_data_dir());
    assert_eq!(config.engine.writer_memory_bytes(), DEFAULT_WRITER_MEMORY_BYTES);
    assert_eq!(config.engine.log_level(), LogLevel::Info);
  }

  #[test]
  fn per_field_variables() {
    let config = Config::from_lookup(lookup_from(&[
      (ENV_BIND_ADDR, "0.0.0.0:9000"),
      (ENV_WORDS_PATH, "/opt/words"),
      (ENV_TAGS_PATH, "/opt/tags"),
      (ENV_DATA_DIR, "/opt/index"),
      (ENV_WRITER_MEMORY_BYTES, "20000000"),
      (ENV_LOG_LEVEL, "DEBUG"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr, "0.0.0.0:9000");
    assert_eq!(config.engine.words_path(), Path::new("/opt/words"));
    assert_eq!(config.engine.tags_path(), Some(Path::new("/opt/tags")));
    assert_eq!(config.engine.index_dir(), Path::new("/opt/index"));
    assert_eq!(config.engine.writer_memory_bytes(), 20_000_000);
    assert_eq!(config.engine.log_level(), LogLevel::Debug);
  }

  #[test]
  fn invalid_writer_memory_is_config_error() {
    let err = Config::from_lookup(lookup_from(&[(ENV_WRITER_MEMORY_BYTES, "lots")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn invalid_log_level_is_config_error() {
    let err = Config::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "loud")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn config_file_takes_precedence() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("anagrams.toml");
    std::fs::write(
      &path,
      "[lexicon]\nwords_path = \"/from/file\"\n[index]\ndata_dir = \"/from/file/index\"\n",
    )
    .unwrap();

    let config = Config::from_lookup(lookup_from(&[
      (ENV_CONFIG, path.to_str().unwrap()),
      (ENV_WORDS_PATH, "/ignored"),
    ]))
    .unwrap();

    assert_eq!(config.engine.words_path(), Path::new("/from/file"));
  }

  #[test]
  fn missing_config_file_is_config_error() {
    let err = Config::from_lookup(lookup_from(&[(ENV_CONFIG, "/no/such/anagrams.toml")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }
}
