// crates/anagrams/src/config.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Default location of the reference English word list.
pub const DEFAULT_WORDS_PATH: &str = "/usr/share/dict/words";

/// Default IndexWriter memory budget (bytes).
pub const DEFAULT_WRITER_MEMORY_BYTES: usize = 50_000_000;

/// Smallest writer budget tantivy accepts for a single indexing thread.
const MIN_WRITER_MEMORY: u64 = 15_000_000; // 15MB
const MAX_WRITER_MEMORY: u64 = 1_000_000_000; // 1GB

/// Top-level configuration for anagrams.
#[derive(Debug, Clone, Deserialize)]
pub struct AnagramsConfig {
  /// [lexicon] section
  pub lexicon: LexiconConfig,
  /// [index] section
  pub index: IndexConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [lexicon] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
  /// Reference English word list, one word per line (e.g., "/usr/share/dict/words")
  #[serde(default = "default_words_path")]
  pub words_path: PathBuf,
  /// Optional tagged lexicon, `word TAG` per line (Penn Treebank tags).
  ///
  /// Layered over the built-in table of common verbs and adjectives; words
  /// missing from both are tagged by shape and suffix rules.
  #[serde(default)]
  pub tags_path: Option<PathBuf>,
}

/// [index] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
  /// Index storage directory (e.g., "/opt/anagrams/data/index")
  #[serde(default = "default_data_dir")]
  pub data_dir: PathBuf,
  /// Memory buffer size for IndexWriter (bytes)
  #[serde(default = "default_writer_memory_bytes")]
  pub writer_memory_bytes: usize,
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive string understood by `tracing_subscriber::EnvFilter`
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl std::str::FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(format!(
        "Unknown log level: {s}. Valid values: trace, debug, info, warn, error"
      )),
    }
  }
}

fn default_words_path() -> PathBuf {
  PathBuf::from(DEFAULT_WORDS_PATH)
}

/// Default index directory according to the OS
///
/// | OS      | Example Path                                   |
/// |---------|------------------------------------------------|
/// | Linux   | `~/.local/share/anagrams/index`                |
/// | macOS   | `~/Library/Application Support/anagrams/index` |
/// | Windows | `C:\Users\{user}\AppData\Roaming\anagrams\index` |
///
/// Falls back to `./data/index` when the OS has no data directory.
pub fn default_data_dir() -> PathBuf {
  dirs::data_dir()
    .map(|base| base.join("anagrams").join("index"))
    .unwrap_or_else(|| PathBuf::from("data").join("index"))
}

fn default_writer_memory_bytes() -> usize {
  DEFAULT_WRITER_MEMORY_BYTES
}

impl Default for LexiconConfig {
  fn default() -> Self {
    Self {
      words_path: default_words_path(),
      tags_path: None,
    }
  }
}

impl Default for IndexConfig {
  fn default() -> Self {
    Self {
      data_dir: default_data_dir(),
      writer_memory_bytes: DEFAULT_WRITER_MEMORY_BYTES,
    }
  }
}

// ===== Loading and Accessor Methods =====

impl AnagramsConfig {
  /// Parses a TOML document.
  ///
  /// ```toml
  /// [lexicon]
  /// words_path = "/usr/share/dict/words"
  /// tags_path = "/opt/anagrams/tags.txt"
  ///
  /// [index]
  /// data_dir = "/opt/anagrams/data/index"
  /// writer_memory_bytes = 50000000
  ///
  /// [logging]
  /// level = "info"
  /// ```
  ///
  /// # Errors
  /// `ConfigError::Parse` if the document is not valid TOML for this shape.
  pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
    toml::from_str(s).map_err(|e| ConfigError::Parse {
      reason: e.to_string(),
    })
  }

  /// Reads and parses a TOML file.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_toml_str(&content)
  }

  /// Reference English word list path.
  pub fn words_path(&self) -> &Path {
    &self.lexicon.words_path
  }

  /// Tagged lexicon path, `None` if unset.
  pub fn tags_path(&self) -> Option<&Path> {
    self.lexicon.tags_path.as_deref()
  }

  /// Returns the index directory.
  pub fn index_dir(&self) -> &Path {
    &self.index.data_dir
  }

  /// Returns the memory buffer size (bytes) for IndexWriter.
  pub fn writer_memory_bytes(&self) -> usize {
    self.index.writer_memory_bytes
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `index.writer_memory_bytes` is within allowable range (15MB - 1GB)
  /// - `lexicon.words_path` is an existing file
  /// - `lexicon.tags_path`, if set, is an existing file
  /// - `index.data_dir` exists as a directory or can be created
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let writer_memory = self.index.writer_memory_bytes as u64;
    if !(MIN_WRITER_MEMORY..=MAX_WRITER_MEMORY).contains(&writer_memory) {
      return Err(ConfigError::InvalidWriterMemoryBytes {
        min: MIN_WRITER_MEMORY,
        max: MAX_WRITER_MEMORY,
        actual: writer_memory,
      });
    }

    if !self.lexicon.words_path.is_file() {
      return Err(ConfigError::InvalidWordsPath {
        path: self.lexicon.words_path.clone(),
      });
    }

    if let Some(tags_path) = &self.lexicon.tags_path {
      if !tags_path.is_file() {
        return Err(ConfigError::InvalidTagsPath {
          path: tags_path.clone(),
        });
      }
    }

    let data_dir = &self.index.data_dir;
    if data_dir.exists() {
      if !data_dir.is_dir() {
        return Err(ConfigError::InvalidDataDir {
          path: data_dir.clone(),
        });
      }
    } else if let Err(e) = std::fs::create_dir_all(data_dir) {
      return Err(ConfigError::DataDirCreationFailed {
        path: data_dir.clone(),
        source: Arc::new(e),
      });
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
