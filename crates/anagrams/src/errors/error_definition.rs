//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Configuration (AnagramsConfig) related errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// The TOML document could not be parsed
  #[error("failed to parse configuration: {reason}")]
  Parse {
    /// Parser message
    reason: String,
  },

  /// The configuration file could not be read
  #[error("failed to read configuration file: path={path:?}, error={source}")]
  Read {
    /// Path that was read
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// index.writer_memory_bytes is out of the accepted range
  #[error("index.writer_memory_bytes must be within {min}..={max} bytes: actual={actual}")]
  InvalidWriterMemoryBytes {
    /// Smallest accepted value (bytes)
    min: u64,
    /// Largest accepted value (bytes)
    max: u64,
    /// Configured value (bytes)
    actual: u64,
  },

  /// lexicon.words_path does not point to a file
  #[error("lexicon.words_path is not a file: path={path:?}")]
  InvalidWordsPath {
    /// Offending path
    path: PathBuf,
  },

  /// lexicon.tags_path does not point to a file
  #[error("lexicon.tags_path is not a file: path={path:?}")]
  InvalidTagsPath {
    /// Offending path
    path: PathBuf,
  },

  /// index.data_dir exists but is not a directory
  #[error("index.data_dir is not a directory: path={path:?}")]
  InvalidDataDir {
    /// Offending path
    path: PathBuf,
  },

  /// index.data_dir could not be created
  #[error("failed to create index.data_dir: path={path:?}, error={source}")]
  DataDirCreationFailed {
    /// Path that was being created
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },
}

/// Lexicon (English word set / tagged lexicon) errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LexiconError {
  /// Lexicon file does not exist
  #[error("lexicon file not found: {0}")]
  NotFound(PathBuf),

  /// Lexicon file could not be read
  #[error("failed to read lexicon file: path={path:?}, error={source}")]
  Read {
    /// Path that was read
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// A line of the tagged lexicon is not `word TAG`
  #[error("malformed tagged lexicon line {line} in {path:?}")]
  MalformedLine {
    /// Lexicon path
    path: PathBuf,
    /// 1-based line number
    line: usize,
  },
}

/// Word processor errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ProcessorError {
  /// Lexicon could not be loaded
  #[error("lexicon error: {0}")]
  Lexicon(#[from] LexiconError),

  /// The word yields no token to classify
  #[error("invalid word: {word:?} ({reason})")]
  InvalidWord {
    /// Word as received
    word: String,
    /// Why it was rejected
    reason: String,
  },
}

/// Index creation / management errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum IndexerError {
  /// Tantivy index operation failed
  #[error("tantivy index error: {0}")]
  Tantivy(#[from] tantivy::TantivyError),

  /// Index path is invalid or the directory could not be created
  #[error("invalid index path: {path}: {source}")]
  InvalidIndexPath {
    /// Path involved
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// The index writer lock was poisoned by a panicking writer
  #[error("index writer lock poisoned")]
  WriterPoisoned,
}

/// Words repository errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum RepositoryError {
  /// Lookup or delete target is absent
  #[error("{id} not found")]
  WordNotFound {
    /// Requested word id
    id: String,
  },

  /// Index level failure
  #[error(transparent)]
  Indexer(#[from] IndexerError),

  /// Tantivy search failure
  #[error("tantivy search error: {0}")]
  Tantivy(#[from] tantivy::TantivyError),

  /// Stored document is missing a required field
  #[error("invalid stored document: field={field}, reason={reason}")]
  InvalidDocument {
    /// Field name
    field: String,
    /// What is wrong
    reason: String,
  },

  /// Aggregation request / response could not be (de)serialized
  #[error("aggregation error: {source}")]
  Aggregation {
    /// Underlying JSON error
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// Request validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
  /// Fewer than two distinct words were given
  #[error("Need at least two unique words")]
  NotEnoughWords,

  /// A word is not in the English word set
  #[error("{word} is not english")]
  NotEnglish {
    /// Offending word
    word: String,
  },
}

/// Bulk import errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ImportError {
  /// The word list could not be read
  #[error("failed to read word list: path={path:?}, error={source}")]
  Io {
    /// Word list path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// batch size must be at least 1
  #[error("batch size must be at least 1")]
  InvalidBatchSize,
}

/// Unified error
/// Public APIs of this crate return this error through
/// `AnagramsResult<T>` = `Result<T, AnagramsError>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AnagramsError {
  /// Configuration errors
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Lexicon errors
  #[error(transparent)]
  Lexicon(#[from] LexiconError),

  /// Word processor errors
  #[error(transparent)]
  Processor(#[from] ProcessorError),

  /// Index errors
  #[error(transparent)]
  Indexer(#[from] IndexerError),

  /// Repository errors
  #[error(transparent)]
  Repository(#[from] RepositoryError),

  /// Validation errors
  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// Import errors
  #[error(transparent)]
  Import(#[from] ImportError),
}

impl AnagramsError {
  /// Whether this error means the requested word does not exist
  pub fn is_not_found(&self) -> bool {
    matches!(
      self,
      AnagramsError::Repository(RepositoryError::WordNotFound { .. })
    )
  }
}

/// Standard Result alias of this crate
pub type AnagramsResult<T> = Result<T, AnagramsError>;
