//! errors module
pub mod error_definition;

/// Re-export major error types
pub use error_definition::{
  AnagramsError, AnagramsResult, ConfigError, ImportError, IndexerError, LexiconError,
  ProcessorError, RepositoryError, ValidationError,
};
