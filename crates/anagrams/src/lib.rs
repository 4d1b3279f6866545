//! anagrams word-store library
//!
//! Stores English words in an embedded tantivy index and answers anagram
//! queries over them.

/// Configuration module - AnagramsConfig, LogLevel and defaults
pub mod config;

/// Error module - AnagramsError, AnagramsResult and per-layer errors
pub mod errors;

/// Importer module - batched import of newline-delimited word lists
pub mod importer;

/// Index module - tantivy index creation and the shared writer
pub mod indexer;

/// Lexicon module - English word set and tagged lexicon loading
pub mod lexicon;

/// Data model module - Word, AggregatedWordsData, WordTypes
pub mod models;

/// Processor module - tokenization, part-of-speech tagging, WordProcessor
pub mod processor;

/// Repository module - WordsRepository and its tantivy adapter
pub mod repository;

/// Service module - WordService facade
pub mod service;

/// Re-exports
pub use config::AnagramsConfig;
pub use errors::{AnagramsError, AnagramsResult};
pub use models::{AggregatedWordsData, Word};
pub use service::WordService;
