//! lexicon module
pub mod lexicon_manager;

/// Re-exports
pub use lexicon_manager::{EnglishWords, LexiconManager, TagLexicon};
