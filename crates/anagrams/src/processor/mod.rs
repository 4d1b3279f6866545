//! processor module
//!
//! English membership, tokenization and part-of-speech tagging.

pub mod pos_tagger;
pub mod tokenization;
pub mod word_processor;

/// Re-exports
pub use pos_tagger::PosTagger;
pub use tokenization::tokenize;
pub use word_processor::{LexiconWordProcessor, WordProcessor};
