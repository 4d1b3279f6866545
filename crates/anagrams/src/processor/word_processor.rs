//! Word processor
//!
//! `WordProcessor` is the capability the word service needs from a
//! natural-language backend: English membership and part-of-speech tagging.
//! `LexiconWordProcessor` is the production implementation.

use std::sync::Arc;

use tracing::debug;

use crate::errors::{LexiconError, ProcessorError};
use crate::lexicon::LexiconManager;
use crate::models::WordTypes;

use super::pos_tagger::PosTagger;
use super::tokenization::tokenize;

/// Classifies words
///
/// Implementations must be shareable across request handlers.
pub trait WordProcessor: Send + Sync {
  /// Whether `word` belongs to the reference English word set
  ///
  /// # Errors
  /// The word set could not be loaded
  fn is_word_english(&self, word: &str) -> Result<bool, ProcessorError>;

  /// Part-of-speech tag of the first token of `word`
  ///
  /// # Errors
  /// - `ProcessorError::InvalidWord` if `word` yields no token
  /// - lexicon loading errors
  fn get_word_type_token(&self, word: &str) -> Result<String, ProcessorError>;

  /// Category name -> tagger codes mapping
  fn word_types(&self) -> &WordTypes;
}

/// Word processor backed by the lexicon files
#[derive(Debug)]
pub struct LexiconWordProcessor {
  lexicon: Arc<LexiconManager>,
  word_types: WordTypes,
}

impl LexiconWordProcessor {
  /// Creates a processor over a lexicon manager
  pub fn new(lexicon: Arc<LexiconManager>) -> Self {
    Self {
      lexicon,
      word_types: WordTypes::default(),
    }
  }

  /// Loads both lexicon files now instead of on the first request
  ///
  /// # Errors
  /// Returns the cached load error of either file
  pub fn warm_up(&self) -> Result<(), LexiconError> {
    self.lexicon.english_words()?;
    self.lexicon.tag_lexicon()?;
    Ok(())
  }

}

impl WordProcessor for LexiconWordProcessor {
  fn is_word_english(&self, word: &str) -> Result<bool, ProcessorError> {
    Ok(self.lexicon.english_words()?.contains(word))
  }

  fn get_word_type_token(&self, word: &str) -> Result<String, ProcessorError> {
    let tokens = tokenize(word);
    if tokens.is_empty() {
      return Err(ProcessorError::InvalidWord {
        word: word.to_string(),
        reason: "no token to tag".to_string(),
      });
    }

    let tagger = PosTagger::new(self.lexicon.tag_lexicon()?);
    let tagged = tagger.tag(&tokens);
    debug!(word = %word, ?tagged, "Tagged word");

    // tokens is non-empty, so tagged has a first element
    Ok(tagged.into_iter().next().map(|(_, tag)| tag).unwrap_or_default())
  }

  fn word_types(&self) -> &WordTypes {
    &self.word_types
  }
}
