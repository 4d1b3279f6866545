//! Request model definitions

use serde::Deserialize;

use anagrams::models::NOUN;

/// Body of `POST /words.json` and `PUT /anagrams/words.json`
#[derive(Debug, Deserialize)]
pub struct WordsRequest {
  /// Raw words
  pub words: Vec<String>,
}

/// Query string of `GET /anagrams/{word}.json`
#[derive(Debug, Default, Deserialize)]
pub struct AnagramsQuery {
  /// `true`: nouns only, `false`: no nouns, absent: no filter
  pub nouns: Option<bool>,
  /// Maximum number of anagrams
  pub limit: Option<usize>,
}

impl AnagramsQuery {
  /// Category to include
  #[must_use]
  pub fn include_word_type(&self) -> Option<&'static str> {
    (self.nouns == Some(true)).then_some(NOUN)
  }

  /// Category to exclude
  #[must_use]
  pub fn exclude_word_type(&self) -> Option<&'static str> {
    (self.nouns == Some(false)).then_some(NOUN)
  }
}
