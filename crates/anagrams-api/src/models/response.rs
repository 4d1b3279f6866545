//! Response model definitions

use serde::Serialize;

/// Response of `GET /anagrams/{word}.json`
#[derive(Debug, Serialize)]
pub struct AnagramsResponse {
  /// Anagrams of the requested word, sorted
  pub anagrams: Vec<String>,
}

/// Response of `PUT /anagrams/words.json`
#[derive(Debug, Serialize)]
pub struct CheckAnagramsResponse {
  /// Whether all words are anagrams of each other
  pub is_anagrams: bool,
  /// Words exactly as received
  pub words: Vec<String>,
}
