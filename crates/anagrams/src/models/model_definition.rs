//! Data Model Definition
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category name of nouns in the word-type vocabulary.
pub const NOUN: &str = "noun";

/// Penn Treebank tags that count as nouns.
pub const NOUN_TAGS: [&str; 4] = ["NN", "NNS", "NNPS", "NNP"];

/// Returns the anagram token of a word: its lowercased characters sorted ascending.
///
/// Two different words are anagrams of each other iff their tokens are equal.
pub fn anagram_token(word: &str) -> String {
  let mut chars: Vec<char> = word.to_lowercase().chars().collect();
  chars.sort_unstable();
  chars.into_iter().collect()
}

/// Canonical word record stored in the index
///
/// `length` and `anagram_token` are always derived from `word` by [`Word::new`];
/// the fields are readable but the type offers no way to set them independently,
/// so a stored record can never disagree with its own key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
  /// Lowercased word, identity of the record
  word: String,

  /// Character count of `word`
  length: u64,

  /// Part-of-speech tag given by the tagger
  word_type_token: String,

  /// Characters of `word` sorted ascending
  anagram_token: String,
}

impl Word {
  /// Builds a normalized record from a raw word and its tagger code
  pub fn new(word: impl AsRef<str>, word_type_token: impl Into<String>) -> Self {
    let word = word.as_ref().to_lowercase();
    let length = word.chars().count() as u64;
    let anagram_token = anagram_token(&word);

    Self {
      word,
      length,
      word_type_token: word_type_token.into(),
      anagram_token,
    }
  }

  /// Lowercased word
  pub fn word(&self) -> &str {
    &self.word
  }

  /// Character count of the word
  pub fn length(&self) -> u64 {
    self.length
  }

  /// Part-of-speech tag
  pub fn word_type_token(&self) -> &str {
    &self.word_type_token
  }

  /// Sorted-character key
  pub fn anagram_token(&self) -> &str {
    &self.anagram_token
  }
}

/// Length statistics over the whole corpus
///
/// `median_length` is `sum_length / total_words` rounded to two decimals,
/// which is the mean and not a true median. Kept that way so clients relying
/// on the existing numbers see no change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedWordsData {
  /// Number of stored words
  pub total_words: u64,
  /// Shortest word length
  pub min_length: u64,
  /// Longest word length
  pub max_length: u64,
  /// Average word length
  pub avg_length: f64,
  /// `sum / count`, rounded to two decimals
  pub median_length: f64,
}

impl AggregatedWordsData {
  /// Builds the statistics from raw aggregation values
  ///
  /// An empty corpus (`count == 0`) yields all zeros.
  pub fn from_stats(count: u64, sum: f64, min: Option<f64>, max: Option<f64>) -> Self {
    if count == 0 {
      return Self::default();
    }

    let avg_length = sum / count as f64;
    let median_length = (sum / count as f64 * 100.0).round() / 100.0;

    Self {
      total_words: count,
      min_length: min.unwrap_or_default() as u64,
      max_length: max.unwrap_or_default() as u64,
      avg_length,
      median_length,
    }
  }
}

/// Fixed mapping from a semantic category name to the tagger codes it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTypes {
  types: HashMap<String, Vec<String>>,
}

impl Default for WordTypes {
  fn default() -> Self {
    let mut types = HashMap::new();
    types.insert(
      NOUN.to_string(),
      NOUN_TAGS.iter().map(|tag| (*tag).to_string()).collect(),
    );
    Self { types }
  }
}

impl WordTypes {
  /// Tagger codes of a category, `None` for an unknown category
  pub fn codes(&self, category: &str) -> Option<&[String]> {
    self.types.get(category).map(Vec::as_slice)
  }

  /// Tagger codes of an optional category
  ///
  /// Absent or unknown categories yield `None`, meaning "no filter".
  pub fn resolve(&self, category: Option<&str>) -> Option<&[String]> {
    category.and_then(|c| self.codes(c))
  }
}
