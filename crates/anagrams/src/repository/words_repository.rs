//! Storage port of the word service

use crate::errors::RepositoryError;
use crate::models::{AggregatedWordsData, Word};

/// Persistent store of word records keyed by `word`.
///
/// The service only depends on this trait; [`crate::repository::TantivyWordsRepository`]
/// is the production adapter and tests substitute in-memory stubs.
pub trait WordsRepository: Send + Sync {
  /// Upserts every record in one commit.
  ///
  /// Records the store rejects are logged and left out of the returned list;
  /// partial failure is not an error.
  fn bulk_save(&self, words: Vec<Word>) -> Result<Vec<Word>, RepositoryError>;

  /// Words sharing `word`'s anagram token, `word` itself excluded.
  ///
  /// - `include_types`: keep only words whose tag is in this set
  /// - `exclude_types`: drop words whose tag is in this set
  /// - `limit`: cap on the result size, unbounded when `None`
  fn query_anagrams_by_word(
    &self,
    word: &Word,
    include_types: Option<&[String]>,
    exclude_types: Option<&[String]>,
    limit: Option<usize>,
  ) -> Result<Vec<String>, RepositoryError>;

  /// Record stored under `id`, or `WordNotFound`
  fn query_word_by_id(&self, id: &str) -> Result<Word, RepositoryError>;

  /// Removes the record stored under `id`, or `WordNotFound`
  fn delete_word_by_id(&self, id: &str) -> Result<(), RepositoryError>;

  /// Removes every record, `WordNotFound` when there is nothing to remove
  fn delete_all_words(&self) -> Result<(), RepositoryError>;

  /// Length statistics over all stored words
  fn aggregate_words_data(&self) -> Result<AggregatedWordsData, RepositoryError>;
}
