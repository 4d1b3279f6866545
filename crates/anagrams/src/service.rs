// crates/anagrams/src/service.rs

//! WordService: facade of the anagrams crate.
//!
//! - Word processor (`WordProcessor`) for English membership and tagging
//! - Words repository (`WordsRepository`) for storage and queries
//!
//! The HTTP layer and the import tool only talk to this structure.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::AnagramsConfig;
use crate::errors::{AnagramsResult, ProcessorError, ValidationError};
use crate::indexer::IndexManager;
use crate::lexicon::LexiconManager;
use crate::models::{AggregatedWordsData, Word, anagram_token};
use crate::processor::{LexiconWordProcessor, WordProcessor};
use crate::repository::{TantivyWordsRepository, WordsRepository};

/// Facade of the anagrams crate.
///
/// Holds both backends behind traits so tests can swap them for stubs.
pub struct WordService {
  repository: Arc<dyn WordsRepository>,
  processor: Arc<dyn WordProcessor>,
}

impl std::fmt::Debug for WordService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WordService").finish_non_exhaustive()
  }
}

impl WordService {
  /// Creates a service over the given backends
  pub fn new(repository: Arc<dyn WordsRepository>, processor: Arc<dyn WordProcessor>) -> Self {
    Self {
      repository,
      processor,
    }
  }

  /// Initialization (lexicon load + index open/create)
  ///
  /// # Process Flow
  /// 1. Validate the configuration
  /// 2. Load the English word set and the tagged lexicon
  /// 3. Open or create the index under `index.data_dir`
  ///
  /// # Errors
  /// - Invalid configuration
  /// - Lexicon load failure
  /// - Index creation/open failure
  pub fn init(config: &AnagramsConfig) -> AnagramsResult<Self> {
    config.validate()?;

    let lexicon = LexiconManager::new(
      config.words_path(),
      config.tags_path().map(|p| p.to_path_buf()),
    );
    let processor = LexiconWordProcessor::new(Arc::new(lexicon));
    processor.warm_up()?;

    let index_manager =
      IndexManager::open_or_create(config.index_dir(), config.writer_memory_bytes())?;
    let repository = TantivyWordsRepository::new(Arc::new(index_manager));

    info!(
      index_dir = %config.index_dir().display(),
      words_path = %config.words_path().display(),
      "WordService initialized"
    );

    Ok(Self::new(Arc::new(repository), Arc::new(processor)))
  }

  /// Stores the English words of `words` and returns the stored records.
  ///
  /// Non-English words are skipped, as are English words that yield no token
  /// to tag. Nothing reaches the repository when no word is left.
  pub fn create_words(&self, words: &[String]) -> AnagramsResult<Vec<Word>> {
    let mut words_to_create = Vec::with_capacity(words.len());

    for word in words {
      if !self.processor.is_word_english(word)? {
        info!(word = %word, "Word is not english");
        continue;
      }

      match self.processor.get_word_type_token(word) {
        Ok(word_type_token) => words_to_create.push(Word::new(word, word_type_token)),
        Err(ProcessorError::InvalidWord { word, reason }) => {
          warn!(word = %word, reason = %reason, "Skipping word that cannot be tagged");
        }
        Err(e) => return Err(e.into()),
      }
    }

    if words_to_create.is_empty() {
      return Ok(words_to_create);
    }

    let created = self.repository.bulk_save(words_to_create)?;
    info!(requested = words.len(), created = created.len(), "Words created");
    Ok(created)
  }

  /// Anagrams of a stored word.
  ///
  /// # Arguments
  /// - `word_id`: stored word, matched case-insensitively
  /// - `include_word_type` / `exclude_word_type`: category names such as
  ///   `"noun"`; unknown or absent names disable the filter
  /// - `limit`: maximum number of results
  ///
  /// # Errors
  /// `WordNotFound` if `word_id` was never stored
  pub fn list_anagrams_by_word(
    &self,
    word_id: &str,
    include_word_type: Option<&str>,
    exclude_word_type: Option<&str>,
    limit: Option<usize>,
  ) -> AnagramsResult<Vec<String>> {
    let word = self.repository.query_word_by_id(&word_id.to_lowercase())?;

    let word_types = self.processor.word_types();
    let include_word_types = word_types.resolve(include_word_type);
    let exclude_word_types = word_types.resolve(exclude_word_type);

    debug!(
      word = %word.word(),
      ?include_word_types,
      ?exclude_word_types,
      ?limit,
      "Listing anagrams"
    );

    Ok(self.repository.query_anagrams_by_word(
      &word,
      include_word_types,
      exclude_word_types,
      limit,
    )?)
  }

  /// Whether all `words` are anagrams of each other.
  ///
  /// # Errors
  /// - `ValidationError::NotEnoughWords` for fewer than two distinct words
  /// - `ValidationError::NotEnglish` naming the first non-English word
  pub fn check_all_anagrams(&self, words: &[String]) -> AnagramsResult<bool> {
    let mut seen = HashSet::new();
    let unique: Vec<&String> = words.iter().filter(|w| seen.insert(w.as_str())).collect();

    if unique.len() < 2 {
      return Err(ValidationError::NotEnoughWords.into());
    }

    let mut tokens = Vec::with_capacity(unique.len());
    for word in unique {
      if !self.processor.is_word_english(word)? {
        return Err(ValidationError::NotEnglish { word: word.clone() }.into());
      }
      tokens.push(anagram_token(word));
    }

    Ok(tokens.windows(2).all(|pair| pair[0] == pair[1]))
  }

  /// Deletes one stored word (matched case-insensitively)
  pub fn delete_word(&self, word_id: &str) -> AnagramsResult<()> {
    Ok(self.repository.delete_word_by_id(&word_id.to_lowercase())?)
  }

  /// Deletes every stored word, `WordNotFound` when already empty
  pub fn delete_all_words(&self) -> AnagramsResult<()> {
    Ok(self.repository.delete_all_words()?)
  }

  /// Length statistics of the corpus
  pub fn words_analytics(&self) -> AnagramsResult<AggregatedWordsData> {
    Ok(self.repository.aggregate_words_data()?)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::{AnagramsError, RepositoryError};
  use crate::models::{NOUN, WordTypes};
  use std::sync::Mutex;
  use std::sync::atomic::{AtomicUsize, Ordering};

  // ─── Stubs ───────────────────────────────────────────────────────────────────

  /// Fixed English list; "!!!" passes the English check but cannot be tagged
  struct StubProcessor {
    word_types: WordTypes,
  }

  impl StubProcessor {
    const ENGLISH: [&'static str; 7] = ["cat", "act", "listen", "silent", "car", "read", "dear"];
  }

  impl WordProcessor for StubProcessor {
    fn is_word_english(&self, word: &str) -> Result<bool, ProcessorError> {
      Ok(Self::ENGLISH.contains(&word) || word == "!!!")
    }

    fn get_word_type_token(&self, word: &str) -> Result<String, ProcessorError> {
      match word {
        "!!!" => Err(ProcessorError::InvalidWord {
          word: word.to_string(),
          reason: "no token to tag".to_string(),
        }),
        "listen" | "read" => Ok("VB".to_string()),
        _ => Ok("NN".to_string()),
      }
    }

    fn word_types(&self) -> &WordTypes {
      &self.word_types
    }
  }

  /// Records calls; stores nothing. Words in `rejects` are dropped from a bulk save.
  #[derive(Default)]
  struct RecordingRepository {
    rejects: Vec<&'static str>,
    bulk_saves: AtomicUsize,
    saved: Mutex<Vec<String>>,
    anagram_filters: Mutex<Vec<(Option<Vec<String>>, Option<Vec<String>>, Option<usize>)>>,
  }

  impl WordsRepository for RecordingRepository {
    fn bulk_save(&self, words: Vec<Word>) -> Result<Vec<Word>, RepositoryError> {
      self.bulk_saves.fetch_add(1, Ordering::SeqCst);
      self.saved.lock().unwrap().extend(words.iter().map(|w| w.word().to_string()));
      Ok(
        words
          .into_iter()
          .filter(|w| !self.rejects.iter().any(|r| *r == w.word()))
          .collect(),
      )
    }

    fn query_anagrams_by_word(
      &self,
      _word: &Word,
      include_types: Option<&[String]>,
      exclude_types: Option<&[String]>,
      limit: Option<usize>,
    ) -> Result<Vec<String>, RepositoryError> {
      self.anagram_filters.lock().unwrap().push((
        include_types.map(<[String]>::to_vec),
        exclude_types.map(<[String]>::to_vec),
        limit,
      ));
      Ok(vec!["dear".to_string()])
    }

    fn query_word_by_id(&self, id: &str) -> Result<Word, RepositoryError> {
      if id == "read" {
        Ok(Word::new("read", "VB"))
      } else {
        Err(RepositoryError::WordNotFound { id: id.to_string() })
      }
    }

    fn delete_word_by_id(&self, id: &str) -> Result<(), RepositoryError> {
      self.query_word_by_id(id).map(|_| ())
    }

    fn delete_all_words(&self) -> Result<(), RepositoryError> {
      Ok(())
    }

    fn aggregate_words_data(&self) -> Result<AggregatedWordsData, RepositoryError> {
      Ok(AggregatedWordsData::default())
    }
  }

  fn create_service() -> (Arc<RecordingRepository>, WordService) {
    create_service_with(RecordingRepository::default())
  }

  fn create_service_with(repository: RecordingRepository) -> (Arc<RecordingRepository>, WordService) {
    let repository = Arc::new(repository);
    let processor = Arc::new(StubProcessor {
      word_types: WordTypes::default(),
    });
    let service = WordService::new(repository.clone(), processor);
    (repository, service)
  }

  fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
  }

  fn noun_codes() -> Vec<String> {
    WordTypes::default().codes(NOUN).unwrap().to_vec()
  }

  // ─── create_words ────────────────────────────────────────────────────────────

  #[test]
  fn create_words_empty_makes_no_backend_call() {
    let (repository, service) = create_service();
    assert!(service.create_words(&[]).unwrap().is_empty());
    assert_eq!(repository.bulk_saves.load(Ordering::SeqCst), 0);
  }

  #[test]
  fn create_words_skips_non_english() {
    let (repository, service) = create_service();
    let created = service.create_words(&strings(&["xyzzyqq", "cat"])).unwrap();

    assert_eq!(created, vec![Word::new("cat", "NN")]);
    assert_eq!(*repository.saved.lock().unwrap(), vec!["cat"]);
  }

  #[test]
  fn create_words_all_non_english_makes_no_backend_call() {
    let (repository, service) = create_service();
    assert!(service.create_words(&strings(&["xyzzyqq"])).unwrap().is_empty());
    assert_eq!(repository.bulk_saves.load(Ordering::SeqCst), 0);
  }

  #[test]
  fn create_words_skips_untaggable_words() {
    let (repository, service) = create_service();
    let created = service.create_words(&strings(&["!!!", "listen"])).unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].word_type_token(), "VB");
    assert_eq!(repository.bulk_saves.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn create_words_returns_only_confirmed_records() {
    let (repository, service) = create_service_with(RecordingRepository {
      rejects: vec!["silent"],
      ..Default::default()
    });
    let created = service
      .create_words(&strings(&["listen", "silent", "cat"]))
      .unwrap();

    // All three reached the repository, only two were confirmed
    assert_eq!(*repository.saved.lock().unwrap(), vec!["listen", "silent", "cat"]);
    assert_eq!(created, vec![Word::new("listen", "VB"), Word::new("cat", "NN")]);
  }

  // ─── list_anagrams_by_word ───────────────────────────────────────────────────

  #[test]
  fn list_anagrams_lowercases_and_translates_filters() {
    let (repository, service) = create_service();

    let anagrams = service
      .list_anagrams_by_word("READ", Some(NOUN), None, Some(5))
      .unwrap();
    assert_eq!(anagrams, vec!["dear"]);

    service.list_anagrams_by_word("read", None, Some(NOUN), None).unwrap();
    service.list_anagrams_by_word("read", Some("verb"), None, None).unwrap();

    let calls = repository.anagram_filters.lock().unwrap();
    assert_eq!(calls[0], (Some(noun_codes()), None, Some(5)));
    assert_eq!(calls[1], (None, Some(noun_codes()), None));
    // Unknown category means no filter
    assert_eq!(calls[2], (None, None, None));
  }

  #[test]
  fn list_anagrams_of_unknown_word_is_not_found() {
    let (_repository, service) = create_service();
    let err = service.list_anagrams_by_word("ghost", None, None, None).unwrap_err();
    assert!(err.is_not_found());
  }

  // ─── check_all_anagrams ──────────────────────────────────────────────────────

  #[test]
  fn check_all_anagrams_true_and_false() {
    let (_repository, service) = create_service();
    assert!(service.check_all_anagrams(&strings(&["listen", "silent"])).unwrap());
    assert!(!service.check_all_anagrams(&strings(&["listen", "car"])).unwrap());
  }

  #[test]
  fn check_all_anagrams_needs_two_unique_words() {
    let (_repository, service) = create_service();

    for words in [strings(&["cat"]), strings(&["cat", "cat"]), Vec::new()] {
      let err = service.check_all_anagrams(&words).unwrap_err();
      assert!(matches!(
        err,
        AnagramsError::Validation(ValidationError::NotEnoughWords)
      ));
    }
  }

  #[test]
  fn check_all_anagrams_rejects_non_english() {
    let (_repository, service) = create_service();
    let err = service.check_all_anagrams(&strings(&["cat", "tca"])).unwrap_err();
    assert_eq!(err.to_string(), "tca is not english");
  }

  // ─── Pass-throughs ───────────────────────────────────────────────────────────

  #[test]
  fn delete_word_lowercases_id() {
    let (_repository, service) = create_service();
    service.delete_word("Read").unwrap();
    assert!(service.delete_word("ghost").unwrap_err().is_not_found());
  }

  #[test]
  fn words_analytics_delegates() {
    let (_repository, service) = create_service();
    assert_eq!(service.words_analytics().unwrap(), AggregatedWordsData::default());
    service.delete_all_words().unwrap();
  }
}
