//! Tantivy-backed words repository

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use tantivy::aggregation::AggregationCollector;
use tantivy::aggregation::agg_req::Aggregations;
use tantivy::collector::{Count, DocSetCollector};
use tantivy::query::{AllQuery, BooleanQuery, Occur, Query, TermQuery, TermSetQuery};
use tantivy::schema::{Field, IndexRecordOption, Value};
use tantivy::{Searcher, TantivyDocument, Term};
use tracing::{debug, info, warn};

use crate::errors::RepositoryError;
use crate::indexer::schema_builder::FIELD_LENGTH;
use crate::indexer::{IndexManager, SaveReport, SchemaFields};
use crate::models::{AggregatedWordsData, Word};
use crate::repository::words_repository::WordsRepository;

/// Name of the stats aggregation over `length`
const LENGTH_STATS: &str = "length_stats";

/// `stats` aggregation result as serialized by tantivy.
///
/// `min`, `max` and `avg` are null on an empty index.
#[derive(Debug, Default, Deserialize)]
struct LengthStats {
  count: u64,
  sum: f64,
  min: Option<f64>,
  max: Option<f64>,
}

/// [`WordsRepository`] over an embedded tantivy index
#[derive(Debug)]
pub struct TantivyWordsRepository {
  index_manager: Arc<IndexManager>,
}

impl TantivyWordsRepository {
  /// Creates a repository over an opened index
  pub fn new(index_manager: Arc<IndexManager>) -> Self {
    Self { index_manager }
  }

  fn fields(&self) -> SchemaFields {
    *self.index_manager.fields()
  }

  fn word_term(&self, id: &str) -> Term {
    Term::from_field_text(self.fields().word, id)
  }

  fn to_tantivy_document(&self, word: &Word) -> TantivyDocument {
    let fields = self.fields();
    let mut doc = TantivyDocument::default();
    doc.add_text(fields.word, word.word());
    doc.add_text(fields.word_type, word.word_type_token());
    doc.add_u64(fields.length, word.length());
    doc.add_text(fields.anagram_token, word.anagram_token());
    doc
  }

  /// Number of live documents stored under `id` (0 or 1)
  fn count_by_id(&self, searcher: &Searcher, id: &str) -> Result<usize, RepositoryError> {
    let query = TermQuery::new(self.word_term(id), IndexRecordOption::Basic);
    Ok(searcher.search(&query, &Count)?)
  }

  fn type_filter(&self, codes: &[String]) -> Box<dyn Query> {
    let field = self.fields().word_type;
    Box::new(TermSetQuery::new(
      codes.iter().map(|code| Term::from_field_text(field, code)),
    ))
  }
}

/// Reads a stored text field
fn text_field(doc: &TantivyDocument, field: Field, name: &str) -> Result<String, RepositoryError> {
  doc
    .get_first(field)
    .and_then(|v| v.as_str().map(String::from))
    .ok_or_else(|| RepositoryError::InvalidDocument {
      field: name.to_string(),
      reason: "Required field not found".to_string(),
    })
}

fn aggregation_error(e: serde_json::Error) -> RepositoryError {
  RepositoryError::Aggregation {
    source: Arc::new(e),
  }
}

impl WordsRepository for TantivyWordsRepository {
  fn bulk_save(&self, words: Vec<Word>) -> Result<Vec<Word>, RepositoryError> {
    if words.is_empty() {
      return Ok(Vec::new());
    }

    let (saved, report) = self.index_manager.write(|writer| {
      let mut report = SaveReport::default();
      let mut saved = Vec::with_capacity(words.len());

      for word in words {
        // Upsert: drop any previous record with the same key first
        writer.delete_term(self.word_term(word.word()));

        match writer.add_document(self.to_tantivy_document(&word)) {
          Ok(_) => {
            report.record_saved();
            saved.push(word);
          }
          Err(e) => {
            warn!(word = %word.word(), error = %e, "Index rejected word");
            report.record_rejected();
          }
        }
      }

      (saved, report)
    })?;

    if report.is_all_saved() {
      info!(total = report.total, "Bulk save completed");
    } else {
      warn!(
        total = report.total,
        saved = report.saved,
        rejected = report.rejected,
        "Bulk save completed with rejected words"
      );
    }

    Ok(saved)
  }

  fn query_anagrams_by_word(
    &self,
    word: &Word,
    include_types: Option<&[String]>,
    exclude_types: Option<&[String]>,
    limit: Option<usize>,
  ) -> Result<Vec<String>, RepositoryError> {
    if limit == Some(0) {
      return Ok(Vec::new());
    }

    let fields = self.fields();

    let mut clauses: Vec<(Occur, Box<dyn Query>)> = vec![
      (
        Occur::Must,
        Box::new(TermQuery::new(
          Term::from_field_text(fields.anagram_token, word.anagram_token()),
          IndexRecordOption::Basic,
        )),
      ),
      (
        Occur::MustNot,
        Box::new(TermQuery::new(
          self.word_term(word.word()),
          IndexRecordOption::Basic,
        )),
      ),
    ];
    if let Some(codes) = include_types {
      clauses.push((Occur::Must, self.type_filter(codes)));
    }
    if let Some(codes) = exclude_types {
      clauses.push((Occur::MustNot, self.type_filter(codes)));
    }
    let query = BooleanQuery::new(clauses);

    let searcher = self.index_manager.searcher();
    let addresses = searcher.search(&query, &DocSetCollector)?;

    let mut anagrams = Vec::with_capacity(addresses.len());
    for address in addresses {
      let doc: TantivyDocument = searcher.doc(address)?;
      anagrams.push(text_field(&doc, fields.word, "word")?);
    }

    // DocSetCollector yields a HashSet; sort before capping so results are stable
    anagrams.sort_unstable();
    if let Some(limit) = limit {
      anagrams.truncate(limit);
    }

    debug!(
      word = %word.word(),
      found = anagrams.len(),
      "Anagram query completed"
    );

    Ok(anagrams)
  }

  fn query_word_by_id(&self, id: &str) -> Result<Word, RepositoryError> {
    let fields = self.fields();
    let searcher = self.index_manager.searcher();
    let query = TermQuery::new(self.word_term(id), IndexRecordOption::Basic);

    let address = searcher
      .search(&query, &DocSetCollector)?
      .into_iter()
      .next()
      .ok_or_else(|| RepositoryError::WordNotFound { id: id.to_string() })?;

    let doc: TantivyDocument = searcher.doc(address)?;
    let word = text_field(&doc, fields.word, "word")?;
    let word_type = text_field(&doc, fields.word_type, "word_type")?;

    Ok(Word::new(word, word_type))
  }

  fn delete_word_by_id(&self, id: &str) -> Result<(), RepositoryError> {
    // Check and delete under the writer lock: of two concurrent deletes only one finds the word
    self.index_manager.try_write(|searcher, writer| -> Result<(), RepositoryError> {
      if self.count_by_id(searcher, id)? == 0 {
        return Err(RepositoryError::WordNotFound { id: id.to_string() });
      }
      writer.delete_term(self.word_term(id));
      Ok(())
    })?;

    info!(word = %id, "Deleted word");
    Ok(())
  }

  fn delete_all_words(&self) -> Result<(), RepositoryError> {
    let deleted = self.index_manager.try_write(|searcher, writer| -> Result<u64, RepositoryError> {
      let num_docs = searcher.num_docs();
      if num_docs == 0 {
        return Err(RepositoryError::WordNotFound {
          id: "words".to_string(),
        });
      }
      writer.delete_all_documents()?;
      Ok(num_docs)
    })?;

    info!(deleted, "Deleted all words");
    Ok(())
  }

  fn aggregate_words_data(&self) -> Result<AggregatedWordsData, RepositoryError> {
    let request: Aggregations = serde_json::from_value(json!({
      LENGTH_STATS: { "stats": { "field": FIELD_LENGTH } }
    }))
    .map_err(aggregation_error)?;

    let collector = AggregationCollector::from_aggs(request, Default::default());
    let searcher = self.index_manager.searcher();
    let results = searcher.search(&AllQuery, &collector)?;

    let value = serde_json::to_value(&results).map_err(aggregation_error)?;
    let stats: LengthStats = match value.get(LENGTH_STATS) {
      Some(stats) => serde_json::from_value(stats.clone()).map_err(aggregation_error)?,
      None => LengthStats::default(),
    };

    Ok(AggregatedWordsData::from_stats(
      stats.count,
      stats.sum,
      stats.min,
      stats.max,
    ))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // ─── Test Helper Functions ───────────────────────────────────────────────────

  fn create_repository() -> (tempfile::TempDir, TantivyWordsRepository) {
    let tmp_dir = tempfile::TempDir::new().expect("Failed to create temporary directory");
    let index_manager =
      IndexManager::open_or_create(tmp_dir.path(), 20_000_000).expect("Failed to create index");
    (tmp_dir, TantivyWordsRepository::new(Arc::new(index_manager)))
  }

  fn save(repository: &TantivyWordsRepository, words: &[(&str, &str)]) -> Vec<Word> {
    let words = words.iter().map(|(w, t)| Word::new(w, *t)).collect();
    repository.bulk_save(words).expect("bulk_save failed")
  }

  fn noun_codes() -> Vec<String> {
    crate::models::NOUN_TAGS.iter().map(|t| (*t).to_string()).collect()
  }

  // ─── Save / Lookup ───────────────────────────────────────────────────────────

  #[test]
  fn bulk_save_returns_saved_words() {
    let (_tmp_dir, repository) = create_repository();
    let saved = save(&repository, &[("read", "VB"), ("dear", "JJ")]);

    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].word(), "read");
    assert_eq!(repository.query_word_by_id("dear").unwrap().word_type_token(), "JJ");
  }

  #[test]
  fn bulk_save_empty_is_noop() {
    let (_tmp_dir, repository) = create_repository();
    assert!(repository.bulk_save(Vec::new()).unwrap().is_empty());
  }

  #[test]
  fn bulk_save_overwrites_existing_word() {
    let (_tmp_dir, repository) = create_repository();
    save(&repository, &[("read", "VB")]);
    save(&repository, &[("read", "NN")]);

    let word = repository.query_word_by_id("read").unwrap();
    assert_eq!(word.word_type_token(), "NN");
    assert_eq!(repository.aggregate_words_data().unwrap().total_words, 1);
  }

  #[test]
  fn query_word_by_id_restores_derived_fields() {
    let (_tmp_dir, repository) = create_repository();
    save(&repository, &[("listen", "VB")]);

    let word = repository.query_word_by_id("listen").unwrap();
    assert_eq!(word, Word::new("listen", "VB"));
  }

  #[test]
  fn query_word_by_id_missing_is_not_found() {
    let (_tmp_dir, repository) = create_repository();
    let err = repository.query_word_by_id("ghost").unwrap_err();
    assert!(matches!(err, RepositoryError::WordNotFound { id } if id == "ghost"));
  }

  // ─── Anagram Query ───────────────────────────────────────────────────────────

  #[test]
  fn anagrams_exclude_the_word_itself_and_are_sorted() {
    let (_tmp_dir, repository) = create_repository();
    save(
      &repository,
      &[("read", "VB"), ("dear", "JJ"), ("dare", "VB"), ("cat", "NN")],
    );
    let read = repository.query_word_by_id("read").unwrap();

    let anagrams = repository.query_anagrams_by_word(&read, None, None, None).unwrap();
    assert_eq!(anagrams, vec!["dare", "dear"]);
  }

  #[test]
  fn anagrams_include_and_exclude_types() {
    let (_tmp_dir, repository) = create_repository();
    save(
      &repository,
      &[("read", "VB"), ("dear", "NN"), ("dare", "VB"), ("Reda", "NNP")],
    );
    let read = repository.query_word_by_id("read").unwrap();
    let nouns = noun_codes();

    let only_nouns = repository
      .query_anagrams_by_word(&read, Some(&nouns), None, None)
      .unwrap();
    assert_eq!(only_nouns, vec!["dear", "reda"]);

    let no_nouns = repository
      .query_anagrams_by_word(&read, None, Some(&nouns), None)
      .unwrap();
    assert_eq!(no_nouns, vec!["dare"]);
  }

  #[test]
  fn anagrams_respect_limit() {
    let (_tmp_dir, repository) = create_repository();
    save(&repository, &[("read", "VB"), ("dear", "JJ"), ("dare", "VB")]);
    let read = repository.query_word_by_id("read").unwrap();

    let one = repository.query_anagrams_by_word(&read, None, None, Some(1)).unwrap();
    assert_eq!(one, vec!["dare"]);

    let none = repository.query_anagrams_by_word(&read, None, None, Some(0)).unwrap();
    assert!(none.is_empty());
  }

  #[test]
  fn anagrams_of_unique_word_are_empty() {
    let (_tmp_dir, repository) = create_repository();
    save(&repository, &[("zebra", "NN")]);
    let zebra = repository.query_word_by_id("zebra").unwrap();

    assert!(repository.query_anagrams_by_word(&zebra, None, None, None).unwrap().is_empty());
  }

  // ─── Delete ──────────────────────────────────────────────────────────────────

  #[test]
  fn delete_word_by_id_removes_word() {
    let (_tmp_dir, repository) = create_repository();
    save(&repository, &[("read", "VB"), ("dear", "JJ")]);

    repository.delete_word_by_id("read").unwrap();
    assert!(matches!(
      repository.query_word_by_id("read"),
      Err(RepositoryError::WordNotFound { .. })
    ));

    let dear = repository.query_word_by_id("dear").unwrap();
    assert!(repository.query_anagrams_by_word(&dear, None, None, None).unwrap().is_empty());
  }

  #[test]
  fn delete_missing_word_is_not_found() {
    let (_tmp_dir, repository) = create_repository();
    assert!(matches!(
      repository.delete_word_by_id("ghost"),
      Err(RepositoryError::WordNotFound { .. })
    ));
  }

  #[test]
  fn delete_all_words_empties_index() {
    let (_tmp_dir, repository) = create_repository();
    save(&repository, &[("read", "VB"), ("dear", "JJ")]);

    repository.delete_all_words().unwrap();
    assert_eq!(repository.aggregate_words_data().unwrap().total_words, 0);

    // Second call has nothing to delete
    assert!(matches!(
      repository.delete_all_words(),
      Err(RepositoryError::WordNotFound { .. })
    ));
  }

  #[test]
  fn concurrent_deletes_of_one_word_succeed_once() {
    let (_tmp_dir, repository) = create_repository();
    save(&repository, &[("read", "VB"), ("dear", "JJ")]);

    let results: Vec<Result<(), RepositoryError>> = std::thread::scope(|scope| {
      let handles: Vec<_> = (0..4)
        .map(|_| scope.spawn(|| repository.delete_word_by_id("read")))
        .collect();
      handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results.iter().filter(|r| r.is_err()).all(|r| matches!(
      r,
      Err(RepositoryError::WordNotFound { id }) if id == "read"
    )));
    assert_eq!(repository.aggregate_words_data().unwrap().total_words, 1);
  }

  #[test]
  fn concurrent_delete_all_succeeds_once() {
    let (_tmp_dir, repository) = create_repository();
    save(&repository, &[("read", "VB"), ("dear", "JJ")]);

    let successes = std::thread::scope(|scope| {
      let handles: Vec<_> = (0..4)
        .map(|_| scope.spawn(|| repository.delete_all_words()))
        .collect();
      handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(Result::is_ok)
        .count()
    });

    assert_eq!(successes, 1);
  }

  // ─── Aggregation ─────────────────────────────────────────────────────────────

  #[test]
  fn aggregate_words_data_over_lengths() {
    let (_tmp_dir, repository) = create_repository();
    save(&repository, &[("cat", "NN"), ("lion", "NN"), ("tiger", "NN")]);

    let data = repository.aggregate_words_data().unwrap();
    assert_eq!(data.total_words, 3);
    assert_eq!(data.min_length, 3);
    assert_eq!(data.max_length, 5);
    assert_eq!(data.avg_length, 4.0);
    assert_eq!(data.median_length, 4.0);
  }

  #[test]
  fn aggregate_words_data_on_empty_index_is_zero() {
    let (_tmp_dir, repository) = create_repository();
    assert_eq!(
      repository.aggregate_words_data().unwrap(),
      AggregatedWordsData::default()
    );
  }

  // ─── Persistence ─────────────────────────────────────────────────────────────

  #[test]
  fn words_survive_reopen() {
    let tmp_dir = tempfile::TempDir::new().expect("Failed to create temporary directory");
    {
      let index_manager =
        IndexManager::open_or_create(tmp_dir.path(), 20_000_000).expect("Failed to create index");
      let repository = TantivyWordsRepository::new(Arc::new(index_manager));
      save(&repository, &[("read", "VB"), ("dear", "JJ")]);
    }

    let index_manager =
      IndexManager::open_or_create(tmp_dir.path(), 20_000_000).expect("Failed to open index");
    let repository = TantivyWordsRepository::new(Arc::new(index_manager));

    let read = repository.query_word_by_id("read").unwrap();
    assert_eq!(
      repository.query_anagrams_by_word(&read, None, None, None).unwrap(),
      vec!["dear"]
    );
  }
}
