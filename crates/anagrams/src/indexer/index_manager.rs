//! Tantivy Index Management Module
//!
//! Responsible for index creation / opening and for the single shared
//! IndexWriter. Every write goes through [`IndexManager::write`], which commits
//! and reloads the reader so the next search sees the change.

use std::path::Path;
use std::sync::{Arc, Mutex};

use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy, Searcher};
use tracing::{debug, info};

use crate::errors::IndexerError;
use crate::indexer::schema_builder::{SchemaFields, build_schema};

/// Meta file name used to determine index existence
const META_JSON: &str = "meta.json";

/// Word documents are tiny; one indexing thread is plenty.
const WRITER_THREADS: usize = 1;

/// Structure for Tantivy index creation and management.
///
/// # Responsibilities
///
/// - Index directory creation
/// - Schema definition (new index) or schema field lookup (existing index)
/// - Owning the IndexWriter (tantivy allows one writer per index)
/// - Commit and reader reload after each write
pub struct IndexManager {
  /// IndexReader (for searching), reloaded manually after each commit
  reader: IndexReader,

  /// The only writer of this index
  writer: Mutex<IndexWriter>,

  /// Schema fields reference
  fields: SchemaFields,
}

impl std::fmt::Debug for IndexManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("IndexManager")
      .field("fields", &self.fields)
      .finish_non_exhaustive()
  }
}

impl IndexManager {
  /// Opens an index. Creates a new one if it does not exist.
  ///
  /// # Arguments
  /// - `index_path`: Directory to save the index
  /// - `writer_memory_bytes`: IndexWriter memory budget
  ///
  /// # Errors
  /// - Directory creation failure
  /// - Tantivy index creation/open error (including a writer lock held by another process)
  /// - Existing index without the expected fields
  pub fn open_or_create<P: AsRef<Path>>(
    index_path: P,
    writer_memory_bytes: usize,
  ) -> Result<Self, IndexerError> {
    let index_path = index_path.as_ref();

    // Determine index existence by meta.json existence
    let meta_json_exists = index_path.join(META_JSON).exists();

    let (index, fields) = if meta_json_exists {
      let index = Index::open_in_dir(index_path)?;
      let fields = SchemaFields::from_schema(&index.schema())?;
      info!(path = %index_path.display(), "Opened existing words index");
      (index, fields)
    } else {
      if !index_path.exists() {
        std::fs::create_dir_all(index_path).map_err(|e| IndexerError::InvalidIndexPath {
          path: index_path.to_path_buf(),
          source: Arc::new(e),
        })?;
      }
      let (schema, fields) = build_schema();
      let index = Index::create_in_dir(index_path, schema)?;
      info!(path = %index_path.display(), "Created words index");
      (index, fields)
    };

    let reader = index
      .reader_builder()
      .reload_policy(ReloadPolicy::Manual)
      .try_into()?;

    let writer: IndexWriter = index.writer_with_num_threads(WRITER_THREADS, writer_memory_bytes)?;

    Ok(Self {
      reader,
      writer: Mutex::new(writer),
      fields,
    })
  }

  /// Runs `f` with exclusive access to the writer, then commits and reloads the reader.
  ///
  /// Concurrent callers are serialized on the writer lock.
  ///
  /// # Errors
  /// - Lock poisoned by a panicking writer
  /// - Commit or reader reload failure
  pub fn write<T, F>(&self, f: F) -> Result<T, IndexerError>
  where
    F: FnOnce(&mut IndexWriter) -> T,
  {
    let mut writer = self.writer.lock().map_err(|_| IndexerError::WriterPoisoned)?;

    let value = f(&mut writer);

    let opstamp = writer.commit()?;
    self.reader.reload()?;
    debug!(opstamp, "Committed words index");

    Ok(value)
  }

  /// Like [`IndexManager::write`], but `f` may refuse the write.
  ///
  /// `f` receives a searcher taken under the writer lock, so it sees every
  /// commit made before it and none made concurrently. Nothing is committed
  /// when `f` returns an error; `f` must not touch the writer before failing.
  ///
  /// # Errors
  /// - The error returned by `f`
  /// - Lock poisoned by a panicking writer
  /// - Commit or reader reload failure
  pub fn try_write<T, E, F>(&self, f: F) -> Result<T, E>
  where
    E: From<IndexerError>,
    F: FnOnce(&Searcher, &mut IndexWriter) -> Result<T, E>,
  {
    let mut writer = self.writer.lock().map_err(|_| IndexerError::WriterPoisoned)?;

    let value = f(&self.reader.searcher(), &mut writer)?;

    let opstamp = writer.commit().map_err(IndexerError::from)?;
    self.reader.reload().map_err(IndexerError::from)?;
    debug!(opstamp, "Committed words index");

    Ok(value)
  }

  /// Fresh searcher over the last committed state
  pub fn searcher(&self) -> Searcher {
    self.reader.searcher()
  }

  /// Returns reference to SchemaFields
  pub fn fields(&self) -> &SchemaFields {
    &self.fields
  }
}
