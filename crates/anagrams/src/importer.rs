//! Bulk import of a newline-delimited word list
//!
//! Offline seeding tool: reads the file in fixed-size batches and feeds every
//! batch through [`WordService::create_words`]. There is no resume support;
//! a failing batch aborts the import.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::{AnagramsResult, ImportError};
use crate::service::WordService;

/// Lines per `create_words` call
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Splits a line-oriented reader into batches of at most `batch_size` lines.
///
/// Line terminators are stripped; every other character is kept, so blank
/// lines reach `create_words` as empty strings and are dropped there.
#[derive(Debug)]
pub struct WordBatches<R> {
  lines: io::Lines<R>,
  batch_size: usize,
  done: bool,
}

impl<R: BufRead> WordBatches<R> {
  /// Wraps `reader`. `batch_size` must be at least 1.
  pub fn new(reader: R, batch_size: usize) -> Self {
    Self {
      lines: reader.lines(),
      batch_size,
      done: false,
    }
  }
}

impl<R: BufRead> Iterator for WordBatches<R> {
  type Item = io::Result<Vec<String>>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }

    let mut batch = Vec::with_capacity(self.batch_size);
    while batch.len() < self.batch_size {
      match self.lines.next() {
        Some(Ok(line)) => batch.push(line),
        Some(Err(e)) => {
          self.done = true;
          return Some(Err(e));
        }
        None => {
          self.done = true;
          break;
        }
      }
    }

    if batch.is_empty() { None } else { Some(Ok(batch)) }
  }
}

/// Outcome of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
  /// Lines read from the file
  pub lines: usize,
  /// `create_words` calls made
  pub batches: usize,
  /// Records the repository confirmed
  pub created: usize,
}

/// Imports every line of `path` into the corpus.
///
/// # Errors
/// - `ImportError::InvalidBatchSize` when `batch_size` is 0
/// - `ImportError::Io` when the file cannot be opened or read
/// - any error of `create_words`
pub fn import_words<P: AsRef<Path>>(
  service: &WordService,
  path: P,
  batch_size: usize,
) -> AnagramsResult<ImportReport> {
  if batch_size == 0 {
    return Err(ImportError::InvalidBatchSize.into());
  }

  let path = path.as_ref();
  let io_error = |e: io::Error| ImportError::Io {
    path: path.to_path_buf(),
    source: Arc::new(e),
  };

  let file = File::open(path).map_err(io_error)?;
  info!(path = %path.display(), batch_size, "Importing words");

  let mut report = ImportReport::default();
  for batch in WordBatches::new(BufReader::new(file), batch_size) {
    let batch = batch.map_err(io_error)?;
    let created = service.create_words(&batch)?;

    report.lines += batch.len();
    report.batches += 1;
    report.created += created.len();
    debug!(
      batch = report.batches,
      lines = batch.len(),
      created = created.len(),
      "Batch imported"
    );
  }

  info!(
    lines = report.lines,
    batches = report.batches,
    created = report.created,
    "Import completed"
  );

  Ok(report)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  #[test]
  fn batches_split_at_batch_size() {
    let input = (1..=5).map(|i| format!("w{i}\n")).collect::<String>();
    let batches: Vec<Vec<String>> = WordBatches::new(Cursor::new(input), 2)
      .collect::<io::Result<_>>()
      .unwrap();

    assert_eq!(
      batches,
      vec![vec!["w1", "w2"], vec!["w3", "w4"], vec!["w5"]]
    );
  }

  #[test]
  fn batches_strip_crlf_and_keep_blank_lines() {
    let batches: Vec<Vec<String>> = WordBatches::new(Cursor::new("cat\r\n\nact"), 500)
      .collect::<io::Result<_>>()
      .unwrap();

    assert_eq!(batches, vec![vec!["cat", "", "act"]]);
  }

  #[test]
  fn empty_input_has_no_batch() {
    assert_eq!(WordBatches::new(Cursor::new(""), 500).count(), 0);
  }

  #[test]
  fn exact_multiple_has_no_trailing_empty_batch() {
    assert_eq!(WordBatches::new(Cursor::new("a\nb\nc\nd\n"), 2).count(), 2);
  }
}
