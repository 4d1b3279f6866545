//! Lexicon Management Module
//!
//! Loads the reference English word set and the tagged lexicon from plain
//! text files. Each file is read on first use only; the result (or the error)
//! is cached for the lifetime of the manager.
//!
//! The tagged lexicon always starts from the built-in table in
//! `data/tags.txt`; a configured tags file is layered on top of it.

use crate::errors::error_definition::LexiconError;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Shared English word set
pub type EnglishWords = Arc<HashSet<String>>;

/// Shared `word -> tag` lexicon
pub type TagLexicon = Arc<HashMap<String, String>>;

/// Built-in tagged lexicon, compiled into the crate
const BUILTIN_TAGS: &str = include_str!("../../data/tags.txt");

/// Origin reported for malformed built-in lines
const BUILTIN_TAGS_ORIGIN: &str = "<builtin>/tags.txt";

/// Lexicon manager structure
pub struct LexiconManager {
  /// Word list file (one word per line)
  words_path: PathBuf,

  /// Tagged lexicon file (`word TAG` per line), `None` for the built-in table only
  tags_path: Option<PathBuf>,

  /// English word set, initialized only once at the first load
  /// LexiconError implements Clone so it can hold Result
  english_words: OnceLock<Result<EnglishWords, LexiconError>>,

  /// Tagged lexicon, initialized only once at the first load
  tag_lexicon: OnceLock<Result<TagLexicon, LexiconError>>,
}

impl LexiconManager {
  /// Constructor from a word list and an optional tagged lexicon
  pub fn new<P: AsRef<Path>>(words_path: P, tags_path: Option<PathBuf>) -> Self {
    Self {
      words_path: words_path.as_ref().to_path_buf(),
      tags_path,
      english_words: OnceLock::new(),
      tag_lexicon: OnceLock::new(),
    }
  }

  /// Load the English word set
  /// - Reads the word list on the first call
  /// - Returns a clone of the `Arc` from the second call onwards
  /// - If the first call fails, the error is cached and returned every time
  pub fn english_words(&self) -> Result<EnglishWords, LexiconError> {
    self
      .english_words
      .get_or_init(|| load_word_set(&self.words_path).map(Arc::new))
      .clone()
  }

  /// Load the tagged lexicon
  /// - The built-in table is always present
  /// - Entries of the configured tags file replace built-in ones
  pub fn tag_lexicon(&self) -> Result<TagLexicon, LexiconError> {
    self
      .tag_lexicon
      .get_or_init(|| {
        let mut lexicon = parse_tag_lexicon(BUILTIN_TAGS, Path::new(BUILTIN_TAGS_ORIGIN))?;
        if let Some(path) = &self.tags_path {
          lexicon.extend(load_tag_lexicon(path)?);
        }
        Ok(Arc::new(lexicon))
      })
      .clone()
  }
}

fn read_file(path: &Path) -> Result<String, LexiconError> {
  if !path.is_file() {
    return Err(LexiconError::NotFound(path.to_path_buf()));
  }
  std::fs::read_to_string(path).map_err(|e| LexiconError::Read {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })
}

/// Reads a word list: one word per line, surrounding whitespace dropped, blank lines skipped
fn load_word_set(path: &Path) -> Result<HashSet<String>, LexiconError> {
  let content = read_file(path)?;
  let words: HashSet<String> = content
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(str::to_string)
    .collect();

  info!(path = %path.display(), words = words.len(), "Loaded English word set");
  Ok(words)
}

fn load_tag_lexicon(path: &Path) -> Result<HashMap<String, String>, LexiconError> {
  let content = read_file(path)?;
  let lexicon = parse_tag_lexicon(&content, path)?;

  debug!(path = %path.display(), entries = lexicon.len(), "Loaded tagged lexicon");
  Ok(lexicon)
}

/// Parses a tagged lexicon: `word TAG` per line, `#` starts a comment line
fn parse_tag_lexicon(content: &str, origin: &Path) -> Result<HashMap<String, String>, LexiconError> {
  let mut lexicon = HashMap::new();

  for (idx, raw_line) in content.lines().enumerate() {
    let line = raw_line.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }

    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
      (Some(word), Some(tag), None) => {
        lexicon.insert(word.to_string(), tag.to_string());
      }
      _ => {
        return Err(LexiconError::MalformedLine {
          path: origin.to_path_buf(),
          line: idx + 1,
        });
      }
    }
  }

  Ok(lexicon)
}

impl fmt::Debug for LexiconManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LexiconManager")
      .field("words_path", &self.words_path)
      .field("tags_path", &self.tags_path)
      // The sets can be large, so only show whether they were loaded
      .field("english_words_initialized", &self.english_words.get().is_some())
      .field("tag_lexicon_initialized", &self.tag_lexicon.get().is_some())
      .finish()
  }
}
