//! Tantivy schema builder
//!
//! Defines the schema of the words index. Every field that is queried is a raw
//! `STRING` field (no tokenization), so term queries are exact matches.

use tantivy::schema::{FAST, Field, INDEXED, STORED, STRING, Schema};

/// Field names
pub const FIELD_WORD: &str = "word";
/// Part-of-speech tag field
pub const FIELD_WORD_TYPE: &str = "word_type";
/// Word length field
pub const FIELD_LENGTH: &str = "length";
/// Sorted-letter key field
pub const FIELD_ANAGRAM_TOKEN: &str = "anagram_token";

/// Holds typed references to the schema fields.
///
/// `Schema::get_field()` is a string lookup, so resolving the fields once
/// avoids scattering field-name typos across the code.
#[derive(Clone, Copy, Debug)]
pub struct SchemaFields {
  /// Word (STRING + STORED), document key
  pub word: Field,
  /// Tagger code (STRING + STORED)
  pub word_type: Field,
  /// Character count (INDEXED + STORED + FAST), aggregated for statistics
  pub length: Field,
  /// Sorted letters (STRING + STORED)
  pub anagram_token: Field,
}

impl SchemaFields {
  /// Rebuilds SchemaFields from an existing schema.
  ///
  /// Used when opening an index that already exists on disk.
  ///
  /// # Errors
  /// One of the four fields is missing
  pub fn from_schema(schema: &Schema) -> Result<Self, tantivy::TantivyError> {
    let get = |name: &str| {
      schema.get_field(name).map_err(|e| {
        tantivy::TantivyError::InvalidArgument(format!("field '{name}' not found: {e}"))
      })
    };

    Ok(Self {
      word: get(FIELD_WORD)?,
      word_type: get(FIELD_WORD_TYPE)?,
      length: get(FIELD_LENGTH)?,
      anagram_token: get(FIELD_ANAGRAM_TOKEN)?,
    })
  }
}

/// Builds the words schema.
///
/// # Field layout
///
/// - `word`: STRING + STORED, exact match for get / delete by id
/// - `word_type`: STRING + STORED, include / exclude filters
/// - `length`: u64 INDEXED + STORED + FAST, `stats` aggregation needs a fast field
/// - `anagram_token`: STRING + STORED, anagram lookup
pub fn build_schema() -> (Schema, SchemaFields) {
  let mut builder = Schema::builder();

  let word = builder.add_text_field(FIELD_WORD, STRING | STORED);
  let word_type = builder.add_text_field(FIELD_WORD_TYPE, STRING | STORED);
  let length = builder.add_u64_field(FIELD_LENGTH, INDEXED | STORED | FAST);
  let anagram_token = builder.add_text_field(FIELD_ANAGRAM_TOKEN, STRING | STORED);

  let schema = builder.build();

  (
    schema,
    SchemaFields {
      word,
      word_type,
      length,
      anagram_token,
    },
  )
}
