//! models module

pub mod model_definition;

pub use model_definition::{
  AggregatedWordsData, NOUN, NOUN_TAGS, Word, WordTypes, anagram_token,
};
