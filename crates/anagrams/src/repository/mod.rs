//! repository module
//!
//! Storage port (`WordsRepository`) and its tantivy adapter.

pub mod tantivy_repository;
pub mod words_repository;

pub use tantivy_repository::TantivyWordsRepository;
pub use words_repository::WordsRepository;
