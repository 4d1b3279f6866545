//! Word tokenization
//!
//! Splits raw input into alphanumeric tokens with tantivy's `SimpleTokenizer`.
//! Case is preserved because the tagger uses capitalization as a signal.

use tantivy::tokenizer::{SimpleTokenizer, TokenStream, Tokenizer};

/// Tokenizes `text` with the given tantivy tokenizer, skipping empty tokens
///
/// `Tokenizer` requires `Self: Sized`, so this is generic instead of taking `&mut dyn Tokenizer`.
pub(crate) fn tokenize_with_tokenizer<T>(tokenizer: &mut T, text: &str) -> Vec<String>
where
  T: Tokenizer,
{
  let mut token_stream = tokenizer.token_stream(text);
  let mut tokens = Vec::new();

  while token_stream.advance() {
    let token = token_stream.token();
    if token.text.is_empty() {
      continue;
    }
    tokens.push(token.text.clone());
  }

  tokens
}

/// Tokenizes a raw word
///
/// An empty, whitespace-only or punctuation-only input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
  let mut tokenizer = SimpleTokenizer::default();
  tokenize_with_tokenizer(&mut tokenizer, text)
}
